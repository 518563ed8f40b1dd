//! Demo mode: a seeded autoplayer that takes shots while the ball is idle
//!
//! Picks a release point on the far side of the ball from the rim, so the
//! ball is thrown roughly at the rim, with jittered pull distance and angle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::rim::Rim;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Pull distance range, in multiples of the ball-to-rim distance
const PULL_MIN: f32 = 0.35;
const PULL_MAX: f32 = 0.6;
/// Extra upward tilt of the throw (radians)
const LOFT: f32 = 0.45;
/// Angle jitter either side of the aim (radians)
const JITTER: f32 = 0.15;

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Shots taken so far; the stream is rebuilt by replaying this many draws
    pub draws: u64,
}

/// Serialized as its `RngState`; deserializing replays the recorded draws so
/// a restored player continues the same shot sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RngState", into = "RngState")]
pub struct AutoPlayer {
    rng_state: RngState,
    rng: Pcg32,
}

impl From<RngState> for AutoPlayer {
    fn from(rng_state: RngState) -> Self {
        let mut rng = Pcg32::seed_from_u64(rng_state.seed);
        for _ in 0..rng_state.draws {
            let _: f32 = rng.random();
            let _: f32 = rng.random();
        }
        Self { rng_state, rng }
    }
}

impl From<AutoPlayer> for RngState {
    fn from(player: AutoPlayer) -> Self {
        player.rng_state
    }
}

impl AutoPlayer {
    pub fn new(seed: u64) -> Self {
        RngState { seed, draws: 0 }.into()
    }

    /// Release point for the next shot, or `None` while the ball is in flight
    pub fn choose_release(&mut self, ball: &Ball, rim: &Rim) -> Option<Vec2> {
        if ball.disabled {
            return None;
        }
        let to_rim = rim.bounds.center() - ball.center();
        let (dist, heading) = cartesian_to_polar(to_rim);

        // Screen y points down, so tilting up means a larger angle when
        // throwing left and a smaller one when throwing right.
        let loft = if to_rim.x < 0.0 { LOFT } else { -LOFT };
        let pull_fraction: f32 = self.rng.random();
        let jitter_fraction: f32 = self.rng.random();
        self.rng_state.draws += 1;

        let pull = dist * (PULL_MIN + (PULL_MAX - PULL_MIN) * pull_fraction);
        let throw = heading + loft + JITTER * (2.0 * jitter_fraction - 1.0);
        // Release behind the ball, opposite the throw direction
        Some(ball.center() - polar_to_cartesian(pull, throw))
    }
}
