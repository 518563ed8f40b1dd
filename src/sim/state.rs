//! Game state and core simulation types
//!
//! Everything one tick reads or writes lives in `GameState`.

use serde::{Deserialize, Serialize};

use super::aim::AimController;
use super::autoplay::AutoPlayer;
use super::ball::Ball;
use super::rim::Rim;
use super::timer::RetryTimer;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at home, waiting for a shot
    Aiming,
    /// Ball in flight until the retry timer puts it back
    InFlight,
    /// Game is paused
    Paused,
    /// Session time ran out
    GameOver,
}

/// What the retry timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    ResetEpisode,
}

/// Notifications for the HUD and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball launched
    Shot,
    /// Ball bounced off the rim
    RimBounce,
    /// Basket made; carries the new total
    Scored { points: u64 },
    /// Ball was put back home
    AttemptOver { scored: bool },
    /// Session ended
    GameOver { points: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub ball: Ball,
    pub rim: Rim,
    pub aim: AimController,
    pub retry: RetryTimer<TimerAction>,
    /// Duration the retry timer is armed with; grows on every rim bounce
    pub time_to_restart_ms: u64,
    pub points: u64,
    pub phase: GamePhase,
    /// Unpaused time since the game started
    pub elapsed_ms: f64,
    pub autoplay: AutoPlayer,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given config and autoplay seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut ball = Ball::new(&config);
        ball.set_gravity(config.gravity);
        let rim = Rim::new(&config.rim);
        let aim = AimController::new(&config, &ball);

        Self {
            time_to_restart_ms: config.initial_attempt_ms,
            ball,
            rim,
            aim,
            retry: RetryTimer::new(),
            points: 0,
            phase: GamePhase::Aiming,
            elapsed_ms: 0.0,
            autoplay: AutoPlayer::new(seed),
            events: Vec::new(),
            config,
        }
    }

    /// Hand queued events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Phase to return to when unpausing
    pub fn active_phase(&self) -> GamePhase {
        if self.ball.disabled {
            GamePhase::InFlight
        } else {
            GamePhase::Aiming
        }
    }

    /// Put the ball back and clear everything tied to the last flight
    pub fn reset_episode(&mut self) {
        let scored = self.rim.has_scored();
        self.retry.cancel();
        self.ball.reset();
        self.aim.reset(&self.ball);
        self.rim.reset_mark();
        self.time_to_restart_ms = self.config.initial_attempt_ms;
        if self.phase == GamePhase::InFlight {
            self.phase = GamePhase::Aiming;
        }
        log::info!("Attempt over (scored: {}), ball reset", scored);
        self.events.push(GameEvent::AttemptOver { scored });
    }

    /// Session time left, if the session is timed
    pub fn remaining_session_ms(&self) -> Option<f64> {
        self.config
            .session_ms
            .map(|total| (total as f64 - self.elapsed_ms).max(0.0))
    }
}
