//! Hoop Shot - a one-ball basketball toss
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile physics, rim contact, retry timer)
//! - `config`: Data-driven game tuning, loadable from JSON

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig, RimGeometry, WallPolicy};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference frame delta in milliseconds (60 Hz)
    pub const SIM_DT: f32 = 1000.0 / 60.0;

    /// Size of one layout grid cell (the ball is one cell wide)
    pub const GRID_UNIT: f32 = 32.0;

    /// Play region (the "ground")
    pub const GROUND_X: f32 = 0.0;
    pub const GROUND_Y: f32 = 0.0;
    pub const GROUND_WIDTH: f32 = 960.0;
    pub const GROUND_HEIGHT: f32 = 540.0;

    /// Per-tick downward acceleration while the ball is in flight (units/ms per tick)
    pub const GRAVITY: f32 = 0.035;
    /// Velocity factor applied on a floor/wall hit. Must stay in (-1, 0).
    pub const BOUNCE: f32 = -0.8;
    /// Aim distance is divided by this to get launch speed (units/ms)
    pub const SPEED_DIVISOR: f32 = 90.0;
    /// Spin rate given to the ball when it is shot (radians per tick)
    pub const SHOT_SPIN: f32 = 0.1;

    /// Time a shot gets before the ball is put back (ms)
    pub const INITIAL_ATTEMPT_MS: u64 = 3000;
    /// Extra time granted every time the ball bounces off the rim (ms)
    pub const BOUNCE_EXTENSION_MS: u64 = 100;

    /// Points for a made basket
    pub const POINTS_PER_BASKET: u64 = 5;

    /// Rim defaults, in grid units
    pub const RIM_WIDTH_GRID: f32 = 3.0;
    pub const RIM_HEIGHT_GRID: f32 = 0.25;
    pub const RIM_SCORING_INSET_GRID: f32 = 0.75;
    pub const RIM_SCORING_DEPTH_GRID: f32 = 0.75;

    /// Arrow cursor rests this many grid units right of and below the ball center
    pub const AIM_OFFSET_GRID: f32 = 2.0;
    /// Points in the aim projection preview
    pub const PROJECTION_STEPS: usize = 30;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
