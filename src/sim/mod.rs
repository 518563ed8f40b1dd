//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod aim;
pub mod autoplay;
pub mod ball;
pub mod geometry;
pub mod rim;
pub mod state;
pub mod tick;
pub mod timer;

pub use aim::AimController;
pub use autoplay::AutoPlayer;
pub use ball::Ball;
pub use geometry::{Bound, distance_aabb, distance_angle};
pub use rim::{Rim, RimContact, RimEvents};
pub use state::{GameEvent, GamePhase, GameState, TimerAction};
pub use tick::{TickInput, shot, tick};
pub use timer::RetryTimer;
