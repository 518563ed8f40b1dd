//! Game tuning
//!
//! Every constant the simulation reads comes through `GameConfig`. Nothing in
//! `sim` reads globals, so a config can be loaded from JSON and swapped per game.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;
use crate::sim::Bound;

/// Which sides of the play region, besides the floor, bounce the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallPolicy {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallPolicy {
    /// Fully enclosed play region
    pub fn closed() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
        }
    }
}

/// Rim placement and the shape of its two contact regions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RimGeometry {
    /// Top-left corner of the collidable rim
    pub anchor: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal inset of the scoring zone from each end of the rim
    pub scoring_inset: f32,
    /// How far the scoring zone reaches below the rim
    pub scoring_depth: f32,
}

impl Default for RimGeometry {
    fn default() -> Self {
        let grid = GRID_UNIT;
        Self {
            anchor: Vec2::new(GROUND_X + grid / 3.0, GROUND_HEIGHT / 2.0),
            width: grid * RIM_WIDTH_GRID,
            height: grid * RIM_HEIGHT_GRID,
            scoring_inset: grid * RIM_SCORING_INSET_GRID,
            scoring_depth: grid * RIM_SCORING_DEPTH_GRID,
        }
    }
}

impl RimGeometry {
    pub fn bounds(&self) -> Bound {
        Bound::new(self.anchor.x, self.anchor.y, self.width, self.height)
    }

    pub fn scoring_zone(&self) -> Bound {
        Bound::new(
            self.anchor.x + self.scoring_inset,
            self.anchor.y,
            self.width - 2.0 * self.scoring_inset,
            self.height + self.scoring_depth,
        )
    }
}

/// Complete tuning for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_unit: f32,
    /// Play region. The floor is its bottom edge.
    pub ground: Bound,
    pub walls: WallPolicy,

    // === Ball ===
    pub ball_home: Vec2,
    pub gravity: f32,
    pub bounce: f32,
    pub speed_divisor: f32,
    pub shot_spin: f32,

    // === Rim ===
    pub rim: RimGeometry,

    // === Episode ===
    pub initial_attempt_ms: u64,
    pub bounce_extension_ms: u64,
    pub points_per_basket: u64,
    /// Put the ball back as soon as it scores instead of waiting for the timer
    pub reset_on_score: bool,
    /// Total session length; `None` plays forever
    pub session_ms: Option<u64>,

    // === Aim ===
    pub aim_offset_grid: f32,
    pub projection_steps: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let grid = GRID_UNIT;
        Self {
            grid_unit: grid,
            ground: Bound::new(GROUND_X, GROUND_Y, GROUND_WIDTH, GROUND_HEIGHT),
            walls: WallPolicy::default(),

            ball_home: Vec2::new(GROUND_WIDTH - grid * 6.0, GROUND_HEIGHT - grid * 4.0),
            gravity: GRAVITY,
            bounce: BOUNCE,
            speed_divisor: SPEED_DIVISOR,
            shot_spin: SHOT_SPIN,

            rim: RimGeometry::default(),

            initial_attempt_ms: INITIAL_ATTEMPT_MS,
            bounce_extension_ms: BOUNCE_EXTENSION_MS,
            points_per_basket: POINTS_PER_BASKET,
            reset_on_score: false,
            session_ms: None,

            aim_offset_grid: AIM_OFFSET_GRID,
            projection_steps: PROJECTION_STEPS,
        }
    }
}

/// Why a config was rejected
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Overlay `overrides` onto `base`, descending into objects so a nested
/// table only replaces the keys it names.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

impl GameConfig {
    /// Parse and validate. Missing fields take their defaults, including
    /// fields missing from nested tables like `rim` or `ground`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(GameConfig::default())?;
        merge(&mut merged, overrides);
        let config: GameConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.grid_unit,
            self.ground.x,
            self.ground.y,
            self.ground.width,
            self.ground.height,
            self.ball_home.x,
            self.ball_home.y,
            self.gravity,
            self.bounce,
            self.speed_divisor,
            self.shot_spin,
            self.rim.anchor.x,
            self.rim.anchor.y,
            self.rim.width,
            self.rim.height,
            self.rim.scoring_inset,
            self.rim.scoring_depth,
            self.aim_offset_grid,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(invalid("*", "all numeric values must be finite"));
        }

        if self.grid_unit <= 0.0 {
            return Err(invalid("grid_unit", "must be positive"));
        }
        if self.ground.width <= 0.0 || self.ground.height <= 0.0 {
            return Err(invalid("ground", "width and height must be positive"));
        }
        if !(self.bounce > -1.0 && self.bounce < 0.0) {
            return Err(invalid("bounce", "must lie strictly between -1 and 0"));
        }
        if self.speed_divisor <= 0.0 {
            return Err(invalid("speed_divisor", "must be positive"));
        }
        if self.rim.width <= 0.0 || self.rim.height <= 0.0 {
            return Err(invalid("rim", "width and height must be positive"));
        }
        if self.rim.scoring_inset < 0.0 || self.rim.scoring_zone().width <= 0.0 {
            return Err(invalid("rim.scoring_inset", "leaves no room for a scoring zone"));
        }
        if self.rim.scoring_depth <= 0.0 {
            return Err(invalid("rim.scoring_depth", "must be positive"));
        }
        let ball = Bound::centered(self.ball_home, Vec2::splat(self.ball_size()));
        if ball.overlaps(&self.rim.bounds()) || ball.overlaps(&self.rim.scoring_zone()) {
            return Err(invalid("ball_home", "ball at rest overlaps the rim"));
        }
        if self.initial_attempt_ms == 0 {
            return Err(invalid("initial_attempt_ms", "must be positive"));
        }
        Ok(())
    }

    /// Side length of the square ball
    pub fn ball_size(&self) -> f32 {
        self.grid_unit
    }
}
