//! Aim arrow: turns a drag-and-release gesture into a shot target
//!
//! The arrow cursor rests a little below and right of the ball. The player
//! drags it and lets go; the release point becomes the zero-size target
//! passed to `Ball::shoot`, which launches the ball away from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::geometry::Bound;
use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimController {
    /// Arrow cursor position
    pub cursor: Vec2,
    pub visible: bool,
    pub dragging: bool,
    /// Resting offset of the cursor from the ball center
    offset: Vec2,
    projection_steps: usize,
    /// Preview of the flight path for the current cursor (render only)
    #[serde(skip)]
    projection: Vec<Vec2>,
}

impl AimController {
    pub fn new(config: &GameConfig, ball: &Ball) -> Self {
        let mut aim = Self {
            cursor: Vec2::ZERO,
            visible: true,
            dragging: false,
            offset: Vec2::splat(config.aim_offset_grid * config.grid_unit),
            projection_steps: config.projection_steps,
            projection: Vec::new(),
        };
        aim.link(ball);
        aim
    }

    /// Park the cursor at its resting spot next to the ball
    pub fn link(&mut self, ball: &Ball) {
        self.cursor = ball.center() + self.offset;
    }

    /// Move the cursor while the player drags it
    pub fn drag_to(&mut self, pos: Vec2, ball: &Ball, dt: f32) {
        if !self.visible {
            return;
        }
        self.dragging = true;
        self.cursor = pos;
        self.projection = Self::projection(ball, &Bound::point(pos), self.projection_steps, dt);
    }

    /// Player let go at `pos`. Returns the shot target, or `None` while the
    /// ball is still in flight.
    pub fn release(&mut self, pos: Vec2, ball: &Ball) -> Option<Bound> {
        if ball.disabled {
            log::warn!("Release at ({:.1}, {:.1}) ignored: ball in flight", pos.x, pos.y);
            return None;
        }
        self.dragging = false;
        self.visible = false;
        self.cursor = pos;
        self.projection.clear();
        Some(Bound::point(pos))
    }

    /// Release given as a drag vector from the ball center rather than a
    /// screen position.
    pub fn release_drag(&mut self, drag: Vec2, ball: &Ball) -> Option<Bound> {
        let target = Self::target_from_drag(ball.center(), drag);
        self.release(target.center(), ball)
    }

    /// Shot target for a drag vector measured from the ball center
    pub fn target_from_drag(ball_center: Vec2, drag: Vec2) -> Bound {
        Bound::point(ball_center + drag)
    }

    /// Simulate a copy of `ball` shot at `target` and sample its centers.
    ///
    /// Rim contact is not simulated; this is only a preview.
    pub fn projection(ball: &Ball, target: &Bound, steps: usize, dt: f32) -> Vec<Vec2> {
        let mut ghost = ball.clone();
        ghost.reset();
        ghost.shoot(target);
        (0..steps)
            .map(|_| {
                ghost.advance(dt);
                ghost.center()
            })
            .collect()
    }

    /// Latest preview computed by `drag_to`
    pub fn projection_points(&self) -> &[Vec2] {
        &self.projection
    }

    /// Show the arrow again next to a freshly reset ball
    pub fn reset(&mut self, ball: &Ball) {
        self.visible = true;
        self.dragging = false;
        self.projection.clear();
        self.link(ball);
    }
}
