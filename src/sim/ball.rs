//! The ball: a single projectile that is either idle at home or in flight
//!
//! Integration is per tick and deliberately asymmetric: acceleration is added
//! to velocity once per tick regardless of `dt`, while position moves by
//! `dt * velocity`. Gameplay tuning depends on this, so keep it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bound, distance_aabb, distance_angle};
use crate::config::{GameConfig, WallPolicy};
use crate::polar_to_cartesian;

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Visual heading (radians), accumulates without wraparound
    pub rotation: f32,
    /// Rotation added to `rotation` every tick
    pub spin: f32,
    /// Side length of the square bounds
    pub size: f32,
    /// In flight (or just bounced) and waiting for a reset
    pub disabled: bool,
    home: Vec2,
    gravity: f32,
    bounce: f32,
    speed_divisor: f32,
    shot_spin: f32,
    ground: Bound,
    walls: WallPolicy,
}

impl Ball {
    /// Idle ball resting at `config.ball_home`. Gravity starts at zero until
    /// `set_gravity` is called.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_home,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            rotation: 0.0,
            spin: 0.0,
            size: config.ball_size(),
            disabled: false,
            home: config.ball_home,
            gravity: 0.0,
            bounce: config.bounce,
            speed_divisor: config.speed_divisor,
            shot_spin: config.shot_spin,
            ground: config.ground,
            walls: config.walls,
        }
    }

    /// Gravity that `shoot` will switch on. Has no effect on a ball already in flight.
    pub fn set_gravity(&mut self, value: f32) {
        self.gravity = value;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    /// Unrotated collision bounds
    pub fn bounds(&self) -> Bound {
        Bound::centered(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos
    }

    /// Idle: not disabled, at rest, at home
    pub fn is_idle(&self) -> bool {
        !self.disabled
            && self.vel == Vec2::ZERO
            && self.acc == Vec2::ZERO
            && self.spin == 0.0
            && self.pos == self.home
    }

    /// Launch away from `target`, through the ball's own center.
    ///
    /// Ignored while the ball is already in flight.
    pub fn shoot(&mut self, target: &Bound) {
        if self.disabled {
            return;
        }
        self.disabled = true;

        let origin = self.bounds().center_point();
        let speed = distance_aabb(target, &origin) / self.speed_divisor;
        let angle = distance_angle(target, &origin);
        self.vel = polar_to_cartesian(speed, angle);
        self.spin = self.shot_spin;
        self.acc.y = self.gravity;
    }

    /// Bounce off `obstacle`: new velocity points away from the obstacle's
    /// center, with speed proportional to the center distance.
    pub fn reflect(&mut self, obstacle: &Bound) {
        let origin = self.bounds().center_point();
        let speed = -distance_aabb(&origin, obstacle) / self.speed_divisor;
        let angle = distance_angle(&origin, obstacle);
        self.vel = polar_to_cartesian(speed, angle);
        // Spin follows horizontal speed
        self.spin = self.vel.x;
    }

    /// One tick: wall/floor bounce, then velocity, then position, then rotation
    pub fn advance(&mut self, dt: f32) {
        let half = self.size / 2.0;
        let ground = self.ground;

        if self.walls.left && self.pos.x - half < ground.x {
            self.pos.x = ground.x + half;
            self.vel.x *= self.bounce;
        }
        if self.walls.right && self.pos.x + half > ground.right() {
            self.pos.x = ground.right() - half;
            self.vel.x *= self.bounce;
        }
        if self.walls.top && self.pos.y - half < ground.y {
            self.pos.y = ground.y + half;
            self.vel.y *= self.bounce;
        }
        // Floor is always solid
        if self.pos.y + half > ground.bottom() {
            self.pos.y = ground.bottom() - half;
            self.vel.y *= self.bounce;
        }

        self.vel += self.acc;
        self.pos += dt * self.vel;
        self.rotation += self.spin;
    }

    /// Back to idle at home, from any state
    pub fn reset(&mut self) {
        self.disabled = false;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
        self.rotation = 0.0;
        self.spin = 0.0;
        self.pos = self.home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn test_config() -> GameConfig {
        GameConfig {
            ball_home: Vec2::new(100.0, 100.0),
            ..Default::default()
        }
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_new_ball_is_idle() {
        let ball = Ball::new(&test_config());
        assert!(ball.is_idle());
        assert_eq!(ball.bounds(), Bound::new(84.0, 84.0, 32.0, 32.0));
    }

    #[test]
    fn test_idle_advance_is_noop() {
        let mut ball = Ball::new(&test_config());
        ball.set_gravity(9.8);
        for _ in 0..10 {
            ball.advance(SIM_DT);
        }
        assert!(ball.is_idle());
    }

    #[test]
    fn test_shoot_flies_away_from_release_point() {
        let mut ball = Ball::new(&test_config());
        ball.set_gravity(9.8);
        ball.shoot(&Bound::point(Vec2::new(50.0, 50.0)));

        assert!(ball.disabled);
        let expected_speed = (50.0f32 * 50.0 * 2.0).sqrt() / 90.0;
        assert!((ball.vel.length() - expected_speed).abs() < 1e-5);
        // From (50,50) through (100,100): down-right
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
        assert!((ball.vel.x - ball.vel.y).abs() < 1e-5);
        assert_eq!(ball.spin, 0.1);
        assert_eq!(ball.acc, Vec2::new(0.0, 9.8));
    }

    #[test]
    fn test_velocity_y_grows_under_gravity() {
        let config = test_config();
        let mut ball = Ball::new(&config);
        ball.set_gravity(9.8);
        ball.shoot(&Bound::point(Vec2::new(50.0, 50.0)));

        let floor = config.ground.bottom();
        let mut last_vy = ball.vel.y;
        for _ in 0..5 {
            if ball.bounds().bottom() > floor {
                break;
            }
            ball.advance(0.1);
            assert!(ball.vel.y > last_vy);
            last_vy = ball.vel.y;
        }
    }

    #[test]
    fn test_shoot_ignored_while_in_flight() {
        let mut ball = Ball::new(&test_config());
        ball.shoot(&Bound::point(Vec2::new(50.0, 50.0)));
        let first = ball.vel;

        ball.shoot(&Bound::point(Vec2::new(300.0, 20.0)));
        assert_eq!(ball.vel, first);
        assert_eq!(ball.spin, 0.1);
    }

    #[test]
    fn test_set_gravity_does_not_touch_flight() {
        let mut ball = Ball::new(&test_config());
        ball.set_gravity(0.5);
        ball.shoot(&Bound::point(Vec2::new(50.0, 50.0)));
        ball.set_gravity(2.0);
        assert_eq!(ball.acc.y, 0.5);
    }

    #[test]
    fn test_floor_bounce_clamps_and_damps() {
        let config = test_config();
        let mut ball = Ball::new(&config);
        let floor = config.ground.bottom();
        let half = ball.size / 2.0;

        ball.disabled = true;
        ball.pos.y = floor + 5.0 - half;
        ball.vel = Vec2::new(0.0, 2.0);

        ball.advance(0.0);
        assert_eq!(ball.bounds().bottom(), floor);
        assert!((ball.vel.y - 2.0 * config.bounce).abs() < 1e-6);
        assert!(ball.vel.y < 0.0 && ball.vel.y.abs() < 2.0);
    }

    #[test]
    fn test_floor_bounce_happens_before_integration() {
        let config = test_config();
        let mut ball = Ball::new(&config);
        ball.set_gravity(0.5);
        ball.shoot(&Bound::point(Vec2::new(100.0, 50.0)));
        let floor = config.ground.bottom();
        let half = ball.size / 2.0;
        ball.pos = Vec2::new(100.0, floor + 5.0 - half);
        ball.vel = Vec2::new(0.0, 2.0);

        ball.advance(10.0);
        let vy = 2.0 * config.bounce + 0.5;
        assert!((ball.vel.y - vy).abs() < 1e-5);
        assert!((ball.pos.y - (floor - half + 10.0 * vy)).abs() < 1e-3);
    }

    #[test]
    fn test_walls_are_open_by_default() {
        let config = test_config();
        let mut ball = Ball::new(&config);
        ball.disabled = true;
        ball.pos = Vec2::new(-100.0, 200.0);
        ball.vel = Vec2::new(-1.0, 0.0);
        ball.advance(1.0);
        assert_eq!(ball.pos.x, -101.0);
        assert_eq!(ball.vel.x, -1.0);
    }

    #[test]
    fn test_closed_walls_bounce() {
        let config = GameConfig {
            walls: WallPolicy::closed(),
            ..test_config()
        };
        let mut ball = Ball::new(&config);
        let half = ball.size / 2.0;
        ball.disabled = true;

        ball.pos = Vec2::new(-3.0, 200.0);
        ball.vel = Vec2::new(-1.0, 0.0);
        ball.advance(0.0);
        assert_eq!(ball.pos.x, config.ground.x + half);
        assert!((ball.vel.x - (-1.0 * config.bounce)).abs() < 1e-6);

        ball.pos = Vec2::new(config.ground.right() + 1.0, 200.0);
        ball.vel = Vec2::new(1.0, 0.0);
        ball.advance(0.0);
        assert_eq!(ball.pos.x, config.ground.right() - half);
        assert!(ball.vel.x < 0.0);

        ball.pos = Vec2::new(200.0, 0.0);
        ball.vel = Vec2::new(0.0, -1.0);
        ball.advance(0.0);
        assert_eq!(ball.pos.y, config.ground.y + half);
        assert!(ball.vel.y > 0.0);
    }

    #[test]
    fn test_reflect_retreats_from_obstacle() {
        let mut ball = Ball::new(&test_config());
        ball.shoot(&Bound::point(Vec2::new(150.0, 150.0)));
        // Obstacle centered left of the ball
        let rim = Bound::new(0.0, 90.0, 40.0, 20.0);
        ball.reflect(&rim);

        let expected_speed = (100.0f32 - 20.0) / 90.0;
        assert!((ball.vel.length() - expected_speed).abs() < 1e-5);
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y.abs() < 1e-5);
        assert_eq!(ball.spin, ball.vel.x);
        assert!(ball.disabled);
    }

    #[test]
    fn test_rotation_accumulates_spin() {
        let mut ball = Ball::new(&test_config());
        ball.shoot(&Bound::point(Vec2::new(50.0, 100.0)));
        ball.advance(1.0);
        ball.advance(1.0);
        assert!((ball.rotation - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_idle_from_any_state() {
        let config = test_config();
        let mut ball = Ball::new(&config);
        ball.set_gravity(0.3);

        ball.reset();
        assert!(ball.is_idle());

        ball.shoot(&Bound::point(Vec2::new(40.0, 60.0)));
        for _ in 0..20 {
            ball.advance(SIM_DT);
        }
        ball.reflect(&Bound::new(0.0, 0.0, 10.0, 10.0));
        ball.advance(SIM_DT);
        assert!(!ball.is_idle());

        ball.reset();
        assert!(ball.is_idle());
        assert_eq!(ball.rotation, 0.0);
        assert!(approx(ball.center(), config.ball_home));
        // Gravity setting survives a reset
        assert_eq!(ball.gravity(), 0.3);
    }

    #[test]
    fn test_coincident_target_gives_zero_speed() {
        let mut ball = Ball::new(&test_config());
        ball.shoot(&Bound::point(Vec2::new(100.0, 100.0)));
        assert!(ball.disabled);
        assert_eq!(ball.vel.length(), 0.0);
    }
}
