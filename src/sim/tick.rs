//! Per-frame simulation tick
//!
//! Drives one frame: input, ball integration, rim contact, then the retry
//! timer. The rim sees the ball's post-advance bounds, and only while the
//! ball is in flight.

use glam::Vec2;

use super::geometry::Bound;
use super::state::{GameEvent, GamePhase, GameState, TimerAction};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Arrow cursor dragged to this point
    pub drag: Option<Vec2>,
    /// Arrow released at this point (fires a shot)
    pub release: Option<Vec2>,
    /// Arrow released at this offset from the ball center. Ignored when
    /// `release` is also set.
    pub release_drag: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the autoplayer shoots
    pub idle_mode: bool,
}

/// Advance the game by one frame of `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Aiming | GamePhase::InFlight => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = state.active_phase();
                log::info!("Resumed");
            }
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        _ => {}
    }

    state.elapsed_ms += dt as f64;
    if let Some(total) = state.config.session_ms {
        if state.elapsed_ms >= total as f64 {
            state.phase = GamePhase::GameOver;
            state.retry.cancel();
            log::info!("Game over with {} points", state.points);
            state.events.push(GameEvent::GameOver {
                points: state.points,
            });
            return;
        }
    }

    let mut input = input.clone();
    if input.idle_mode && input.release.is_none() && input.release_drag.is_none() {
        input.release = state.autoplay.choose_release(&state.ball, &state.rim);
    }

    if let Some(pos) = input.drag {
        state.aim.drag_to(pos, &state.ball, dt);
    }
    let target = match (input.release, input.release_drag) {
        (Some(pos), _) => state.aim.release(pos, &state.ball),
        (None, Some(drag)) => state.aim.release_drag(drag, &state.ball),
        (None, None) => None,
    };
    if let Some(target) = target {
        shot(state, &target);
    }

    state.ball.advance(dt);

    // An idle ball sitting on the rim is not a basket or a bounce
    if state.ball.disabled {
        let falling = state.ball.vel.y > 0.0;
        let rim_events = state.rim.update(&state.ball.bounds(), falling);
        if rim_events.score {
            state.points += state.config.points_per_basket;
            log::info!("Basket! {} points", state.points);
            state.events.push(GameEvent::Scored {
                points: state.points,
            });
            if state.config.reset_on_score {
                state.reset_episode();
                return;
            }
        }
        if rim_events.bounce {
            let rim_bounds = state.rim.bounds;
            state.ball.reflect(&rim_bounds);
            state.time_to_restart_ms += state.config.bounce_extension_ms;
            state
                .retry
                .schedule(state.time_to_restart_ms, TimerAction::ResetEpisode);
            log::debug!(
                "Rim bounce, attempt extended to {} ms",
                state.time_to_restart_ms
            );
            state.events.push(GameEvent::RimBounce);
        }
    }

    if let Some(TimerAction::ResetEpisode) = state.retry.advance(dt) {
        state.reset_episode();
    }
}

/// Launch the ball at `target` and start the attempt clock
pub fn shot(state: &mut GameState, target: &Bound) {
    if state.ball.disabled {
        return;
    }
    state.ball.shoot(target);
    state
        .retry
        .schedule(state.time_to_restart_ms, TimerAction::ResetEpisode);
    state.phase = GamePhase::InFlight;
    log::info!(
        "Shot from ({:.1}, {:.1}) at speed {:.3}",
        target.x,
        target.y,
        state.ball.vel.length()
    );
    state.events.push(GameEvent::Shot);
}
