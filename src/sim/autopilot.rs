//! Idle/demo mode: the game plays itself
//!
//! The autopilot steers its own cursor toward the ball with a little seeded
//! jitter, punches when the fist is over an available ball and lets go on
//! the next frame.

use glam::IVec2;
use rand::Rng;

use super::actor::Actor;
use super::state::GameState;
use super::tick::{InputEvent, TickInput};

/// Cursor speed limit (pixels per tick)
pub const PILOT_MAX_SPEED: i32 = 24;
/// Aim jitter (pixels, each axis)
pub const PILOT_JITTER: i32 = 8;

/// Replace the external pointer and button events with autopilot ones
pub fn drive(state: &mut GameState, input: &mut TickInput) {
    let ball = state.ball.bounds();
    let fist = state.striker.bounds();

    // Aim so the fist's middle lands on the ball's middle
    let jitter = IVec2::new(
        state.rng.random_range(-PILOT_JITTER..=PILOT_JITTER),
        state.rng.random_range(-PILOT_JITTER..=PILOT_JITTER),
    );
    let target = ball.center() - IVec2::new(0, fist.h / 2) + jitter;
    let delta = (target - state.pilot_cursor).clamp(
        IVec2::splat(-PILOT_MAX_SPEED),
        IVec2::splat(PILOT_MAX_SPEED),
    );
    state.pilot_cursor += delta;

    input.pointer = state.pilot_cursor;
    input.events.retain(|e| !matches!(e, InputEvent::PointerDown | InputEvent::PointerUp));
    if state.striker.is_punching() {
        input.events.push(InputEvent::PointerUp);
    } else if state.ball.is_available() && state.striker.hitbox().collides(&ball) {
        input.events.push(InputEvent::PointerDown);
    }
}
