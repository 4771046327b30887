//! Fixed timestep simulation tick
//!
//! One call advances the match by one frame: input events first, then the
//! striker, then the ball.

use glam::IVec2;

use super::actor::{Actor, Flow, Frame};
use super::autopilot;
use super::state::{EndReason, GameEvent, GameState};
use super::striker::PunchOutcome;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

impl Key {
    /// Keys that end the match
    pub fn is_exit(&self) -> bool {
        matches!(self, Key::Escape | Key::Char('q') | Key::Char('Q'))
    }
}

/// Discrete input events delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerDown,
    PointerUp,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events in arrival order
    pub events: Vec<InputEvent>,
    /// Pointer position this frame
    pub pointer: IVec2,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    if !state.running() {
        return;
    }
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }

    for event in &input.events {
        match *event {
            InputEvent::Quit => {
                state.end(EndReason::Quit);
                return;
            }
            InputEvent::KeyDown(key) if key.is_exit() => {
                state.end(EndReason::Quit);
                return;
            }
            InputEvent::PointerDown => resolve_punch(state),
            InputEvent::PointerUp => state.striker.unpunch(),
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
        }
    }

    let frame = Frame {
        cursor: input.pointer,
        arena: state.arena,
    };
    state.striker.update(&frame);
    if state.ball.update(&frame) == Flow::EndOfMatch {
        state.end(EndReason::BallLost);
    }
}

/// Punch at the ball and settle the score
fn resolve_punch(state: &mut GameState) {
    match state.striker.punch(&state.ball.bounds()) {
        PunchOutcome::AlreadyPunching => {}
        PunchOutcome::Hit => {
            if state.ball.is_available() && state.ball.punched() {
                state.score += 1;
                state.events.push(GameEvent::Hit { score: state.score });
                log::debug!("Hit at tick {} (score {})", state.time_ticks, state.score);
            } else {
                state.events.push(GameEvent::Blocked);
            }
        }
        PunchOutcome::Miss => {
            if state.rules.miss_cue {
                state.events.push(GameEvent::Miss);
            }
        }
    }
}
