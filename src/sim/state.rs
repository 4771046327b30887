//! Game state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::rect::Rect;
use super::striker::Striker;
use crate::tuning::Rules;

/// Why a match stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Quit request or exit key
    Quit,
    /// Ball dropped out of the arena
    BallLost,
    /// Runner-imposed tick budget ran out
    TickLimit,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Over(EndReason),
}

/// Things that happened during a tick, for sound and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A punch landed and scored
    Hit { score: u32 },
    /// A fresh punch found nothing under the fist
    Miss,
    /// A punch landed on a ball still in cooldown
    Blocked,
    /// The match ended
    MatchOver(EndReason),
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub rules: Rules,
    pub arena: Rect,
    pub striker: Striker,
    pub ball: Ball,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    /// Cursor driven by the autopilot in idle mode
    pub pilot_cursor: IVec2,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh match with the given sprite sizes
    pub fn new(rules: Rules, fist_size: IVec2, ball_size: IVec2, seed: u64) -> Self {
        let arena = Rect::from_top_left(IVec2::ZERO, rules.arena);
        Self {
            rules,
            arena,
            striker: Striker::new(fist_size),
            ball: Ball::new(ball_size, rules),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            pilot_cursor: arena.center(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Stop the match. Only the first reason sticks.
    pub fn end(&mut self, reason: EndReason) {
        if self.running() {
            self.phase = GamePhase::Over(reason);
            self.events.push(GameEvent::MatchOver(reason));
            log::info!("Match over ({reason:?}) after {} ticks", self.time_ticks);
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Over(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_SPRITE_SIZE, FIST_SPRITE_SIZE};

    #[test]
    fn test_new_state() {
        let state = GameState::new(Rules::VOLLEY, FIST_SPRITE_SIZE, BALL_SPRITE_SIZE, 1);
        assert!(state.running());
        assert_eq!(state.score, 0);
        assert_eq!(state.arena, Rect::new(0, 0, 440, 440));
        assert!(!state.striker.is_punching());
    }

    #[test]
    fn test_first_end_reason_sticks() {
        let mut state = GameState::new(Rules::VOLLEY, FIST_SPRITE_SIZE, BALL_SPRITE_SIZE, 1);
        state.end(EndReason::BallLost);
        state.end(EndReason::Quit);
        assert_eq!(state.end_reason(), Some(EndReason::BallLost));
        assert_eq!(state.events, vec![GameEvent::MatchOver(EndReason::BallLost)]);
    }
}
