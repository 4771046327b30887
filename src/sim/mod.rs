//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod ball;
pub mod collision;
pub mod rect;
pub mod sprite;
pub mod state;
pub mod striker;
pub mod tick;

pub use actor::{Actor, Flow, Frame};
pub use ball::{Ball, BallState, Velocity};
pub use collision::{WallContact, past_floor, wall_contact};
pub use rect::Rect;
pub use sprite::{Sprite, SpriteKind};
pub use state::{EndReason, GameEvent, GamePhase, GameState};
pub use striker::{PunchOutcome, Striker};
pub use tick::{InputEvent, Key, TickInput, tick};
