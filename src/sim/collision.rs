//! Arena boundary tests
//!
//! The ball reacts to the arena in three ways: side walls and the ceiling
//! reflect it, and the floor (for variants that have one) ends the match.

use super::rect::Rect;
use crate::tuning::LossEdge;

/// Which reflecting walls a box is currently past
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Past the left or right wall
    pub sides: bool,
    /// Above the ceiling
    pub ceiling: bool,
}

/// Check `rect` against the side walls and the ceiling
pub fn wall_contact(rect: &Rect, arena: &Rect) -> WallContact {
    WallContact {
        sides: rect.left() < arena.left() || rect.right() > arena.right(),
        ceiling: rect.top() < arena.top(),
    }
}

/// True once `rect` has dropped below the arena floor, judged by `edge`
pub fn past_floor(rect: &Rect, arena: &Rect, edge: LossEdge) -> bool {
    match edge {
        LossEdge::Top => rect.top() > arena.bottom(),
        LossEdge::Bottom => rect.bottom() > arena.bottom(),
    }
}
