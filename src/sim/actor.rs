//! The capability shared by everything the match loop updates and draws

use glam::IVec2;

use super::rect::Rect;
use super::sprite::Sprite;

/// Per-tick context handed to every actor
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Current pointer position
    pub cursor: IVec2,
    /// Arena bounds
    pub arena: Rect,
}

/// What an actor's update asks of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    EndOfMatch,
}

/// An entity that advances once per tick and can be drawn
pub trait Actor {
    /// Advance one fixed tick
    fn update(&mut self, frame: &Frame) -> Flow;

    /// Sprite to draw this frame
    fn visual(&self) -> Sprite;

    /// Bounding box used for drawing and collision
    fn bounds(&self) -> Rect;
}
