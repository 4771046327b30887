//! Platform abstraction layer
//!
//! The simulation is driven through these seams:
//! - Input events and the pointer position
//! - A display surface that takes blits and a present call
//! - A text renderer for the score label
//! - Frame timing
//!
//! `headless` provides implementations that need no window, used by the
//! native runner and the tests.

pub mod headless;
pub mod time;

use glam::IVec2;

use crate::Color;
use crate::sim::{InputEvent, Rect, Sprite};

pub use headless::{HeadlessText, RecordingDisplay, ScriptedInput};
pub use time::FrameClock;

/// Source of input events, drained once per tick
pub trait InputSource {
    /// Collect whatever arrived since the last tick. Called once at the top
    /// of every tick, before draining.
    fn pump(&mut self) {}

    /// Next pending event, or `None` once the queue is empty for this tick
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Current pointer position
    fn pointer(&self) -> IVec2;
}

/// Text style for rendered labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u32,
    pub color: Color,
}

/// Something the display can draw
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Sprite(Sprite),
    Text {
        text: String,
        style: TextStyle,
        size: IVec2,
    },
}

/// Target surface for one frame of drawing
pub trait DisplaySurface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill a rectangle
    fn fill(&mut self, rect: Rect, color: Color);

    /// Draw `visual` with its top-left corner at `pos`
    fn blit(&mut self, visual: &Visual, pos: IVec2);

    /// Show the finished frame
    fn present(&mut self);
}

/// Turns strings into drawable labels
pub trait TextRenderer {
    fn render(&mut self, text: &str, style: TextStyle) -> Visual;
}
