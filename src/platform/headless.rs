//! Window-free platform implementations

use std::collections::VecDeque;

use glam::IVec2;

use super::{DisplaySurface, InputSource, TextRenderer, TextStyle, Visual};
use crate::Color;
use crate::sim::{InputEvent, Rect};

/// Input for one scripted frame
#[derive(Debug, Clone, Default)]
pub struct ScriptFrame {
    /// New pointer position, or `None` to keep the previous one
    pub pointer: Option<IVec2>,
    pub events: Vec<InputEvent>,
}

/// Replays a fixed list of frames. Once the script runs out every frame is
/// empty and the pointer stays put.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptFrame>,
    pending: VecDeque<InputEvent>,
    pointer: IVec2,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame
    pub fn push_frame(&mut self, pointer: Option<IVec2>, events: Vec<InputEvent>) -> &mut Self {
        self.frames.push_back(ScriptFrame { pointer, events });
        self
    }

    /// Append `count` frames with no input
    pub fn idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.frames.push_back(ScriptFrame::default());
        }
        self
    }

    /// Frames not yet replayed
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn pump(&mut self) {
        if let Some(frame) = self.frames.pop_front() {
            if let Some(pointer) = frame.pointer {
                self.pointer = pointer;
            }
            self.pending.extend(frame.events);
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn pointer(&self) -> IVec2 {
        self.pointer
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Fill(Rect, Color),
    Blit(Visual, IVec2),
}

/// Display that keeps the draw list of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    current: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DisplaySurface for RecordingDisplay {
    fn clear(&mut self, color: Color) {
        self.current.push(DrawCommand::Clear(color));
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.current.push(DrawCommand::Fill(rect, color));
    }

    fn blit(&mut self, visual: &Visual, pos: IVec2) {
        self.current.push(DrawCommand::Blit(visual.clone(), pos));
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
    }
}

/// Fixed-advance text layout: every glyph is half as wide as it is tall
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessText;

impl TextRenderer for HeadlessText {
    fn render(&mut self, text: &str, style: TextStyle) -> Visual {
        let height = style.size as i32;
        let width = text.chars().count() as i32 * height / 2;
        Visual::Text {
            text: text.to_string(),
            style,
            size: IVec2::new(width, height),
        }
    }
}
