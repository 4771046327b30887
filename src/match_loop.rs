//! The frame loop
//!
//! Each frame: pump and drain input, advance the simulation one tick, play
//! the sound cues it produced, draw, then wait for the next tick boundary.
//! The loop only talks to the outside world through the platform and audio
//! seams, so the same code runs headless in tests.

use serde::Serialize;

use crate::Color;
use crate::assets::Assets;
use crate::audio::{self, AudioSink, SoundEffect};
use crate::consts::{SCORE_FONT_SIZE, SCORE_ORIGIN, SCORE_REGION_SIZE, TICK_RATE};
use crate::platform::{DisplaySurface, FrameClock, InputSource, TextRenderer, TextStyle, Visual};
use crate::settings::Settings;
use crate::sim::{Actor, EndReason, GameEvent, GameState, Rect, TickInput, tick};
use crate::tuning::VariantKind;

/// Summary of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub variant: VariantKind,
    pub score: u32,
    pub ticks: u64,
    pub end: Option<EndReason>,
}

/// Runs one match over the platform seams
pub struct MatchLoop {
    variant: VariantKind,
    state: GameState,
    audio: Box<dyn AudioSink>,
    clock: FrameClock,
    idle_mode: bool,
    max_ticks: Option<u64>,
}

impl MatchLoop {
    pub fn new(variant: VariantKind, assets: &Assets, audio: Box<dyn AudioSink>, seed: u64) -> Self {
        let state = GameState::new(variant.rules(), assets.fist.size, assets.ball.size, seed);
        Self {
            variant,
            state,
            audio,
            clock: FrameClock::fixed(TICK_RATE),
            idle_mode: false,
            max_ticks: None,
        }
    }

    /// Match configured from settings, with the audio sink chosen here
    pub fn from_settings(settings: &Settings, assets: &Assets) -> Self {
        let audio = audio::open_sink(&settings.audio);
        Self::new(settings.variant, assets, audio, settings.seed).with_idle_mode(settings.idle_mode)
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_idle_mode(mut self, idle_mode: bool) -> Self {
        self.idle_mode = idle_mode;
        self
    }

    /// End the match with `EndReason::TickLimit` after this many ticks
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            variant: self.variant,
            score: self.state.score,
            ticks: self.state.time_ticks,
            end: self.state.end_reason(),
        }
    }

    /// Play the whole match
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySurface,
        text: &mut dyn TextRenderer,
    ) -> MatchReport {
        log::info!("Match starting ({} variant)", self.variant.as_str());
        while self.step(input, display, text) {}
        let report = self.report();
        log::info!("Final score: {}", report.score);
        report
    }

    /// Run one frame. Returns false once the match is over.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySurface,
        text: &mut dyn TextRenderer,
    ) -> bool {
        if !self.state.running() {
            return false;
        }
        if self.limit_reached() {
            self.state.end(EndReason::TickLimit);
            return false;
        }

        input.pump();
        let mut tick_input = TickInput {
            events: Vec::new(),
            pointer: input.pointer(),
            idle_mode: self.idle_mode,
        };
        while let Some(event) = input.poll_event() {
            tick_input.events.push(event);
        }

        tick(&mut self.state, &tick_input);
        self.play_cues();

        if self.state.end_reason() == Some(EndReason::Quit) {
            return false;
        }
        self.render(display, text);

        if self.limit_reached() {
            self.state.end(EndReason::TickLimit);
        }
        if !self.state.running() {
            return false;
        }
        self.clock.wait();
        true
    }

    fn limit_reached(&self) -> bool {
        self.max_ticks
            .is_some_and(|limit| self.state.time_ticks >= limit)
    }

    fn play_cues(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::Hit { .. } => self.audio.play(SoundEffect::Punch),
                GameEvent::Miss => self.audio.play(SoundEffect::Whiff),
                GameEvent::Blocked | GameEvent::MatchOver(_) => {}
            }
        }
    }

    fn render(&self, display: &mut dyn DisplaySurface, text: &mut dyn TextRenderer) {
        display.clear(Color::WHITE);
        display.fill(
            Rect::from_top_left(SCORE_ORIGIN, SCORE_REGION_SIZE),
            Color::WHITE,
        );
        let style = TextStyle {
            size: SCORE_FONT_SIZE,
            color: Color::BLACK,
        };
        let label = text.render(&format!("Score {}", self.state.score), style);
        display.blit(&label, SCORE_ORIGIN);

        let actors: [&dyn Actor; 2] = [&self.state.striker, &self.state.ball];
        for actor in actors {
            display.blit(&Visual::Sprite(actor.visual()), actor.bounds().top_left());
        }
        display.present();
    }
}
