//! Volley Fist - punch the ball, keep it in the air
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, striker, scoring, tick)
//! - `tuning`: Named constant presets for the game variants
//! - `match_loop`: Fixed-rate frame loop over the platform seams
//! - `platform`: Input/display/text/clock seams and headless implementations
//! - `assets`: Asset loading (fatal on failure)
//! - `audio`: Sound cue sinks (real or silent)
//! - `settings`: JSON configuration

pub mod assets;
pub mod audio;
pub mod match_loop;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use match_loop::{MatchLoop, MatchReport};
pub use settings::Settings;
pub use tuning::{Rules, VariantKind};

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Ball spawn point (top-left corner)
    pub const SPAWN_POINT: IVec2 = IVec2::new(10, 10);

    /// Visual jab offset applied to the fist while punching
    pub const PUNCH_OFFSET: IVec2 = IVec2::new(5, 10);
    /// Hitbox shrink on each side of the fist
    pub const HITBOX_MARGIN: i32 = 5;

    /// Extra upward kick added on top of the reflected vertical speed
    pub const HIT_KICK: i32 = 1;

    /// Full turn in degrees
    pub const FULL_TURN: i32 = 360;

    /// Score label placement and the background region cleared under it
    pub const SCORE_ORIGIN: IVec2 = IVec2::new(180, 0);
    pub const SCORE_REGION_SIZE: IVec2 = IVec2::new(80, 40);
    pub const SCORE_FONT_SIZE: u32 = 32;

    /// Built-in sprite sizes (used when no asset directory is given)
    pub const BALL_SPRITE_SIZE: IVec2 = IVec2::new(60, 60);
    pub const FIST_SPRITE_SIZE: IVec2 = IVec2::new(48, 64);
}

/// Simple RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
}
