//! Variant presets
//!
//! The game ships in four flavours that differ in how the ball moves, whether
//! a hit needs a bounce before the next one scores, and how fast the ball
//! spins. Each flavour is a fixed set of named constants; nothing here is
//! tuned at runtime.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::HIT_KICK;

/// Selectable game variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Diagonal flight, one score per bounce, fast spin
    #[default]
    Volley,
    /// Volley with a stricter loss edge
    Rally,
    /// Diagonal flight without cooldown: every landed punch scores
    Juggle,
    /// Horizontal walk, slow spin, no way to lose, whiff on a miss
    Walk,
}

impl VariantKind {
    pub const ALL: [VariantKind; 4] = [
        VariantKind::Volley,
        VariantKind::Rally,
        VariantKind::Juggle,
        VariantKind::Walk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Volley => "volley",
            VariantKind::Rally => "rally",
            VariantKind::Juggle => "juggle",
            VariantKind::Walk => "walk",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "volley" => Some(VariantKind::Volley),
            "rally" => Some(VariantKind::Rally),
            "juggle" => Some(VariantKind::Juggle),
            "walk" | "chimp" => Some(VariantKind::Walk),
            _ => None,
        }
    }

    pub fn rules(&self) -> Rules {
        match self {
            VariantKind::Volley => Rules::VOLLEY,
            VariantKind::Rally => Rules::RALLY,
            VariantKind::Juggle => Rules::JUGGLE,
            VariantKind::Walk => Rules::WALK,
        }
    }
}

/// Initial motion of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Free 2D flight with the given per-tick velocity
    Fall(IVec2),
    /// Horizontal walk at the given per-tick speed
    Walk(i32),
}

/// Which edge of the ball ends the match when it passes the arena floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossEdge {
    /// Lost once the ball has fully dropped out (top below the floor)
    Top,
    /// Lost as soon as the ball dips below the floor
    Bottom,
}

/// Fixed rules of one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Arena size, anchored at the origin
    pub arena: IVec2,
    pub launch: Launch,
    /// A scoring hit disables further hits until the next wall/ceiling bounce
    pub cooldown: bool,
    /// Degrees added per spinning tick
    pub spin_step: i32,
    /// Angle set when a spin begins; below `spin_step` means the first step
    /// lands on the next tick
    pub spin_start: i32,
    /// Keep moving while spinning instead of freezing in place
    pub move_while_spinning: bool,
    /// Extra upward speed added by a hit (fall motion only)
    pub kick: i32,
    pub loss_edge: Option<LossEdge>,
    /// Play a cue when a punch misses
    pub miss_cue: bool,
}

impl Rules {
    pub const VOLLEY: Rules = Rules {
        arena: IVec2::new(440, 440),
        launch: Launch::Fall(IVec2::new(1, 1)),
        cooldown: true,
        spin_step: 72,
        spin_start: 1,
        move_while_spinning: false,
        kick: HIT_KICK,
        loss_edge: Some(LossEdge::Top),
        miss_cue: false,
    };

    pub const RALLY: Rules = Rules {
        loss_edge: Some(LossEdge::Bottom),
        ..Rules::VOLLEY
    };

    pub const JUGGLE: Rules = Rules {
        cooldown: false,
        spin_start: 72,
        ..Rules::VOLLEY
    };

    pub const WALK: Rules = Rules {
        arena: IVec2::new(820, 440),
        launch: Launch::Walk(9),
        cooldown: false,
        spin_step: 12,
        spin_start: 12,
        move_while_spinning: true,
        kick: 0,
        loss_edge: None,
        miss_cue: true,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Rules::VOLLEY
    }
}
