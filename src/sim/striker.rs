//! The player's fist

use glam::IVec2;

use super::actor::{Actor, Flow, Frame};
use super::rect::Rect;
use super::sprite::{Sprite, SpriteKind};
use crate::consts::{HITBOX_MARGIN, PUNCH_OFFSET};

/// Result of a punch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchOutcome {
    /// Still punching from an earlier press; nothing happened
    AlreadyPunching,
    /// New punch, hitbox overlaps the target
    Hit,
    /// New punch, nothing under the fist
    Miss,
}

/// Cursor-anchored fist
#[derive(Debug, Clone)]
pub struct Striker {
    rect: Rect,
    sprite: Sprite,
    punching: bool,
}

impl Striker {
    pub fn new(size: IVec2) -> Self {
        Self {
            rect: Rect::from_top_left(IVec2::ZERO, size),
            sprite: Sprite::new(SpriteKind::Fist, size),
            punching: false,
        }
    }

    pub fn is_punching(&self) -> bool {
        self.punching
    }

    /// Collision box: the fist shrunk by `HITBOX_MARGIN` on each side
    pub fn hitbox(&self) -> Rect {
        self.rect.inflate(-2 * HITBOX_MARGIN, -2 * HITBOX_MARGIN)
    }

    /// Start a punch at `target`. A press while already punching is ignored.
    pub fn punch(&mut self, target: &Rect) -> PunchOutcome {
        if self.punching {
            return PunchOutcome::AlreadyPunching;
        }
        self.punching = true;
        if self.hitbox().collides(target) {
            PunchOutcome::Hit
        } else {
            PunchOutcome::Miss
        }
    }

    pub fn unpunch(&mut self) {
        self.punching = false;
    }
}

impl Actor for Striker {
    fn update(&mut self, frame: &Frame) -> Flow {
        self.rect.set_mid_top(frame.cursor);
        if self.punching {
            self.rect.translate(PUNCH_OFFSET);
        }
        Flow::Continue
    }

    fn visual(&self) -> Sprite {
        self.sprite
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_at(x: i32, y: i32) -> Frame {
        Frame {
            cursor: IVec2::new(x, y),
            arena: Rect::new(0, 0, 440, 440),
        }
    }

    #[test]
    fn test_update_anchors_mid_top() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.update(&frame_at(200, 100));
        assert_eq!(fist.bounds().mid_top(), IVec2::new(200, 100));
        assert!(!fist.is_punching());
    }

    #[test]
    fn test_jab_offset_is_not_cumulative() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.update(&frame_at(200, 100));
        fist.punch(&Rect::new(1000, 1000, 10, 10));

        for _ in 0..5 {
            fist.update(&frame_at(200, 100));
            assert_eq!(fist.bounds().mid_top(), IVec2::new(205, 110));
        }

        fist.unpunch();
        fist.update(&frame_at(200, 100));
        assert_eq!(fist.bounds().mid_top(), IVec2::new(200, 100));
    }

    #[test]
    fn test_punch_hit_and_miss() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.update(&frame_at(100, 100));

        let under = Rect::new(90, 120, 20, 20);
        assert_eq!(fist.punch(&under), PunchOutcome::Hit);
        fist.unpunch();

        let far = Rect::new(300, 300, 20, 20);
        assert_eq!(fist.punch(&far), PunchOutcome::Miss);
        assert!(fist.is_punching(), "a miss still starts the punch");
    }

    #[test]
    fn test_hitbox_margin_excludes_edges() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.update(&frame_at(24, 0));
        assert_eq!(fist.bounds(), Rect::new(0, 0, 48, 64));

        // Overlaps the sprite by 4px on the right but not the shrunk hitbox
        let grazing = Rect::new(44, 20, 20, 20);
        assert!(fist.bounds().collides(&grazing));
        assert_eq!(fist.punch(&grazing), PunchOutcome::Miss);
    }

    #[test]
    fn test_second_punch_has_no_effect() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.update(&frame_at(100, 100));
        let target = Rect::new(90, 120, 20, 20);

        assert_eq!(fist.punch(&target), PunchOutcome::Hit);
        let before = fist.clone();
        assert_eq!(fist.punch(&target), PunchOutcome::AlreadyPunching);
        assert_eq!(fist.bounds(), before.bounds());
        assert_eq!(fist.is_punching(), before.is_punching());
    }

    #[test]
    fn test_unpunch_is_idempotent() {
        let mut fist = Striker::new(IVec2::new(48, 64));
        fist.unpunch();
        fist.unpunch();
        assert!(!fist.is_punching());
    }
}
