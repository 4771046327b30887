//! Integer axis-aligned rectangles
//!
//! Everything in the arena is positioned by a `Rect`: sprites are drawn at
//! `top_left()` and collisions are plain overlap tests.

use glam::IVec2;

/// Axis-aligned rectangle with integer coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` with its top-left corner at `pos`
    pub fn from_top_left(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Middle of the top edge
    pub fn mid_top(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y)
    }

    /// Move so the middle of the top edge sits on `anchor`
    pub fn set_mid_top(&mut self, anchor: IVec2) {
        self.x = anchor.x - self.w / 2;
        self.y = anchor.y;
    }

    /// Move in place by `offset`
    pub fn translate(&mut self, offset: IVec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Copy grown (or shrunk, for negative values) around the same center
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self::new(
            self.x - dw / 2,
            self.y - dh / 2,
            (self.w + dw).max(0),
            (self.h + dh).max(0),
        )
    }

    /// Overlap test. Touching edges do not collide and empty rects never do.
    pub fn collides(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_round_trips_through_from_center() {
        for (w, h) in [(60, 60), (61, 59), (1, 2), (84, 85)] {
            let center = IVec2::new(123, 77);
            let rect = Rect::from_center(center, IVec2::new(w, h));
            assert_eq!(rect.center(), center, "size {w}x{h}");
        }
    }

    #[test]
    fn test_mid_top_anchor() {
        let mut rect = Rect::new(0, 0, 48, 64);
        rect.set_mid_top(IVec2::new(100, 50));
        assert_eq!(rect.mid_top(), IVec2::new(100, 50));
        assert_eq!(rect.left(), 76);
        assert_eq!(rect.top(), 50);
    }

    #[test]
    fn test_inflate_keeps_center() {
        let rect = Rect::new(10, 10, 48, 64);
        let hitbox = rect.inflate(-10, -10);
        assert_eq!(hitbox, Rect::new(15, 15, 38, 54));
        assert_eq!(hitbox.center(), rect.center());
    }

    #[test]
    fn test_collides() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.collides(&Rect::new(5, 5, 10, 10)));
        // Touching edges only
        assert!(!a.collides(&Rect::new(10, 0, 10, 10)));
        assert!(!a.collides(&Rect::new(0, 10, 10, 10)));
        // Fully inside
        assert!(a.collides(&Rect::new(2, 2, 2, 2)));
        // Empty
        assert!(!a.collides(&Rect::new(2, 2, 0, 0)));
    }
}
