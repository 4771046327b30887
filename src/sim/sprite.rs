//! Logical sprite descriptors
//!
//! The simulation never touches pixels. A `Sprite` records which image is
//! shown and how it is transformed; the display backend turns that into
//! actual drawing.

use glam::IVec2;

/// Which source image a sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Fist,
    Ball,
}

/// An image plus its flip/rotation transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Unrotated image size
    pub size: IVec2,
    /// Mirrored horizontally
    pub flipped: bool,
    /// Counter-clockwise rotation in degrees
    pub angle: i32,
}

impl Sprite {
    pub fn new(kind: SpriteKind, size: IVec2) -> Self {
        Self {
            kind,
            size,
            flipped: false,
            angle: 0,
        }
    }

    /// Mirror horizontally
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Copy of this sprite turned by `degrees`
    pub fn rotated(&self, degrees: i32) -> Self {
        Self {
            angle: degrees,
            ..*self
        }
    }

    /// Size of the axis-aligned box that holds the transformed image
    pub fn extent(&self) -> IVec2 {
        if self.angle == 0 {
            self.size
        } else {
            rotated_extent(self.size, self.angle)
        }
    }
}

/// Axis-aligned bounding box size of a `size` rectangle turned by `degrees`
/// (counter-clockwise)
pub fn rotated_extent(size: IVec2, degrees: i32) -> IVec2 {
    let theta = (degrees as f64).to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let w = size.x as f64;
    let h = size.y as f64;
    IVec2::new(
        (w * cos + h * sin).round() as i32,
        (w * sin + h * cos).round() as i32,
    )
}
