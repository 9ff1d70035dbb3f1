//! Axis-aligned rectangle primitive
//!
//! Positions are the bottom-left corner in arena coordinates (y up).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collision, resolve};

/// A positioned, colored axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// RGBA
    pub color: [f32; 4],
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            pos,
            width,
            height,
            color,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.half_extents()
    }

    /// Same size and color, different position
    pub fn moved_to(&self, pos: Vec2) -> Self {
        Self { pos, ..*self }
    }

    /// Collision of `moving` against this (static) rectangle
    pub fn collision_with(&self, moving: &Rect) -> Collision {
        resolve(moving, self)
    }

    /// True when the interiors overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.collision_with(other).is_hit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let r = Rect::new(Vec2::new(10.0, 20.0), 100.0, 40.0, [1.0; 4]);
        assert_eq!(r.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(Vec2::ZERO, 10.0, 10.0, [1.0; 4]);
        let b = Rect::new(Vec2::new(5.0, 5.0), 10.0, 10.0, [1.0; 4]);
        let c = Rect::new(Vec2::new(10.0, 0.0), 10.0, 10.0, [1.0; 4]);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge is touching, not overlapping
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_moved_to_keeps_size_and_color() {
        let r = Rect::new(Vec2::ZERO, 3.0, 4.0, [0.1, 0.2, 0.3, 1.0]);
        let m = r.moved_to(Vec2::new(7.0, 8.0));
        assert_eq!(m.pos, Vec2::new(7.0, 8.0));
        assert_eq!(m.size(), r.size());
        assert_eq!(m.color, r.color);
    }
}
