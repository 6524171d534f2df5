//! Axis-aligned rectangles
//!
//! `top` is always the smaller y value, so the same type serves screen space
//! (y down) and world space (y up).

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self::new(pos.x, pos.x + width, pos.y, pos.y + height)
    }

    pub fn from_center(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        )
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Grow every side outward by `offset`
    pub fn expanded(&self, offset: f32) -> Self {
        Self::new(
            self.left - offset,
            self.right + offset,
            self.top - offset,
            self.bottom + offset,
        )
    }

    /// Strict overlap; rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }

    /// True if `other` lies entirely within this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(10.0, 20.0), 5.0, 2.0);
        assert_eq!(r, Rect::new(5.0, 15.0, 18.0, 22.0));
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 4.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let touching = Rect::new(10.0, 20.0, 0.0, 10.0);
        let inside = Rect::new(2.0, 3.0, 2.0, 3.0);
        let far = Rect::new(50.0, 60.0, 50.0, 60.0);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_expanded() {
        let r = Rect::from_pos_size(Vec2::new(100.0, 50.0), 20.0, 10.0).expanded(5.0);
        assert_eq!(r, Rect::new(95.0, 125.0, 45.0, 65.0));
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0.0, 800.0, 0.0, 600.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 800.0, 0.0, 600.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 0.0, 10.0)));
        assert!(outer.contains_point(Vec2::new(400.0, 300.0)));
        assert!(!outer.contains_point(Vec2::new(400.0, 601.0)));
    }
}
