//! Axis-aligned rectangle collision
//!
//! Entity hitboxes are rectangles centered on the entity position, sized
//! per sprite. The same rectangle type backs menu button hit-testing.

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Rectangle from its top-left corner (used by the menu layout)
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True iff the rectangles overlap with non-zero area. Touching edges
    /// do not count as a collision.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Point containment, half-open: min edges inclusive, max edges
    /// exclusive.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Aabb::centered(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
        let b = Aabb::centered(Vec2::new(120.0, 110.0), Vec2::new(40.0, 40.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_rects_miss() {
        let a = Aabb::centered(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
        let b = Aabb::centered(Vec2::new(200.0, 100.0), Vec2::new(40.0, 40.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_edge_contact_is_not_a_collision() {
        // Right edge of a exactly touches left edge of b: zero-area overlap.
        let a = Aabb::centered(Vec2::new(100.0, 100.0), Vec2::new(40.0, 40.0));
        let b = Aabb::centered(Vec2::new(140.0, 100.0), Vec2::new(40.0, 40.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Aabb::centered(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));
        let inner = Aabb::centered(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_contains_point_half_open() {
        let rect = Aabb::from_corner(Vec2::new(300.0, 200.0), Vec2::new(200.0, 50.0));
        assert!(rect.contains_point(Vec2::new(300.0, 200.0))); // min corner in
        assert!(rect.contains_point(Vec2::new(400.0, 225.0)));
        assert!(!rect.contains_point(Vec2::new(500.0, 225.0))); // max edge out
        assert!(!rect.contains_point(Vec2::new(400.0, 250.0)));
        assert!(!rect.contains_point(Vec2::new(299.9, 225.0)));
    }

    #[test]
    fn test_centered_geometry() {
        let rect = Aabb::centered(Vec2::new(400.0, 500.0), Vec2::new(48.0, 64.0));
        assert_eq!(rect.min, Vec2::new(376.0, 468.0));
        assert_eq!(rect.max, Vec2::new(424.0, 532.0));
        assert_eq!(rect.center(), Vec2::new(400.0, 500.0));
    }
}
