//! Axis-aligned bounding boxes for broad-phase culling.
//!
//! The overlap predicate is the only geometric test this core performs:
//! the external broad-phase collaborator builds boxes from mesh vertices,
//! rejects non-overlapping pairs, and hands the survivors to the narrow
//! phase. Overlap uses closed-interval semantics: boxes that only touch at
//! a boundary count as overlapping, so a resting contact is never culled.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// The empty box is a sentinel (`min = +inf`, `max = -inf`) distinguishable
/// from every real box; it overlaps nothing and is the identity for
/// [`Aabb::merged`]. Non-empty boxes satisfy `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    /// Create a box from its corners.
    #[must_use]
    pub const fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// The empty box sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create a box centred at a point with the given half-extents.
    #[must_use]
    pub fn from_centre(centre: Point3<f64>, half_extents: Vector3<f64>) -> Self {
        Self {
            min: centre - half_extents,
            max: centre + half_extents,
        }
    }

    /// Tightest box enclosing a set of points. Empty input gives the empty
    /// sentinel.
    #[must_use]
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.min.x = aabb.min.x.min(p.x);
            aabb.min.y = aabb.min.y.min(p.y);
            aabb.min.z = aabb.min.z.min(p.z);
            aabb.max.x = aabb.max.x.max(p.x);
            aabb.max.y = aabb.max.y.max(p.y);
            aabb.max.z = aabb.max.z.max(p.z);
        }
        aabb
    }

    /// Whether this is the empty sentinel (or otherwise inverted).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Closed-interval overlap test.
    ///
    /// True iff the boxes' extents overlap on all three axes; two boxes
    /// sharing only a boundary face, edge, or corner are considered
    /// overlapping. The empty box overlaps nothing.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Smallest box containing both operands.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Expand by a margin on all sides.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: Point3::new(
                self.min.x - margin,
                self.min.y - margin,
                self.min.z - margin,
            ),
            max: Point3::new(
                self.max.x + margin,
                self.max.y + margin,
                self.max.z + margin,
            ),
        }
    }

    /// Size along each axis. Meaningless for the empty sentinel.
    #[must_use]
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn unit_box_at(x: f64, y: f64, z: f64) -> Aabb {
        Aabb::new(Point3::new(x, y, z), Point3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = Aabb::new(Point3::new(0.5, 0.5, 0.5), Point3::new(1.5, 1.5, 1.5));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a), "overlap is symmetric");
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = Aabb::new(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_boundary_touch_counts_as_overlap() {
        // Boxes sharing only the x = 1 face
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(1.0, 0.0, 0.0);
        assert!(a.overlaps(&b));

        // Sharing only a corner
        let c = unit_box_at(1.0, 1.0, 1.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // Overlapping on x and y but not z
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(0.5, 0.5, 5.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_empty_sentinel() {
        let empty = Aabb::empty();
        assert!(empty.is_empty());
        assert!(!unit_box_at(0.0, 0.0, 0.0).is_empty());

        // Overlaps nothing, including itself
        assert!(!empty.overlaps(&unit_box_at(0.0, 0.0, 0.0)));
        assert!(!empty.overlaps(&empty));

        // Identity for merge
        let a = unit_box_at(2.0, 0.0, 0.0);
        assert_eq!(empty.merged(&a), a);
    }

    #[test]
    fn test_of_points() {
        let points = [
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 3.0, 0.5),
            Point3::new(0.0, 0.0, -4.0),
        ];
        let aabb = Aabb::of_points(&points);

        assert_eq!(aabb.min, Point3::new(-2.0, -1.0, -4.0));
        assert_eq!(aabb.max, Point3::new(1.0, 3.0, 0.5));

        assert!(Aabb::of_points(&[] as &[Point3<f64>]).is_empty());
    }

    #[test]
    fn test_from_centre_and_expanded() {
        let aabb = Aabb::from_centre(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
        let expanded = aabb.expanded(0.5);
        assert_eq!(expanded.min.x, -1.5);
        assert_eq!(expanded.max.x, 1.5);
        assert_eq!(expanded.extents(), Vector3::new(3.0, 3.0, 3.0));
    }
}
