//! Node positions and mesh extents

use serde::{Serialize, Deserialize};

/// A mesh node position in 2D
///
/// Points are stored in file order; the index of a point in the list is the
/// node index referenced by elements and boundary sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds {
    /// Compute the bounds of a point set
    ///
    /// Returns `None` for an empty set.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Bounds { min: *first, max: *first };
        for p in &points[1..] {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Center of the box
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Width of the box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Largest side of the box
    ///
    /// Used to scale marker radii and line widths with the mesh.
    pub fn extent(&self) -> f64 {
        self.width().max(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty() {
        assert!(Bounds::of(&[]).is_none());
    }

    #[test]
    fn test_bounds_of_single_point() {
        let bounds = Bounds::of(&[Point2::new(2.0, -1.0)]).unwrap();
        assert_eq!(bounds.min, Point2::new(2.0, -1.0));
        assert_eq!(bounds.max, Point2::new(2.0, -1.0));
        assert_eq!(bounds.extent(), 0.0);
    }

    #[test]
    fn test_bounds_of_points() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(-2.0, 3.0),
        ];
        let bounds = Bounds::of(&points).unwrap();
        assert_eq!(bounds.min, Point2::new(-2.0, 0.0));
        assert_eq!(bounds.max, Point2::new(4.0, 3.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 3.0);
        assert_eq!(bounds.extent(), 6.0);
        assert_eq!(bounds.center(), Point2::new(1.0, 1.5));
    }
}
