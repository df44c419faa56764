//! Points and line segments.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
///
/// Inside a cell this is the local unit-square frame: `(0, 0)` is corner
/// `p0`, x grows towards `p1` and y grows towards `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Same endpoints within `epsilon`, in either direction.
    pub fn same_geometry(&self, other: &Segment, epsilon: f64) -> bool {
        let forward = self.start.distance(&other.start) < epsilon && self.end.distance(&other.end) < epsilon;
        let backward = self.start.distance(&other.end) < epsilon && self.end.distance(&other.start) < epsilon;
        forward || backward
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.start.offset(dx, dy), self.end.offset(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_geometry_ignores_direction() {
        let a = Segment::new(Point::new(0.0, 0.5), Point::new(0.5, 1.0));
        assert!(a.same_geometry(&a.reversed(), 1e-9));
        let b = Segment::new(Point::new(0.0, 0.5), Point::new(0.5, 0.0));
        assert!(!a.same_geometry(&b, 1e-9));
    }

    #[test]
    fn test_length() {
        let s = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((s.length() - 5.0).abs() < 1e-12);
    }
}
