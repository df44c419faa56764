//! Edge crossing positions.
//!
//! For an edge running from corner `first` to corner `second`:
//!
//! ```text
//! mu    = (threshold - value_first) / (value_second - value_first)
//! point = first + mu * (second - first)
//! ```
//!
//! `mu` is not clamped. An edge whose two values are equal has no crossing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cases::{Edge, UNIT_CORNERS};
use crate::classify::CellValues;
use crate::geometry::Point;

/// How edge points are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Fixed midpoint of every edge.
    Midpoint,
    /// Linear interpolation of the threshold crossing.
    #[default]
    Interpolated,
}

impl PositionMode {
    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "midpoint" | "mid" | "plain" => Some(Self::Midpoint),
            "interpolated" | "interp" | "linear" => Some(Self::Interpolated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::Interpolated => "interpolated",
        }
    }
}

/// Fraction along an edge where `threshold` is crossed, or `None` when the
/// two values are equal.
#[inline]
pub fn mu(first_value: f64, second_value: f64, threshold: f64) -> Option<f64> {
    let denom = second_value - first_value;
    if denom == 0.0 {
        return None;
    }
    Some((threshold - first_value) / denom)
}

/// Interpolate a single coordinate between `first` and `second`.
#[inline]
pub fn interpolate(first: f64, second: f64, first_value: f64, second_value: f64, threshold: f64) -> Option<f64> {
    mu(first_value, second_value, threshold).map(|mu| first + mu * (second - first))
}

/// Resolved position of each edge's point; `None` means no crossing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgePoints {
    pub top: Option<Point>,
    pub right: Option<Point>,
    pub bottom: Option<Point>,
    pub left: Option<Point>,
}

impl EdgePoints {
    #[inline]
    pub fn get(&self, edge: Edge) -> Option<Point> {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    fn set(&mut self, edge: Edge, point: Option<Point>) {
        match edge {
            Edge::Top => self.top = point,
            Edge::Right => self.right = point,
            Edge::Bottom => self.bottom = point,
            Edge::Left => self.left = point,
        }
    }
}

/// Crossing point on one edge for arbitrary corner positions.
pub fn edge_crossing(positions: &[Point; 4], values: &[f64; 4], threshold: f64, edge: Edge) -> Option<Point> {
    let (i, j) = edge.corners();
    let (first, second) = (positions[i], positions[j]);
    let mu = mu(values[i], values[j], threshold)?;
    Some(Point::new(
        first.x + mu * (second.x - first.x),
        first.y + mu * (second.y - first.y),
    ))
}

/// Crossing points on all four edges for arbitrary corner positions.
pub fn interpolate_edges(positions: &[Point; 4], values: &[f64; 4], threshold: f64) -> EdgePoints {
    let mut points = EdgePoints::default();
    for edge in Edge::ALL {
        points.set(edge, edge_crossing(positions, values, threshold, edge));
    }
    points
}

/// Midpoint of an edge of the unit square.
#[inline]
pub fn edge_midpoint(edge: Edge) -> Point {
    let (i, j) = edge.corners();
    let (a, b) = (UNIT_CORNERS[i], UNIT_CORNERS[j]);
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Resolve one edge of a classified cell in the unit-square frame.
pub fn edge_point(values: &CellValues, edge: Edge, mode: PositionMode) -> Option<Point> {
    match mode {
        PositionMode::Midpoint => Some(edge_midpoint(edge)),
        PositionMode::Interpolated => {
            let corners = values.corners.map(f64::from);
            let point = edge_crossing(&UNIT_CORNERS, &corners, values.threshold, edge);
            if point.is_none() {
                trace!(
                    x = values.x,
                    y = values.y,
                    edge = %edge.label(),
                    "Degenerate edge, no crossing"
                );
            }
            point
        }
    }
}

/// Resolve all four edges of a classified cell in the unit-square frame.
pub fn resolve_edge_points(values: &CellValues, mode: PositionMode) -> EdgePoints {
    let mut points = EdgePoints::default();
    for edge in Edge::ALL {
        points.set(edge, edge_point(values, edge, mode));
    }
    points
}
