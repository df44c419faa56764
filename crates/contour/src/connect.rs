//! Joining per-cell segments into polylines.
//!
//! Neighbouring cells compute the point on a shared edge from opposite ends,
//! so endpoints are matched within a small tolerance rather than exactly.

use serde::{Deserialize, Serialize};

use crate::extract::LevelContours;
use crate::geometry::{Point, Segment};

/// Tolerance for point matching, in grid units.
pub const CONNECT_EPSILON: f64 = 1e-6;

/// A complete contour line (polyline)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub threshold: f64,
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// Connect line segments into continuous polylines
///
/// Takes a collection of unordered segments and grows each chain from both
/// ends until no unused segment touches it.
pub fn connect_segments(segments: &[Segment], threshold: f64) -> Vec<Polyline> {
    let mut polylines = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let mut points = vec![segments[start_idx].start, segments[start_idx].end];
        extend_chain(&mut points, segments, &mut used);
        points.reverse();
        extend_chain(&mut points, segments, &mut used);

        let closed = points.len() > 2 && points[0].distance(&points[points.len() - 1]) < CONNECT_EPSILON;
        if closed {
            // Drop the duplicated closing point; `closed` carries it.
            points.pop();
        }

        polylines.push(Polyline {
            threshold,
            points,
            closed,
        });
    }

    polylines
}

/// Append segments touching the chain's last point until none remain.
fn extend_chain(points: &mut Vec<Point>, segments: &[Segment], used: &mut [bool]) {
    loop {
        let Some(&current_end) = points.last() else {
            return;
        };

        let next = segments.iter().enumerate().find_map(|(i, seg)| {
            if used[i] {
                None
            } else if seg.start.distance(&current_end) < CONNECT_EPSILON {
                Some((i, seg.end))
            } else if seg.end.distance(&current_end) < CONNECT_EPSILON {
                Some((i, seg.start))
            } else {
                None
            }
        });

        match next {
            Some((i, point)) => {
                used[i] = true;
                points.push(point);
            }
            None => return,
        }
    }
}

/// Polylines for one extracted level of a field of `size`.
pub fn connect_level(level: &LevelContours, size: usize) -> Vec<Polyline> {
    connect_segments(&level.raster_segments(size), level.threshold)
}
