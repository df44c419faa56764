//! Marching squares case table.
//!
//! Edge points are labelled `a` (top), `b` (right), `c` (bottom) and
//! `d` (left). Each code maps to the pairs of edges its segments connect.
//! Saddle codes 5 and 10 always take the two-segment reading listed here;
//! no center sample is consulted.

use serde::{Deserialize, Serialize};

use crate::classify::CellCode;
use crate::geometry::Point;

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// `a`: p0 -> p1
    Top,
    /// `b`: p1 -> p2
    Right,
    /// `c`: p2 -> p3
    Bottom,
    /// `d`: p3 -> p0
    Left,
}

/// Local-frame positions of p0..p3 in the unit square.
pub const UNIT_CORNERS: [Point; 4] = [
    Point { x: 0.0, y: 0.0 },
    Point { x: 1.0, y: 0.0 },
    Point { x: 1.0, y: 1.0 },
    Point { x: 0.0, y: 1.0 },
];

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Corner indices `(first, second)` in traversal order.
    ///
    /// The direction is fixed per edge; interpolation always runs from
    /// `first` to `second`.
    #[inline]
    pub fn corners(self) -> (usize, usize) {
        match self {
            Edge::Top => (0, 1),
            Edge::Right => (1, 2),
            Edge::Bottom => (2, 3),
            Edge::Left => (3, 0),
        }
    }

    /// Single-letter label.
    pub fn label(self) -> char {
        match self {
            Edge::Top => 'a',
            Edge::Right => 'b',
            Edge::Bottom => 'c',
            Edge::Left => 'd',
        }
    }
}

use Edge::{Bottom as C, Left as D, Right as B, Top as A};

static CASE_TABLE: [&[(Edge, Edge)]; 16] = [
    &[],               // 0
    &[(D, C)],         // 1
    &[(B, C)],         // 2
    &[(D, B)],         // 3
    &[(A, B)],         // 4
    &[(A, D), (B, C)], // 5 saddle
    &[(A, C)],         // 6
    &[(A, D)],         // 7
    &[(A, D)],         // 8
    &[(A, C)],         // 9
    &[(A, B), (D, C)], // 10 saddle
    &[(A, B)],         // 11
    &[(D, B)],         // 12
    &[(C, B)],         // 13
    &[(D, C)],         // 14
    &[],               // 15
];

/// Edge pairs connected by the segments of `code`, in emission order.
#[inline]
pub fn edge_pairs(code: CellCode) -> &'static [(Edge, Edge)] {
    CASE_TABLE[code.bits() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: u8) -> CellCode {
        CellCode::new(bits).unwrap()
    }

    #[test]
    fn test_empty_cases() {
        assert!(edge_pairs(CellCode::EMPTY).is_empty());
        assert!(edge_pairs(CellCode::FULL).is_empty());
    }

    #[test]
    fn test_saddles_have_two_segments() {
        assert_eq!(edge_pairs(code(5)), &[(A, D), (B, C)]);
        assert_eq!(edge_pairs(code(10)), &[(A, B), (D, C)]);
    }

    #[test]
    fn test_every_contour_case_nonempty() {
        for c in CellCode::all() {
            assert_eq!(edge_pairs(c).is_empty(), !c.has_contour(), "code {}", c.bits());
        }
    }

    #[test]
    fn test_edges_separate_differing_corners() {
        // Every referenced edge must join one corner above and one below.
        for c in CellCode::all() {
            for &(e1, e2) in edge_pairs(c) {
                for edge in [e1, e2] {
                    let (first, second) = edge.corners();
                    assert_ne!(
                        c.corner_above(first),
                        c.corner_above(second),
                        "code {} edge {}",
                        c.bits(),
                        edge.label()
                    );
                }
            }
        }
    }

    #[test]
    fn test_edge_traversal_directions() {
        assert_eq!(Edge::Top.corners(), (0, 1));
        assert_eq!(Edge::Right.corners(), (1, 2));
        assert_eq!(Edge::Bottom.corners(), (2, 3));
        assert_eq!(Edge::Left.corners(), (3, 0));
    }
}
