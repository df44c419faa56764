//! Cell classification against a threshold.
//!
//! A cell is addressed by its `p0` corner `(x, y)` and spans one step in +x
//! and one step in -y:
//!
//! | corner | grid offset  | weight |
//! |--------|--------------|--------|
//! | p0     | (x, y)       | 8      |
//! | p1     | (x+1, y)     | 4      |
//! | p2     | (x+1, y-1)   | 2      |
//! | p3     | (x, y-1)     | 1      |
//!
//! The top row (`y = 0`) and the rightmost column (`x = N-1`) therefore
//! never start a cell.

use elevation::ElevationField;
use serde::{Deserialize, Serialize};

/// Grid offsets of p0..p3 relative to the cell address.
pub const CORNER_OFFSETS: [(i32, i32); 4] = [(0, 0), (1, 0), (1, -1), (0, -1)];

/// Bit contributed by p0..p3 when the corner is at or above the threshold.
pub const CORNER_WEIGHTS: [u8; 4] = [8, 4, 2, 1];

/// 4-bit classification of a cell's corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellCode(u8);

impl CellCode {
    /// Every corner below the threshold.
    pub const EMPTY: CellCode = CellCode(0);
    /// Every corner at or above the threshold.
    pub const FULL: CellCode = CellCode(15);

    pub fn new(bits: u8) -> Option<Self> {
        (bits <= 15).then_some(Self(bits))
    }

    /// All sixteen codes in ascending order.
    pub fn all() -> impl Iterator<Item = CellCode> {
        (0..16u8).map(CellCode)
    }

    /// Classify raw corner values `[p0, p1, p2, p3]`.
    pub fn from_values(corners: &[i32; 4], threshold: f64) -> Self {
        let bits = corners
            .iter()
            .zip(CORNER_WEIGHTS)
            .filter(|(elevation, _)| iso_value(**elevation, threshold) == 1)
            .fold(0u8, |acc, (_, weight)| acc | weight);
        Self(bits)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// The code with every corner flipped (`15 - code`).
    #[inline]
    pub fn complement(self) -> Self {
        Self(15 - self.0)
    }

    /// Codes 5 and 10, where the corners alternate diagonally.
    #[inline]
    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// Whether any contour crosses the cell.
    #[inline]
    pub fn has_contour(self) -> bool {
        self.0 != 0 && self.0 != 15
    }

    /// Whether corner `index` (0 = p0 .. 3 = p3) is at or above the threshold.
    #[inline]
    pub fn corner_above(self, index: usize) -> bool {
        self.0 & CORNER_WEIGHTS[index] != 0
    }
}

impl std::fmt::Display for CellCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// Binary classification of one sample: 1 when `elevation >= round(threshold)`.
///
/// The threshold is rounded half away from zero before comparing.
#[inline]
pub fn iso_value(elevation: i32, threshold: f64) -> u8 {
    if elevation as f64 >= threshold.round() {
        1
    } else {
        0
    }
}

/// Whether `(x, y)` addresses a cell in a field of the given size.
#[inline]
pub fn is_valid_cell(size: usize, x: i32, y: i32) -> bool {
    let n = size as i64;
    let (x, y) = (x as i64, y as i64);
    x >= 0 && x <= n - 2 && y >= 1 && y <= n - 1
}

/// Everything needed to place a cell's segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellValues {
    pub x: i32,
    pub y: i32,
    pub code: CellCode,
    /// Elevations of p0, p1, p2, p3.
    pub corners: [i32; 4],
    pub threshold: f64,
}

impl CellValues {
    /// Classify a free-standing cell that is not backed by a field.
    pub fn from_corners(corners: [i32; 4], threshold: f64) -> Self {
        Self {
            x: 0,
            y: 1,
            code: CellCode::from_values(&corners, threshold),
            corners,
            threshold,
        }
    }
}

fn corner_elevations(field: &ElevationField, x: i32, y: i32) -> Option<[i32; 4]> {
    if !is_valid_cell(field.size(), x, y) {
        return None;
    }
    Some(CORNER_OFFSETS.map(|(dx, dy)| field.elevation(x + dx, y + dy)))
}

/// Fast query: the cell's code only, or `None` outside the valid cell range.
pub fn code_for(field: &ElevationField, x: i32, y: i32, threshold: f64) -> Option<CellCode> {
    corner_elevations(field, x, y).map(|corners| CellCode::from_values(&corners, threshold))
}

/// Full query: code, corner elevations and threshold, or `None` outside the
/// valid cell range.
pub fn value_code_for(field: &ElevationField, x: i32, y: i32, threshold: f64) -> Option<CellValues> {
    corner_elevations(field, x, y).map(|corners| CellValues {
        x,
        y,
        code: CellCode::from_values(&corners, threshold),
        corners,
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_value_rounds_threshold() {
        assert_eq!(iso_value(500, 500.0), 1);
        assert_eq!(iso_value(500, 499.5), 1);
        assert_eq!(iso_value(499, 499.5), 0);
        assert_eq!(iso_value(500, 500.4), 1);
        assert_eq!(iso_value(500, 500.5), 0);
        assert_eq!(iso_value(-3, -2.5), 1);
    }

    #[test]
    fn test_weights_per_corner() {
        let t = 50.0;
        assert_eq!(CellCode::from_values(&[100, 0, 0, 0], t).bits(), 8);
        assert_eq!(CellCode::from_values(&[0, 100, 0, 0], t).bits(), 4);
        assert_eq!(CellCode::from_values(&[0, 0, 100, 0], t).bits(), 2);
        assert_eq!(CellCode::from_values(&[0, 0, 0, 100], t).bits(), 1);
        assert_eq!(CellCode::from_values(&[100; 4], t), CellCode::FULL);
        assert_eq!(CellCode::from_values(&[0; 4], t), CellCode::EMPTY);
    }

    #[test]
    fn test_code_helpers() {
        let code = CellCode::new(5).unwrap();
        assert!(code.is_saddle());
        assert_eq!(code.complement().bits(), 10);
        assert!(code.corner_above(1) && code.corner_above(3));
        assert!(!code.corner_above(0));
        assert!(CellCode::new(16).is_none());
        assert!(!CellCode::FULL.has_contour());
        assert_eq!(code.to_string(), "0101");
        assert_eq!(CellCode::all().count(), 16);
    }

    #[test]
    fn test_valid_cell_range() {
        assert!(is_valid_cell(100, 0, 1));
        assert!(is_valid_cell(100, 98, 99));
        assert!(!is_valid_cell(100, 99, 50));
        assert!(!is_valid_cell(100, 50, 0));
        assert!(!is_valid_cell(100, -1, 5));
        assert!(!is_valid_cell(100, 5, 100));
        assert!(!is_valid_cell(1, 0, 0));
        assert!(!is_valid_cell(0, 0, 1));
    }
}
