//! Contour extraction over whole fields.
//!
//! [`ContourExtractor`] borrows a field and walks every valid cell for each
//! requested threshold. Results can be pulled lazily with
//! [`ContourExtractor::cells`] or collected into a [`ContourSet`] that a
//! renderer can keep and redraw without recomputing.

use elevation::ElevationField;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cases::edge_pairs;
use crate::classify::{self, CellCode, CellValues};
use crate::geometry::Segment;
use crate::interpolate::{resolve_edge_points, PositionMode};

/// Segments for one classified cell, in emission order.
///
/// Edge pairs whose points cannot be resolved (a degenerate edge) are
/// dropped rather than emitted with non-finite coordinates.
pub fn cell_segments(values: &CellValues, mode: PositionMode) -> Vec<Segment> {
    let pairs = edge_pairs(values.code);
    if pairs.is_empty() {
        return Vec::new();
    }

    let points = resolve_edge_points(values, mode);
    pairs
        .iter()
        .filter_map(|&(from, to)| match (points.get(from), points.get(to)) {
            (Some(start), Some(end)) => Some(Segment::new(start, end)),
            _ => {
                trace!(x = values.x, y = values.y, code = values.code.bits(), "Dropping segment");
                None
            }
        })
        .collect()
}

/// The contour pieces crossing one cell at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellContour {
    pub x: i32,
    pub y: i32,
    pub threshold: f64,
    pub code: CellCode,
    /// Zero, one or two segments in the cell's unit-square frame.
    pub segments: Vec<Segment>,
}

impl CellContour {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments mapped onto a grid-wide raster frame for a field of `size`.
    ///
    /// Cell `(x, y)` occupies `[x, x+1] × [N-1-y, N-y]`, so larger grid `y`
    /// lands higher up and the frame's y axis grows downward like the local
    /// one.
    pub fn raster_segments(&self, size: usize) -> impl Iterator<Item = Segment> + '_ {
        let dx = self.x as f64;
        let dy = (size as f64 - 1.0) - self.y as f64;
        self.segments.iter().map(move |s| s.offset(dx, dy))
    }
}

/// Inclusive rectangle of cell addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl CellRange {
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Every valid cell of a field of `size`, or `None` below 2×2.
    pub fn all(size: usize) -> Option<Self> {
        if size < 2 {
            return None;
        }
        let n = size as i32;
        Some(Self::new(0, n - 2, 1, n - 1))
    }

    /// Intersection with the valid cell range of a field of `size`.
    pub fn clamp_to(&self, size: usize) -> Option<Self> {
        let valid = Self::all(size)?;
        let clamped = Self::new(
            self.x_min.max(valid.x_min),
            self.x_max.min(valid.x_max),
            self.y_min.max(valid.y_min),
            self.y_max.min(valid.y_max),
        );
        (clamped.x_min <= clamped.x_max && clamped.y_min <= clamped.y_max).then_some(clamped)
    }

    pub fn cell_count(&self) -> usize {
        let w = (self.x_max as i64 - self.x_min as i64 + 1).max(0) as usize;
        let h = (self.y_max as i64 - self.y_min as i64 + 1).max(0) as usize;
        w.saturating_mul(h)
    }

    /// Cell addresses in row-major order (ascending y, then x).
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> {
        let Self {
            x_min,
            x_max,
            y_min,
            y_max,
        } = *self;
        (y_min..=y_max).flat_map(move |y| (x_min..=x_max).map(move |x| (x, y)))
    }
}

/// All non-empty cells for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelContours {
    pub threshold: f64,
    pub cells: Vec<CellContour>,
}

impl LevelContours {
    pub fn segment_count(&self) -> usize {
        self.cells.iter().map(|c| c.segments.len()).sum()
    }

    /// Segments of every cell in the raster frame of a field of `size`.
    pub fn raster_segments(&self, size: usize) -> Vec<Segment> {
        self.cells.iter().flat_map(|c| c.raster_segments(size)).collect()
    }
}

/// Output of one extraction pass.
///
/// Cells without segments are not stored; a lookup for them yields nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourSet {
    pub size: usize,
    pub mode: PositionMode,
    pub levels: Vec<LevelContours>,
}

impl ContourSet {
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|l| l.cells.is_empty())
    }

    pub fn segment_count(&self) -> usize {
        self.levels.iter().map(LevelContours::segment_count).sum()
    }

    pub fn cell_count(&self) -> usize {
        self.levels.iter().map(|l| l.cells.len()).sum()
    }

    /// Contours of the level extracted at exactly `threshold`.
    pub fn level(&self, threshold: f64) -> Option<&LevelContours> {
        self.levels.iter().find(|l| l.threshold == threshold)
    }

    /// Segments of cell `(x, y)` at `threshold`; empty when none.
    pub fn segments_at(&self, x: i32, y: i32, threshold: f64) -> &[Segment] {
        self.level(threshold)
            .and_then(|l| l.cells.iter().find(|c| c.x == x && c.y == y))
            .map(|c| c.segments.as_slice())
            .unwrap_or(&[])
    }

    /// Every `(threshold, cell, segment)` in extraction order.
    pub fn iter_segments(&self) -> impl Iterator<Item = (f64, &CellContour, &Segment)> + '_ {
        self.levels.iter().flat_map(|level| {
            level
                .cells
                .iter()
                .flat_map(move |cell| cell.segments.iter().map(move |s| (level.threshold, cell, s)))
        })
    }
}

/// Walks a borrowed field and produces contour segments.
#[derive(Debug, Clone, Copy)]
pub struct ContourExtractor<'a> {
    field: &'a ElevationField,
    mode: PositionMode,
}

impl<'a> ContourExtractor<'a> {
    /// Extractor using interpolated edge points.
    pub fn new(field: &'a ElevationField) -> Self {
        Self {
            field,
            mode: PositionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PositionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn field(&self) -> &'a ElevationField {
        self.field
    }

    pub fn mode(&self) -> PositionMode {
        self.mode
    }

    /// Code only; see [`classify::code_for`].
    pub fn code_for(&self, x: i32, y: i32, threshold: f64) -> Option<CellCode> {
        classify::code_for(self.field, x, y, threshold)
    }

    /// Code with corner values; see [`classify::value_code_for`].
    pub fn value_code_for(&self, x: i32, y: i32, threshold: f64) -> Option<CellValues> {
        classify::value_code_for(self.field, x, y, threshold)
    }

    /// Segments for one cell, or `None` outside the valid cell range.
    pub fn cell(&self, x: i32, y: i32, threshold: f64) -> Option<CellContour> {
        let values = self.value_code_for(x, y, threshold)?;
        Some(CellContour {
            x,
            y,
            threshold,
            code: values.code,
            segments: cell_segments(&values, self.mode),
        })
    }

    /// Lazily visit every valid cell at `threshold`, empty cells included.
    pub fn cells(&self, threshold: f64) -> impl Iterator<Item = CellContour> + 'a {
        let range = CellRange::all(self.field.size());
        self.cells_in(threshold, range)
    }

    fn cells_in(&self, threshold: f64, range: Option<CellRange>) -> impl Iterator<Item = CellContour> + 'a {
        let extractor = *self;
        range
            .into_iter()
            .flat_map(|r| r.iter())
            .filter_map(move |(x, y)| extractor.cell(x, y, threshold))
    }

    /// Extract every threshold over the whole field.
    pub fn extract(&self, thresholds: &[f64]) -> ContourSet {
        self.extract_in(thresholds, CellRange::all(self.field.size()))
    }

    /// Extract every threshold over part of the field.
    ///
    /// The range is clamped to the valid cells; a range that misses them
    /// entirely yields empty levels.
    pub fn extract_range(&self, thresholds: &[f64], range: CellRange) -> ContourSet {
        self.extract_in(thresholds, range.clamp_to(self.field.size()))
    }

    fn extract_in(&self, thresholds: &[f64], range: Option<CellRange>) -> ContourSet {
        let levels: Vec<LevelContours> = thresholds
            .iter()
            .map(|&threshold| LevelContours {
                threshold,
                cells: self.cells_in(threshold, range).filter(|c| !c.is_empty()).collect(),
            })
            .collect();

        self.finish(levels)
    }

    /// Same result as [`extract`](Self::extract), computed in parallel
    /// across thresholds and rows.
    pub fn par_extract(&self, thresholds: &[f64]) -> ContourSet {
        let range = CellRange::all(self.field.size());
        let levels: Vec<LevelContours> = thresholds
            .par_iter()
            .map(|&threshold| {
                let cells = match range {
                    Some(r) => (r.y_min..=r.y_max)
                        .into_par_iter()
                        .flat_map_iter(|y| {
                            (r.x_min..=r.x_max)
                                .filter_map(move |x| self.cell(x, y, threshold))
                                .filter(|c| !c.is_empty())
                        })
                        .collect(),
                    None => Vec::new(),
                };
                LevelContours { threshold, cells }
            })
            .collect();

        self.finish(levels)
    }

    fn finish(&self, levels: Vec<LevelContours>) -> ContourSet {
        let set = ContourSet {
            size: self.field.size(),
            mode: self.mode,
            levels,
        };

        debug!(
            size = set.size,
            mode = set.mode.as_str(),
            num_levels = set.levels.len(),
            num_cells = set.cell_count(),
            num_segments = set.segment_count(),
            "Extracted contours"
        );

        set
    }
}
