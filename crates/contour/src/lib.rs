//! Contour line (isoline) extraction using marching squares.
//!
//! The pipeline for one threshold and one cell is:
//!
//! 1. [`classify`]: fetch the four corner samples and fold them into a
//!    4-bit [`CellCode`]
//! 2. [`cases`]: look up which pairs of cell edges the code connects
//! 3. [`interpolate`]: resolve each needed edge to a point, either the edge
//!    midpoint or the linearly interpolated crossing
//! 4. [`extract`]: emit zero, one or two [`Segment`]s in the cell's local
//!    unit-square frame
//!
//! [`levels`] builds threshold sets and [`connect`] joins the per-cell
//! segments of a level into polylines for drawing.

pub mod cases;
pub mod classify;
pub mod connect;
pub mod extract;
pub mod geometry;
pub mod interpolate;
pub mod levels;

pub use cases::{edge_pairs, Edge};
pub use classify::{code_for, iso_value, is_valid_cell, value_code_for, CellCode, CellValues};
pub use connect::{connect_level, connect_segments, Polyline};
pub use extract::{CellContour, CellRange, ContourExtractor, ContourSet, LevelContours};
pub use geometry::{Point, Segment};
pub use interpolate::{interpolate, EdgePoints, PositionMode};
pub use levels::{generate_contour_levels, LevelSchedule};
