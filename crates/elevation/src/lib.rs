//! Elevation samples on a regular integer grid.
//!
//! - [`field::ElevationField`]: the validated, read-only N×N grid
//! - [`loader`]: parsing of whitespace-delimited `x y lat lon elevation` records
//! - [`range::ElevationRange`]: normalization of raw elevations for color ramps

pub mod field;
pub mod loader;
pub mod range;

pub use field::ElevationField;
pub use isoline_common::{IsolineError, IsolineResult, Sample};
pub use loader::{field_from_reader, load_field, parse_record, read_samples, LoadStats, LoaderConfig};
pub use range::ElevationRange;
