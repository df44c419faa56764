//! Test support for the isolines workspace.
//!
//! - [`generators`]: synthetic elevation grids (ramps, cones, single cells)
//! - [`fixtures`]: block-file text and threshold sets
//! - [`paths`]: locating the optional `data100.block` and writing temp blocks
//! - geometry assertions for contour points and segments
//!
//! Used as a dev-dependency only:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Return early from a test when a data file is not available locally.
///
/// Evaluates to the file's `PathBuf` when found via [`find_test_file`].
///
/// ```ignore
/// let path = require_test_file!(REFERENCE_BLOCK);
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        let name = $name;
        let Some(path) = $crate::find_test_file(name) else {
            eprintln!("SKIPPED: '{}' not found (set {})", name, $crate::TEST_DATA_ENV);
            return;
        };
        path
    }};
}

/// Whether two coordinates agree within `tolerance` on both axes.
pub fn xy_close(actual: (f64, f64), expected: (f64, f64), tolerance: f64) -> bool {
    (actual.0 - expected.0).abs() <= tolerance && (actual.1 - expected.1).abs() <= tolerance
}

/// Assert that a point (anything with `x` and `y` fields) lies at `(x, y)`.
///
/// ```ignore
/// assert_point_approx_eq!(segment.start, (0.5, 0.0), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_point_approx_eq {
    ($point:expr, ($x:expr, $y:expr), $tolerance:expr) => {{
        let p = &$point;
        let actual = (p.x as f64, p.y as f64);
        let expected = ($x as f64, $y as f64);
        assert!(
            $crate::xy_close(actual, expected, $tolerance as f64),
            "point {:?} is not within {} of {:?}",
            actual,
            $tolerance,
            expected
        );
    }};
}

/// Assert a segment's endpoints, in order.
///
/// ```ignore
/// assert_segment_approx_eq!(cell.segments[0], (0.5, 0.0) => (0.0, 0.5), 1e-12);
/// ```
#[macro_export]
macro_rules! assert_segment_approx_eq {
    ($segment:expr, ($x1:expr, $y1:expr) => ($x2:expr, $y2:expr), $tolerance:expr) => {{
        let s = &$segment;
        $crate::assert_point_approx_eq!(s.start, ($x1, $y1), $tolerance);
        $crate::assert_point_approx_eq!(s.end, ($x2, $y2), $tolerance);
    }};
}
