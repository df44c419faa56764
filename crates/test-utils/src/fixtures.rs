//! Common test fixtures for elevation block files.

use isoline_common::Sample;

/// A 3×3 block with a malformed header, a short record and a comment mixed
/// in. The nine well-formed records describe a field rising towards +x.
pub const SMALL_BLOCK: &str = "\
x y lat lon elevation
0 0 46.800 -121.800 400
1 0 46.800 -121.799 500
2 0 46.800 -121.798 600
# row 1
0 1 46.801 -121.800 410
1 1 46.801 -121.799 510
2 1 46.801 -121.798 610
0 2 46.802 -121.800 420
1 2 46.802 -121.799
1 2 46.802 -121.799 520
2 2 46.802 -121.798 620
";

/// Number of well-formed records in [`SMALL_BLOCK`].
pub const SMALL_BLOCK_ACCEPTED: usize = 9;

/// Number of lines in [`SMALL_BLOCK`] that must be skipped.
pub const SMALL_BLOCK_SKIPPED: usize = 3;

/// A 2×2 block missing the sample at `(1, 1)`.
pub const INCOMPLETE_BLOCK: &str = "\
0 0 46.800 -121.800 400
1 0 46.800 -121.799 500
0 1 46.801 -121.800 410
";

/// Render samples in block-file format, one record per line.
pub fn samples_to_block(samples: &[Sample]) -> String {
    let mut out = String::with_capacity(samples.len() * 32);
    for s in samples {
        out.push_str(&format!(
            "{} {} {:.6} {:.6} {}\n",
            s.x, s.y, s.lat, s.lon, s.elevation
        ));
    }
    out
}

/// Common threshold sets.
pub mod thresholds {
    /// Nominal levels of the reference rendering, shifted down by one.
    pub const REFERENCE: [f64; 12] = [
        399.0, 449.0, 499.0, 549.0, 599.0, 649.0, 699.0, 749.0, 799.0, 849.0, 899.0, 949.0,
    ];
}
