//! A single elevation sample on the integer grid.

use serde::{Deserialize, Serialize};

/// Multiplier used to fold `(x, y)` into a single integer key.
///
/// Large enough that `x + y * SAMPLE_KEY_MULTIPLIER` never aliases for any
/// grid whose width fits in a u32.
pub const SAMPLE_KEY_MULTIPLIER: i64 = 1_000_000_000;

/// Unique integer identity of a sample, derived from its grid coordinates.
pub type SampleKey = i64;

/// One elevation measurement at an integer grid coordinate.
///
/// Latitude and longitude are carried through for collaborators; the
/// contouring code only looks at `x`, `y` and `elevation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: i32,
    pub y: i32,
    pub lat: f64,
    pub lon: f64,
    pub elevation: i32,
}

impl Sample {
    pub fn new(x: i32, y: i32, lat: f64, lon: f64, elevation: i32) -> Self {
        Self {
            x,
            y,
            lat,
            lon,
            elevation,
        }
    }

    /// Key for arbitrary grid coordinates.
    #[inline]
    pub fn key_for(x: i32, y: i32) -> SampleKey {
        x as i64 + y as i64 * SAMPLE_KEY_MULTIPLIER
    }

    /// Key identifying this sample.
    #[inline]
    pub fn key(&self) -> SampleKey {
        Self::key_for(self.x, self.y)
    }
}
