//! Elevation normalization for color mapping.

use serde::{Deserialize, Serialize};

use crate::ElevationField;
use isoline_common::{IsolineError, IsolineResult};

/// Lowest elevation of the reference terrain block, in meters.
pub const DEFAULT_MIN_ELEVATION: f64 = 360.0;

/// Highest elevation of the reference terrain block, in meters.
pub const DEFAULT_MAX_ELEVATION: f64 = 974.0;

/// Fixed domain bounds used to map a raw elevation to a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ELEVATION,
            max: DEFAULT_MAX_ELEVATION,
        }
    }
}

impl ElevationRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range spanning the actual elevations of a field.
    pub fn from_field(field: &ElevationField) -> Self {
        let (lo, hi) = field.elevation_bounds();
        Self::new(lo as f64, hi as f64)
    }

    /// Fraction of the way from `min` to `max`.
    ///
    /// Values outside the domain map outside `[0, 1]`; clamping is left to
    /// the consumer.
    pub fn percent(&self, elevation: i32) -> f64 {
        (elevation as f64 - self.min) / (self.max - self.min)
    }

    pub fn validate(&self) -> IsolineResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(IsolineError::invalid_config("elevation range must be finite"));
        }
        if self.max <= self.min {
            return Err(IsolineError::invalid_config(format!(
                "elevation range max ({}) must be greater than min ({})",
                self.max, self.min
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let range = ElevationRange::default();
        assert_eq!(range.percent(360), 0.0);
        assert_eq!(range.percent(974), 1.0);
        assert!((range.percent(667) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_percent_not_clamped() {
        let range = ElevationRange::new(0.0, 100.0);
        assert_eq!(range.percent(-50), -0.5);
        assert_eq!(range.percent(150), 1.5);
    }

    #[test]
    fn test_validate() {
        assert!(ElevationRange::default().validate().is_ok());
        assert!(ElevationRange::new(10.0, 10.0).validate().is_err());
        assert!(ElevationRange::new(f64::NAN, 10.0).validate().is_err());
    }
}
