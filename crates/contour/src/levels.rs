//! Threshold sets for extraction.

use serde::{Deserialize, Serialize};

/// Generate contour levels automatically based on data range and interval
pub fn generate_contour_levels(min_value: f64, max_value: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || max_value <= min_value {
        return vec![];
    }

    // Start from first multiple of interval above min_value
    let start = (min_value / interval).ceil() * interval;
    let count = ((max_value - start) / interval).floor();
    if count < 0.0 {
        return vec![];
    }

    // Multiply instead of accumulating so long ranges don't drift.
    (0..=count as usize).map(|i| start + i as f64 * interval).collect()
}

/// Evenly spaced nominal levels, extracted at `nominal + offset`.
///
/// The default reproduces the classic terrain rendering: nominal levels
/// 400, 450, ..., 950 m, each extracted one meter low so that a sample lying
/// exactly on a nominal level counts as above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSchedule {
    pub start: f64,
    pub step: f64,
    pub count: usize,
    pub offset: f64,
}

impl Default for LevelSchedule {
    fn default() -> Self {
        Self {
            start: 400.0,
            step: 50.0,
            count: 12,
            offset: -1.0,
        }
    }
}

impl LevelSchedule {
    pub fn new(start: f64, step: f64, count: usize) -> Self {
        Self {
            start,
            step,
            count,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Levels as labelled on a map.
    pub fn nominal_levels(&self) -> Vec<f64> {
        (0..self.count).map(|i| self.start + i as f64 * self.step).collect()
    }

    /// Levels as handed to the extractor.
    pub fn thresholds(&self) -> Vec<f64> {
        self.nominal_levels().into_iter().map(|l| l + self.offset).collect()
    }

    /// Nominal level for an extraction threshold.
    pub fn nominal_for(&self, threshold: f64) -> f64 {
        threshold - self.offset
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.step > 0.0) {
            return Err("level step must be > 0".to_string());
        }
        if self.count == 0 {
            return Err("level count must be > 0".to_string());
        }
        if !self.start.is_finite() || !self.offset.is_finite() {
            return Err("level start and offset must be finite".to_string());
        }
        Ok(())
    }
}

/// Whether a nominal level falls on a multiple of `major_interval`.
pub fn is_major(nominal: f64, major_interval: f64) -> bool {
    if major_interval <= 0.0 {
        return false;
    }
    let ratio = nominal / major_interval;
    (ratio - ratio.round()).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contour_levels() {
        let levels = generate_contour_levels(0.0, 20.0, 5.0);
        assert_eq!(levels, vec![0.0, 5.0, 10.0, 15.0, 20.0]);

        let levels = generate_contour_levels(2.0, 18.0, 5.0);
        assert_eq!(levels, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_generate_contour_levels_invalid() {
        assert!(generate_contour_levels(0.0, 100.0, 0.0).is_empty());
        assert!(generate_contour_levels(100.0, 0.0, 10.0).is_empty());
        assert!(generate_contour_levels(1.0, 2.0, 10.0).is_empty());
    }

    #[test]
    fn test_default_schedule() {
        let schedule = LevelSchedule::default();
        let nominal = schedule.nominal_levels();
        assert_eq!(nominal.len(), 12);
        assert_eq!(nominal[0], 400.0);
        assert_eq!(nominal[11], 950.0);
        assert_eq!(schedule.thresholds()[0], 399.0);
        assert_eq!(schedule.nominal_for(899.0), 900.0);
    }

    #[test]
    fn test_is_major() {
        assert!(is_major(400.0, 100.0));
        assert!(!is_major(450.0, 100.0));
        assert!(is_major(-200.0, 100.0));
        assert!(!is_major(400.0, 0.0));
    }

    #[test]
    fn test_schedule_validate() {
        assert!(LevelSchedule::default().validate().is_ok());
        assert!(LevelSchedule::new(0.0, 0.0, 3).validate().is_err());
        assert!(LevelSchedule::new(0.0, 10.0, 0).validate().is_err());
    }
}
