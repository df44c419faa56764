//! The validated, immutable elevation grid.

use std::collections::HashSet;

use isoline_common::{IsolineError, IsolineResult, Sample};
use tracing::{debug, warn};

/// A complete N×N grid of elevation samples.
///
/// Every `(x, y)` with `0 <= x, y < N` holds exactly one [`Sample`]. This is
/// checked once at construction, so lookups afterwards never fail for
/// in-range coordinates. The field is never mutated after construction and
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct ElevationField {
    size: usize,
    /// Row-major: index `y * size + x`.
    samples: Vec<Sample>,
}

impl ElevationField {
    /// Build a field, inferring N from the largest coordinate present.
    pub fn from_samples<I>(samples: I) -> IsolineResult<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        let samples: Vec<Sample> = samples.into_iter().collect();
        let max_coord = samples
            .iter()
            .map(|s| s.x.max(s.y))
            .max()
            .ok_or(IsolineError::EmptyField)?;

        if max_coord < 0 {
            let s = samples[0];
            return Err(IsolineError::SampleOutOfRange { x: s.x, y: s.y, size: 0 });
        }

        Self::build(samples, max_coord as usize + 1)
    }

    /// Build a field whose size is fixed by the caller.
    pub fn with_size<I>(samples: I, size: usize) -> IsolineResult<Self>
    where
        I: IntoIterator<Item = Sample>,
    {
        if size == 0 {
            return Err(IsolineError::invalid_config("field size must be > 0"));
        }
        let samples: Vec<Sample> = samples.into_iter().collect();
        if samples.is_empty() {
            return Err(IsolineError::EmptyField);
        }
        Self::build(samples, size)
    }

    fn build(samples: Vec<Sample>, size: usize) -> IsolineResult<Self> {
        let expected = size
            .checked_mul(size)
            .ok_or_else(|| IsolineError::invalid_config(format!("field size {} overflows", size)))?;

        // Reject before allocating so a stray huge coordinate cannot force a
        // size*size allocation.
        if expected > samples.len() {
            return Err(Self::incompleteness(&samples, size, expected));
        }

        let mut slots: Vec<Option<Sample>> = vec![None; expected];
        for sample in samples {
            let index = index_of(size, sample.x, sample.y).ok_or(IsolineError::SampleOutOfRange {
                x: sample.x,
                y: sample.y,
                size,
            })?;
            if slots[index].is_some() {
                return Err(IsolineError::DuplicateSample {
                    x: sample.x,
                    y: sample.y,
                    key: sample.key(),
                });
            }
            slots[index] = Some(sample);
        }

        let samples: Vec<Sample> = match slots.iter().copied().collect::<Option<Vec<_>>>() {
            Some(samples) => samples,
            None => {
                let present: Vec<Sample> = slots.into_iter().flatten().collect();
                return Err(Self::incompleteness(&present, size, expected));
            }
        };

        if size < 2 {
            warn!(size, "Elevation field is smaller than 2x2 and has no cells");
        }
        debug!(size, samples = samples.len(), "Built elevation field");

        Ok(Self { size, samples })
    }

    /// Describe the first gap in row-major order.
    fn incompleteness(samples: &[Sample], size: usize, expected: usize) -> IsolineError {
        let present: HashSet<i64> = samples
            .iter()
            .filter(|s| index_of(size, s.x, s.y).is_some())
            .map(Sample::key)
            .collect();

        let (missing_x, missing_y) = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .find(|&(x, y)| !present.contains(&Sample::key_for(x as i32, y as i32)))
            .unwrap_or((0, 0));

        IsolineError::IncompleteField {
            size,
            expected,
            missing_count: expected - present.len(),
            missing_x,
            missing_y,
        }
    }

    /// Grid dimension N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of samples (always N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether `(x, y)` addresses a sample.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        index_of(self.size, x, y).is_some()
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid. Callers iterating cells must
    /// range-check first; the cell queries in the `contour` crate do.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &Sample {
        match index_of(self.size, x, y) {
            Some(index) => &self.samples[index],
            None => panic!(
                "grid lookup ({}, {}) outside {}x{} elevation field",
                x, y, self.size, self.size
            ),
        }
    }

    /// Checked variant of [`get`](Self::get).
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<&Sample> {
        index_of(self.size, x, y).map(|index| &self.samples[index])
    }

    /// Elevation at `(x, y)`. Same contract as [`get`](Self::get).
    #[inline]
    pub fn elevation(&self, x: i32, y: i32) -> i32 {
        self.get(x, y).elevation
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Lowest and highest elevation in the field.
    pub fn elevation_bounds(&self) -> (i32, i32) {
        self.samples
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), s| (lo.min(s.elevation), hi.max(s.elevation)))
    }
}

#[inline]
fn index_of(size: usize, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= size || y >= size {
        return None;
    }
    Some(y * size + x)
}
