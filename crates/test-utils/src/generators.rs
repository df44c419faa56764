//! Synthetic elevation fields for tests and benchmarks.
//!
//! Every generator returns a complete, row-major list of samples for an
//! N×N grid, so the result can be handed straight to
//! `ElevationField::from_samples`.

use isoline_common::Sample;

/// Latitude assigned to row 0 of synthetic grids.
pub const BASE_LAT: f64 = 46.80;
/// Longitude assigned to column 0 of synthetic grids.
pub const BASE_LON: f64 = -121.80;
/// Degrees between neighbouring synthetic samples.
pub const SPACING_DEG: f64 = 0.001;

/// Build an N×N grid whose elevation is given by `elevation(x, y)`.
pub fn generate_samples<F>(size: usize, elevation: F) -> Vec<Sample>
where
    F: Fn(i32, i32) -> i32,
{
    let mut samples = Vec::with_capacity(size * size);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            samples.push(Sample::new(
                x,
                y,
                BASE_LAT + y as f64 * SPACING_DEG,
                BASE_LON + x as f64 * SPACING_DEG,
                elevation(x, y),
            ));
        }
    }
    samples
}

/// Flat field at a single elevation.
///
/// # Example
///
/// ```
/// use test_utils::uniform_samples;
///
/// let samples = uniform_samples(4, 500);
/// assert_eq!(samples.len(), 16);
/// assert!(samples.iter().all(|s| s.elevation == 500));
/// ```
pub fn uniform_samples(size: usize, elevation: i32) -> Vec<Sample> {
    generate_samples(size, |_, _| elevation)
}

/// Planar ramp: `base + x * step_x + y * step_y`.
pub fn ramp_samples(size: usize, base: i32, step_x: i32, step_y: i32) -> Vec<Sample> {
    generate_samples(size, |x, y| base + x * step_x + y * step_y)
}

/// A single round hill centered on the grid.
///
/// Elevation falls off linearly from `peak` at the center by `slope` per
/// grid unit of distance.
pub fn cone_samples(size: usize, peak: i32, slope: f64) -> Vec<Sample> {
    let center = (size as f64 - 1.0) / 2.0;
    generate_samples(size, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        (peak as f64 - slope * (dx * dx + dy * dy).sqrt()).round() as i32
    })
}

/// A 2×2 grid forming exactly one cell, with its corners set explicitly.
///
/// The only valid cell is `(0, 1)`, whose corners are
/// `p0 = (0, 1)`, `p1 = (1, 1)`, `p2 = (1, 0)` and `p3 = (0, 0)`.
pub fn single_cell_samples(p0: i32, p1: i32, p2: i32, p3: i32) -> Vec<Sample> {
    generate_samples(2, |x, y| match (x, y) {
        (0, 1) => p0,
        (1, 1) => p1,
        (1, 0) => p2,
        _ => p3,
    })
}

/// Rolling terrain within roughly 360..974 m, resembling the
/// `data100.block` reference grid.
pub fn terrain_samples(size: usize) -> Vec<Sample> {
    let n = size.max(1) as f64;
    generate_samples(size, |x, y| {
        let fx = x as f64 / n;
        let fy = y as f64 / n;
        let v1 = (fx * std::f64::consts::PI * 3.0).sin() * 140.0;
        let v2 = (fy * std::f64::consts::PI * 2.0).cos() * 120.0;
        let v3 = ((fx + fy) * std::f64::consts::PI * 1.5).sin() * 40.0;
        (667.0 + v1 + v2 + v3).round() as i32
    })
}
