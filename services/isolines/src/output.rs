//! Output formats for an extraction run.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use clap::ValueEnum;
use contour::{connect_level, ContourSet, LevelSchedule, Polyline, PositionMode};
use elevation::ElevationField;
use renderer::{render_png, RenderConfig};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Polylines per level as JSON
    Json,
    /// Human-readable per-level counts
    Summary,
    /// Shaded field with isolines as a PNG image
    Png,
}

/// JSON document for one run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub size: usize,
    pub mode: PositionMode,
    pub levels: Vec<LevelReport>,
}

#[derive(Debug, Serialize)]
pub struct LevelReport {
    pub nominal: f64,
    pub threshold: f64,
    pub cells: usize,
    pub segments: usize,
    pub polylines: Vec<Polyline>,
}

impl Report {
    pub fn new(set: &ContourSet, schedule: &LevelSchedule) -> Self {
        let levels = set
            .levels
            .iter()
            .map(|level| LevelReport {
                nominal: schedule.nominal_for(level.threshold),
                threshold: level.threshold,
                cells: level.cells.len(),
                segments: level.segment_count(),
                polylines: connect_level(level, set.size),
            })
            .collect();

        Self {
            size: set.size,
            mode: set.mode,
            levels,
        }
    }
}

/// Plain-text table of per-level counts.
pub fn summary(report: &Report) -> String {
    let mut out = format!("field {}x{}, mode {}\n", report.size, report.size, report.mode.as_str());
    out.push_str(&format!(
        "{:>8} {:>10} {:>6} {:>9} {:>10} {:>7}\n",
        "level", "threshold", "cells", "segments", "polylines", "closed"
    ));
    for level in &report.levels {
        let closed = level.polylines.iter().filter(|p| p.closed).count();
        out.push_str(&format!(
            "{:>8} {:>10} {:>6} {:>9} {:>10} {:>7}\n",
            level.nominal,
            level.threshold,
            level.cells,
            level.segments,
            level.polylines.len(),
            closed
        ));
    }
    out
}

/// Encode a run in the requested format.
pub fn encode(
    format: OutputFormat,
    field: &ElevationField,
    set: &ContourSet,
    schedule: &LevelSchedule,
    render: &RenderConfig,
) -> anyhow::Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_vec_pretty(&Report::new(set, schedule))?;
            json.push(b'\n');
            json
        }
        OutputFormat::Summary => summary(&Report::new(set, schedule)).into_bytes(),
        OutputFormat::Png => render_png(field, set, render)?,
    };
    Ok(bytes)
}

/// Write encoded output to `path`, or to stdout when none is given.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
