//! Isoline extraction service.
//!
//! Reads a whitespace-separated elevation block, extracts contour lines at a
//! fixed schedule of levels and writes them out as:
//! - JSON polylines per level
//! - A plain-text summary
//! - A PNG map with the field shaded by elevation

mod config;
mod output;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use contour::{ContourExtractor, PositionMode};
use elevation::{load_field, ElevationRange};
use renderer::RenderConfig;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::IsolineConfig;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "isolines")]
#[command(about = "Extract and render elevation isolines with marching squares")]
struct Args {
    /// Elevation block file (x y lat lon elevation per line)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Require an NxN grid instead of inferring the size
    #[arg(long)]
    grid_size: Option<usize>,

    /// Edge point placement: midpoint or interpolated
    #[arg(long)]
    mode: Option<String>,

    /// First nominal level
    #[arg(long)]
    level_start: Option<f64>,

    /// Spacing between nominal levels
    #[arg(long)]
    level_step: Option<f64>,

    /// Number of levels
    #[arg(long)]
    level_count: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendered pixels per sample (png only)
    #[arg(long)]
    cell_size: Option<f32>,

    /// Scale the color ramp to the field's own elevation range (png only)
    #[arg(long)]
    auto_range: bool,

    /// Extract levels in parallel
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    /// Layer flags over environment-derived configuration.
    fn apply(&self, mut config: IsolineConfig) -> Result<IsolineConfig> {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(size) = self.grid_size {
            config.grid_size = Some(size);
        }
        if let Some(mode) = &self.mode {
            config.mode = PositionMode::parse(mode)
                .with_context(|| format!("unknown mode '{}' (expected midpoint or interpolated)", mode))?;
        }
        if let Some(start) = self.level_start {
            config.levels.start = start;
        }
        if let Some(step) = self.level_step {
            config.levels.step = step;
        }
        if let Some(count) = self.level_count {
            config.levels.count = count;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        Ok(config)
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries the encoded output
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    let config = args.apply(IsolineConfig::from_env())?;
    config.validate()?;
    let input = config.input.clone().context("no input file")?;

    info!(
        input = %input.display(),
        mode = config.mode.as_str(),
        levels = config.levels.count,
        "Starting isoline extraction"
    );

    let started = Instant::now();
    let field = load_field(&input, &config.loader_config())
        .with_context(|| format!("failed to load {}", input.display()))?;
    if field.size() < 2 {
        warn!(size = field.size(), "Field is smaller than 2x2 and has no cells");
    }

    let thresholds = config.levels.thresholds();
    let extractor = ContourExtractor::new(&field).with_mode(config.mode);
    let set = if args.parallel {
        extractor.par_extract(&thresholds)
    } else {
        extractor.extract(&thresholds)
    };

    let render = RenderConfig {
        cell_size: config.cell_size,
        level_offset: config.levels.offset,
        elevation_range: if args.auto_range {
            ElevationRange::from_field(&field)
        } else {
            ElevationRange::default()
        },
        ..Default::default()
    };
    let bytes = output::encode(args.format, &field, &set, &config.levels, &render)?;

    output::write_output(args.output.as_deref(), &bytes)?;

    info!(
        size = field.size(),
        segments = set.segment_count(),
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Isoline extraction complete"
    );

    Ok(())
}
