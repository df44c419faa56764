//! Service configuration.
//!
//! Values come from the environment (optionally seeded from `.env`) and are
//! then overridden by command-line flags.

use std::path::PathBuf;

use contour::{LevelSchedule, PositionMode};
use elevation::LoaderConfig;
use isoline_common::{IsolineError, IsolineResult};

/// Default edge length of a rendered sample square, in pixels.
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

/// Configuration for one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct IsolineConfig {
    /// Block file to read
    pub input: Option<PathBuf>,
    /// Required grid size (`None` = infer from the data)
    pub grid_size: Option<usize>,
    /// How edge points are placed
    pub mode: PositionMode,
    /// Rendered pixels per sample
    pub cell_size: f32,
    /// Levels to extract
    pub levels: LevelSchedule,
}

impl Default for IsolineConfig {
    fn default() -> Self {
        Self {
            input: None,
            grid_size: None,
            mode: PositionMode::default(),
            cell_size: DEFAULT_CELL_SIZE,
            levels: LevelSchedule::default(),
        }
    }
}

impl IsolineConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// Unparseable values are ignored and leave the default in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("ISOLINE_INPUT") {
            if !val.is_empty() {
                config.input = Some(PathBuf::from(val));
            }
        }

        if let Some(val) = lookup("ISOLINE_GRID_SIZE") {
            if let Ok(size) = val.parse() {
                config.grid_size = Some(size);
            }
        }

        if let Some(val) = lookup("ISOLINE_MODE") {
            if let Some(mode) = PositionMode::parse(&val) {
                config.mode = mode;
            }
        }

        if let Some(val) = lookup("ISOLINE_CELL_SIZE") {
            if let Ok(size) = val.parse() {
                config.cell_size = size;
            }
        }

        if let Some(val) = lookup("ISOLINE_LEVEL_START") {
            if let Ok(start) = val.parse() {
                config.levels.start = start;
            }
        }

        if let Some(val) = lookup("ISOLINE_LEVEL_STEP") {
            if let Ok(step) = val.parse() {
                config.levels.step = step;
            }
        }

        if let Some(val) = lookup("ISOLINE_LEVEL_COUNT") {
            if let Ok(count) = val.parse() {
                config.levels.count = count;
            }
        }

        config
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            expected_size: self.grid_size,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> IsolineResult<()> {
        if self.input.is_none() {
            return Err(IsolineError::invalid_config(
                "no input file given (use --input or ISOLINE_INPUT)",
            ));
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(IsolineError::invalid_config("cell_size must be > 0"));
        }
        self.levels.validate().map_err(IsolineError::invalid_config)?;
        self.loader_config().validate()
    }
}
