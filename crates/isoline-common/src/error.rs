//! Error types for the isolines crates.

use thiserror::Error;

/// Result type alias using IsolineError.
pub type IsolineResult<T> = Result<T, IsolineError>;

/// Primary error type for field construction, loading and rendering.
#[derive(Debug, Error)]
pub enum IsolineError {
    // === Field Errors ===
    #[error("Elevation field has no samples")]
    EmptyField,

    #[error(
        "Elevation field is incomplete: {missing_count} of {expected} samples missing \
         for a {size}x{size} grid (first missing at x={missing_x}, y={missing_y})"
    )]
    IncompleteField {
        size: usize,
        expected: usize,
        missing_count: usize,
        missing_x: usize,
        missing_y: usize,
    },

    #[error("Duplicate sample at x={x}, y={y} (key {key})")]
    DuplicateSample { x: i32, y: i32, key: i64 },

    #[error("Sample at x={x}, y={y} lies outside a {size}x{size} grid")]
    SampleOutOfRange { x: i32, y: i32, size: usize },

    // === Input Errors ===
    #[error("Failed to read elevation data: {0}")]
    DataReadError(String),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),
}

impl IsolineError {
    /// Create a DataReadError.
    pub fn data_read(msg: impl Into<String>) -> Self {
        Self::DataReadError(msg.into())
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a RenderError.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::RenderError(msg.into())
    }

    /// Whether the error describes a structurally invalid field, as opposed
    /// to an I/O, configuration or rendering failure.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            IsolineError::EmptyField
                | IsolineError::IncompleteField { .. }
                | IsolineError::DuplicateSample { .. }
                | IsolineError::SampleOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for IsolineError {
    fn from(err: std::io::Error) -> Self {
        IsolineError::DataReadError(err.to_string())
    }
}
