//! Common types and utilities shared across the isolines crates.

pub mod error;
pub mod sample;

pub use error::{IsolineError, IsolineResult};
pub use sample::{Sample, SampleKey, SAMPLE_KEY_MULTIPLIER};
