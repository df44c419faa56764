//! Loader for whitespace-delimited elevation block files.
//!
//! Each line holds one sample: `x y lat lon elevation`. `x`, `y` and
//! `elevation` are integers, `lat` and `lon` are reals. Lines with a
//! different field count or any unparsable field are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use isoline_common::{IsolineError, IsolineResult, Sample};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ElevationField;

/// Grid size of the reference terrain block.
pub const REFERENCE_GRID_SIZE: usize = 100;

/// Configuration for loading an elevation field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Require exactly this grid size. `None` infers it from the data.
    pub expected_size: Option<usize>,
}

impl LoaderConfig {
    /// Configuration that requires the 100×100 reference grid.
    pub fn reference() -> Self {
        Self {
            expected_size: Some(REFERENCE_GRID_SIZE),
        }
    }

    pub fn validate(&self) -> IsolineResult<()> {
        if self.expected_size == Some(0) {
            return Err(IsolineError::invalid_config("expected_size must be > 0"));
        }
        Ok(())
    }
}

/// Counters from one pass over an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub lines: usize,
    pub accepted: usize,
    pub skipped: usize,
}

/// Parse one record. Returns `None` for anything other than exactly five
/// well-formed fields.
pub fn parse_record(line: &str) -> Option<Sample> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let lat = parts.next()?.parse().ok()?;
    let lon = parts.next()?.parse().ok()?;
    let elevation = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Sample::new(x, y, lat, lon, elevation))
}

/// Read every well-formed record from `reader`.
pub fn read_samples<R: BufRead>(reader: R) -> IsolineResult<(Vec<Sample>, LoadStats)> {
    let mut samples = Vec::new();
    let mut stats = LoadStats::default();

    for (line_no, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        stats.lines += 1;
        let Ok(line) = std::str::from_utf8(&raw) else {
            trace!(line = line_no + 1, "Skipping record that is not valid UTF-8");
            stats.skipped += 1;
            continue;
        };
        match parse_record(line) {
            Some(sample) => {
                samples.push(sample);
                stats.accepted += 1;
            }
            None => {
                trace!(line = line_no + 1, content = %line.trim_end(), "Skipping malformed record");
                stats.skipped += 1;
            }
        }
    }

    debug!(
        lines = stats.lines,
        accepted = stats.accepted,
        skipped = stats.skipped,
        "Read elevation records"
    );

    Ok((samples, stats))
}

/// Read records from `reader` and build a validated field.
pub fn field_from_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> IsolineResult<ElevationField> {
    config.validate()?;
    let (samples, _) = read_samples(reader)?;
    match config.expected_size {
        Some(size) => ElevationField::with_size(samples, size),
        None => ElevationField::from_samples(samples),
    }
}

/// Load and validate a field from a block file on disk.
pub fn load_field(path: impl AsRef<Path>, config: &LoaderConfig) -> IsolineResult<ElevationField> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| IsolineError::data_read(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "Loading elevation field");
    field_from_reader(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_valid() {
        let s = parse_record("3 7 46.8523 -121.7603 1203").unwrap();
        assert_eq!((s.x, s.y, s.elevation), (3, 7, 1203));
        assert!((s.lat - 46.8523).abs() < 1e-9);
        assert!((s.lon + 121.7603).abs() < 1e-9);
    }

    #[test]
    fn test_parse_record_tolerates_extra_whitespace() {
        let s = parse_record("  3\t7  46.0 -121.0   500 ").unwrap();
        assert_eq!(s.elevation, 500);
    }

    #[test]
    fn test_parse_record_rejects_malformed() {
        assert!(parse_record("").is_none());
        assert!(parse_record("1 2 3.0 4.0").is_none());
        assert!(parse_record("1 2 3.0 4.0 5 6").is_none());
        assert!(parse_record("x 2 3.0 4.0 5").is_none());
        assert!(parse_record("1 2 north 4.0 5").is_none());
        // Elevation must be an integer
        assert!(parse_record("1 2 3.0 4.0 5.5").is_none());
    }

    #[test]
    fn test_read_samples_counts() {
        let input = "0 0 1.0 2.0 10\n# comment\n1 0 1.0 2.0 11\n\n";
        let (samples, stats) = read_samples(input.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(
            stats,
            LoadStats {
                lines: 4,
                accepted: 2,
                skipped: 2
            }
        );
    }

    #[test]
    fn test_read_samples_skips_invalid_utf8() {
        let input: &[u8] = b"0 0 1.0 2.0 10\r\n\xff\xfe garbage\n1 0 1.0 2.0 11\n";
        let (samples, stats) = read_samples(input).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].elevation, 11);
        assert_eq!(
            stats,
            LoadStats {
                lines: 3,
                accepted: 2,
                skipped: 1
            }
        );
    }

    #[test]
    fn test_expected_size_zero_invalid() {
        let config = LoaderConfig {
            expected_size: Some(0),
        };
        assert!(config.validate().is_err());
        assert!(LoaderConfig::reference().validate().is_ok());
    }
}
