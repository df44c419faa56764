//! Tests for loading elevation block files into validated fields.

use elevation::{
    field_from_reader, load_field, read_samples, ElevationField, ElevationRange, IsolineError,
    LoaderConfig,
};
use test_utils::{
    require_test_file, temp_test_dir, terrain_samples, write_block_file, INCOMPLETE_BLOCK,
    REFERENCE_BLOCK, SMALL_BLOCK, SMALL_BLOCK_ACCEPTED, SMALL_BLOCK_SKIPPED,
};

// ============================================================================
// read_samples tests
// ============================================================================

#[test]
fn test_read_samples_skips_malformed_lines() {
    let (samples, stats) = read_samples(SMALL_BLOCK.as_bytes()).unwrap();
    assert_eq!(samples.len(), SMALL_BLOCK_ACCEPTED);
    assert_eq!(stats.accepted, SMALL_BLOCK_ACCEPTED);
    assert_eq!(stats.skipped, SMALL_BLOCK_SKIPPED);
}

#[test]
fn test_short_record_never_partially_added() {
    let (samples, _) = read_samples(SMALL_BLOCK.as_bytes()).unwrap();
    // The short "1 2 ..." line precedes the full one; only the full one lands.
    let at_1_2: Vec<_> = samples.iter().filter(|s| s.x == 1 && s.y == 2).collect();
    assert_eq!(at_1_2.len(), 1);
    assert_eq!(at_1_2[0].elevation, 520);
}

// ============================================================================
// field_from_reader tests
// ============================================================================

#[test]
fn test_small_block_builds_complete_field() {
    let field = field_from_reader(SMALL_BLOCK.as_bytes(), &LoaderConfig::default()).unwrap();
    assert_eq!(field.size(), 3);
    assert_eq!(field.elevation(2, 2), 620);
    assert_eq!(field.elevation(0, 1), 410);
    assert!((field.get(1, 0).lon + 121.799).abs() < 1e-9);
}

#[test]
fn test_binary_garbage_line_does_not_abort_load() {
    let mut block = Vec::new();
    block.extend_from_slice(b"0 0 46.80 -121.80 400\n1 0 46.80 -121.79 410\n");
    block.extend_from_slice(b"\xff\xfe garbage\n");
    block.extend_from_slice(b"0 1 46.81 -121.80 420\n1 1 46.81 -121.79 430\n");

    let field = field_from_reader(block.as_slice(), &LoaderConfig::default()).unwrap();
    assert_eq!(field.size(), 2);
    assert_eq!(field.elevation(1, 1), 430);

    let (_, stats) = read_samples(block.as_slice()).unwrap();
    assert_eq!((stats.accepted, stats.skipped), (4, 1));
}

#[test]
fn test_incomplete_block_rejected_at_load() {
    let err = field_from_reader(INCOMPLETE_BLOCK.as_bytes(), &LoaderConfig::default()).unwrap_err();
    match err {
        IsolineError::IncompleteField {
            size,
            missing_x,
            missing_y,
            ..
        } => {
            assert_eq!(size, 2);
            assert_eq!((missing_x, missing_y), (1, 1));
        }
        other => panic!("expected IncompleteField, got {:?}", other),
    }
}

#[test]
fn test_expected_size_mismatch() {
    let config = LoaderConfig {
        expected_size: Some(4),
    };
    let err = field_from_reader(SMALL_BLOCK.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, IsolineError::IncompleteField { size: 4, .. }));

    let config = LoaderConfig {
        expected_size: Some(2),
    };
    let err = field_from_reader(SMALL_BLOCK.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, IsolineError::SampleOutOfRange { size: 2, .. }));
}

#[test]
fn test_empty_input_rejected() {
    let err = field_from_reader("garbage\n\n".as_bytes(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, IsolineError::EmptyField));
}

// ============================================================================
// load_field tests
// ============================================================================

#[test]
fn test_load_field_from_disk() {
    let dir = temp_test_dir();
    let samples = terrain_samples(20);
    let path = write_block_file(dir.path(), "terrain.block", &samples);

    let field = load_field(&path, &LoaderConfig::default()).unwrap();
    assert_eq!(field.size(), 20);
    let expected = ElevationField::from_samples(samples).unwrap();
    for (a, b) in field.samples().zip(expected.samples()) {
        assert_eq!(a.elevation, b.elevation);
    }
}

#[test]
fn test_load_field_missing_file() {
    let dir = temp_test_dir();
    let err = load_field(dir.path().join("nope.block"), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, IsolineError::DataReadError(_)));
    assert!(err.to_string().contains("nope.block"));
}

#[test]
fn test_reference_block_if_present() {
    let path = require_test_file!(REFERENCE_BLOCK);
    let field = load_field(&path, &LoaderConfig::reference()).unwrap();
    assert_eq!(field.size(), 100);

    let range = ElevationRange::default();
    let (lo, hi) = field.elevation_bounds();
    assert!(range.percent(lo) >= -0.01);
    assert!(range.percent(hi) <= 1.01);
}
