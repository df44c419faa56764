//! Tests for rendering elevation fields and isolines to RGBA and PNG.

use contour::ContourExtractor;
use elevation::ElevationField;
use renderer::png::PNG_SIGNATURE;
use renderer::{canvas_size, color_for_elevation, render_field, render_png, RenderConfig};
use test_utils::{ramp_samples, terrain_samples, uniform_samples};

fn pixel(rgba: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let i = (y * width + x) * 4;
    [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
}

fn lines_only() -> RenderConfig {
    RenderConfig {
        draw_field: false,
        ..Default::default()
    }
}

#[test]
fn test_uniform_field_fills_with_ramp_color() {
    let field = ElevationField::from_samples(uniform_samples(4, 500)).unwrap();
    let set = ContourExtractor::new(&field).extract(&[499.0]);
    assert!(set.is_empty());

    let config = RenderConfig::default();
    let rgba = render_field(&field, &set, &config).unwrap();
    let (width, height) = canvas_size(4, &config);
    assert_eq!(rgba.len(), width * height * 4);

    let expected = color_for_elevation(500, &config.elevation_range);
    for (x, y) in [(0, 0), (width - 1, height - 1), (17, 23)] {
        assert_eq!(pixel(&rgba, width, x, y), [expected.r, expected.g, expected.b, 255]);
    }
}

#[test]
fn test_north_is_up() {
    // Low row at y = 0, high row at y = 2.
    let field = ElevationField::from_samples(ramp_samples(3, 360, 0, 300)).unwrap();
    let set = ContourExtractor::new(&field).extract(&[]);
    let config = RenderConfig::default();
    let rgba = render_field(&field, &set, &config).unwrap();
    let (width, height) = canvas_size(3, &config);

    let top = color_for_elevation(960, &config.elevation_range);
    let bottom = color_for_elevation(360, &config.elevation_range);
    assert_eq!(pixel(&rgba, width, 5, 5), [top.r, top.g, top.b, 255]);
    assert_eq!(pixel(&rgba, width, 5, height - 5), [bottom.r, bottom.g, bottom.b, 255]);
}

#[test]
fn test_isoline_is_stroked_at_crossing() {
    // Columns 300, 400, ..., 700; level 499 crosses cell x = 1 at mu = 0.99.
    let field = ElevationField::from_samples(ramp_samples(5, 300, 100, 0)).unwrap();
    let set = ContourExtractor::new(&field).extract(&[499.0]);
    assert_eq!(set.segment_count(), 4);

    let config = lines_only();
    let rgba = render_field(&field, &set, &config).unwrap();
    let (width, _) = canvas_size(5, &config);

    // Raster x = 1.99 lands on pixel column ~24.9.
    let on_line = pixel(&rgba, width, 24, 25);
    assert!(on_line[0] < 128, "expected dark stroke, got {:?}", on_line);

    let away = pixel(&rgba, width, 5, 25);
    assert_eq!(away, [255, 255, 255, 255]);
}

#[test]
fn test_major_lines_are_wider() {
    let field = ElevationField::from_samples(ramp_samples(5, 300, 100, 0)).unwrap();
    let config = lines_only();
    let (width, _) = canvas_size(5, &config);

    let dark_in_row = |threshold: f64| {
        let set = ContourExtractor::new(&field).extract(&[threshold]);
        let rgba = render_field(&field, &set, &config).unwrap();
        (0..width).filter(|&x| pixel(&rgba, width, x, 25)[0] < 200).count()
    };

    // 499 is nominal 500 (major), 449 is nominal 450 (minor).
    assert!(dark_in_row(499.0) > dark_in_row(449.0));
}

#[test]
fn test_mismatched_set_rejected() {
    let small = ElevationField::from_samples(uniform_samples(3, 500)).unwrap();
    let large = ElevationField::from_samples(uniform_samples(4, 500)).unwrap();
    let set = ContourExtractor::new(&large).extract(&[499.0]);

    let err = render_field(&small, &set, &RenderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("4x4"));
}

#[test]
fn test_invalid_config_rejected() {
    let field = ElevationField::from_samples(uniform_samples(3, 500)).unwrap();
    let set = ContourExtractor::new(&field).extract(&[]);
    let config = RenderConfig {
        minor_line_width: 0.0,
        ..Default::default()
    };
    assert!(render_field(&field, &set, &config).is_err());
}

#[test]
fn test_render_png_header() {
    let field = ElevationField::from_samples(terrain_samples(20)).unwrap();
    let set = ContourExtractor::new(&field).par_extract(&[549.0, 649.0, 749.0]);
    let config = RenderConfig {
        cell_size: 4.0,
        ..Default::default()
    };

    let png = render_png(&field, &set, &config).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 80);
    assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 80);
    // RGBA
    assert_eq!(png[25], 6);
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}
