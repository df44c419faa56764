//! Elevation color ramp.

use elevation::ElevationRange;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Hue at the bottom of the ramp (green).
const LOW_HUE: f64 = 0.33;
const SATURATION: f64 = 1.0;
const BRIGHTNESS: f64 = 0.75;

/// Convert hue/saturation/brightness, each in `[0, 1]`, to an opaque color.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Color {
    // rem_euclid can round a tiny negative hue up to exactly 1.0
    let h = (hue.rem_euclid(1.0) * 6.0) % 6.0;
    let sector = h.floor();
    let f = h - sector;

    let v = brightness;
    let p = v * (1.0 - saturation);
    let q = v * (1.0 - saturation * f);
    let t = v * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(to_byte(r), to_byte(g), to_byte(b), 255)
}

/// Green at the low end of the range, through yellow, to red at the top.
///
/// `percent` is clamped to `[0, 1]` before picking the hue.
pub fn elevation_color(percent: f64) -> Color {
    let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };
    hsb_to_rgb(LOW_HUE - percent / 3.0, SATURATION, BRIGHTNESS)
}

/// Color for a raw elevation within `range`.
pub fn color_for_elevation(elevation: i32, range: &ElevationRange) -> Color {
    elevation_color(range.percent(elevation))
}
