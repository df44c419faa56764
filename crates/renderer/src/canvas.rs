//! Drawing an elevation field and its isolines onto a raster canvas.
//!
//! Canvas coordinates follow the contour raster frame: the sample at grid
//! `(x, y)` sits at raster point `(x, N - 1 - y)`, so north is up. Each
//! raster point is the center of a `cell_size` square of pixels.

use contour::levels::is_major;
use contour::{connect_level, ContourSet};
use elevation::{ElevationField, ElevationRange};
use isoline_common::{IsolineError, IsolineResult};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::{debug, instrument};

use crate::color::color_for_elevation;
use crate::png::create_png;

/// Largest canvas edge we are willing to allocate, in pixels.
pub const MAX_CANVAS_DIMENSION: usize = 16_384;

/// Configuration for rendering a field with isolines
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of one sample square, in pixels
    pub cell_size: f32,
    /// Empty border around the grid, in pixels
    pub padding: f32,
    /// Line color [R, G, B, A]
    pub line_color: [u8; 4],
    /// Stroke width for ordinary levels
    pub minor_line_width: f32,
    /// Stroke width for levels on a multiple of `major_interval`
    pub major_line_width: f32,
    /// Spacing of major levels in elevation units
    pub major_interval: f64,
    /// Offset that was added to nominal levels before extraction
    pub level_offset: f64,
    /// Domain of the color ramp
    pub elevation_range: ElevationRange,
    /// Whether to fill sample squares with the elevation ramp
    pub draw_field: bool,
    /// Canvas background [R, G, B, A]
    pub background: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            padding: 0.0,
            line_color: [0, 0, 0, 255],
            minor_line_width: 1.0,
            major_line_width: 3.0,
            major_interval: 100.0,
            level_offset: -1.0,
            elevation_range: ElevationRange::default(),
            draw_field: true,
            background: [255, 255, 255, 255],
        }
    }
}

impl RenderConfig {
    /// Stroke width for an extraction threshold.
    pub fn line_width_for(&self, threshold: f64) -> f32 {
        if is_major(threshold - self.level_offset, self.major_interval) {
            self.major_line_width
        } else {
            self.minor_line_width
        }
    }

    pub fn validate(&self) -> IsolineResult<()> {
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(IsolineError::invalid_config("cell_size must be > 0"));
        }
        if !(self.padding >= 0.0) {
            return Err(IsolineError::invalid_config("padding must be >= 0"));
        }
        if !(self.minor_line_width > 0.0) || !(self.major_line_width > 0.0) {
            return Err(IsolineError::invalid_config("line widths must be > 0"));
        }
        self.elevation_range.validate()
    }
}

/// Pixel dimensions `(width, height)` of a square field of `field_size`.
pub fn canvas_size(field_size: usize, config: &RenderConfig) -> (usize, usize) {
    let edge = (field_size as f32 * config.cell_size + 2.0 * config.padding).ceil() as usize;
    (edge, edge)
}

/// Pixel position of a raster-frame coordinate.
fn to_pixel(coord: f64, config: &RenderConfig) -> f32 {
    config.padding + (coord as f32 + 0.5) * config.cell_size
}

/// Render a field and its extracted isolines to straight (non-premultiplied)
/// RGBA bytes, row-major from the top-left pixel.
#[instrument(skip_all, fields(size = field.size(), levels = set.levels.len()))]
pub fn render_field(field: &ElevationField, set: &ContourSet, config: &RenderConfig) -> IsolineResult<Vec<u8>> {
    config.validate()?;
    if set.size != field.size() {
        return Err(IsolineError::render(format!(
            "contour set was extracted from a {}x{} field, cannot draw over {}x{}",
            set.size,
            set.size,
            field.size(),
            field.size()
        )));
    }

    let (width, height) = canvas_size(field.size(), config);
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(IsolineError::render(format!(
            "canvas {}x{} exceeds the {} pixel limit",
            width, height, MAX_CANVAS_DIMENSION
        )));
    }
    let mut pixmap = Pixmap::new(width as u32, height as u32)
        .ok_or_else(|| IsolineError::render(format!("cannot allocate {}x{} canvas", width, height)))?;

    let [r, g, b, a] = config.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

    if config.draw_field {
        draw_samples(&mut pixmap, field, config);
    }

    let mut paint = Paint::default();
    let [r, g, b, a] = config.line_color;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let mut drawn = 0usize;
    for level in &set.levels {
        let mut stroke = Stroke::default();
        stroke.width = config.line_width_for(level.threshold);
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        for line in connect_level(level, set.size) {
            if line.points.len() < 2 {
                continue;
            }
            let mut pb = PathBuilder::new();
            pb.move_to(to_pixel(line.points[0].x, config), to_pixel(line.points[0].y, config));
            for point in &line.points[1..] {
                pb.line_to(to_pixel(point.x, config), to_pixel(point.y, config));
            }
            if line.closed {
                pb.close();
            }
            if let Some(path) = pb.finish() {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                drawn += 1;
            }
        }
    }
    debug!(width, height, polylines = drawn, "Rendered isoline canvas");

    Ok(pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect())
}

fn draw_samples(pixmap: &mut Pixmap, field: &ElevationField, config: &RenderConfig) {
    let n = field.size() as i32;
    let mut paint = Paint::default();
    paint.anti_alias = false;

    for sample in field.samples() {
        let raster_y = (n - 1 - sample.y) as f64;
        let left = to_pixel(sample.x as f64, config) - config.cell_size / 2.0;
        let top = to_pixel(raster_y, config) - config.cell_size / 2.0;
        let Some(rect) = Rect::from_xywh(left, top, config.cell_size, config.cell_size) else {
            continue;
        };
        let color = color_for_elevation(sample.elevation, &config.elevation_range);
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        let path = PathBuilder::from_rect(rect);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

/// Render a field and its isolines straight to PNG bytes.
pub fn render_png(field: &ElevationField, set: &ContourSet, config: &RenderConfig) -> IsolineResult<Vec<u8>> {
    let rgba = render_field(field, set, config)?;
    let (width, height) = canvas_size(field.size(), config);
    create_png(&rgba, width, height).map_err(IsolineError::render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size() {
        let config = RenderConfig::default();
        assert_eq!(canvas_size(100, &config), (1000, 1000));

        let padded = RenderConfig {
            cell_size: 4.0,
            padding: 2.0,
            ..Default::default()
        };
        assert_eq!(canvas_size(3, &padded), (16, 16));
    }

    #[test]
    fn test_line_width_for_major_levels() {
        let config = RenderConfig::default();
        // Extracted at nominal - 1.
        assert_eq!(config.line_width_for(499.0), 3.0);
        assert_eq!(config.line_width_for(449.0), 1.0);
        assert_eq!(config.line_width_for(500.0), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());
        let bad = RenderConfig {
            cell_size: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad_range = RenderConfig {
            elevation_range: ElevationRange::new(10.0, 10.0),
            ..Default::default()
        };
        assert!(bad_range.validate().is_err());
    }
}
