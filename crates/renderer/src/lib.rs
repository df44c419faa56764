//! Image rendering for elevation fields and their isolines.
//!
//! Implements:
//! - Elevation color ramp
//! - Canvas composition (shaded samples + contour strokes)
//! - PNG encoding

pub mod canvas;
pub mod color;
pub mod png;

pub use canvas::{canvas_size, render_field, render_png, RenderConfig, MAX_CANVAS_DIMENSION};
pub use color::{color_for_elevation, elevation_color, hsb_to_rgb, Color};
