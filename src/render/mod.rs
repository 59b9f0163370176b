mod primitives;
mod recording_surface;

pub use primitives::{Color, Font, Paint, sharp_pixel};
pub use recording_surface::{DrawCommand, RecordingSurface};

use crate::core::CanvasSize;
use crate::error::ChartResult;

/// Primitive drawing contract implemented by any drawing backend.
///
/// Path operations accumulate into the current path until the next
/// `begin_path`; `fill_path` and `stroke_path` paint it without clearing it.
/// Coordinates are surface pixels with the origin at the top-left corner.
pub trait DrawingSurface {
    /// Current drawable size. Non-positive or non-finite sizes mean the
    /// surface cannot host a chart.
    fn size(&self) -> CanvasSize;

    /// Device pixels per surface pixel, used for sharp-line snapping.
    fn pixel_ratio(&self) -> f64 {
        1.0
    }

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Appends a full circle as a closed sub-path.
    fn arc(&mut self, x: f64, y: f64, radius: f64);

    /// Dash pattern for subsequent strokes; an empty slice draws solid lines.
    fn set_line_dash(&mut self, pattern: &[f64]);

    fn fill_path(&mut self, paint: Paint) -> ChartResult<()>;
    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()>;
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font: Font, color: Color)
    -> ChartResult<()>;
    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
