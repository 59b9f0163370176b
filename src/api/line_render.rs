use crate::core::primitives::format_timestamp;
use crate::core::{Line, LinePoint, ScalarSample, ScreenGeometry};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Paint, sharp_pixel};

use super::{DrawContext, PointerFrame, SeriesKind};

/// How far the filled area extends past each canvas side.
const AREA_OVERHANG_PX: f64 = 10.0;
const POINTER_HALO_RADIUS: f64 = 8.0;
const POINTER_DOT_RADIUS: f64 = 4.0;
const GUIDE_DASH: [f64; 2] = [8.0, 4.0];
const GUIDE_WIDTH: f64 = 1.0;

impl SeriesKind for Line {
    fn draw_series(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: &ScreenGeometry<LinePoint>,
        ctx: DrawContext,
    ) -> ChartResult<()> {
        let (Some(first), Some(last)) = (geometry.items.first(), geometry.items.last()) else {
            return Ok(());
        };
        let height = ctx.canvas.height;
        let area_left = first.x - AREA_OVERHANG_PX;
        let area_right = ctx.canvas.width + AREA_OVERHANG_PX;

        surface.begin_path();
        surface.move_to(area_left, height);
        surface.line_to(area_left, first.y);
        for point in &geometry.items {
            surface.line_to(point.x, point.y);
        }
        surface.line_to(area_right, last.y);
        surface.line_to(area_right, height + 1.0);

        surface.fill_path(Paint::VerticalGradient {
            top: 0.0,
            bottom: height,
            start: ctx.style.gradient_start,
            end: ctx.style.gradient_end,
        })?;
        surface.stroke_path(ctx.style.stroke_color, ctx.stroke_width)
    }

    fn draw_pointer(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: &ScreenGeometry<LinePoint>,
        pointer: PointerFrame,
        ctx: DrawContext,
    ) -> ChartResult<()> {
        let Some(point) = geometry.items.get(pointer.index) else {
            return Ok(());
        };

        surface.begin_path();
        surface.arc(point.x, point.y, POINTER_HALO_RADIUS);
        surface.fill_path(Paint::Solid(ctx.style.pointer_halo_color))?;

        surface.begin_path();
        surface.arc(point.x, point.y, POINTER_DOT_RADIUS);
        surface.fill_path(Paint::Solid(ctx.style.pointer_color))?;

        let x = sharp_pixel(point.x, ctx.pixel_ratio, GUIDE_WIDTH);
        surface.set_line_dash(&GUIDE_DASH);
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, ctx.canvas.height);
        surface.stroke_path(ctx.style.grid_color, GUIDE_WIDTH)?;
        surface.set_line_dash(&[]);
        Ok(())
    }

    fn readout(&self, sample: &ScalarSample) -> Vec<String> {
        vec![sample.value.to_string(), format_timestamp(sample.timestamp)]
    }
}
