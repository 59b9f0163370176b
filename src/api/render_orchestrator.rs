use tracing::{debug, trace};

use crate::core::primitives::format_price;
use crate::core::{GridPlan, to_pixel_x};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, sharp_pixel};

use super::{Chart, DrawContext, PointerFrame, SeriesKind};

/// Top-left anchor of the pointer readout and the distance between its lines.
const READOUT_ORIGIN: (f64, f64) = (10.0, 50.0);
const READOUT_LINE_STEP: f64 = 20.0;
/// Grid labels sit this far above their line.
const LABEL_LIFT_PX: f64 = 5.0;
const FRAME_WIDTH: f64 = 1.0;

impl<V: SeriesKind, S: DrawingSurface> Chart<V, S> {
    /// Draws one frame: clear, grid, series, pointer overlay.
    ///
    /// With nothing visible the canvas is left cleared.
    pub fn render(&mut self) -> ChartResult<()> {
        let canvas = self.canvas;
        self.surface
            .clear_region(0.0, 0.0, canvas.width, canvas.height)?;

        let Some(geometry) = self.geometry.as_ref() else {
            debug!(samples = self.history.len(), "no history");
            return Ok(());
        };

        let pointer = self.interaction.pointer();
        let ctx = DrawContext {
            canvas,
            pixel_ratio: self.surface.pixel_ratio(),
            stroke_width: if pointer.visible {
                self.style.hover_stroke_width
            } else {
                self.style.stroke_width
            },
            style: self.style,
        };

        draw_grid(&mut self.surface, &geometry.grid, ctx)?;
        self.variant.draw_series(&mut self.surface, geometry, ctx)?;

        if pointer.visible && !self.history.is_empty() {
            let index = pointer.index.min(self.history.len() - 1);
            let frame = PointerFrame {
                index,
                x: to_pixel_x(index, self.viewport, self.history.len()),
                y: pointer.y,
            };
            self.variant
                .draw_pointer(&mut self.surface, geometry, frame, ctx)?;

            let (x, mut y) = READOUT_ORIGIN;
            for line in self.variant.readout(&self.history[index]) {
                self.surface
                    .draw_text(&line, x, y, ctx.style.readout_font, ctx.style.readout_color)?;
                y += READOUT_LINE_STEP;
            }
        }

        trace!(
            left = self.viewport.left(),
            right = self.viewport.right(),
            zoom = self.vertical_zoom.factor(),
            "frame rendered"
        );
        Ok(())
    }
}

fn draw_grid(surface: &mut dyn DrawingSurface, grid: &GridPlan, ctx: DrawContext) -> ChartResult<()> {
    let style = ctx.style;

    surface.begin_path();
    surface.draw_rect(0.0, 0.0, ctx.canvas.width, ctx.canvas.height);
    surface.stroke_path(style.frame_color, FRAME_WIDTH)?;

    surface.begin_path();
    for line in &grid.lines {
        let y = sharp_pixel(line.y, ctx.pixel_ratio, style.grid_line_width);
        surface.move_to(0.0, y);
        surface.line_to(ctx.canvas.width, y);
    }
    surface.stroke_path(style.grid_color, style.grid_line_width)?;

    let label_x = ctx.canvas.width - style.grid_label_inset_px;
    for line in &grid.lines {
        surface.draw_text(
            &format_price(line.value, grid.value_step),
            label_x,
            line.y - LABEL_LIFT_PX,
            style.label_font,
            style.grid_label_color,
        )?;
    }
    Ok(())
}
