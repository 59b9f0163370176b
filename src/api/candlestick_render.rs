use crate::core::primitives::format_timestamp;
use crate::core::{CandleGeometry, Candlestick, OhlcSample, ScreenGeometry};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, Paint, sharp_pixel};

use super::{DrawContext, PointerFrame, SeriesKind};

const CROSSHAIR_DASH: [f64; 2] = [5.0, 4.0];

impl SeriesKind for Candlestick {
    fn draw_series(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: &ScreenGeometry<CandleGeometry>,
        ctx: DrawContext,
    ) -> ChartResult<()> {
        // Candles more than a quarter spacing off-canvas are skipped.
        let cull = geometry.spacing / 4.0;

        for candle in &geometry.items {
            if candle.center_x > ctx.canvas.width + cull {
                break;
            }
            if candle.center_x < -cull {
                continue;
            }

            let color = if candle.is_bullish {
                ctx.style.bullish_color
            } else {
                ctx.style.bearish_color
            };

            surface.begin_path();
            surface.move_to(candle.center_x, candle.wick_top);
            surface.line_to(candle.center_x, candle.wick_bottom);
            surface.stroke_path(color, ctx.stroke_width)?;

            surface.begin_path();
            surface.draw_rect(
                candle.body_left,
                candle.body_top(),
                candle.body_width,
                candle.body_bottom() - candle.body_top(),
            );
            surface.fill_path(Paint::Solid(color))?;
        }
        Ok(())
    }

    fn draw_pointer(
        &self,
        surface: &mut dyn DrawingSurface,
        _geometry: &ScreenGeometry<CandleGeometry>,
        pointer: PointerFrame,
        ctx: DrawContext,
    ) -> ChartResult<()> {
        let width = ctx.style.crosshair_width;
        let x = sharp_pixel(pointer.x, ctx.pixel_ratio, width);
        let y = sharp_pixel(pointer.y, ctx.pixel_ratio, width);

        surface.set_line_dash(&CROSSHAIR_DASH);

        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, ctx.canvas.height);
        surface.stroke_path(ctx.style.crosshair_color, width)?;

        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(ctx.canvas.width, y);
        surface.stroke_path(ctx.style.crosshair_color, width)?;

        surface.set_line_dash(&[]);
        Ok(())
    }

    fn readout(&self, sample: &OhlcSample) -> Vec<String> {
        vec![
            format!(
                "O {}  H {}  L {}  C {}",
                sample.open, sample.high, sample.low, sample.close
            ),
            format_timestamp(sample.timestamp),
        ]
    }
}
