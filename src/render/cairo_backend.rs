use std::f64::consts::TAU;

use cairo::{Context, Format, ImageSurface, LinearGradient, Operator};
use pango::FontDescription;

use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, Font, Paint};

/// Cairo + Pango drawing surface backed by an offscreen image surface.
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    pixel_ratio: f64,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Configuration(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            pixel_ratio: 1.0,
        })
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }
}

impl DrawingSurface for CairoSurface {
    fn size(&self) -> CanvasSize {
        CanvasSize::new(
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        )
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rectangle(x, y, width, height);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) {
        self.context.new_sub_path();
        self.context.arc(x, y, radius, 0.0, TAU);
        self.context.close_path();
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.context.set_dash(pattern, 0.0);
    }

    fn fill_path(&mut self, paint: Paint) -> ChartResult<()> {
        paint.validate()?;
        match paint {
            Paint::Solid(color) => apply_color(&self.context, color),
            Paint::VerticalGradient {
                top,
                bottom,
                start,
                end,
            } => {
                let gradient = LinearGradient::new(0.0, top, 0.0, bottom);
                gradient.add_color_stop_rgba(0.0, start.red, start.green, start.blue, start.alpha);
                gradient.add_color_stop_rgba(1.0, end.red, end.green, end.blue, end.alpha);
                self.context
                    .set_source(&gradient)
                    .map_err(|err| map_backend_error("failed to set gradient source", err))?;
            }
        }
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()> {
        color.validate()?;
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: Font,
        color: Color,
    ) -> ChartResult<()> {
        font.validate()?;
        color.validate()?;

        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", font.family, font.size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);

        // Canvas-style baseline: `y` is the text baseline, pango draws from the top.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(&self.context, color);
        self.context.move_to(x, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        Ok(())
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        self.context.set_operator(Operator::Clear);
        self.context.rectangle(x, y, width, height);
        let filled = self
            .context
            .fill()
            .map_err(|err| map_backend_error("failed to clear region", err));
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        filled
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
