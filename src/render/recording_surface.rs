use crate::core::CanvasSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, Font, Paint};

/// One recorded call on a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
    },
    LineDash(Vec<f64>),
    Fill(Paint),
    Stroke {
        color: Color,
        width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size_px: f64,
        color: Color,
    },
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Headless surface that records every draw call.
///
/// Used by tests and headless hosts. Paint operations still validate their
/// inputs so invalid geometry surfaces as an error before a real backend is
/// involved.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: CanvasSize,
    pixel_ratio: f64,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: CanvasSize::new(width, height),
            pixel_ratio: 1.0,
            commands: Vec::new(),
            frames: 0,
        }
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Simulates the host resizing the underlying surface.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = CanvasSize::new(width, height);
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent full-canvas clear.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| matches!(command, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of full-canvas clears, i.e. frames started.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius });
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.commands.push(DrawCommand::LineDash(pattern.to_vec()));
    }

    fn fill_path(&mut self, paint: Paint) -> ChartResult<()> {
        paint.validate()?;
        self.commands.push(DrawCommand::Fill(paint));
        Ok(())
    }

    fn stroke_path(&mut self, color: Color, width: f64) -> ChartResult<()> {
        color.validate()?;
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::Stroke { color, width });
        Ok(())
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
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            size_px: font.size_px,
            color,
        });
        Ok(())
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        if x == 0.0 && y == 0.0 && width >= self.size.width && height >= self.size.height {
            self.frames += 1;
        }
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }
}
