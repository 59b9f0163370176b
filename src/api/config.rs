use serde::{Deserialize, Serialize};

use crate::core::GridTuning;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Font};

/// Engine constants for gestures, clamping and grid density.
///
/// Serializable so hosts can persist tuning next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTuning {
    /// Higher values take larger horizontal zoom steps.
    pub zoom_speed: f64,
    /// Reserved panel on the right edge the history may not retreat past.
    pub right_margin_px: f64,
    /// Density guard: narrowest per-sample width a zoom may produce.
    pub min_sample_spacing_px: f64,
    /// Density guard: widest per-sample width a zoom may produce.
    pub max_sample_spacing_px: f64,
    /// Price-axis drag distance that changes the vertical zoom by 100%.
    pub vertical_zoom_sensitivity_px: f64,
    pub min_vertical_zoom: f64,
    pub max_vertical_zoom: f64,
    pub initial_vertical_zoom: f64,
    #[serde(default)]
    pub grid: GridTuning,
}

impl Default for ChartTuning {
    fn default() -> Self {
        Self {
            zoom_speed: 4.0,
            right_margin_px: 200.0,
            min_sample_spacing_px: 1.0,
            max_sample_spacing_px: 150.0,
            vertical_zoom_sensitivity_px: 300.0,
            min_vertical_zoom: 0.05,
            max_vertical_zoom: 50.0,
            initial_vertical_zoom: 1.5,
            grid: GridTuning::default(),
        }
    }
}

impl ChartTuning {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("zoom_speed", self.zoom_speed),
            ("min_sample_spacing_px", self.min_sample_spacing_px),
            ("max_sample_spacing_px", self.max_sample_spacing_px),
            (
                "vertical_zoom_sensitivity_px",
                self.vertical_zoom_sensitivity_px,
            ),
            ("min_vertical_zoom", self.min_vertical_zoom),
            ("max_vertical_zoom", self.max_vertical_zoom),
            ("initial_vertical_zoom", self.initial_vertical_zoom),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::Configuration(format!(
                    "tuning `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.right_margin_px.is_finite() || self.right_margin_px < 0.0 {
            return Err(ChartError::Configuration(
                "tuning `right_margin_px` must be finite and >= 0".to_owned(),
            ));
        }
        if self.max_sample_spacing_px < self.min_sample_spacing_px {
            return Err(ChartError::Configuration(
                "sample spacing band must satisfy min <= max".to_owned(),
            ));
        }
        if self.max_vertical_zoom < self.min_vertical_zoom
            || !(self.min_vertical_zoom..=self.max_vertical_zoom)
                .contains(&self.initial_vertical_zoom)
        {
            return Err(ChartError::Configuration(
                "vertical zoom must satisfy min <= initial <= max".to_owned(),
            ));
        }
        self.grid.validate()?;
        Ok(self)
    }
}

/// `graphStroke` options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStrokeOptions {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub hover_width: Option<f64>,
}

/// `graphFill` options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFillOptions {
    #[serde(default)]
    pub gradient_start: Option<String>,
    #[serde(default)]
    pub gradient_end: Option<String>,
}

/// Construction-time appearance overrides.
///
/// Every field is optional and overrides only its own default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default)]
    pub graph_stroke: Option<GraphStrokeOptions>,
    #[serde(default)]
    pub graph_fill: Option<GraphFillOptions>,
}

impl ChartOptions {
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::Configuration(format!("invalid chart options: {err}")))
    }
}

/// Resolved colors, widths and fonts used by the render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub hover_stroke_width: f64,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub frame_color: Color,
    pub grid_color: Color,
    pub grid_line_width: f64,
    pub grid_label_color: Color,
    /// Distance of grid labels from the right canvas edge.
    pub grid_label_inset_px: f64,
    pub crosshair_color: Color,
    pub crosshair_width: f64,
    pub pointer_color: Color,
    pub pointer_halo_color: Color,
    pub readout_color: Color,
    pub label_font: Font,
    pub readout_font: Font,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgba8(0xff, 0xff, 0xff, 0x99),
            stroke_width: 1.0,
            hover_stroke_width: 1.5,
            gradient_start: Color::rgba8(0xaa, 0xaa, 0xff, 0x59),
            gradient_end: Color::rgba8(0xaa, 0xaa, 0xff, 0x00),
            bullish_color: Color::rgba8(0x24, 0xa5, 0x99, 0xff),
            bearish_color: Color::rgba8(0xec, 0x54, 0x4f, 0xff),
            frame_color: Color::rgba8(0xff, 0xff, 0xff, 0x22),
            grid_color: Color::rgba8(0xff, 0xff, 0xff, 0x33),
            grid_line_width: 0.5,
            grid_label_color: Color::rgba8(0xff, 0xff, 0xff, 0x44),
            grid_label_inset_px: 60.0,
            crosshair_color: Color::rgba8(0x66, 0x66, 0x66, 0xff),
            crosshair_width: 0.5,
            pointer_color: Color::rgba8(0xaa, 0xaa, 0xff, 0xff),
            pointer_halo_color: Color::rgba8(0xaa, 0xaa, 0xff, 0x99),
            readout_color: Color::rgb(1.0, 1.0, 1.0),
            label_font: Font::new("Verdana", 11.0),
            readout_font: Font::new("Verdana", 12.0),
        }
    }
}

impl SeriesStyle {
    /// Applies each present option over the current values.
    pub fn with_options(mut self, options: &ChartOptions) -> ChartResult<Self> {
        if let Some(stroke) = &options.graph_stroke {
            if let Some(color) = &stroke.color {
                self.stroke_color = parse_option_color("graphStroke.color", color)?;
            }
            if let Some(width) = stroke.width {
                self.stroke_width = positive_width("graphStroke.width", width)?;
            }
            if let Some(hover_width) = stroke.hover_width {
                self.hover_stroke_width = positive_width("graphStroke.hoverWidth", hover_width)?;
            }
        }

        if let Some(fill) = &options.graph_fill {
            if let Some(start) = &fill.gradient_start {
                self.gradient_start = parse_option_color("graphFill.gradientStart", start)?;
            }
            if let Some(end) = &fill.gradient_end {
                self.gradient_end = parse_option_color("graphFill.gradientEnd", end)?;
            }
        }

        Ok(self)
    }
}

fn parse_option_color(name: &str, value: &str) -> ChartResult<Color> {
    Color::from_hex(value)
        .map_err(|err| ChartError::Configuration(format!("option `{name}`: {err}")))
}

fn positive_width(name: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::Configuration(format!(
            "option `{name}` must be finite and > 0"
        )));
    }
    Ok(value)
}
