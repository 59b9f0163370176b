use crate::core::{CanvasSize, ScreenGeometry, SeriesProjection};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::SeriesStyle;

/// Per-frame drawing inputs shared by every series variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawContext {
    pub canvas: CanvasSize,
    pub pixel_ratio: f64,
    /// Current series stroke width (hover width while the pointer is over the chart).
    pub stroke_width: f64,
    pub style: SeriesStyle,
}

/// Resolved crosshair position for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFrame {
    /// History index the pointer snapped to.
    pub index: usize,
    /// Pixel X of that sample.
    pub x: f64,
    /// Raw pointer Y.
    pub y: f64,
}

/// Full capability set of a chart variant.
///
/// Extends the geometry capability with drawing and readout so the chart
/// engine stays generic over candlestick and line series.
pub trait SeriesKind: SeriesProjection {
    fn draw_series(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: &ScreenGeometry<Self::Geometry>,
        ctx: DrawContext,
    ) -> ChartResult<()>;

    fn draw_pointer(
        &self,
        surface: &mut dyn DrawingSurface,
        geometry: &ScreenGeometry<Self::Geometry>,
        pointer: PointerFrame,
        ctx: DrawContext,
    ) -> ChartResult<()>;

    /// Text lines shown in the top-left readout for the pointed sample.
    fn readout(&self, sample: &Self::Sample) -> Vec<String>;
}
