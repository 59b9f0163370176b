use tracing::debug;

use crate::core::{
    CanvasSize, Candlestick, History, Line, ScreenGeometry, VerticalZoom, Viewport,
    ViewportBounds, project,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, PointerState};
use crate::render::DrawingSurface;

use super::{ChartOptions, ChartTuning, SeriesKind, SeriesStyle};

/// Chart context: owns the surface, history, viewport, zoom and gesture state.
///
/// Every instance is independent; nothing is shared between charts.
pub struct Chart<V: SeriesKind, S: DrawingSurface> {
    pub(super) surface: S,
    pub(super) variant: V,
    pub(super) canvas: CanvasSize,
    pub(super) tuning: ChartTuning,
    pub(super) style: SeriesStyle,
    pub(super) history: History<V::Sample>,
    pub(super) viewport: Viewport,
    pub(super) vertical_zoom: VerticalZoom,
    pub(super) interaction: InteractionState,
    pub(super) geometry: Option<ScreenGeometry<V::Geometry>>,
}

pub type CandlestickChart<S> = Chart<Candlestick, S>;
pub type LineChart<S> = Chart<Line, S>;

impl<V: SeriesKind + Default, S: DrawingSurface> Chart<V, S> {
    /// Builds an empty chart with default tuning and draws the first frame.
    pub fn new(surface: S, options: &ChartOptions) -> ChartResult<Self> {
        Self::with_tuning(surface, V::default(), options, ChartTuning::default())
    }

    /// Builds a chart and immediately loads `history`.
    pub fn with_history(
        surface: S,
        history: impl Into<History<V::Sample>>,
        options: &ChartOptions,
    ) -> ChartResult<Self> {
        let mut chart = Self::new(surface, options)?;
        chart.load_history(history)?;
        Ok(chart)
    }
}

impl<V: SeriesKind, S: DrawingSurface> Chart<V, S> {
    pub fn with_tuning(
        surface: S,
        variant: V,
        options: &ChartOptions,
        tuning: ChartTuning,
    ) -> ChartResult<Self> {
        let canvas = surface.size();
        if !canvas.is_valid() {
            return Err(ChartError::Configuration(format!(
                "drawing surface has no usable size ({}x{})",
                canvas.width, canvas.height
            )));
        }
        let pixel_ratio = surface.pixel_ratio();
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(ChartError::Configuration(
                "drawing surface pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        let tuning = tuning.validate()?;
        let style = SeriesStyle::default().with_options(options)?;

        let mut chart = Self {
            surface,
            variant,
            canvas,
            tuning,
            style,
            history: History::default(),
            viewport: Viewport::home(canvas.width),
            vertical_zoom: VerticalZoom::new(tuning.initial_vertical_zoom),
            interaction: InteractionState::default(),
            geometry: None,
        };
        chart.render()?;
        Ok(chart)
    }

    /// Replaces the history wholesale, re-normalizes and redraws.
    ///
    /// A rejected history leaves the previous history, geometry and pointer intact.
    pub fn load_history(&mut self, history: impl Into<History<V::Sample>>) -> ChartResult<()> {
        let history = history.into().validate()?;
        let geometry = self.projected(
            &history,
            self.viewport,
            self.canvas,
            self.vertical_zoom,
        )?;
        debug!(samples = history.len(), "history loaded");

        let last = history.len().saturating_sub(1);
        let index = self.interaction.pointer().index.min(last);
        self.history = history;
        self.geometry = geometry;
        self.interaction.set_pointer_index(index);
        self.render()
    }

    /// Adopts a new canvas size, re-clamps the viewport and re-normalizes.
    ///
    /// A viewport sitting at its home position follows the new width.
    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let canvas = CanvasSize::new(width, height).validate()?;
        let mut viewport = if self.viewport == Viewport::home(self.canvas.width) {
            Viewport::home(canvas.width)
        } else {
            self.viewport
        };
        viewport.clamp(ViewportBounds::new(canvas.width, self.tuning.right_margin_px));

        self.geometry = self.projected(&self.history, viewport, canvas, self.vertical_zoom)?;
        self.canvas = canvas;
        self.viewport = viewport;
        debug!(width, height, "chart resized");
        self.render()
    }

    /// Recomputes screen geometry from raw prices under candidate state.
    ///
    /// Callers commit the candidate only after this succeeds.
    pub(super) fn projected(
        &self,
        history: &[V::Sample],
        viewport: Viewport,
        canvas: CanvasSize,
        zoom: VerticalZoom,
    ) -> ChartResult<Option<ScreenGeometry<V::Geometry>>> {
        project(
            &self.variant,
            history,
            viewport,
            canvas,
            zoom.factor(),
            self.tuning.grid,
        )
    }

    #[must_use]
    pub fn bounds(&self) -> ViewportBounds {
        ViewportBounds::new(self.canvas.width, self.tuning.right_margin_px)
    }

    #[must_use]
    pub fn history(&self) -> &[V::Sample] {
        &self.history
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn vertical_zoom(&self) -> f64 {
        self.vertical_zoom.factor()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.interaction.pointer()
    }

    /// Geometry of the last normalization pass; `None` when nothing is visible.
    #[must_use]
    pub fn geometry(&self) -> Option<&ScreenGeometry<V::Geometry>> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn tuning(&self) -> ChartTuning {
        self.tuning
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
