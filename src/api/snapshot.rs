use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, GridPlan, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionMode, PointerState};
use crate::render::DrawingSurface;

use super::{Chart, SeriesKind};

/// Serializable view of a chart's state for diagnostics and regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub canvas: CanvasSize,
    pub viewport: Viewport,
    pub vertical_zoom: f64,
    pub mode: InteractionMode,
    pub pointer: PointerState,
    pub sample_count: usize,
    pub sample_spacing: Option<f64>,
    pub visible: Option<Range<usize>>,
    pub grid: Option<GridPlan>,
}

impl<V: SeriesKind, S: DrawingSurface> Chart<V, S> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let geometry = self.geometry.as_ref();
        ChartSnapshot {
            canvas: self.canvas,
            viewport: self.viewport,
            vertical_zoom: self.vertical_zoom.factor(),
            mode: self.interaction.mode(),
            pointer: self.interaction.pointer(),
            sample_count: self.history.len(),
            sample_spacing: geometry.map(|geometry| geometry.spacing),
            visible: geometry.map(|geometry| geometry.visible.clone()),
            grid: geometry.map(|geometry| geometry.grid.clone()),
        }
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn snapshot_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
