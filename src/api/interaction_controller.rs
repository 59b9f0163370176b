use tracing::{debug, trace};

use crate::core::{ZoomDirection, nearest_index, sample_spacing};
use crate::error::ChartResult;
use crate::interaction::{ChartEvent, GestureEffect};
use crate::render::DrawingSurface;

use super::{Chart, SeriesKind};

impl<V: SeriesKind, S: DrawingSurface> Chart<V, S> {
    /// Feeds one input event through the gesture state machine.
    ///
    /// Every event completes its state mutation and redraw before returning.
    /// Only drawing-surface failures are reported as errors.
    pub fn handle_event(&mut self, event: ChartEvent) -> ChartResult<()> {
        let effect = self.interaction.apply(event);
        trace!(?event, ?effect, "chart event");

        match effect {
            GestureEffect::None => Ok(()),
            GestureEffect::Redraw => self.render(),
            GestureEffect::Hover => {
                self.resolve_pointer_index();
                self.render()
            }
            GestureEffect::Pan { delta_x } => {
                self.pan(delta_x)?;
                self.resolve_pointer_index();
                self.render()
            }
            GestureEffect::VerticalZoom { movement_y } => {
                self.zoom_vertical(movement_y)?;
                self.render()
            }
            GestureEffect::WheelZoom {
                direction,
                anchor_x,
            } => {
                self.zoom(direction, anchor_x)?;
                self.resolve_pointer_index();
                self.render()
            }
            GestureEffect::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Pans the viewport and re-normalizes. Returns `false` when rejected at a bound.
    pub fn pan(&mut self, delta_x: f64) -> ChartResult<bool> {
        let mut viewport = self.viewport;
        if !viewport.pan(delta_x, self.bounds()) {
            trace!(delta_x, "pan rejected at bound");
            return Ok(false);
        }
        self.geometry = self.projected(&self.history, viewport, self.canvas, self.vertical_zoom)?;
        self.viewport = viewport;
        Ok(true)
    }

    /// One horizontal zoom step anchored at `anchor_x`.
    ///
    /// Rejected when the per-sample width would leave the density band and
    /// move further away from it than it already is.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor_x: f64) -> ChartResult<bool> {
        let candidate =
            self.viewport
                .zoomed(direction, anchor_x, self.tuning.zoom_speed, self.bounds());
        if candidate == self.viewport {
            return Ok(false);
        }

        let count = self.history.len();
        if count > 0 {
            let current = sample_spacing(self.viewport, count);
            let next = sample_spacing(candidate, count);
            let too_dense = next < self.tuning.min_sample_spacing_px && next < current;
            let too_sparse = next > self.tuning.max_sample_spacing_px && next > current;
            if too_dense || too_sparse {
                debug!(current, next, ?direction, "zoom rejected by density guard");
                return Ok(false);
            }
        }

        self.geometry =
            self.projected(&self.history, candidate, self.canvas, self.vertical_zoom)?;
        self.viewport = candidate;
        Ok(true)
    }

    /// Grows the cumulative vertical zoom factor by a price-axis drag.
    pub fn zoom_vertical(&mut self, movement_y: f64) -> ChartResult<()> {
        let mut zoom = self.vertical_zoom;
        zoom.accumulate(
            movement_y,
            self.tuning.vertical_zoom_sensitivity_px,
            self.tuning.min_vertical_zoom,
            self.tuning.max_vertical_zoom,
        );
        self.geometry = self.projected(&self.history, self.viewport, self.canvas, zoom)?;
        self.vertical_zoom = zoom;
        Ok(())
    }

    fn resolve_pointer_index(&mut self) {
        let index = nearest_index(
            self.interaction.pointer().x,
            self.viewport,
            self.history.len(),
        );
        self.interaction.set_pointer_index(index);
    }
}
