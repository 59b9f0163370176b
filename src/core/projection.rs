use std::fmt::Debug;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::grid::{GridPlan, GridTuning, plan_grid};
use crate::core::normalizer::{PriceProjection, sample_spacing, to_pixel_x};
use crate::core::sample::{Extremum, PriceField, Sample, extrema, visible_range};
use crate::core::{CanvasSize, Viewport};
use crate::error::ChartResult;

/// Half-height (in price units) of the synthetic range used for flat history.
const FLAT_RANGE_HALF_SPAN: f64 = 0.5;

/// Per-variant geometry capability: how one sample becomes pixel geometry.
pub trait SeriesProjection: Sync {
    type Sample: Sample + Send + Sync;
    type Geometry: Copy + Debug + Send;

    fn project_sample(
        &self,
        sample: &Self::Sample,
        center_x: f64,
        spacing: f64,
        prices: PriceProjection,
    ) -> Self::Geometry;
}

/// Screen-space output of one full normalization pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry<G> {
    /// One entry per History sample, in History order.
    pub items: Vec<G>,
    pub spacing: f64,
    pub visible: Range<usize>,
    pub top: Extremum,
    pub bottom: Extremum,
    pub prices: PriceProjection,
    pub grid: GridPlan,
}

/// Projects the whole history against the viewport and vertical zoom.
///
/// Always recomputes from raw prices; previously projected pixels are never
/// rescaled. Returns `Ok(None)` when no sample is visible.
pub fn project<V: SeriesProjection>(
    variant: &V,
    history: &[V::Sample],
    viewport: Viewport,
    canvas: CanvasSize,
    zoom: f64,
    grid_tuning: GridTuning,
) -> ChartResult<Option<ScreenGeometry<V::Geometry>>> {
    let visible = visible_range(history.len(), viewport, canvas.width);
    let subset = || {
        history[visible.clone()]
            .iter()
            .enumerate()
            .map(|(offset, sample)| (visible.start + offset, sample))
    };
    let (Some(top), Some(bottom)) = (
        extrema(subset(), PriceField::High),
        extrema(subset(), PriceField::Low),
    ) else {
        return Ok(None);
    };

    let (range_top, range_bottom) = if top.value == bottom.value {
        debug!(value = top.value, "flat visible range, centring series");
        (
            top.value + FLAT_RANGE_HALF_SPAN,
            bottom.value - FLAT_RANGE_HALF_SPAN,
        )
    } else {
        (top.value, bottom.value)
    };
    let prices = PriceProjection::new(range_top, range_bottom, canvas.height, zoom)?;
    let grid = plan_grid(top.value, bottom.value, canvas.height, zoom, grid_tuning)?;
    let spacing = sample_spacing(viewport, history.len());
    let count = history.len();

    #[cfg(feature = "parallel-projection")]
    let items = history
        .par_iter()
        .enumerate()
        .map(|(index, sample)| {
            variant.project_sample(sample, to_pixel_x(index, viewport, count), spacing, prices)
        })
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let items = history
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            variant.project_sample(sample, to_pixel_x(index, viewport, count), spacing, prices)
        })
        .collect();

    Ok(Some(ScreenGeometry {
        items,
        spacing,
        visible,
        top,
        bottom,
        prices,
        grid,
    }))
}
