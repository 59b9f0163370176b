//! Adaptive price grid planning.
//!
//! The planner picks a gridline count whose pixel spacing stays inside a
//! readable band, anchors the lines on rounded extrema, and extends the line
//! set until it covers the whole canvas height even after vertical zoom.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::normalizer::PriceProjection;
use crate::error::{ChartError, ChartResult};

/// Tuning for grid density and the termination guards of its searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridTuning {
    /// Tightest allowed spacing between gridlines.
    pub min_step_px: f64,
    /// Loosest allowed spacing between gridlines.
    pub max_step_px: f64,
    pub default_segments: u32,
    /// Used when the segment search does not settle within `max_iterations`.
    pub fallback_segments: u32,
    pub max_iterations: u32,
    /// Rounding resolutions tried are `1, 0.1, 0.01, ...`, at most this many.
    pub max_rounding_attempts: u32,
    pub max_lines: usize,
}

impl Default for GridTuning {
    fn default() -> Self {
        Self {
            min_step_px: 30.0,
            max_step_px: 80.0,
            default_segments: 20,
            fallback_segments: 6,
            max_iterations: 64,
            max_rounding_attempts: 12,
            max_lines: 256,
        }
    }
}

impl GridTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_step_px.is_finite()
            || !self.max_step_px.is_finite()
            || self.min_step_px <= 0.0
            || self.max_step_px < self.min_step_px
        {
            return Err(ChartError::Configuration(
                "grid step band must be finite with 0 < min <= max".to_owned(),
            ));
        }
        if self.default_segments == 0 || self.fallback_segments == 0 {
            return Err(ChartError::Configuration(
                "grid segment counts must be > 0".to_owned(),
            ));
        }
        if self.max_rounding_attempts == 0 || self.max_lines == 0 {
            return Err(ChartError::Configuration(
                "grid rounding attempts and line cap must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One horizontal gridline with the price shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
}

/// Ordered gridlines for one frame, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPlan {
    pub lines: SmallVec<[GridLine; 32]>,
    pub segments: u32,
    pub step_px: f64,
    /// Price distance between neighbouring labels, used for label precision.
    pub value_step: f64,
    /// `true` when the range was flat and a single line was emitted instead.
    pub is_fallback: bool,
}

impl GridPlan {
    fn single_line(y: f64, value: f64) -> Self {
        let mut lines = SmallVec::new();
        lines.push(GridLine { y, value });
        Self {
            lines,
            segments: 1,
            step_px: 0.0,
            value_step: 0.0,
            is_fallback: true,
        }
    }
}

/// Rounds `value` to the nearest multiple of `resolution`.
#[must_use]
pub fn round_to_resolution(value: f64, resolution: f64) -> f64 {
    (value / resolution).round() * resolution
}

/// Searches for a resolution at which `top` and `bottom` round apart.
///
/// Starts at `1` and refines by a decade per attempt. The resolution only
/// ever gets finer: a coarser one cannot separate values that already round
/// together. Returns the rounded pair, or `None` once `max_attempts` is
/// exhausted (flat or near-flat range).
#[must_use]
pub fn non_degenerate_rounding(top: f64, bottom: f64, max_attempts: u32) -> Option<(f64, f64)> {
    let mut resolution = 1.0_f64;
    for _ in 0..max_attempts {
        let rounded_top = round_to_resolution(top, resolution);
        let rounded_bottom = round_to_resolution(bottom, resolution);
        if rounded_top != rounded_bottom {
            return Some((rounded_top, rounded_bottom));
        }
        resolution /= 10.0;
    }
    None
}

/// Converges a segment count whose pixel step lies inside the tuning band.
///
/// Shrinks by a fifth while steps are too tight and grows by a fifth while
/// they are too loose. Falls back to `fallback_segments` when the search does
/// not settle within `max_iterations`.
#[must_use]
pub fn converge_segments(range_px: f64, tuning: GridTuning) -> u32 {
    let range_px = range_px.abs();
    let mut segments = tuning.default_segments.max(1);

    for _ in 0..tuning.max_iterations {
        let step = range_px / f64::from(segments);
        if step < tuning.min_step_px && segments > 1 {
            segments -= (segments / 5).max(1);
        } else if step > tuning.max_step_px {
            segments += (segments / 5).max(1);
        } else {
            return segments;
        }
    }

    tuning.fallback_segments
}

/// Plans gridlines for the visible `[bottom, top]` price range.
///
/// Gridline Y uses the series' own projection, zoomed around the raw range
/// midpoint rather than the rounded one, so lines stay aligned with samples.
/// `top == bottom` yields a single centred fallback line rather than an error.
pub fn plan_grid(
    top: f64,
    bottom: f64,
    height: f64,
    zoom: f64,
    tuning: GridTuning,
) -> ChartResult<GridPlan> {
    if !top.is_finite() || !bottom.is_finite() {
        return Err(ChartError::InvalidData(
            "grid extrema must be finite".to_owned(),
        ));
    }

    let Some((rounded_top, rounded_bottom)) =
        non_degenerate_rounding(top, bottom, tuning.max_rounding_attempts)
    else {
        tracing::debug!(top, bottom, "flat price range, single fallback gridline");
        return Ok(GridPlan::single_line(height / 2.0, top));
    };

    // Rounded extrema are distinct, so the raw ones are too.
    let projection = PriceProjection::new(top, bottom, height, zoom)?;
    let top_y = projection.price_to_pixel(rounded_top);
    let bottom_y = projection.price_to_pixel(rounded_bottom);

    let range_px = bottom_y - top_y;
    let segments = converge_segments(range_px, tuning);
    let step_px = range_px / f64::from(segments);
    let value_step = (top - bottom) / f64::from(segments);
    if step_px.abs() < f64::EPSILON {
        return Ok(GridPlan::single_line(height / 2.0, top));
    }

    // Line indices relative to the nominal top, extended above it until
    // y = 0 and below the nominal bottom until the canvas floor.
    let first = (-top_y / step_px).ceil() as i64;
    let last = ((height - top_y) / step_px).floor() as i64;
    let value_at = |index: f64| top - index * value_step;

    let mut lines = SmallVec::new();
    for index in first..=last {
        if lines.len() >= tuning.max_lines {
            break;
        }
        let y = top_y + index as f64 * step_px;
        if y < 0.0 || y > height {
            continue;
        }
        lines.push(GridLine {
            y,
            value: value_at(index as f64),
        });
    }

    if lines.is_empty() {
        // Step wider than the canvas: keep one labelled line in view.
        let mid = height / 2.0;
        return Ok(GridPlan::single_line(mid, value_at((mid - top_y) / step_px)));
    }

    Ok(GridPlan {
        lines,
        segments,
        step_px,
        value_step,
        is_fallback: false,
    })
}

#[cfg(test)]
mod tests {
    use super::{GridTuning, converge_segments, non_degenerate_rounding};

    #[test]
    fn rounding_refines_until_extrema_separate() {
        let (top, bottom) = non_degenerate_rounding(100.4, 100.2, 12).expect("separates");
        assert!(top > bottom);
        assert!(non_degenerate_rounding(100.0, 100.0, 12).is_none());
    }

    #[test]
    fn segment_search_lands_inside_band() {
        let tuning = GridTuning::default();
        for range in [120.0, 400.0, 900.0, 1_600.0, 4_000.0] {
            let segments = converge_segments(range, tuning);
            let step = range / f64::from(segments);
            assert!(
                (tuning.min_step_px..=tuning.max_step_px).contains(&step),
                "range {range} gave step {step}"
            );
        }
    }

    #[test]
    fn tiny_range_collapses_to_one_segment() {
        assert_eq!(converge_segments(5.0, GridTuning::default()), 1);
    }

    #[test]
    fn oscillating_band_uses_fallback() {
        let tuning = GridTuning {
            min_step_px: 50.0,
            max_step_px: 50.1,
            ..GridTuning::default()
        };
        assert_eq!(converge_segments(1_003.0, tuning), tuning.fallback_segments);
    }
}
