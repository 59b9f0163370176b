use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Maps `price` into pixel Y for a `[bottom, top]` range drawn over `height`.
///
/// `top` maps to `0` and `bottom` to `height`. Fails with
/// `ChartError::DegenerateRange` when `top == bottom`.
pub fn to_pixel_y(price: f64, top: f64, bottom: f64, height: f64) -> ChartResult<f64> {
    if !price.is_finite() || !top.is_finite() || !bottom.is_finite() || !height.is_finite() {
        return Err(ChartError::InvalidData(
            "price mapping inputs must be finite".to_owned(),
        ));
    }
    if top == bottom {
        return Err(ChartError::DegenerateRange { top, bottom });
    }
    Ok(height - ((price - bottom) / (top - bottom)) * height)
}

/// Compresses (`zoom > 1`) or expands (`zoom < 1`) `y` around `mid`.
#[must_use]
pub fn apply_vertical_zoom(y: f64, mid: f64, zoom: f64) -> f64 {
    (y - mid) / zoom + mid
}

/// Pixel width one sample occupies inside the floating width.
#[must_use]
pub fn sample_spacing(viewport: Viewport, sample_count: usize) -> f64 {
    if sample_count == 0 {
        return 0.0;
    }
    viewport.floating_width() / sample_count as f64
}

#[must_use]
pub fn to_pixel_x(index: usize, viewport: Viewport, sample_count: usize) -> f64 {
    viewport.left() + index as f64 * sample_spacing(viewport, sample_count)
}

/// Resolves the sample nearest to a surface-local pointer X.
///
/// Always lands in `[0, sample_count - 1]` (or `0` for an empty history),
/// whatever the pointer position.
#[must_use]
pub fn nearest_index(pointer_x: f64, viewport: Viewport, sample_count: usize) -> usize {
    if sample_count == 0 {
        return 0;
    }
    let last = sample_count - 1;
    let position =
        ((pointer_x - viewport.left()) / viewport.floating_width() * sample_count as f64).round();

    if position.is_nan() || position <= 0.0 {
        0
    } else if position >= last as f64 {
        last
    } else {
        position as usize
    }
}

/// Price-to-pixel mapping for one normalization pass.
///
/// The vertical zoom factor is applied after the base mapping, around the
/// midpoint of the mapped `[bottom, top]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceProjection {
    top: f64,
    bottom: f64,
    height: f64,
    zoom: f64,
}

impl PriceProjection {
    pub fn new(top: f64, bottom: f64, height: f64, zoom: f64) -> ChartResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ChartError::InvalidData(
                "vertical zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "projection height must be finite and > 0".to_owned(),
            ));
        }
        // Validates the range through the same path every mapping takes.
        to_pixel_y(top, top, bottom, height)?;

        Ok(Self {
            top,
            bottom,
            height,
            zoom,
        })
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    fn base_y(self, price: f64) -> f64 {
        self.height - ((price - self.bottom) / (self.top - self.bottom)) * self.height
    }

    /// Midpoint of the mapped range before zoom; the zoom pivot.
    #[must_use]
    pub fn mid(self) -> f64 {
        (self.base_y(self.top) + self.base_y(self.bottom)) / 2.0
    }

    #[must_use]
    pub fn price_to_pixel(self, price: f64) -> f64 {
        apply_vertical_zoom(self.base_y(price), self.mid(), self.zoom)
    }

    #[must_use]
    pub fn pixel_to_price(self, pixel: f64) -> f64 {
        let mid = self.mid();
        let base = (pixel - mid) * self.zoom + mid;
        self.bottom + (self.height - base) / self.height * (self.top - self.bottom)
    }
}

/// Cumulative vertical zoom factor `k`.
///
/// Drag gestures grow it multiplicatively; it is never reset between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalZoom {
    factor: f64,
}

impl VerticalZoom {
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Applies `k += (movement_y / sensitivity_px) * k`, clamped to `[min, max]`.
    pub fn accumulate(&mut self, movement_y: f64, sensitivity_px: f64, min: f64, max: f64) {
        if !movement_y.is_finite() || !sensitivity_px.is_finite() || sensitivity_px <= 0.0 {
            return;
        }
        let next = self.factor + movement_y / sensitivity_px * self.factor;
        self.factor = next.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::{PriceProjection, VerticalZoom, to_pixel_y};
    use crate::error::ChartError;

    #[test]
    fn flat_range_is_reported_as_degenerate() {
        let err = to_pixel_y(100.0, 100.0, 100.0, 400.0).expect_err("flat range");
        assert!(matches!(err, ChartError::DegenerateRange { .. }));
    }

    #[test]
    fn projection_inverse_recovers_price() {
        let projection = PriceProjection::new(120.0, 80.0, 500.0, 1.7).expect("projection");
        let y = projection.price_to_pixel(97.5);
        assert!((projection.pixel_to_price(y) - 97.5).abs() <= 1e-9);
    }

    #[test]
    fn vertical_zoom_grows_with_downward_drag_and_stays_bounded() {
        let mut zoom = VerticalZoom::new(1.0);
        zoom.accumulate(30.0, 300.0, 0.05, 50.0);
        assert!((zoom.factor() - 1.1).abs() <= 1e-12);

        zoom.accumulate(-600.0, 300.0, 0.05, 50.0);
        assert_eq!(zoom.factor(), 0.05);
    }
}
