use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Divisor numerator for one zoom step: a step moves each edge by
/// `distance_to_anchor / (ZOOM_STEP_BASE / zoom_speed)`.
const ZOOM_STEP_BASE: f64 = 20.0;

/// Direction of one horizontal zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    /// Widens the floating width (fewer samples per pixel).
    In,
    /// Narrows the floating width.
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }

    /// Maps a wheel delta to a direction; scrolling up (negative delta) zooms in.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }
}

/// Clamp limits for the horizontal viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub width: f64,
    /// Reserved panel width on the right that the history may not retreat past.
    pub margin: f64,
}

impl ViewportBounds {
    #[must_use]
    pub const fn new(width: f64, margin: f64) -> Self {
        Self { width, margin }
    }

    /// Smallest allowed `right`.
    #[must_use]
    pub fn min_right(self) -> f64 {
        self.width - self.margin
    }
}

/// Horizontal pixel window the full history is mapped into.
///
/// Invariants after every mutation: `left <= 0` and
/// `right >= width - margin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    left: f64,
    right: f64,
}

impl Viewport {
    /// Home position: the history spans exactly the canvas width.
    #[must_use]
    pub const fn home(width: f64) -> Self {
        Self {
            left: 0.0,
            right: width,
        }
    }

    pub fn new(left: f64, right: f64) -> ChartResult<Self> {
        if !left.is_finite() || !right.is_finite() || right <= left {
            return Err(ChartError::InvalidData(
                "viewport edges must be finite with right > left".to_owned(),
            ));
        }
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    /// Pixel span the whole history is mapped into (`right - left`).
    #[must_use]
    pub fn floating_width(self) -> f64 {
        self.right - self.left
    }

    /// Shifts both edges by `delta` pixels and re-clamps.
    ///
    /// A pan pushing further past an edge that already sits exactly on its
    /// bound is rejected before mutation. Returns `true` when applied.
    pub fn pan(&mut self, delta: f64, bounds: ViewportBounds) -> bool {
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }
        if self.right == bounds.min_right() && delta < 0.0 {
            return false;
        }
        if self.left == 0.0 && delta > 0.0 {
            return false;
        }

        self.left += delta;
        self.right += delta;
        self.clamp(bounds);
        true
    }

    /// Returns the viewport after one zoom step anchored at `anchor_x`.
    ///
    /// Each edge moves away from (zoom in) or toward (zoom out) the anchor by
    /// its distance to the anchor divided by `20 / zoom_speed`.
    #[must_use]
    pub fn zoomed(
        self,
        direction: ZoomDirection,
        anchor_x: f64,
        zoom_speed: f64,
        bounds: ViewportBounds,
    ) -> Self {
        if !anchor_x.is_finite() || !zoom_speed.is_finite() || zoom_speed <= 0.0 {
            return self;
        }

        let divisor = ZOOM_STEP_BASE / zoom_speed;
        let sign = direction.sign();
        let mut next = Self {
            left: self.left + (self.left - anchor_x) / divisor * sign,
            right: self.right + (self.right - anchor_x) / divisor * sign,
        };
        next.clamp(bounds);
        next
    }

    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        anchor_x: f64,
        zoom_speed: f64,
        bounds: ViewportBounds,
    ) {
        *self = self.zoomed(direction, anchor_x, zoom_speed, bounds);
    }

    /// Applies `left = min(left, 0)` and `right = max(right, width - margin)`
    /// independently.
    pub fn clamp(&mut self, bounds: ViewportBounds) {
        if self.left > 0.0 {
            self.left = 0.0;
        }
        let min_right = bounds.min_right();
        if self.right < min_right {
            self.right = min_right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Viewport, ViewportBounds, ZoomDirection};

    #[test]
    fn clamp_rules_fire_independently() {
        let bounds = ViewportBounds::new(1000.0, 200.0);
        let mut viewport = Viewport::new(50.0, 300.0).expect("viewport");
        viewport.clamp(bounds);
        assert_eq!(viewport.left(), 0.0);
        assert_eq!(viewport.right(), 800.0);
    }

    #[test]
    fn wheel_delta_sign_selects_direction() {
        assert_eq!(ZoomDirection::from_wheel_delta(-120.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_wheel_delta(3.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), None);
        assert_eq!(ZoomDirection::from_wheel_delta(f64::NAN), None);
    }
}
