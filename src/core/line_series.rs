use serde::{Deserialize, Serialize};

use crate::core::normalizer::PriceProjection;
use crate::core::projection::SeriesProjection;
use crate::core::sample::ScalarSample;

/// Line (area) chart variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Line;

/// Projected line vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesProjection for Line {
    type Sample = ScalarSample;
    type Geometry = LinePoint;

    fn project_sample(
        &self,
        sample: &ScalarSample,
        center_x: f64,
        _spacing: f64,
        prices: PriceProjection,
    ) -> LinePoint {
        LinePoint {
            x: center_x,
            y: prices.price_to_pixel(sample.value),
        }
    }
}
