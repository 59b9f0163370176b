use serde::{Deserialize, Serialize};

use crate::core::normalizer::PriceProjection;
use crate::core::projection::SeriesProjection;
use crate::core::sample::OhlcSample;

/// Body width as a fraction of the per-sample spacing.
pub const BODY_WIDTH_RATIO: f64 = 0.5;

/// Candlestick chart variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candlestick;

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_width: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    #[must_use]
    pub fn body_top(self) -> f64 {
        self.open_y.min(self.close_y)
    }

    #[must_use]
    pub fn body_bottom(self) -> f64 {
        self.open_y.max(self.close_y)
    }
}

impl SeriesProjection for Candlestick {
    type Sample = OhlcSample;
    type Geometry = CandleGeometry;

    fn project_sample(
        &self,
        sample: &OhlcSample,
        center_x: f64,
        spacing: f64,
        prices: PriceProjection,
    ) -> CandleGeometry {
        let body_width = spacing * BODY_WIDTH_RATIO;
        CandleGeometry {
            center_x,
            body_left: center_x - body_width / 2.0,
            body_width,
            open_y: prices.price_to_pixel(sample.open),
            close_y: prices.price_to_pixel(sample.close),
            wick_top: prices.price_to_pixel(sample.high),
            wick_bottom: prices.price_to_pixel(sample.low),
            is_bullish: sample.is_bullish(),
        }
    }
}
