pub mod candlestick;
pub mod grid;
pub mod line_series;
pub mod normalizer;
pub mod primitives;
pub mod projection;
pub mod sample;
pub mod types;
pub mod viewport;

pub use candlestick::{CandleGeometry, Candlestick};
pub use grid::{GridLine, GridPlan, GridTuning, plan_grid};
pub use line_series::{Line, LinePoint};
pub use normalizer::{
    PriceProjection, VerticalZoom, apply_vertical_zoom, nearest_index, sample_spacing,
    to_pixel_x, to_pixel_y,
};
pub use projection::{ScreenGeometry, SeriesProjection, project};
pub use sample::{
    Extremum, History, OhlcSample, PriceField, Sample, ScalarSample, extrema, visible_range,
    visible_subset,
};
pub use types::CanvasSize;
pub use viewport::{Viewport, ViewportBounds, ZoomDirection};
