//! cryptoview: interactive candlestick and line price charts.
//!
//! The engine maps an in-memory price history onto a 2D drawing surface and
//! keeps it navigable with pan, wheel zoom and price-axis zoom. Pure math
//! lives in `core`, gestures in `interaction`, the chart context and render
//! pass in `api`, and the drawing contract with its backends in `render`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CandlestickChart, Chart, ChartOptions, ChartTuning, LineChart};
pub use error::{ChartError, ChartResult};
