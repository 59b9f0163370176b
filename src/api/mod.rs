mod candlestick_render;
mod chart;
mod config;
mod interaction_controller;
mod line_render;
mod render_orchestrator;
mod series_kind;
mod snapshot;

pub use chart::{CandlestickChart, Chart, LineChart};
pub use config::{ChartOptions, ChartTuning, GraphFillOptions, GraphStrokeOptions, SeriesStyle};
pub use series_kind::{DrawContext, PointerFrame, SeriesKind};
pub use snapshot::ChartSnapshot;
