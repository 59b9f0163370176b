use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart configuration error: {0}")]
    Configuration(String),

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate price range: top={top}, bottom={bottom}")]
    DegenerateRange { top: f64, bottom: f64 },

    #[error("drawing backend error: {0}")]
    Backend(String),
}
