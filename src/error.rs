use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("visible slice has no line values to derive boundaries from")]
    MissingBoundaries,

    #[error("timestamp {0} ms is outside the representable date range")]
    InvalidTimestamp(i64),

    #[error("chart has been destroyed")]
    Destroyed,
}
