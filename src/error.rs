use thiserror::Error;

use crate::interaction::ZoomType;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// Content rectangle left no drawable area after margins were subtracted.
    #[error("invalid content geometry: width={width}, height={height}")]
    InvalidGeometry { width: f32, height: f32 },

    /// A data/pixel conversion was requested against a zero-sized viewport.
    #[error("degenerate viewport: width={width}, height={height}")]
    DegenerateViewport { width: f32, height: f32 },

    #[error("invalid axis range: start={start}, stop={stop}")]
    InvalidRange { start: f32, stop: f32 },

    #[error("zoom axes {requested:?} not allowed by configured zoom type {allowed:?}")]
    InvalidZoomType {
        requested: ZoomType,
        allowed: Option<ZoomType>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
