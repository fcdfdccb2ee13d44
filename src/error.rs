use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Construction and configuration failures.
///
/// Drawing calls never fail; only building a canvas or loading a config can.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The canvas needs at least one row and one column.
    #[error("canvas must be at least 1x1 cells, got {width}x{height}")]
    InvalidCanvasSize { width: usize, height: usize },

    /// A config value is out of range or the config text is malformed.
    #[error("invalid text graphics config: {0}")]
    InvalidConfig(String),
}
