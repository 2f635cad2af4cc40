use thiserror::Error;

use crate::core::BandSign;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("band count must be >= 1, got {bands}")]
    InvalidBandCount { bands: usize },

    #[error("{sign} color ramp has {actual} colors but {required} are required")]
    ColorRampTooShort {
        sign: BandSign,
        required: usize,
        actual: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
