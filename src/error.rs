use thiserror::Error;

pub type HillChartResult<T> = Result<T, HillChartError>;

#[derive(Debug, Error)]
pub enum HillChartError {
    #[error("invalid canvas geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
