use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[error("grid size must be at least 1")]
    InvalidSize,
    #[error("cell data does not match the declared grid size")]
    ShapeMismatch,
    #[error("cell values must be positive")]
    InvalidCellValue,
    #[error("value range must satisfy 1 <= low <= high")]
    InvalidValueRange,
    #[error("inclusion probability must lie within [0, 1]")]
    InvalidProbability,
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
