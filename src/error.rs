//! Error types for dataset construction and speedup computation.

use thiserror::Error;

/// A dataset whose series do not line up with its independent variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("dataset has no independent values")]
    EmptyIndependent,

    #[error("dataset has no series")]
    NoSeries,

    #[error("series '{label}' has {actual} values, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("series label '{0}' appears more than once")]
    DuplicateLabel(String),
}

/// A reference that cannot be resolved against a dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeedupError {
    #[error("reference series '{0}' is not in the dataset")]
    UnknownLabel(String),

    #[error("reference index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}
