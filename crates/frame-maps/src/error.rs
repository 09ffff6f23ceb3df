//! Error types for column mapping and reordering operations.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur when mapping or moving columns.
#[derive(Debug, Error)]
pub enum FrameMapError {
    /// Source/target shapes incompatible with the mapping rule.
    #[error("invalid mapping arguments: {message}")]
    InvalidMapping { message: String },

    /// A fanout rule returned the wrong number of values for a row.
    #[error("fanout result at row {row} has {actual} values, expected {expected}")]
    FanoutWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Many-to-many function mapping requested.
    #[error("many-to-many mapping is not supported")]
    Unsupported,

    /// Column position outside the frame's column order.
    #[error("column index {index} out of range for frame with {width} columns")]
    IndexOutOfRange { index: usize, width: usize },

    /// Column not found by name.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Error from the underlying Polars engine.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl FrameMapError {
    /// Shorthand for an [`FrameMapError::InvalidMapping`] with the given message.
    pub fn invalid_mapping(message: impl Into<String>) -> Self {
        Self::InvalidMapping {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameMapError>;
