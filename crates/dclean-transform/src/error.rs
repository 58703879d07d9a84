//! Error types for table transforms.

use dclean_model::{SemanticType, column_names};
use polars::prelude::{DataFrame, PolarsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A column named by the caller does not exist.
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Not a single non-missing value in the column could be coerced.
    #[error(
        "column '{column}' cannot be read as {expected}: none of {non_missing} non-missing \
         {actual} values parsed (examples: {})",
        .samples.join(", ")
    )]
    SchemaType {
        column: String,
        expected: SemanticType,
        actual: String,
        non_missing: usize,
        samples: Vec<String>,
    },

    /// An operation that divides by the row count was given an empty table.
    #[error("{operation} requires at least one row, table is empty")]
    EmptyTable { operation: &'static str },

    /// A value had no mapping entry and the policy forbids pass-through.
    #[error("value '{value}' in column '{column}' at row {row} has no mapping entry")]
    UnmappedValue {
        column: String,
        value: String,
        row: usize,
    },

    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

impl TransformError {
    pub(crate) fn column_not_found(column: &str, df: &DataFrame) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
            available: column_names(df),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
