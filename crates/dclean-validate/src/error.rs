//! Error types for quality gates.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QualityError {
    /// Required columns are absent.
    #[error(
        "{label}: missing required column(s) {} (available: {})",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        label: String,
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// The table has no rows.
    #[error("{label}: table is empty ({columns} columns, 0 rows)")]
    EmptyTable { label: String, columns: usize },

    /// Values fall outside the declared bounds. `rows` holds at most
    /// `MAX_REPORTED_ROWS` 0-based row indices; `count` is the full total.
    #[error("column '{column}': {count} value(s) outside [{low}, {high}], rows {rows:?}")]
    OutOfRange {
        column: String,
        low: f64,
        high: f64,
        count: usize,
        rows: Vec<usize>,
    },

    /// A range check was declared with `low > high`.
    #[error("invalid range for column '{column}': low {low} exceeds high {high}")]
    InvalidRange { column: String, low: f64, high: f64 },

    /// A range check targeted a column that is not numeric.
    #[error("column '{column}' is {dtype}, range checks need a numeric column")]
    NotNumeric { column: String, dtype: String },

    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, QualityError>;
