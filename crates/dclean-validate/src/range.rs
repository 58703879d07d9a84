//! Numeric range checks.
//!
//! No bounds are built in; callers declare the columns and limits they care
//! about. Missing values never fail a range check.

use polars::prelude::{DataFrame, DataType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dclean_model::column_names;

use crate::error::{QualityError, Result};

/// Maximum number of offending row indices carried in an error.
pub const MAX_REPORTED_ROWS: usize = 20;

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Fail if any non-missing value of `column` lies outside `[low, high]`.
///
/// # Errors
///
/// - [`QualityError::InvalidRange`] if `low > high` or a bound is NaN.
/// - [`QualityError::MissingColumns`] if the column does not exist.
/// - [`QualityError::NotNumeric`] if the column is not numeric.
/// - [`QualityError::OutOfRange`] listing the offending rows.
pub fn assert_in_range(df: &DataFrame, column: &str, low: f64, high: f64) -> Result<()> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(QualityError::InvalidRange {
            column: column.to_string(),
            low,
            high,
        });
    }

    let series = df.column(column).map_err(|_| QualityError::MissingColumns {
        label: "range check".to_string(),
        missing: vec![column.to_string()],
        available: column_names(df),
    })?;

    if !is_numeric(series.dtype()) {
        return Err(QualityError::NotNumeric {
            column: column.to_string(),
            dtype: series.dtype().to_string(),
        });
    }

    let values = series.cast(&DataType::Float64)?;
    let mut count = 0usize;
    let mut rows = Vec::new();
    for (row, value) in values.f64()?.into_iter().enumerate() {
        let Some(value) = value else { continue };
        if value.is_nan() {
            continue;
        }
        if value < low || value > high {
            count += 1;
            if rows.len() < MAX_REPORTED_ROWS {
                rows.push(row);
            }
        }
    }

    if count > 0 {
        return Err(QualityError::OutOfRange {
            column: column.to_string(),
            low,
            high,
            count,
            rows,
        });
    }
    debug!(column, low, high, "range check passed");
    Ok(())
}

/// A declared range check, loadable from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCheck {
    pub column: String,
    pub low: f64,
    pub high: f64,
}

impl RangeCheck {
    pub fn new(column: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            column: column.into(),
            low,
            high,
        }
    }

    pub fn check(&self, df: &DataFrame) -> Result<()> {
        assert_in_range(df, &self.column, self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn amounts(values: Vec<Option<f64>>) -> DataFrame {
        DataFrame::new(vec![Series::new("amount".into(), values).into_column()]).unwrap()
    }

    #[test]
    fn test_in_range_passes_and_ignores_nulls() {
        let df = amounts(vec![Some(0.0), None, Some(100.0), Some(f64::NAN)]);

        assert!(assert_in_range(&df, "amount", 0.0, 100.0).is_ok());
    }

    #[test]
    fn test_out_of_range_lists_rows() {
        let df = amounts(vec![Some(5.0), Some(-1.0), None, Some(500.0)]);

        let err = assert_in_range(&df, "amount", 0.0, 100.0).unwrap_err();

        match err {
            QualityError::OutOfRange { count, rows, .. } => {
                assert_eq!(count, 2);
                assert_eq!(rows, vec![1, 3]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reported_rows_are_capped() {
        let df = amounts(vec![Some(-1.0); MAX_REPORTED_ROWS + 5]);

        let err = assert_in_range(&df, "amount", 0.0, 1.0).unwrap_err();

        match err {
            QualityError::OutOfRange { count, rows, .. } => {
                assert_eq!(count, MAX_REPORTED_ROWS + 5);
                assert_eq!(rows.len(), MAX_REPORTED_ROWS);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inverted_bounds() {
        let df = amounts(vec![Some(1.0)]);

        let err = assert_in_range(&df, "amount", 10.0, 1.0).unwrap_err();

        assert!(matches!(err, QualityError::InvalidRange { .. }));
    }

    #[test]
    fn test_string_column_is_rejected() {
        let df = DataFrame::new(vec![Series::new("status".into(), vec!["paid"]).into_column()])
            .unwrap();

        let err = assert_in_range(&df, "status", 0.0, 1.0).unwrap_err();

        assert!(matches!(err, QualityError::NotNumeric { .. }));
    }

    #[test]
    fn test_range_check_from_json() {
        let check: RangeCheck =
            serde_json::from_str(r#"{"column":"amount","low":0,"high":10}"#).unwrap();

        assert_eq!(check, RangeCheck::new("amount", 0.0, 10.0));
        assert!(check.check(&amounts(vec![Some(3.0)])).is_ok());
    }
}
