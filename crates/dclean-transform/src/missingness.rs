//! Per-column missingness accounting.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use dclean_model::missing_mask;

use crate::error::{Result, TransformError};

/// Column names of the report table, index column first.
pub const REPORT_COLUMNS: [&str; 3] = ["column", "missing_count", "missing_rate"];

/// Missingness of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingnessEntry {
    pub column: String,
    pub missing_count: u64,
    pub missing_rate: f64,
}

/// Compute missingness for every column, in column order.
///
/// # Errors
///
/// Returns [`TransformError::EmptyTable`] for a table with no rows, since
/// the rate would be undefined.
pub fn missingness_entries(df: &DataFrame) -> Result<Vec<MissingnessEntry>> {
    let rows = df.height();
    if rows == 0 {
        return Err(TransformError::EmptyTable {
            operation: "missingness report",
        });
    }

    let mut entries = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let missing = missing_mask(column)?.into_iter().filter(|m| *m).count();
        entries.push(MissingnessEntry {
            column: column.name().to_string(),
            missing_count: missing as u64,
            missing_rate: missing as f64 / rows as f64,
        });
    }
    Ok(entries)
}

/// Build the missingness report table: one row per input column with
/// `column`, `missing_count` and `missing_rate`.
pub fn missingness_report(df: &DataFrame) -> Result<DataFrame> {
    report_table(&missingness_entries(df)?)
}

/// Lay out already-computed entries as the report table.
pub fn report_table(entries: &[MissingnessEntry]) -> Result<DataFrame> {
    let names: Vec<String> = entries.iter().map(|e| e.column.clone()).collect();
    let counts: Vec<u64> = entries.iter().map(|e| e.missing_count).collect();
    let rates: Vec<f64> = entries.iter().map(|e| e.missing_rate).collect();

    let report = DataFrame::new(vec![
        Series::new(REPORT_COLUMNS[0].into(), names).into_column(),
        Series::new(REPORT_COLUMNS[1].into(), counts).into_column(),
        Series::new(REPORT_COLUMNS[2].into(), rates).into_column(),
    ])?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Series::new("a".into(), vec![Some(1i64), None, Some(3), None]).into_column(),
            Series::new("b".into(), vec![Some("x"), Some(" "), Some("y"), Some("z")])
                .into_column(),
            Series::new("c".into(), vec![1.0f64, f64::NAN, 2.0, 3.0]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_entries_count_nulls_blanks_and_nan() {
        let entries = missingness_entries(&sample()).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].column, "a");
        assert_eq!(entries[0].missing_count, 2);
        assert_eq!(entries[0].missing_rate, 0.5);
        assert_eq!(entries[1].missing_count, 1);
        assert_eq!(entries[1].missing_rate, 0.25);
        assert_eq!(entries[2].missing_count, 1);
    }

    #[test]
    fn test_report_shape() {
        let report = missingness_report(&sample()).unwrap();

        assert_eq!(report.height(), 3);
        assert_eq!(
            report
                .get_column_names()
                .into_iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>(),
            REPORT_COLUMNS.to_vec()
        );
        let columns = report.column("column").unwrap().str().unwrap();
        assert_eq!(columns.get(1), Some("b"));
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let empty: Vec<Option<i64>> = Vec::new();
        let df = DataFrame::new(vec![Series::new("a".into(), empty).into_column()]).unwrap();

        let err = missingness_report(&df).unwrap_err();

        assert!(matches!(err, TransformError::EmptyTable { .. }));
    }
}
