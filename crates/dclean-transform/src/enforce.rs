//! Schema enforcement: coerce columns to their declared semantic types.
//!
//! Per-value failures become null. A column whose non-missing values all
//! fail to coerce is a structural mismatch and is reported as
//! [`TransformError::SchemaType`].

use polars::prelude::{
    AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit,
};
use tracing::{debug, warn};

use dclean_model::{
    SemanticType, TableSchema, any_to_f64, any_to_i64, any_to_string, is_missing_value,
};

use crate::coerce::{parse_decimal, parse_integer, parse_timestamp, timestamp_millis};
use crate::error::{Result, TransformError};

const MAX_SAMPLES: usize = 5;

/// Outcome of coercing every value of one column.
struct Coerced<T> {
    values: Vec<Option<T>>,
    non_missing: usize,
    failed: usize,
    samples: Vec<String>,
}

impl<T> Coerced<T> {
    fn wholly_failed(&self) -> bool {
        self.non_missing > 0 && self.failed == self.non_missing
    }
}

fn coerce_values<T>(
    column: &Column,
    parse: impl Fn(&AnyValue<'_>) -> Option<T>,
) -> Result<Coerced<T>> {
    let mut out = Coerced {
        values: Vec::with_capacity(column.len()),
        non_missing: 0,
        failed: 0,
        samples: Vec::new(),
    };
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if is_missing_value(&value) {
            out.values.push(None);
            continue;
        }
        out.non_missing += 1;
        let parsed = parse(&value);
        if parsed.is_none() {
            out.failed += 1;
            if out.samples.len() < MAX_SAMPLES {
                out.samples.push(any_to_string(value));
            }
        }
        out.values.push(parsed);
    }
    Ok(out)
}

fn to_integer(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::String(s) => parse_integer(s),
        AnyValue::StringOwned(s) => parse_integer(s),
        other => any_to_i64(other),
    }
}

fn to_decimal(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::String(s) => parse_decimal(s),
        AnyValue::StringOwned(s) => parse_decimal(s),
        other => any_to_f64(other),
    }
}

fn to_timestamp_millis(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::String(s) => parse_timestamp(s).map(timestamp_millis),
        AnyValue::StringOwned(s) => parse_timestamp(s).map(timestamp_millis),
        AnyValue::Datetime(v, unit, _) => Some(match unit {
            TimeUnit::Nanoseconds => v.div_euclid(1_000_000),
            TimeUnit::Microseconds => v.div_euclid(1_000),
            TimeUnit::Milliseconds => *v,
        }),
        AnyValue::Date(days) => Some(i64::from(*days) * 86_400_000),
        _ => None,
    }
}

fn to_category(value: &AnyValue<'_>) -> Option<String> {
    let text = any_to_string(value.clone());
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_coerced<T>(column: &Column, expected: SemanticType, coerced: &Coerced<T>) -> Result<()> {
    if coerced.wholly_failed() {
        return Err(TransformError::SchemaType {
            column: column.name().to_string(),
            expected,
            actual: column.dtype().to_string(),
            non_missing: coerced.non_missing,
            samples: coerced.samples.clone(),
        });
    }
    if coerced.failed > 0 {
        warn!(
            column = %column.name(),
            expected = %expected,
            failed = coerced.failed,
            non_missing = coerced.non_missing,
            "values failed coercion and were set to null"
        );
    }
    Ok(())
}

/// Coerce a single column to `expected`, keeping its name and length.
pub fn coerce_column(column: &Column, expected: SemanticType) -> Result<Column> {
    let name = column.name().clone();
    let coerced = match expected {
        SemanticType::Integer => {
            let coerced = coerce_values(column, to_integer)?;
            check_coerced(column, expected, &coerced)?;
            Series::new(name, coerced.values).into_column()
        }
        SemanticType::Decimal => {
            let coerced = coerce_values(column, to_decimal)?;
            check_coerced(column, expected, &coerced)?;
            Series::new(name, coerced.values).into_column()
        }
        SemanticType::Timestamp => {
            let coerced = coerce_values(column, to_timestamp_millis)?;
            check_coerced(column, expected, &coerced)?;
            Series::new(name, coerced.values)
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                .into_column()
        }
        SemanticType::Category => {
            let coerced = coerce_values(column, to_category)?;
            Series::new(name, coerced.values).into_column()
        }
        SemanticType::Text => column.cast(&DataType::String)?,
    };
    Ok(coerced)
}

/// Coerce every column named in `schema`; other columns pass through.
///
/// Row order and row count are preserved and no rows are dropped.
///
/// # Errors
///
/// - [`TransformError::ColumnNotFound`] if a schema column is absent.
/// - [`TransformError::SchemaType`] if a column has values but none coerce.
pub fn enforce_schema(df: &DataFrame, schema: &TableSchema) -> Result<DataFrame> {
    let mut out = df.clone();
    for spec in schema.columns() {
        let column = df
            .column(&spec.name)
            .map_err(|_| TransformError::column_not_found(&spec.name, df))?;
        let coerced = coerce_column(column, spec.semantic_type)?;
        debug!(
            column = %spec.name,
            from = %column.dtype(),
            to = %coerced.dtype(),
            nulls = coerced.null_count(),
            "enforced column type"
        );
        out.with_column(coerced)?;
    }
    Ok(out)
}
