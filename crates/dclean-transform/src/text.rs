//! Text column normalization.

use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, Series};

use dclean_model::normalize_str;

use crate::error::Result;

/// Lowercase, trim, and collapse whitespace in every value of a column.
///
/// Nulls stay null. Non-string columns are cast to strings first. The
/// output keeps the input's name and length.
pub fn normalize_text(column: &Column) -> Result<Column> {
    let strings = column.cast(&DataType::String)?;
    let values: Vec<Option<String>> = strings
        .str()?
        .into_iter()
        .map(|v| v.map(normalize_str))
        .collect();
    Ok(Series::new(column.name().clone(), values).into_column())
}
