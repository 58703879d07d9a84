//! Controlled-vocabulary remapping of normalized text.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, Series};

use dclean_model::{UnmappedPolicy, ValueMapping};

use crate::error::{Result, TransformError};

/// Replace each value with its mapped canonical value.
///
/// Nulls stay null. Values without an entry follow the mapping's
/// [`UnmappedPolicy`]: kept as-is, replaced by the sentinel, or rejected.
///
/// # Errors
///
/// Returns [`TransformError::UnmappedValue`] for the first unmapped value
/// under [`UnmappedPolicy::Fail`].
pub fn apply_mapping(column: &Column, mapping: &ValueMapping) -> Result<Column> {
    let strings = column.cast(&DataType::String)?;
    let ca = strings.str()?;
    let mut values: Vec<Option<String>> = Vec::with_capacity(ca.len());

    for (row, value) in ca.into_iter().enumerate() {
        let Some(raw) = value else {
            values.push(None);
            continue;
        };
        let mapped = match (mapping.get(raw), mapping.unmapped()) {
            (Some(canonical), _) => canonical.to_string(),
            (None, UnmappedPolicy::PassThrough) => raw.to_string(),
            (None, UnmappedPolicy::Sentinel(sentinel)) => sentinel.clone(),
            (None, UnmappedPolicy::Fail) => {
                return Err(TransformError::UnmappedValue {
                    column: column.name().to_string(),
                    value: raw.to_string(),
                    row,
                });
            }
        };
        values.push(Some(mapped));
    }

    Ok(Series::new(column.name().clone(), values).into_column())
}

/// Distinct non-null values that have no mapping entry.
pub fn unmapped_values(column: &Column, mapping: &ValueMapping) -> Result<BTreeSet<String>> {
    let strings = column.cast(&DataType::String)?;
    let unmapped = strings
        .str()?
        .into_iter()
        .flatten()
        .filter(|value| mapping.get(value).is_none())
        .map(str::to_string)
        .collect();
    Ok(unmapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(values: &[Option<&str>]) -> Column {
        Series::new("status".into(), values.to_vec()).into_column()
    }

    fn refunds() -> ValueMapping {
        ValueMapping::from_pairs([("paid", "paid"), ("refund", "refund"), ("refunded", "refund")])
            .unwrap()
    }

    #[test]
    fn test_pass_through_keeps_unmapped() {
        let column = status(&[Some("refunded"), Some("pending"), None]);

        let out = apply_mapping(&column, &refunds()).unwrap();
        let ca = out.str().unwrap();

        assert_eq!(ca.get(0), Some("refund"));
        assert_eq!(ca.get(1), Some("pending"));
        assert_eq!(ca.get(2), None);
    }

    #[test]
    fn test_sentinel_replaces_unmapped() {
        let mapping = refunds().with_unmapped(UnmappedPolicy::Sentinel("other".into()));
        let column = status(&[Some("pending"), Some("paid"), None]);

        let out = apply_mapping(&column, &mapping).unwrap();
        let ca = out.str().unwrap();

        assert_eq!(ca.get(0), Some("other"));
        assert_eq!(ca.get(1), Some("paid"));
        assert_eq!(ca.get(2), None);
    }

    #[test]
    fn test_fail_reports_value_and_row() {
        let mapping = refunds().with_unmapped(UnmappedPolicy::Fail);
        let column = status(&[Some("paid"), None, Some("chargeback")]);

        let err = apply_mapping(&column, &mapping).unwrap_err();

        assert_eq!(
            err.to_string(),
            "value 'chargeback' in column 'status' at row 2 has no mapping entry"
        );
    }

    #[test]
    fn test_unmapped_values_are_distinct() {
        let column = status(&[Some("pending"), Some("paid"), Some("pending"), None]);

        let unmapped = unmapped_values(&column, &refunds()).unwrap();

        assert_eq!(unmapped.into_iter().collect::<Vec<_>>(), vec!["pending"]);
    }
}
