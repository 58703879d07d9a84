//! Pre-flight structural checks.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use dclean_model::column_names;

use crate::error::{QualityError, Result};

fn check_columns<S: AsRef<str>>(df: &DataFrame, names: &[S], label: &str) -> Result<()> {
    let present: BTreeSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|n| n.as_str())
        .collect();
    let missing: Vec<String> = names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !present.contains(name))
        .map(str::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(QualityError::MissingColumns {
            label: label.to_string(),
            missing,
            available: column_names(df),
        })
    }
}

/// Fail unless every name in `names` is a column of `df`.
///
/// All absent names are reported at once.
pub fn require_columns<S: AsRef<str>>(df: &DataFrame, names: &[S]) -> Result<()> {
    check_columns(df, names, "table")
}

/// Fail if `df` has no rows. `label` only appears in the error message.
pub fn assert_non_empty(df: &DataFrame, label: &str) -> Result<()> {
    if df.height() == 0 {
        return Err(QualityError::EmptyTable {
            label: label.to_string(),
            columns: df.width(),
        });
    }
    Ok(())
}

/// Required-columns and non-empty checks for one named input table.
#[derive(Debug, Clone, Default)]
pub struct QualityGate {
    label: String,
    required: Vec<String>,
}

impl QualityGate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: Vec::new(),
        }
    }

    #[must_use]
    pub fn require<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Run the column check, then the emptiness check.
    pub fn check(&self, df: &DataFrame) -> Result<()> {
        debug!(
            table = %self.label,
            required = self.required.len(),
            "checking required columns"
        );
        check_columns(df, &self.required, &self.label)?;
        assert_non_empty(df, &self.label)?;
        info!(table = %self.label, rows = df.height(), "quality gate passed");
        Ok(())
    }
}
