//! Boolean "was missing" indicator columns.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use dclean_model::missing_mask;

use crate::error::{Result, TransformError};

/// Suffix appended to a source column name to name its flag column.
pub const MISSING_FLAG_SUFFIX: &str = "_was_missing";

/// Name of the flag column for `column`.
pub fn missing_flag_name(column: &str) -> String {
    format!("{column}{MISSING_FLAG_SUFFIX}")
}

/// Append one boolean flag column per name in `columns`, true where the
/// source value is missing. Source columns are left untouched.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] if a requested column is
/// absent; no columns are added in that case.
pub fn add_missing_flags<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in columns {
        let name = name.as_ref();
        let source = df
            .column(name)
            .map_err(|_| TransformError::column_not_found(name, df))?;
        let mask = missing_mask(source)?;
        let flagged = mask.iter().filter(|m| **m).count();
        out.with_column(Series::new(missing_flag_name(name).into(), mask))?;
        debug!(column = name, flagged, "added missing flag");
    }
    Ok(out)
}
