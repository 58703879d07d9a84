//! Small `DataFrame` helpers shared by the pipeline crates.

use polars::prelude::DataFrame;

/// Column names of `df`, in order, as owned strings for error messages.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|n| n.to_string())
        .collect()
}
