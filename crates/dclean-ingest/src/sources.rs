//! Named raw inputs of the pipeline.

use std::fmt;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use crate::csv::read_csv_table;
use crate::error::Result;

/// The raw tables the pipeline knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawSource {
    Orders,
    Users,
}

impl RawSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Users => "users",
        }
    }

    /// File name inside the raw data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Orders => "orders.csv",
            Self::Users => "users.csv",
        }
    }
}

impl fmt::Display for RawSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read a named source from `raw_dir`.
pub fn read_source(raw_dir: &Path, source: RawSource) -> Result<DataFrame> {
    let path = raw_dir.join(source.file_name());
    info!(source = %source, path = %path.display(), "loading raw input");
    match source {
        RawSource::Orders => read_orders_csv(&path),
        RawSource::Users => read_users_csv(&path),
    }
}

/// Read the raw orders table from an explicit path.
pub fn read_orders_csv(path: &Path) -> Result<DataFrame> {
    read_csv_table(path)
}

/// Read the raw users table from an explicit path.
pub fn read_users_csv(path: &Path) -> Result<DataFrame> {
    read_csv_table(path)
}
