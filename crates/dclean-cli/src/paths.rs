//! Project directory layout.
//!
//! Built once per run from an explicit root, so tests can point a run at a
//! temporary directory.

use std::path::PathBuf;

use dclean_ingest::RawSource;

/// Report file for order missingness.
pub const ORDERS_MISSINGNESS_REPORT: &str = "missingness_orders.csv";
/// Cleaned orders output.
pub const ORDERS_CLEAN_OUTPUT: &str = "orders_clean.parquet";
/// Users output.
pub const USERS_OUTPUT: &str = "users.parquet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub raw: PathBuf,
    pub cache: PathBuf,
    pub processed: PathBuf,
    pub external: PathBuf,
    pub reports: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join("data");
        Self {
            raw: data.join("raw"),
            cache: data.join("cache"),
            processed: data.join("processed"),
            external: data.join("external"),
            reports: root.join("reports"),
            root,
        }
    }

    pub fn raw_input(&self, source: RawSource) -> PathBuf {
        self.raw.join(source.file_name())
    }

    pub fn missingness_report(&self) -> PathBuf {
        self.reports.join(ORDERS_MISSINGNESS_REPORT)
    }

    pub fn orders_clean(&self) -> PathBuf {
        self.processed.join(ORDERS_CLEAN_OUTPUT)
    }

    pub fn users_output(&self) -> PathBuf {
        self.processed.join(USERS_OUTPUT)
    }
}
