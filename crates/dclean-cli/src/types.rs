use std::collections::BTreeSet;
use std::path::PathBuf;

use dclean_transform::MissingnessEntry;

/// Files written by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub missingness_report: PathBuf,
    pub orders_clean: PathBuf,
    pub users: PathBuf,
}

#[derive(Debug)]
pub struct RunResult {
    pub root: PathBuf,
    pub orders_rows: usize,
    pub orders_columns: usize,
    pub users_rows: usize,
    pub missingness: Vec<MissingnessEntry>,
    pub unmapped_statuses: BTreeSet<String>,
    /// None for dry runs.
    pub outputs: Option<OutputPaths>,
}
