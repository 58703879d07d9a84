//! CSV output for diagnostic report tables.

use std::fs::File;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Write a report table as CSV with a header row.
///
/// The report's first column acts as its index and is written first.
pub fn write_report_csv(report: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut frame = report.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|e| OutputError::Write {
            format: "csv",
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(path = %path.display(), rows = report.height(), "wrote report");
    Ok(())
}
