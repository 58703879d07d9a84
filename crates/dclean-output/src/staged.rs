//! All-or-nothing publishing of a set of output files.
//!
//! Each output is first written to a `.tmp` sibling of its final path.
//! [`OutputBatch::commit`] renames the staged files into place once every
//! write has succeeded. A batch dropped before commit removes its staged
//! files, so a failed run leaves no outputs behind.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::error::{OutputError, Result};
use crate::parquet::write_parquet;
use crate::report::write_report_csv;

#[derive(Debug)]
struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
}

/// Staging path used while `target` is being written.
pub fn staging_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Output files written together and published together.
#[derive(Debug, Default)]
pub struct OutputBatch {
    staged: Vec<StagedFile>,
}

impl OutputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `df` as a Parquet file destined for `target`.
    pub fn stage_parquet(&mut self, df: &DataFrame, target: &Path) -> Result<()> {
        let temp = staging_path(target);
        self.track(temp.clone(), target);
        write_parquet(df, &temp)
    }

    /// Stage `report` as a CSV file destined for `target`.
    pub fn stage_report_csv(&mut self, report: &DataFrame, target: &Path) -> Result<()> {
        let temp = staging_path(target);
        self.track(temp.clone(), target);
        write_report_csv(report, &temp)
    }

    fn track(&mut self, temp: PathBuf, target: &Path) {
        self.staged.push(StagedFile {
            temp,
            target: target.to_path_buf(),
        });
    }

    /// Move every staged file to its final path. Returns the final paths in
    /// staging order.
    pub fn commit(mut self) -> Result<Vec<PathBuf>> {
        let mut pending = std::mem::take(&mut self.staged).into_iter();
        let mut committed = Vec::new();
        while let Some(file) = pending.next() {
            if let Err(source) = fs::rename(&file.temp, &file.target) {
                let error = OutputError::Rename {
                    from: file.temp.clone(),
                    to: file.target.clone(),
                    source,
                };
                self.staged.push(file);
                self.staged.extend(pending);
                return Err(error);
            }
            debug!(path = %file.target.display(), "published output");
            committed.push(file.target);
        }
        info!(files = committed.len(), "committed outputs");
        Ok(committed)
    }
}

impl Drop for OutputBatch {
    fn drop(&mut self) {
        for file in self.staged.drain(..) {
            if file.temp.exists()
                && let Err(error) = fs::remove_file(&file.temp)
            {
                warn!(path = %file.temp.display(), %error, "could not remove staged output");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use tempfile::TempDir;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("amount".into(), vec![Some(1.5f64), None]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_staging_path_appends_suffix() {
        assert_eq!(
            staging_path(Path::new("out/orders.parquet")),
            PathBuf::from("out/orders.parquet.tmp")
        );
    }

    #[test]
    fn test_commit_publishes_every_file() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("reports").join("r.csv");
        let table = dir.path().join("processed").join("t.parquet");

        let mut batch = OutputBatch::new();
        batch.stage_report_csv(&frame(), &report).unwrap();
        batch.stage_parquet(&frame(), &table).unwrap();
        assert!(!report.exists());
        assert!(!table.exists());

        let committed = batch.commit().unwrap();

        assert_eq!(committed, vec![report.clone(), table.clone()]);
        assert!(report.exists());
        assert!(table.exists());
        assert!(!staging_path(&report).exists());
    }

    #[test]
    fn test_failed_stage_discards_earlier_files() {
        let dir = TempDir::new().unwrap();
        let report = dir.path().join("reports").join("r.csv");
        let blocked = dir.path().join("processed");
        fs::write(&blocked, "not a directory").unwrap();

        let mut batch = OutputBatch::new();
        batch.stage_report_csv(&frame(), &report).unwrap();
        let result = batch.stage_parquet(&frame(), &blocked.join("t.parquet"));
        assert!(result.is_err());
        drop(batch);

        assert!(!report.exists());
        assert!(!staging_path(&report).exists());
    }
}
