//! Output generation for the dclean pipeline.
//!
//! - **parquet**: column-oriented binary output for cleaned tables
//! - **report**: row-oriented CSV output for diagnostic reports
//! - **staged**: publish several outputs only once all were written

mod error;
pub mod parquet;
pub mod report;
pub mod staged;

pub use error::{OutputError, Result};
pub use parquet::{read_parquet, write_parquet};
pub use report::write_report_csv;
pub use staged::{OutputBatch, staging_path};

use std::fs;
use std::path::Path;

/// Create the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
