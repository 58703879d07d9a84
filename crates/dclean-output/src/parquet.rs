//! Parquet output for cleaned tables.
//!
//! Parquet keeps column dtypes and null markers, so a written table reads
//! back equal to the original.

use std::fs::File;
use std::path::Path;

use polars::prelude::{DataFrame, ParquetReader, ParquetWriter, SerReader};
use tracing::info;

use crate::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Write `df` to `path`, creating parent directories as needed.
pub fn write_parquet(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut frame = df.clone();
    ParquetWriter::new(file)
        .finish(&mut frame)
        .map_err(|e| OutputError::Write {
            format: "parquet",
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote parquet"
    );
    Ok(())
}

/// Read a Parquet file written by [`write_parquet`].
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| OutputError::Read {
            format: "parquet",
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
