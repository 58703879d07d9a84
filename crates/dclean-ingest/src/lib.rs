//! Raw data ingestion.
//!
//! Reads row-oriented text (CSV) into Polars DataFrames of text columns.
//! Values are not coerced here, that is the schema enforcer's job.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dclean_ingest::{RawSource, read_source};
//!
//! let orders = read_source(Path::new("data/raw"), RawSource::Orders)?;
//! ```

mod csv;
mod error;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, validate_encoding};

// === Named Sources ===
pub use sources::{RawSource, read_orders_csv, read_source, read_users_csv};
