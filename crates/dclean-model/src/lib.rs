//! Core data model for the dclean pipeline.
//!
//! Tables are plain Polars `DataFrame`s. This crate adds the metadata that
//! travels alongside them:
//!
//! - **frame**: `DataFrame` helpers used in error reporting
//! - **schema**: expected semantic type per column
//! - **mapping**: controlled-vocabulary value mappings
//! - **missing**: the shared definition of a missing value
//! - **text**: the text normalization primitive mapping keys must satisfy

pub mod error;
pub mod frame;
pub mod mapping;
pub mod missing;
pub mod schema;
pub mod text;

pub use error::{ModelError, Result};
pub use frame::column_names;
pub use mapping::{UnmappedPolicy, ValueMapping};
pub use missing::{any_to_f64, any_to_i64, any_to_string, is_missing_value, missing_mask};
pub use schema::{ColumnSpec, SemanticType, TableSchema};
pub use text::normalize_str;
