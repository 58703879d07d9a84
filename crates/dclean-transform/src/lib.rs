//! Table transforms for the dclean pipeline.
//!
//! Every transform takes its input by reference and returns a new value;
//! nothing here mutates a caller's table.
//!
//! - **enforce**: coerce columns to their declared [`SemanticType`]s
//! - **missingness**: per-column missing counts and rates
//! - **text**: lowercase/trim/collapse normalization of text columns
//! - **mapping**: controlled-vocabulary remapping
//! - **flags**: boolean "was missing" indicator columns
//! - **coerce**: per-value parsers used by schema enforcement
//!
//! [`SemanticType`]: dclean_model::SemanticType

pub mod coerce;
pub mod enforce;
mod error;
pub mod flags;
pub mod mapping;
pub mod missingness;
pub mod text;

pub use error::{Result, TransformError};

pub use enforce::enforce_schema;
pub use flags::{MISSING_FLAG_SUFFIX, add_missing_flags, missing_flag_name};
pub use mapping::{apply_mapping, unmapped_values};
pub use missingness::{
    MissingnessEntry, REPORT_COLUMNS, missingness_entries, missingness_report, report_table,
};
pub use text::normalize_text;
