//! Quality gates for the dclean pipeline.
//!
//! Every check is a pure function over a table that either passes or fails
//! the run; nothing is repaired here.
//!
//! - [`require_columns`]: named columns exist
//! - [`assert_non_empty`]: the table has rows
//! - [`assert_in_range`]: numeric values fall within bounds
//! - [`QualityGate`]: the first two bundled for one input table

mod error;
pub mod gate;
pub mod range;

pub use error::{QualityError, Result};
pub use gate::{QualityGate, assert_non_empty, require_columns};
pub use range::{MAX_REPORTED_ROWS, RangeCheck, assert_in_range};
