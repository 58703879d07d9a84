//! Library components of the dclean command-line driver.

pub mod config;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod types;
