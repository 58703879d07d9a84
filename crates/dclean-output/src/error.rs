use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {format} file {path}: {message}")]
    Write {
        format: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {format} file {path}: {message}")]
    Read {
        format: &'static str,
        path: PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
