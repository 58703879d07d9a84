use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Mapping keys must already be in normalized form.
    #[error("mapping key '{key}' is not normalized (expected '{normalized}')")]
    UnnormalizedMappingKey { key: String, normalized: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
