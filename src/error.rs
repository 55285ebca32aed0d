//! Typed configuration errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown mode '{0}' (expected 'simple' or 'premium')")]
    UnknownMode(String),

    #[error("Video type list is empty")]
    EmptyCatalog,

    /// Entry at `index` has a blank `value` or `label`.
    #[error("Video type #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("Duplicate video type value '{0}'")]
    DuplicateValue(String),
}
