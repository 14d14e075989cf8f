//! Specie configuration errors.

use te_core::TeError;
use thiserror::Error;

/// Result type for specie operations.
pub type SpecieResult<T> = Result<T, SpecieError>;

/// Errors raised while reading a specie from configuration.
#[derive(Error, Debug)]
pub enum SpecieError {
    /// A required key is absent from the entry.
    #[error("Missing key '{key}'")]
    MissingKey { key: &'static str },

    /// A key is present but its value is not acceptable.
    #[error("Invalid value for '{key}': {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: TeError,
    },

    /// A stream did not hold exactly one named entry.
    #[error("Expected exactly one named entry, found {found}")]
    EntryCount { found: usize },

    /// An entry is not shaped like a named dictionary.
    #[error("Malformed entry: {what}")]
    Shape { what: &'static str },

    /// YAML syntax or type error from the parser.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
