//! Equation-of-state errors.

use te_specie::SpecieError;
use thiserror::Error;

/// Result type for equation-of-state construction and I/O.
pub type EosResult<T> = Result<T, EosError>;

/// Errors surfaced by model construction and serialization.
///
/// Property evaluation never fails; non-finite results are returned as-is.
#[derive(Error, Debug)]
pub enum EosError {
    /// The specie underneath the model could not be read.
    #[error("Malformed configuration for entry '{entry}': {source}")]
    MalformedConfig {
        entry: String,
        #[source]
        source: SpecieError,
    },

    /// The model could not be rendered to text.
    #[error("Failed to write entry '{entry}': {source}")]
    Write {
        entry: String,
        #[source]
        source: SpecieError,
    },

    /// Reading from or writing to the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EosError {
    pub(crate) fn malformed(entry: impl Into<String>, source: SpecieError) -> Self {
        EosError::MalformedConfig {
            entry: entry.into(),
            source,
        }
    }
}
