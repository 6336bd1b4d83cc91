//! Error types for dataset loading.
//!
//! Evaluation never fails; only turning a file into a [`TraitIndex`] and
//! installing it process-wide can.
//!
//! [`TraitIndex`]: crate::TraitIndex

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("failed to read species traits from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse species traits from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share an id or a match key.
    #[error("duplicate species trait {field} '{value}'")]
    DuplicateTrait { field: &'static str, value: String },

    #[error("a global species trait index is already installed")]
    AlreadyInstalled,

    #[error(transparent)]
    Core(#[from] reef_core::errors::CoreError),
}
