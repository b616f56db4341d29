//! Error types for conceptdoc-sync.

use std::path::PathBuf;

use thiserror::Error;

use conceptdoc_core::{ConceptId, LoadError};
use conceptdoc_renderer::RenderError;

/// All errors that can arise from a generate run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A source file could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The template failed to render a record.
    #[error("failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// Two source files declare the same `id`.
    #[error("duplicate concept id '{id}' in {first} and {second}")]
    DuplicateId {
        id: ConceptId,
        first: PathBuf,
        second: PathBuf,
    },

    /// The `id` cannot be used as an output file-name stem.
    #[error("concept id '{id}' in {path} is not a valid file name")]
    InvalidId { id: ConceptId, path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
