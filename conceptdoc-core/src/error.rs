//! Error types for conceptdoc-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while enumerating or parsing concept files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure, annotated with the path being read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML, or a recognized field has the wrong shape.
    #[error("malformed concept record at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("malformed concept record at {path}: expected a mapping, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },

    /// `id` or `name` is absent (or explicitly null).
    #[error("concept record at {path} is missing required field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

impl LoadError {
    /// Path of the file that caused the error.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::NotAMapping { path, .. }
            | LoadError::MissingField { path, .. } => path,
        }
    }
}

/// Convenience constructor for [`LoadError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}
