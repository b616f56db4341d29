//! Error types for conceptdoc-renderer.

use thiserror::Error;

/// All errors that can arise from rendering a concept note.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (template parse or render failure).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
