//! # conceptdoc-sync
//!
//! Load → render → atomic write orchestration.
//!
//! Call [`pipeline::run`] to regenerate every note of a source directory into
//! an output directory.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use config::GenerateConfig;
pub use error::GenerateError;
pub use pipeline::{GenerateResult, RenderedNote};
