//! # conceptdoc-renderer
//!
//! Tera-based renderer that turns a [`Concept`](conceptdoc_core::Concept) into
//! a Quartz/Obsidian-ready Markdown note.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use conceptdoc_core::Concept;
//! use conceptdoc_renderer::Renderer;
//!
//! fn print_note(concept: &Concept) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(markdown) = renderer.render(concept) {
//!             println!("{markdown}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{Section, TemplateContext};
pub use engine::{Renderer, OUTPUT_EXTENSION};
pub use error::RenderError;
