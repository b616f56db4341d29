//! conceptdoc core library — concept record types, loader, errors.
//!
//! - [`types`] — [`Concept`] and its field types
//! - [`error`] — [`LoadError`]
//! - [`loader`] — enumerate and parse `*.yaml` concept files

pub mod error;
pub mod loader;
pub mod types;

pub use error::LoadError;
pub use loader::{ConceptIter, SOURCE_EXTENSION};
pub use types::{Concept, ConceptId, Maturity, Scalar, Tag, Tags};
