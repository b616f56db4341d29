//! Tera rendering engine — [`Renderer`].
//!
//! # Note layout
//!
//! ```text
//! ---
//! id: <id>
//! tags:
//!   <domain>: <level>        (one per tag, source order)
//! maturity: <level>
//! ---
//!
//! # <name>
//!
//! <summary>
//!
//! ## <Section>               (only sections with content)
//! <line>
//! ```

use tera::Tera;

use conceptdoc_core::Concept;

use crate::context::TemplateContext;
use crate::error::RenderError;

/// File extension (without the dot) of rendered notes.
pub const OUTPUT_EXTENSION: &str = "md";

// Baked into the binary at compile time.
const TEMPLATE_NAME: &str = "concept.md.tera";
const TEMPLATE: &str = include_str!("templates/concept.md.tera");

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Markdown output: never HTML-escape record text.
    tera.autoescape_on(vec![]);
    tera.add_raw_template(TEMPLATE_NAME, &TEMPLATE.replace("\r\n", "\n"))?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders concept notes from the embedded template.
///
/// Create once with [`Renderer::new`] and reuse; rendering holds no state
/// between calls.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render the Markdown note for `concept`.
    pub fn render(&self, concept: &Concept) -> Result<String, RenderError> {
        let tera_ctx = TemplateContext::from_concept(concept).to_tera_context()?;
        Ok(self.tera.render(TEMPLATE_NAME, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
