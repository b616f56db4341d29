//! Template context — serializable rendering payload built from [`Concept`].
//!
//! All value formatting (bullets, wiki-links, scalar spelling) happens here so
//! the template only lays out lines.

use serde::{Deserialize, Serialize};

use conceptdoc_core::{Concept, Scalar};

use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// Optional `##` sections of a concept note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Description,
    Assumptions,
    DownstreamImpacts,
    AntiPatterns,
    Notes,
}

impl Section {
    /// All sections in the order they appear in a note.
    pub fn all() -> &'static [Section] {
        &[
            Section::Description,
            Section::Assumptions,
            Section::DownstreamImpacts,
            Section::AntiPatterns,
            Section::Notes,
        ]
    }

    /// Heading text, without the leading `## `.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Description       => "Description",
            Section::Assumptions       => "Assumptions",
            Section::DownstreamImpacts => "Downstream Impacts",
            Section::AntiPatterns      => "Anti-Patterns",
            Section::Notes             => "Notes",
        }
    }

    /// Body lines for this section, or `None` when the section is omitted.
    ///
    /// `Description` is emitted whenever the field is present (even if empty);
    /// list sections only when they have at least one entry.
    pub fn lines(&self, concept: &Concept) -> Option<Vec<String>> {
        match self {
            Section::Description => concept.description.clone().map(|d| vec![d]),
            Section::Assumptions => bullets(&concept.assumptions, |e| e.to_string()),
            Section::DownstreamImpacts => bullets(&concept.downstream_impacts, |e| format!("[[{e}]]")),
            Section::AntiPatterns => bullets(&concept.anti_patterns, |e| e.to_string()),
            Section::Notes => bullets(&concept.notes, |e| e.to_string()),
        }
    }
}

fn bullets(entries: &[Scalar], item: impl Fn(&Scalar) -> String) -> Option<Vec<String>> {
    if entries.is_empty() {
        return None;
    }
    Some(entries.iter().map(|e| format!("- {}", item(e))).collect())
}

// ---------------------------------------------------------------------------
// TemplateContext
// ---------------------------------------------------------------------------

/// Rendering payload for `concept.md.tera`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub id: String,
    pub name: String,
    /// Tag entries in source order.
    pub tags: Vec<TagCtx>,
    /// `maturity.level`, empty when absent.
    pub maturity: String,
    pub summary: String,
    /// Emitted sections only, in note order.
    pub sections: Vec<SectionCtx>,
}

/// One `domain: level` line of the metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCtx {
    pub domain: String,
    pub level: String,
}

/// A `##` section with its pre-formatted body lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCtx {
    pub heading: String,
    pub lines: Vec<String>,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a [`Concept`].
    pub fn from_concept(concept: &Concept) -> Self {
        let tags = concept
            .tags
            .iter()
            .map(|t| TagCtx {
                domain: t.domain.clone(),
                level: t.level.to_string(),
            })
            .collect();

        let sections = Section::all()
            .iter()
            .filter_map(|section| {
                section.lines(concept).map(|lines| SectionCtx {
                    heading: section.heading().to_string(),
                    lines,
                })
            })
            .collect();

        TemplateContext {
            id: concept.id.0.clone(),
            name: concept.name.clone(),
            tags,
            maturity: concept.maturity.level_text(),
            summary: concept.summary.clone(),
            sections,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
