//! Generate pipeline: source directory of concept records → directory of notes.
//!
//! The run is two-pass. [`prepare`] loads, checks and renders every record in
//! memory; only when the whole batch succeeded does [`run`] write anything.
//! A malformed record therefore leaves existing notes untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use conceptdoc_core::{loader, ConceptId};
use conceptdoc_renderer::Renderer;

use crate::config::GenerateConfig;
use crate::error::{io_err, GenerateError};
use crate::writer::atomic_write;

/// A fully rendered note, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    /// Concept file the note was rendered from.
    pub source: PathBuf,
    /// `<output_dir>/<id>.<output_extension>`.
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    /// Every note written, in source file-name order.
    pub written: Vec<PathBuf>,
}

/// Load and render every record of `source_dir` without touching the disk.
///
/// Fails on the first unreadable or malformed record, on an id that cannot be
/// a file name, and on two records sharing an id.
pub fn prepare(
    source_dir: &Path,
    output_dir: &Path,
    config: &GenerateConfig,
) -> Result<Vec<RenderedNote>, GenerateError> {
    let renderer = Renderer::new().map_err(|source| GenerateError::Render {
        path: source_dir.to_path_buf(),
        source,
    })?;

    let mut seen: BTreeMap<ConceptId, PathBuf> = BTreeMap::new();
    let mut notes = Vec::new();

    for loaded in loader::load_dir(source_dir, &config.source_extension)? {
        let (source, concept) = loaded?;
        check_file_stem(&concept.id, &source)?;
        if let Some(first) = seen.get(&concept.id) {
            return Err(GenerateError::DuplicateId {
                id: concept.id,
                first: first.clone(),
                second: source,
            });
        }

        let content = renderer
            .render(&concept)
            .map_err(|e| GenerateError::Render {
                path: source.clone(),
                source: e,
            })?;
        let path = output_dir.join(format!("{}.{}", concept.id, config.output_extension));

        seen.insert(concept.id, source.clone());
        notes.push(RenderedNote {
            source,
            path,
            content,
        });
    }
    Ok(notes)
}

/// Regenerate all notes of `source_dir` into `output_dir`.
///
/// `output_dir` (and any missing parents) is created first, so an empty
/// source directory still yields an existing, empty output directory.
/// Every note is rewritten, replacing any existing file of the same name.
pub fn run(
    source_dir: &Path,
    output_dir: &Path,
    config: &GenerateConfig,
) -> Result<GenerateResult, GenerateError> {
    std::fs::create_dir_all(output_dir).map_err(|e| io_err(output_dir, e))?;

    let notes = prepare(source_dir, output_dir, config)?;
    tracing::debug!("rendered {} notes from {}", notes.len(), source_dir.display());

    let mut written = Vec::with_capacity(notes.len());
    for note in notes {
        atomic_write(&note.path, &note.content)?;
        written.push(note.path);
    }

    Ok(GenerateResult {
        output_dir: output_dir.to_path_buf(),
        written,
    })
}

fn check_file_stem(id: &ConceptId, source: &Path) -> Result<(), GenerateError> {
    let stem = id.0.as_str();
    let unsafe_char = |c: char| matches!(c, '/' | '\\' | '\0');
    if stem.is_empty() || stem == "." || stem == ".." || stem.contains(unsafe_char) {
        return Err(GenerateError::InvalidId {
            id: id.clone(),
            path: source.to_path_buf(),
        });
    }
    Ok(())
}
