//! Concept loader — enumerate `*.yaml` files in a source directory and parse
//! each into a [`Concept`].
//!
//! # Ordering
//!
//! Directory listings are not ordered, so [`list_sources`] sorts by file name.
//! Every consumer of this module sees records in the same order on every run.
//!
//! # Validation
//!
//! Each file is parsed in two steps: first into a generic YAML value (so a
//! non-mapping document and a missing `id`/`name` can be reported precisely),
//! then into the typed [`Concept`].

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{io_err, LoadError};
use crate::types::Concept;

/// File extension (without the dot) recognized as a concept record.
pub const SOURCE_EXTENSION: &str = "yaml";

/// Fields that must be present and non-null in every record.
const REQUIRED_FIELDS: [&str; 2] = ["id", "name"];

// ---------------------------------------------------------------------------
// 1. Enumerate
// ---------------------------------------------------------------------------

/// All regular files in `dir` whose name ends with `.<extension>`, sorted by
/// file name. Subdirectories are not descended into.
pub fn list_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let suffix = format!(".{extension}");
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(&suffix) || !path.is_file() {
            continue;
        }
        paths.push(path);
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

// ---------------------------------------------------------------------------
// 2. Parse
// ---------------------------------------------------------------------------

/// Parse the YAML text of one concept file. `path` is only used for error context.
pub fn parse_concept(path: &Path, contents: &str) -> Result<Concept, LoadError> {
    let malformed = |source: serde_yaml::Error| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    };
    let mut value: Value = serde_yaml::from_str(contents).map_err(malformed)?;
    // `<<: *anchor` keys are left literal by the parser.
    value.apply_merge().map_err(malformed)?;

    let Value::Mapping(mapping) = &value else {
        return Err(LoadError::NotAMapping {
            path: path.to_path_buf(),
            found: kind_of(&value),
        });
    };

    for field in REQUIRED_FIELDS {
        if matches!(mapping.get(field), None | Some(Value::Null)) {
            return Err(LoadError::MissingField {
                path: path.to_path_buf(),
                field,
            });
        }
    }

    serde_yaml::from_value(value).map_err(malformed)
}

/// Read and parse a single concept file.
pub fn load_concept(path: &Path) -> Result<Concept, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let concept = parse_concept(path, &contents)?;
    tracing::debug!("loaded concept '{}' from {}", concept.id, path.display());
    Ok(concept)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ---------------------------------------------------------------------------
// 3. Lazy directory iteration
// ---------------------------------------------------------------------------

/// Lazy iterator over the concepts of a source directory.
///
/// The listing is taken up front; each file is read and parsed only when the
/// iterator is advanced. Yields `(source_path, concept)` pairs.
#[derive(Debug)]
pub struct ConceptIter {
    paths: std::vec::IntoIter<PathBuf>,
}

impl ConceptIter {
    /// Number of source files not yet loaded.
    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl Iterator for ConceptIter {
    type Item = Result<(PathBuf, Concept), LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(load_concept(&path).map(|concept| (path, concept)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

/// Enumerate `dir` for `.<extension>` files and return a lazy [`ConceptIter`].
pub fn load_dir(dir: &Path, extension: &str) -> Result<ConceptIter, LoadError> {
    let paths = list_sources(dir, extension)?;
    Ok(ConceptIter {
        paths: paths.into_iter(),
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write");
        path
    }

    #[test]
    fn list_sources_filters_by_extension_and_sorts() {
        let dir = TempDir::new().expect("tempdir");
        write(dir.path(), "b.yaml", "id: b\nname: B\n");
        write(dir.path(), "a.yaml", "id: a\nname: A\n");
        write(dir.path(), "c.yml", "id: c\nname: C\n");
        write(dir.path(), "README.md", "# readme\n");
        std::fs::create_dir(dir.path().join("nested.yaml")).expect("mkdir");

        let paths = list_sources(dir.path(), SOURCE_EXTENSION).expect("list");
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.yaml", "b.yaml"]);
    }

    #[test]
    fn list_sources_missing_dir_is_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = list_sources(&dir.path().join("absent"), SOURCE_EXTENSION).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn parse_reports_missing_name() {
        let err = parse_concept(Path::new("x.yaml"), "id: x\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "name", .. }));
    }

    #[test]
    fn parse_reports_null_id_as_missing() {
        let err = parse_concept(Path::new("x.yaml"), "id:\nname: X\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "id", .. }));
    }

    #[test]
    fn parse_rejects_sequence_document() {
        let err = parse_concept(Path::new("x.yaml"), "- a\n- b\n").unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "a sequence", .. }));
    }

    #[test]
    fn iterator_is_lazy() {
        let dir = TempDir::new().expect("tempdir");
        write(dir.path(), "a.yaml", "id: a\nname: A\n");
        write(dir.path(), "b.yaml", ": : broken [");

        let mut iter = load_dir(dir.path(), SOURCE_EXTENSION).expect("load_dir");
        assert_eq!(iter.remaining(), 2);
        let (path, first) = iter.next().expect("first").expect("ok");
        assert!(path.ends_with("a.yaml"));
        assert_eq!(first.id.0, "a");
        assert_eq!(iter.remaining(), 1);
        let second = iter.next().expect("second");
        assert!(matches!(second, Err(LoadError::Malformed { .. })));
        assert!(iter.next().is_none());
    }
}
