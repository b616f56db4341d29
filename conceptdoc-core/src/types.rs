//! Domain types for concept records.
//!
//! A [`Concept`] is deserialized once from a YAML mapping; every optional
//! field falls back to an empty value so rendering never probes for keys.
//! An explicit `null` is treated the same as an absent key.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a concept; used as the output file-name stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "Scalar")]
pub struct ConceptId(pub String);

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ConceptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConceptId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<Scalar> for ConceptId {
    fn from(s: Scalar) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// A YAML scalar as it appears in tag levels and list entries.
///
/// Rendered through [`fmt::Display`]: text verbatim, integers and booleans in
/// their canonical YAML spelling, floats as the shortest round-trip digits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => s.fmt(f),
            Scalar::Integer(n) => n.fmt(f),
            Scalar::Unsigned(n) => n.fmt(f),
            Scalar::Float(n) => fmt_float(*n, f),
            Scalar::Flag(b) => b.fmt(f),
        }
    }
}

/// `2.0`, `0.5`, `1e+20`, `1.5e-07`, `inf`, `nan`.
///
/// Debug keeps the trailing `.0` on whole floats and switches to exponent
/// form outside `1e-4..1e16`; the exponent is then given a sign and at least
/// two digits.
fn fmt_float(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }
    let repr = format!("{n:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// One `domain: level` entry of a concept's `tags` mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub domain: String,
    pub level: Scalar,
}

/// The `tags` mapping, kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<D: Into<String>, L: Into<Scalar>> FromIterator<(D, L)> for Tags {
    fn from_iter<I: IntoIterator<Item = (D, L)>>(iter: I) -> Self {
        Tags(
            iter.into_iter()
                .map(|(domain, level)| Tag {
                    domain: domain.into(),
                    level: level.into(),
                })
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagsVisitor;

        impl<'de> Visitor<'de> for TagsVisitor {
            type Value = Tags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of domain names to levels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Tags, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((domain, level)) = map.next_entry::<Scalar, Scalar>()? {
                    entries.push(Tag {
                        domain: domain.to_string(),
                        level,
                    });
                }
                Ok(Tags(entries))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Tags, E> {
                Ok(Tags::default())
            }
        }

        deserializer.deserialize_map(TagsVisitor)
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Maturity block of a concept. Only `level` is rendered; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Maturity {
    #[serde(default)]
    pub level: Option<Scalar>,
}

impl Maturity {
    /// The level as rendered text; empty when absent.
    pub fn level_text(&self) -> String {
        self.level.as_ref().map(Scalar::to_string).unwrap_or_default()
    }
}

/// A single concept record, one per source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Tags,
    #[serde(default, deserialize_with = "nullable")]
    pub maturity: Maturity,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    /// `Some` whenever the key is present with a non-null value, even if empty.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub assumptions: Vec<Scalar>,
    #[serde(default, deserialize_with = "nullable")]
    pub downstream_impacts: Vec<Scalar>,
    #[serde(default, deserialize_with = "nullable")]
    pub anti_patterns: Vec<Scalar>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Vec<Scalar>,
}

impl Concept {
    /// A concept with only the required fields set.
    pub fn new(id: impl Into<ConceptId>, name: impl Into<String>) -> Self {
        Concept {
            id: id.into(),
            name: name.into(),
            tags: Tags::default(),
            maturity: Maturity::default(),
            summary: String::new(),
            description: None,
            assumptions: Vec::new(),
            downstream_impacts: Vec::new(),
            anti_patterns: Vec::new(),
            notes: Vec::new(),
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ConceptId::from("backpressure").to_string(), "backpressure");
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::from("novice").to_string(), "novice");
        assert_eq!(Scalar::Integer(3).to_string(), "3");
        assert_eq!(Scalar::Float(2.0).to_string(), "2.0");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Flag(true).to_string(), "true");
    }

    #[test]
    fn float_exponents_are_signed_and_padded() {
        assert_eq!(Scalar::Float(1e20).to_string(), "1e+20");
        assert_eq!(Scalar::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Scalar::Float(1e100).to_string(), "1e+100");
        assert_eq!(Scalar::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn integers_beyond_i64_stay_integers() {
        let tags: Tags = serde_yaml::from_str("big: 18446744073709551615
small: -3
")
            .expect("deserialize");
        assert_eq!(tags.0[0].level, Scalar::Unsigned(u64::MAX));
        assert_eq!(tags.0[0].level.to_string(), "18446744073709551615");
        assert_eq!(tags.0[1].level, Scalar::Integer(-3));
    }

    #[test]
    fn tags_preserve_source_order() {
        let yaml = "zeta: 1\nalpha: high\nmid: low\n";
        let tags: Tags = serde_yaml::from_str(yaml).expect("deserialize");
        let domains: Vec<_> = tags.iter().map(|t| t.domain.as_str()).collect();
        assert_eq!(domains, ["zeta", "alpha", "mid"]);
        assert_eq!(tags.0[0].level, Scalar::Integer(1));
    }

    #[test]
    fn minimal_concept_defaults_everything_else() {
        let concept: Concept = serde_yaml::from_str("id: a\nname: A\n").expect("deserialize");
        assert_eq!(concept, Concept::new("a", "A"));
    }

    #[test]
    fn null_fields_behave_as_absent() {
        let yaml = "id: a\nname: A\ntags:\nmaturity:\nsummary:\nnotes:\ndescription:\n";
        let concept: Concept = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(concept, Concept::new("a", "A"));
    }

    #[test]
    fn numeric_id_becomes_text() {
        let concept: Concept = serde_yaml::from_str("id: 42\nname: Answer\n").expect("deserialize");
        assert_eq!(concept.id, ConceptId::from("42"));
    }

    #[test]
    fn maturity_ignores_extra_keys() {
        let yaml = "id: a\nname: A\nmaturity:\n  level: stable\n  reviewed: 2024-01-01\n";
        let concept: Concept = serde_yaml::from_str(yaml).expect("deserialize");
        assert_eq!(concept.maturity.level_text(), "stable");
        assert_eq!(Maturity::default().level_text(), "");
    }

    #[test]
    fn list_entry_of_wrong_shape_is_rejected() {
        let yaml = "id: a\nname: A\nnotes:\n  - nested: mapping\n";
        assert!(serde_yaml::from_str::<Concept>(yaml).is_err());
    }
}
