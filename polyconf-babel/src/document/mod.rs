//! The generic document model
//!
//! Every conversion goes through [`Document`]: readers produce it, writers consume it.
//! It carries no schema, only the shapes all three formats have in common.
//!
//! Mappings keep insertion order so converting a configuration file does not shuffle
//! its keys. When a JSON mapping repeats a key, the last occurrence wins. YAML and
//! HCL reject repeated keys while parsing.

mod de;
mod ser;

use indexmap::IndexMap;
use std::fmt;

/// String-keyed mapping with stable insertion order
pub type Mapping = IndexMap<String, Document>;

/// A recursive, dynamically shaped configuration value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

/// A numeric value.
///
/// Integers are stored canonically: non-negative values are always `PosInt` and
/// negative values always `NegInt`, so equal integers compare equal no matter which
/// parser produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Document {
    /// Human-readable name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Number(_) => "number",
            Document::String(_) => "string",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Sequences and mappings are collections, everything else is a scalar
    pub fn is_collection(&self) -> bool {
        match self {
            Document::Sequence(_) | Document::Mapping(_) => true,
            Document::Null | Document::Bool(_) | Document::Number(_) | Document::String(_) => {
                false
            }
        }
    }

    /// Look up a key when this document is a mapping
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::PosInt(n) => n as f64,
            Number::NegInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    pub fn is_integer(self) -> bool {
        match self {
            Number::PosInt(_) | Number::NegInt(_) => true,
            Number::Float(_) => false,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        match u64::try_from(n) {
            Ok(n) => Number::PosInt(n),
            Err(_) => Number::NegInt(n),
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::PosInt(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PosInt(n) => write!(f, "{n}"),
            Number::NegInt(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Document::Bool(b)
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Document::Number(n.into())
    }
}

impl From<u64> for Document {
    fn from(n: u64) -> Self {
        Document::Number(n.into())
    }
}

impl From<f64> for Document {
    fn from(n: f64) -> Self {
        Document::Number(n.into())
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::String(s.to_string())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::String(s)
    }
}

impl From<Vec<Document>> for Document {
    fn from(items: Vec<Document>) -> Self {
        Document::Sequence(items)
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::Mapping(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Document)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Document)>>(iter: I) -> Self {
        Document::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
