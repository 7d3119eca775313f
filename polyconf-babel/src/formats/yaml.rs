//! YAML codec
//!
//! Reading goes YAML → JSON bytes → Document: the YAML tree is re-encoded as JSON
//! and then parsed by the JSON codec, so YAML that has no JSON equivalent (mapping
//! keys that are themselves sequences or mappings, for instance) is rejected even
//! though it is valid YAML. Merge keys (`<<`) are resolved before the re-encoding.
//!
//! Writing serializes the Document structurally through `serde_yaml`, never through
//! JSON text.

use super::is_blank;
use crate::convert::ConvertOptions;
use crate::document::Document;
use crate::error::ConvertError;
use crate::format::{Codec, Format};

/// Codec for YAML documents
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn description(&self) -> &str {
        "YAML Ain't Markup Language"
    }

    fn parse(&self, source: &[u8]) -> Result<Document, ConvertError> {
        parse_yaml(source)
    }

    fn serialize(&self, doc: &Document, _options: &ConvertOptions) -> Result<String, ConvertError> {
        serialize_yaml(doc)
    }
}

/// Parse YAML bytes into a Document
pub fn parse_yaml(source: &[u8]) -> Result<Document, ConvertError> {
    let json = yaml_to_json(source)?;
    serde_json::from_slice(&json).map_err(|e| {
        ConvertError::parse(Format::Yaml, format!("unable to unmarshal converted JSON: {e}"))
    })
}

/// Re-encode a single YAML document as compact JSON bytes
pub fn yaml_to_json(source: &[u8]) -> Result<Vec<u8>, ConvertError> {
    // An empty stream is a null document to serde_yaml; treat it as no document at all.
    if is_blank(source) {
        return Err(ConvertError::parse(Format::Yaml, "empty document"));
    }
    let mut value: serde_yaml::Value =
        serde_yaml::from_slice(source).map_err(|e| ConvertError::parse(Format::Yaml, e))?;
    value
        .apply_merge()
        .map_err(|e| ConvertError::parse(Format::Yaml, e))?;
    serde_json::to_vec(&value).map_err(|e| {
        ConvertError::parse(Format::Yaml, format!("document is not representable as JSON: {e}"))
    })
}

/// Serialize a Document as YAML
pub fn serialize_yaml(doc: &Document) -> Result<String, ConvertError> {
    serde_yaml::to_string(doc).map_err(|e| ConvertError::serialization(Format::Yaml, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::json::parse_json;

    #[test]
    fn json_is_valid_yaml() {
        let source = br#"{"a": 1, "b": [true, null]}"#;
        assert_eq!(parse_yaml(source).unwrap(), parse_json(source).unwrap());
    }

    #[test]
    fn parses_block_mappings() {
        let doc = parse_yaml(b"name: web\nports:\n  - 80\n  - 443\n").unwrap();
        let expected = parse_json(br#"{"name": "web", "ports": [80, 443]}"#).unwrap();
        assert_eq!(doc, expected);
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_yaml(b"  \n").unwrap_err();
        assert_eq!(
            err,
            ConvertError::ParseError {
                format: Format::Yaml,
                message: "empty document".to_string()
            }
        );
    }

    #[test]
    fn rejects_sequence_keys() {
        let err = parse_yaml(b"? [a, b]\n: 1\n").unwrap_err();
        match err {
            ConvertError::ParseError { format, message } => {
                assert_eq!(format, Format::Yaml);
                assert!(message.contains("not representable as JSON"), "{message}");
            }
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn resolves_merge_keys() {
        let doc = parse_yaml(b"base: &base\n  a: 1\nderived:\n  <<: *base\n  b: 2\n").unwrap();
        let derived = doc.get("derived").unwrap();
        assert_eq!(derived.get("a"), Some(&Document::from(1u64)));
        assert_eq!(derived.get("b"), Some(&Document::from(2u64)));
        assert_eq!(derived.get("<<"), None);
    }

    #[test]
    fn rejects_multiple_documents() {
        assert!(parse_yaml(b"a: 1\n---\nb: 2\n").is_err());
    }

    #[test]
    fn accepts_scalar_documents() {
        assert_eq!(parse_yaml(b"a = 1").unwrap(), Document::from("a = 1"));
    }

    #[test]
    fn quotes_strings_that_look_like_other_scalars() {
        let doc: Document = [("flag", Document::from("true")), ("n", Document::from("1"))]
            .into_iter()
            .collect();
        let text = serialize_yaml(&doc).unwrap();
        assert_eq!(parse_yaml(text.as_bytes()).unwrap(), doc);
    }
}
