//! JSON codec
//!
//! Backed by `serde_json`. Output is pretty-printed with a configurable indent
//! (two spaces by default) so repeated conversions produce stable text.

use crate::convert::ConvertOptions;
use crate::document::Document;
use crate::error::ConvertError;
use crate::format::{Codec, Format};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Codec for JSON documents
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn description(&self) -> &str {
        "JavaScript Object Notation"
    }

    fn parse(&self, source: &[u8]) -> Result<Document, ConvertError> {
        parse_json(source)
    }

    fn serialize(&self, doc: &Document, options: &ConvertOptions) -> Result<String, ConvertError> {
        serialize_json(doc, options.json_indent)
    }
}

/// Parse JSON bytes into a Document
pub fn parse_json(source: &[u8]) -> Result<Document, ConvertError> {
    serde_json::from_slice(source).map_err(|e| ConvertError::parse(Format::Json, e))
}

/// Pretty-print a Document as JSON using `indent` spaces per level
pub fn serialize_json(doc: &Document, indent: usize) -> Result<String, ConvertError> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut out,
        PrettyFormatter::with_indent(indent.as_bytes()),
    );
    doc.serialize(&mut serializer)
        .map_err(|e| ConvertError::serialization(Format::Json, e))?;
    String::from_utf8(out).map_err(|e| ConvertError::serialization(Format::Json, e))
}

/// Compact JSON encoding, used as the bridge into formats without a direct encoder
pub(crate) fn to_json_bytes(doc: &Document, target: Format) -> Result<Vec<u8>, ConvertError> {
    serde_json::to_vec(doc).map_err(|e| ConvertError::serialization(target, e))
}
