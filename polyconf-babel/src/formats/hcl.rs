//! HCL codec
//!
//! Backed by the `hcl` crate (hcl-rs).
//!
//! Reading decodes the HCL body straight into a Document. Attributes become mapping
//! entries, and an attribute defined twice in one body is a parse error. Blocks
//! become nested mappings keyed by block type and then by each label, and repeated
//! blocks collapse into sequences. Expressions that cannot be reduced to a value
//! (variable references, function calls) are kept as their
//! `${...}` template text.
//!
//! Writing has no direct encoder. The Document is encoded as JSON, decoded into an
//! `hcl::Value`, turned into a body AST and pretty-printed:
//!
//! - every root entry becomes an attribute
//! - nested mappings render as object expressions, sequences as tuples, whatever
//!   their element types
//! - a root that is not a mapping, or a root key that is not a valid HCL identifier,
//!   is rejected
//!
//! Blocks read from HCL therefore come back as object-valued attributes, so an
//! HCL → HCL round trip preserves the data but not the block syntax.

use crate::convert::ConvertOptions;
use crate::document::Document;
use crate::error::ConvertError;
use crate::format::{Codec, Format};
use crate::formats::json::to_json_bytes;

/// Codec for HCL (HashiCorp Configuration Language) documents
pub struct HclCodec;

impl Codec for HclCodec {
    fn format(&self) -> Format {
        Format::Hcl
    }

    fn description(&self) -> &str {
        "HashiCorp Configuration Language"
    }

    fn parse(&self, source: &[u8]) -> Result<Document, ConvertError> {
        parse_hcl(source)
    }

    fn serialize(&self, doc: &Document, _options: &ConvertOptions) -> Result<String, ConvertError> {
        serialize_hcl(doc)
    }
}

/// Parse an HCL body into a Document. An empty body is an empty mapping.
pub fn parse_hcl(source: &[u8]) -> Result<Document, ConvertError> {
    ::hcl::from_slice(source).map_err(|e| ConvertError::parse(Format::Hcl, e))
}

/// Serialize a Document as an HCL body
pub fn serialize_hcl(doc: &Document) -> Result<String, ConvertError> {
    let json = to_json_bytes(doc, Format::Hcl)?;
    let value: ::hcl::Value =
        serde_json::from_slice(&json).map_err(|e| ConvertError::serialization(Format::Hcl, e))?;
    let body = value_to_body(value)?;
    ::hcl::format::to_string(&body).map_err(|e| ConvertError::serialization(Format::Hcl, e))
}

fn value_to_body(value: ::hcl::Value) -> Result<::hcl::Body, ConvertError> {
    let object = match value {
        ::hcl::Value::Object(object) => object,
        other => {
            return Err(ConvertError::serialization(
                Format::Hcl,
                format!("document root must be a mapping, found {}", value_kind(&other)),
            ))
        }
    };

    let mut builder = ::hcl::Body::builder();
    for (key, value) in object {
        let ident = ::hcl::Identifier::new(key.as_str()).map_err(|e| {
            ConvertError::serialization(
                Format::Hcl,
                format!("key '{key}' is not a valid attribute name: {e}"),
            )
        })?;
        builder = builder.add_attribute(::hcl::Attribute::new(ident, value));
    }
    Ok(builder.build())
}

fn value_kind(value: &::hcl::Value) -> &'static str {
    match value {
        ::hcl::Value::Null => "null",
        ::hcl::Value::Bool(_) => "boolean",
        ::hcl::Value::Number(_) => "number",
        ::hcl::Value::String(_) => "string",
        ::hcl::Value::Array(_) => "sequence",
        ::hcl::Value::Object(_) => "mapping",
    }
}
