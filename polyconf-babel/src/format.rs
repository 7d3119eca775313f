//! Format enumeration and the Codec trait
//!
//! [`Format`] is the closed set of format requests the tool understands. The three
//! concrete formats each have a [`Codec`]; `AUTO` is only a detection request and
//! has none, which every dispatch point has to handle explicitly.

use crate::convert::ConvertOptions;
use crate::document::Document;
use crate::error::ConvertError;
use crate::formats::{HclCodec, JsonCodec, YamlCodec};
use std::fmt;
use std::str::FromStr;

/// A requested document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Hcl,
    Json,
    Yaml,
    /// Infer the format by trial parsing (source only)
    Auto,
}

impl Format {
    /// Every format that can actually be parsed and serialized
    pub const CONCRETE: [Format; 3] = [Format::Hcl, Format::Json, Format::Yaml];

    /// Order in which AUTO tries the concrete formats.
    ///
    /// JSON is a subset of YAML so it must be tried before YAML, and HCL accepts
    /// the widest range of input so it comes last.
    pub const DETECTION_ORDER: [Format; 3] = [Format::Json, Format::Yaml, Format::Hcl];

    const ALL: [Format; 4] = [Format::Hcl, Format::Json, Format::Yaml, Format::Auto];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Format::Hcl => "HCL",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Auto => "AUTO",
        }
    }

    /// Names accepted on the command line, canonical name first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Format::Hcl => &["HCL", "TF"],
            Format::Json => &["JSON"],
            Format::Yaml => &["YAML", "YML"],
            Format::Auto => &["AUTO"],
        }
    }

    /// Whether this format can be used as a conversion target
    pub fn is_concrete(self) -> bool {
        match self {
            Format::Hcl | Format::Json | Format::Yaml => true,
            Format::Auto => false,
        }
    }

    /// The codec for this format, `None` for AUTO
    pub fn codec(self) -> Option<&'static dyn Codec> {
        match self {
            Format::Hcl => Some(&HclCodec),
            Format::Json => Some(&JsonCodec),
            Format::Yaml => Some(&YamlCodec),
            Format::Auto => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    /// Parse a flag value; matching is case-insensitive and accepts aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Format::ALL
            .into_iter()
            .find(|format| {
                format
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ConvertError::FormatNotFound(s.to_string()))
    }
}

/// Trait for document codecs
///
/// Implementors provide bidirectional conversion between the bytes of one concrete
/// format and the generic [`Document`]. Parsing and serialization are delegated to
/// the format's own crate; a codec only adapts between that crate and the document
/// model.
pub trait Codec: Send + Sync {
    /// The format handled by this codec
    fn format(&self) -> Format;

    /// Optional description of this codec
    fn description(&self) -> &str {
        ""
    }

    /// Parse source bytes into a Document
    fn parse(&self, source: &[u8]) -> Result<Document, ConvertError>;

    /// Serialize a Document into text, without any trailing newline handling
    fn serialize(&self, doc: &Document, options: &ConvertOptions) -> Result<String, ConvertError>;
}
