//! Reading and format detection
//!
//! An explicit source format is parsed with that format's codec and nothing else.
//! AUTO tries the codecs in [`Format::DETECTION_ORDER`] and keeps the first
//! document that parses.
//!
//! Nearly any line of text is a valid YAML plain scalar (`a = 1` is the string
//! `"a = 1"`), so during detection YAML only wins when the document root is a
//! sequence or a mapping. Without that rule YAML would shadow HCL for every
//! single-line HCL body. An explicit YAML request still accepts scalar documents.

use crate::convert::DetectionReport;
use crate::document::Document;
use crate::error::ConvertError;
use crate::format::Format;
use std::io::Read;
use tracing::debug;

/// A document together with the format it was read as
#[derive(Debug, Clone, PartialEq)]
pub struct Detected {
    pub format: Format,
    pub document: Document,
}

/// Read `source` as the requested format, reporting detection failures in full.
pub fn read(source: &[u8], requested: Format) -> Result<Document, ConvertError> {
    read_with(source, requested, DetectionReport::default()).map(|detected| detected.document)
}

/// Read `source` as the requested format.
///
/// `report` only matters for AUTO: it decides whether a total failure lists every
/// attempt or just the last one.
pub fn read_with(
    source: &[u8],
    requested: Format,
    report: DetectionReport,
) -> Result<Detected, ConvertError> {
    match requested {
        Format::Auto => detect(source, report),
        Format::Hcl | Format::Json | Format::Yaml => {
            let document = parse_as(requested, source)?;
            Ok(Detected {
                format: requested,
                document,
            })
        }
    }
}

/// Infer the format of `source` by trial parsing.
pub fn detect(source: &[u8], report: DetectionReport) -> Result<Detected, ConvertError> {
    let mut failures = Vec::with_capacity(Format::DETECTION_ORDER.len());

    for format in Format::DETECTION_ORDER {
        match parse_candidate(format, source) {
            Ok(document) => {
                debug!(%format, "detected input format");
                return Ok(Detected { format, document });
            }
            Err(err) => {
                debug!(%format, error = %err, "candidate format rejected");
                failures.push(err);
            }
        }
    }

    match report {
        DetectionReport::All => Err(ConvertError::DetectionFailed(failures)),
        DetectionReport::Last => Err(failures
            .pop()
            .unwrap_or(ConvertError::DetectionFailed(Vec::new()))),
    }
}

/// Read a whole stream into memory.
///
/// Failing here means the input could not be obtained at all, which is reported
/// as an I/O error rather than a parse error.
pub fn read_input<R: Read>(mut input: R) -> Result<Vec<u8>, ConvertError> {
    let mut buffer = Vec::new();
    input
        .read_to_end(&mut buffer)
        .map_err(|e| ConvertError::Io(format!("unable to read input: {e}")))?;
    debug!(bytes = buffer.len(), "read input");
    Ok(buffer)
}

fn parse_as(format: Format, source: &[u8]) -> Result<Document, ConvertError> {
    match format.codec() {
        Some(codec) => codec.parse(source),
        None => Err(ConvertError::Config(format!(
            "{format} cannot be parsed directly"
        ))),
    }
}

fn parse_candidate(format: Format, source: &[u8]) -> Result<Document, ConvertError> {
    let document = parse_as(format, source)?;
    match format {
        Format::Yaml if !document.is_collection() => Err(ConvertError::ParseError {
            format,
            message: format!(
                "not a YAML collection (document root is a {})",
                document.kind()
            ),
        }),
        Format::Hcl | Format::Json | Format::Yaml | Format::Auto => Ok(document),
    }
}
