//! Run configuration and the conversion pipeline

use crate::error::ConvertError;
use crate::format::Format;
use crate::reader::{self, read_input, Detected};
use crate::writer;
use std::io::{Read, Write};
use tracing::{info, warn};

/// How a failed auto-detection is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionReport {
    /// List the failure of every attempted format
    #[default]
    All,
    /// Only surface the failure of the final (HCL) attempt
    Last,
}

/// Rendering and diagnostic knobs, usually resolved from configuration files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Spaces per indentation level in JSON output
    pub json_indent: usize,
    /// End the output with a newline, appending one if the codec did not
    pub trailing_newline: bool,
    /// What a failed AUTO detection reports: every attempt or only the last
    pub detection_report: DetectionReport,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            json_indent: 2,
            trailing_newline: true,
            detection_report: DetectionReport::All,
        }
    }
}

/// The resolved request for one invocation. AUTO is never a valid target, so a
/// `RunConfig` that exists always has a concrete destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    from: Format,
    to: Format,
    translate_iam: bool,
}

impl RunConfig {
    pub fn new(from: Format, to: Format, translate_iam: bool) -> Result<Self, ConvertError> {
        if !to.is_concrete() {
            return Err(ConvertError::Config(
                "To format must be one of <JSON|YAML|HCL>".to_string(),
            ));
        }
        Ok(RunConfig {
            from,
            to,
            translate_iam,
        })
    }

    pub fn from(&self) -> Format {
        self.from
    }

    pub fn to(&self) -> Format {
        self.to
    }

    pub fn translate_iam(&self) -> bool {
        self.translate_iam
    }
}

/// Convert one document held in memory, returning the rendered output.
pub fn convert_bytes(
    source: &[u8],
    run: &RunConfig,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let detected = resolve(source, run, options)?;
    writer::render(&detected.document, run.to(), options)
}

/// Read all of `input`, convert it and write the result to `output`.
///
/// Returns the format the input was read as. Nothing is written unless reading,
/// parsing and rendering all succeed.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: &mut W,
    run: &RunConfig,
    options: &ConvertOptions,
) -> Result<Format, ConvertError> {
    let source = read_input(input)?;
    let detected = resolve(&source, run, options)?;
    writer::write(&detected.document, run.to(), output, options)?;
    Ok(detected.format)
}

fn resolve(
    source: &[u8],
    run: &RunConfig,
    options: &ConvertOptions,
) -> Result<Detected, ConvertError> {
    if run.translate_iam() {
        warn!("IAM policy translation is not implemented; the document is converted as-is");
    }
    let detected = reader::read_with(source, run.from(), options.detection_report)?;
    info!(from = %detected.format, to = %run.to(), "converting document");
    Ok(detected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_is_rejected_as_target() {
        let err = RunConfig::new(Format::Json, Format::Auto, false).unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn auto_is_accepted_as_source() {
        let run = RunConfig::new(Format::Auto, Format::Yaml, true).unwrap();
        assert_eq!(run.from(), Format::Auto);
        assert_eq!(run.to(), Format::Yaml);
        assert!(run.translate_iam());
    }

    #[test]
    fn iam_flag_does_not_change_output() {
        let source = br#"{"Version": "2012-10-17", "Statement": []}"#;
        let options = ConvertOptions::default();
        let plain = RunConfig::new(Format::Auto, Format::Json, false).unwrap();
        let iam = RunConfig::new(Format::Auto, Format::Json, true).unwrap();
        assert_eq!(
            convert_bytes(source, &plain, &options).unwrap(),
            convert_bytes(source, &iam, &options).unwrap()
        );
    }

    #[test]
    fn converts_streams() {
        let run = RunConfig::new(Format::Auto, Format::Json, false).unwrap();
        let mut output = Vec::new();
        let format = convert(&b"a = 1"[..], &mut output, &run, &ConvertOptions::default()).unwrap();
        assert_eq!(format, Format::Hcl);
        assert_eq!(String::from_utf8(output).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn parse_failures_write_nothing() {
        let run = RunConfig::new(Format::Json, Format::Yaml, false).unwrap();
        let mut output = Vec::new();
        let err = convert(&b"a = 1"[..], &mut output, &run, &ConvertOptions::default());
        assert!(err.is_err());
        assert!(output.is_empty());
    }
}
