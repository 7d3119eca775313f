//! Error types for conversion operations

use crate::format::Format;
use std::fmt;

/// Errors that can occur while reading, detecting or writing documents
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Invalid run configuration (e.g. AUTO requested as target)
    Config(String),
    /// The input could not be read or the output could not be written
    Io(String),
    /// Unknown format name
    FormatNotFound(String),
    /// Input did not conform to the named format's grammar
    ParseError { format: Format, message: String },
    /// Every auto-detection attempt failed, in attempt order
    DetectionFailed(Vec<ConvertError>),
    /// The document could not be rendered in the named format
    SerializationError { format: Format, message: String },
}

impl ConvertError {
    pub(crate) fn parse(format: Format, cause: impl fmt::Display) -> Self {
        ConvertError::ParseError {
            format,
            message: cause.to_string(),
        }
    }

    pub(crate) fn serialization(format: Format, cause: impl fmt::Display) -> Self {
        ConvertError::SerializationError {
            format,
            message: cause.to_string(),
        }
    }

    /// The format this error is about, if any
    pub fn format(&self) -> Option<Format> {
        match self {
            ConvertError::ParseError { format, .. }
            | ConvertError::SerializationError { format, .. } => Some(*format),
            ConvertError::Config(_)
            | ConvertError::Io(_)
            | ConvertError::FormatNotFound(_)
            | ConvertError::DetectionFailed(_) => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConvertError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ConvertError::ParseError { format, message } => {
                write!(f, "Unable to parse {format}: {message}")
            }
            ConvertError::DetectionFailed(attempts) => {
                write!(f, "Unable to detect the input format")?;
                for attempt in attempts {
                    let text = attempt.to_string().replace('\n', "\n    ");
                    write!(f, "\n  - {text}")?;
                }
                Ok(())
            }
            ConvertError::SerializationError { format, message } => {
                write!(f, "Unable to serialize {format}: {message}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
