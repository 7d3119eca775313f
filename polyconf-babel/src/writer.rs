//! Rendering documents in a target format

use crate::convert::ConvertOptions;
use crate::document::Document;
use crate::error::ConvertError;
use crate::format::Format;
use std::io::Write;

/// Render `doc` as `target`, applying the trailing newline policy.
///
/// The policy only ever appends: newlines the codec already emitted can be part of
/// the data (a YAML `|+` block scalar keeps them), so they are never trimmed.
///
/// The whole output is produced in memory before anything is written, so a
/// rendering failure never leaves truncated output behind.
pub fn render(
    doc: &Document,
    target: Format,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let codec = target.codec().ok_or_else(|| {
        ConvertError::Config(format!("{target} is not a valid output format"))
    })?;
    let mut text = codec.serialize(doc, options)?;
    if options.trailing_newline && !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Render `doc` as `target` and write it to `sink`.
pub fn write<W: Write>(
    doc: &Document,
    target: Format,
    sink: &mut W,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let text = render(doc, target, options)?;
    sink.write_all(text.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|e| ConvertError::Io(format!("unable to write output: {e}")))
}
