//! Shared helpers for the integration tests.

use polyconf_babel::{ConvertOptions, Format, RunConfig};
use std::fs;
use std::path::PathBuf;

pub fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

pub fn convert(source: &[u8], from: Format, to: Format) -> String {
    try_convert(source, from, to).expect("conversion to succeed")
}

pub fn try_convert(
    source: &[u8],
    from: Format,
    to: Format,
) -> Result<String, polyconf_babel::ConvertError> {
    let run = RunConfig::new(from, to, false).expect("valid run config");
    polyconf_babel::convert_bytes(source, &run, &ConvertOptions::default())
}
