//! Shared configuration loader for the polyconf toolchain.
//!
//! `defaults/polyconf.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PolyconfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use polyconf_babel::{ConvertOptions, DetectionReport};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/polyconf.default.toml");

/// Top-level configuration consumed by polyconf applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PolyconfConfig {
    pub convert: ConvertConfig,
    pub detection: DetectionConfig,
}

/// Output rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub trailing_newline: bool,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub indent: usize,
}

/// Controls how AUTO detection failures are reported.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    pub report: ReportMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ReportMode {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "last")]
    Last,
}

impl From<ReportMode> for DetectionReport {
    fn from(mode: ReportMode) -> Self {
        match mode {
            ReportMode::All => DetectionReport::All,
            ReportMode::Last => DetectionReport::Last,
        }
    }
}

impl From<&PolyconfConfig> for ConvertOptions {
    fn from(config: &PolyconfConfig) -> Self {
        ConvertOptions {
            json_indent: config.convert.json.indent,
            trailing_newline: config.convert.trailing_newline,
            detection_report: config.detection.report.into(),
        }
    }
}

impl From<PolyconfConfig> for ConvertOptions {
    fn from(config: PolyconfConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PolyconfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PolyconfConfig, ConfigError> {
    Loader::new().build()
}
