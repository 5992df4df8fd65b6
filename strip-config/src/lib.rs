//! Shared marker configuration for the strip toolchain.
//!
//! `defaults/strip.default.toml` is embedded into every binary so that the
//! documented marker table and runtime behavior stay in sync. Applications
//! layer user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`StripConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use strip_core::strip::rules::{CallSpec, MarkerSpec, StripRules};

const DEFAULT_TOML: &str = include_str!("../defaults/strip.default.toml");

/// Top-level configuration consumed by the stripper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripConfig {
    pub markers: MarkersConfig,
    pub calls: CallsConfig,
}

/// The conditional-marker vocabulary of the codebase being stripped.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkersConfig {
    pub strip_symbol: String,
    pub tag: String,
    pub unit_test_symbol: String,
    pub version_guard: String,
}

/// The call names whose statements are removed.
#[derive(Debug, Clone, Deserialize)]
pub struct CallsConfig {
    pub freeze: String,
    pub record: String,
    pub test_hooks: Vec<String>,
}

impl StripConfig {
    /// Compile the configured vocabulary into scanner rules.
    pub fn rules(&self) -> Result<StripRules, regex::Error> {
        let markers = MarkerSpec {
            strip_symbol: self.markers.strip_symbol.clone(),
            tag: self.markers.tag.clone(),
            unit_test_symbol: self.markers.unit_test_symbol.clone(),
            version_guard: self.markers.version_guard.clone(),
        };
        let calls = CallSpec {
            freeze: self.calls.freeze.clone(),
            record: self.calls.record.clone(),
            test_hooks: self.calls.test_hooks.clone(),
        };
        StripRules::compile(&markers, &calls)
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
    pub fn build(self) -> Result<StripConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StripConfig, ConfigError> {
    Loader::new().build()
}
