//! Configuration for the aida-fmt formatter and transcript renderer
//!
//! Settings come in three layers, later ones winning:
//!
//! 1. `defaults/aida-fmt.default.toml`, compiled into the crate
//! 2. TOML files given by the caller (`aida-fmt --config <file>`)
//! 3. single `section.key=value` assignments (`aida-fmt --set ...`)
//!
//! The result deserializes into [`AidaConfig`]: markup options for the message formatter and
//! the per-role format names of the transcript renderer.

use aida_fmt::{FormatterOptions, TranscriptOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/aida-fmt.default.toml");

/// Everything an aida-fmt run can be configured with
#[derive(Debug, Clone, Deserialize)]
pub struct AidaConfig {
    /// `[formatter]`: table class, link attributes, line-break markup
    pub formatter: FormatterOptions,
    /// `[transcript]`: format per role and the wrapper class
    pub transcript: TranscriptOptions,
}

/// Stacks formatter settings over the compiled-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML settings file; [`Loader::build`] fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML settings file that may be absent, such as a per-user file.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one key, e.g. `formatter.table_class`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Apply a `section.key=value` assignment as typed on the command line.
    ///
    /// The key is trimmed; the value is taken verbatim so markup such as `<br />` keeps its
    /// spaces. An assignment without `=` or with an empty key is rejected.
    pub fn with_assignment(self, assignment: &str) -> Result<Self, ConfigError> {
        let (key, value) = assignment
            .split_once('=')
            .map(|(key, value)| (key.trim(), value))
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "invalid setting '{}', expected KEY=VALUE",
                    assignment
                ))
            })?;
        self.set_override(key, value)
    }

    /// Resolve every layer into an [`AidaConfig`].
    pub fn build(self) -> Result<AidaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in settings alone.
pub fn load_defaults() -> Result<AidaConfig, ConfigError> {
    Loader::new().build()
}
