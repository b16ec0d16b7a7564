//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{ChatHtmlFormat, EscapedHtmlFormat, ParagraphHtmlFormat};
use crate::message::FormatterOptions;
use std::collections::HashMap;

/// Registry of message formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
///
/// let html = registry.serialize("Hello **world**", "chat-html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render message text using the specified format
    pub fn serialize(&self, content: &str, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(content)
    }

    /// Create a registry with the built-in formats configured from `options`
    pub fn with_options(options: &FormatterOptions) -> Self {
        let mut registry = Self::new();

        registry.register(ChatHtmlFormat::new(options.clone()));
        registry.register(EscapedHtmlFormat::new(options));
        registry.register(ParagraphHtmlFormat::new(options));

        registry
    }

    /// Create a registry with the built-in formats and default options
    pub fn with_defaults() -> Self {
        Self::with_options(&FormatterOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
