//! Format trait definition
//!
//! This module defines the Format trait that every rendering strategy implements. A format takes
//! the raw text of one chat turn and produces HTML.

use crate::error::FormatError;

/// Trait for message formats
///
/// # Examples
///
/// ```ignore
/// struct ShoutFormat;
///
/// impl Format for ShoutFormat {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn serialize(&self, content: &str) -> Result<String, FormatError> {
///         Ok(content.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "chat-html", "escaped-html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render raw message text as HTML
    fn serialize(&self, content: &str) -> Result<String, FormatError>;
}
