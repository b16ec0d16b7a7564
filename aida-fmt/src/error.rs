//! Error types for format selection and transcript loading
//!
//! Formatting a message never fails; errors only come from looking up a format that was never
//! registered or from reading a transcript that does not deserialize.

use std::fmt;

/// Errors raised by the registry and transcript APIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No format registered under this name
    FormatNotFound(String),
    /// Transcript source could not be deserialized
    InvalidTranscript(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::InvalidTranscript(msg) => write!(f, "Invalid transcript: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::InvalidTranscript(err.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::InvalidTranscript(err.to_string())
    }
}
