//! Plain paragraph format
//!
//! Strategy: the text is wrapped in `<p>`, every blank-line pair closes one paragraph and opens
//! the next, remaining newlines become line breaks. No markdown, no escaping. Meant for plain
//! bodies generated by the backend, such as email drafts shown for review.

use crate::error::FormatError;
use crate::format::Format;
use crate::message::FormatterOptions;

#[derive(Debug, Clone)]
pub struct ParagraphHtmlFormat {
    line_break: String,
}

impl ParagraphHtmlFormat {
    pub fn new(options: &FormatterOptions) -> Self {
        Self {
            line_break: options.line_break.clone(),
        }
    }
}

impl Default for ParagraphHtmlFormat {
    fn default() -> Self {
        Self::new(&FormatterOptions::default())
    }
}

impl Format for ParagraphHtmlFormat {
    fn name(&self) -> &str {
        "paragraph-html"
    }

    fn description(&self) -> &str {
        "Plain text split into <p> paragraphs"
    }

    fn serialize(&self, content: &str) -> Result<String, FormatError> {
        let body = content
            .replace("\n\n", "</p><p>")
            .replace('\n', &self.line_break);
        Ok(format!("<p>{}</p>", body))
    }
}
