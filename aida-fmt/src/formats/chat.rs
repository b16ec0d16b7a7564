//! Assistant message format
//!
//! Strategy: full [`MessageFormatter`] pipeline. Embedded HTML is trusted and kept verbatim, so
//! this format is only for text produced by the backend.

use crate::error::FormatError;
use crate::format::Format;
use crate::message::{FormatterOptions, MessageFormatter};

#[derive(Debug, Clone, Default)]
pub struct ChatHtmlFormat {
    formatter: MessageFormatter,
}

impl ChatHtmlFormat {
    pub fn new(options: FormatterOptions) -> Self {
        Self {
            formatter: MessageFormatter::new(options),
        }
    }
}

impl Format for ChatHtmlFormat {
    fn name(&self) -> &str {
        "chat-html"
    }

    fn description(&self) -> &str {
        "Markdown, pipe tables and trusted inline HTML (assistant messages)"
    }

    fn serialize(&self, content: &str) -> Result<String, FormatError> {
        Ok(self.formatter.format(content))
    }
}
