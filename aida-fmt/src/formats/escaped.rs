//! User message format
//!
//! Strategy: escape every markup-significant character, then turn newlines into line breaks.
//! Nothing the user types can become an element or an attribute.

use crate::error::FormatError;
use crate::format::Format;
use crate::message::inline::convert_line_breaks;
use crate::message::FormatterOptions;

#[derive(Debug, Clone)]
pub struct EscapedHtmlFormat {
    line_break: String,
}

impl EscapedHtmlFormat {
    pub fn new(options: &FormatterOptions) -> Self {
        Self {
            line_break: options.line_break.clone(),
        }
    }
}

impl Default for EscapedHtmlFormat {
    fn default() -> Self {
        Self::new(&FormatterOptions::default())
    }
}

impl Format for EscapedHtmlFormat {
    fn name(&self) -> &str {
        "escaped-html"
    }

    fn description(&self) -> &str {
        "HTML-escaped plain text with line breaks (user messages)"
    }

    fn serialize(&self, content: &str) -> Result<String, FormatError> {
        Ok(convert_line_breaks(&escape_html(content), &self.line_break))
    }
}

/// Escape `& < > " '` for use in element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b onclick='x'>\"&\"</b>"),
            "&lt;b onclick=&#39;x&#39;&gt;&quot;&amp;&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escaped_format_keeps_markdown_literal() {
        let html = EscapedHtmlFormat::default()
            .serialize("**not bold**\n<table>")
            .unwrap();
        assert_eq!(html, "**not bold**<br>&lt;table&gt;");
    }
}
