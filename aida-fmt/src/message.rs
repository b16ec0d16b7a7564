//! Message formatter
//!
//! Converts the raw text of one chat turn into display-ready HTML. See the crate docs for the
//! pipeline; each stage lives in its own submodule.
//!
//! The formatter does not decide whether a message is trusted. It formats what it is handed;
//! user-authored text should go through [`crate::formats::EscapedHtmlFormat`] instead.

pub mod inline;
mod patterns;
pub mod preserve;
pub mod tables;

use serde::{Deserialize, Serialize};
use tracing::trace;

use self::patterns::HTML_TAG;
use self::preserve::PreservedHtml;

/// Markup knobs for the formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterOptions {
    /// Class attribute of generated `<table>` elements
    pub table_class: String,
    /// `target` attribute of generated links
    pub link_target: String,
    /// `rel` attribute of generated links
    pub link_rel: String,
    /// Markup emitted for each converted newline
    pub line_break: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            table_class: "markdown-table".to_string(),
            link_target: "_blank".to_string(),
            link_rel: "noopener noreferrer".to_string(),
            line_break: "<br>".to_string(),
        }
    }
}

/// How a message is formatted, decided once per message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Embedded HTML and generated tables pass through untouched; table cells stay literal
    HtmlBearing,
    /// Table cells get inline markdown, each cell on its own
    PureMarkdown,
}

/// Classify `content` by looking for any opening or self-closing tag.
pub fn detect_strategy(content: &str) -> Strategy {
    if HTML_TAG.is_match(content) {
        Strategy::HtmlBearing
    } else {
        Strategy::PureMarkdown
    }
}

/// Stateless chat message formatter
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    options: FormatterOptions,
}

impl MessageFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Format one message. Never fails.
    pub fn format(&self, content: &str) -> String {
        let strategy = detect_strategy(content);
        trace!(?strategy, len = content.len(), "formatting message");

        let content = match strategy {
            Strategy::HtmlBearing => tables::convert_markdown_tables(content, &self.options),
            Strategy::PureMarkdown => {
                tables::convert_markdown_tables_with(content, &self.options, &|cell| {
                    inline::apply_spans(cell, &self.options)
                })
            }
        };

        let preserved = PreservedHtml::extract(&content);
        trace!(
            fragments = preserved.fragments.len(),
            "preserved embedded html"
        );
        let formatted = inline::apply_inline(&preserved.text, &self.options);
        preserved.restore(&formatted)
    }
}

/// Format `content` with the default options.
pub fn format_message(content: &str) -> String {
    MessageFormatter::default().format(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_strategy() {
        assert_eq!(detect_strategy("plain **text**"), Strategy::PureMarkdown);
        assert_eq!(
            detect_strategy("press <button>go</button>"),
            Strategy::HtmlBearing
        );
        assert_eq!(detect_strategy("a <br/> b"), Strategy::HtmlBearing);
    }

    #[test]
    fn test_bare_tag_in_prose_is_html_bearing() {
        assert_eq!(
            detect_strategy("use the <input> tag"),
            Strategy::HtmlBearing
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(format_message(""), "");
    }

    #[test]
    fn test_markdown_around_preserved_html() {
        assert_eq!(
            format_message("**Done**\n<button class=\"b\">*keep*</button>"),
            "<strong>Done</strong><br><button class=\"b\">*keep*</button>"
        );
    }

    #[test]
    fn test_table_cells_get_inline_markdown_without_html() {
        let output = format_message("| **A** |\n| `b` |");
        assert_eq!(
            output,
            "<table class=\"markdown-table\"><tr><th><strong>A</strong></th></tr><tr><td><code>b</code></td></tr></table>"
        );
    }

    #[test]
    fn test_emphasis_does_not_pair_across_cells() {
        let output = format_message("| *a | b* |\n| 1 | 2 |");
        assert_eq!(
            output,
            "<table class=\"markdown-table\"><tr><th>*a</th><th>b*</th></tr><tr><td>1</td><td>2</td></tr></table>"
        );
    }

    #[test]
    fn test_bold_does_not_reach_into_a_table() {
        let output = format_message("**note\n| a | b** |\n| 1 | 2 |");
        assert!(!output.contains("<strong>"));
        assert!(output.starts_with("**note\n<table"));
    }

    #[test]
    fn test_token_shaped_input_is_kept() {
        let content = "keep \u{E000}H0\u{E001} and <b>x</b>";
        assert_eq!(format_message(content), content);
        assert_eq!(
            format_message("plain \u{E000}T3\u{E001}"),
            "plain \u{E000}T3\u{E001}"
        );
    }

    #[test]
    fn test_options_are_used() {
        let formatter = MessageFormatter::new(FormatterOptions {
            link_target: "_self".to_string(),
            line_break: "<br/>".to_string(),
            ..FormatterOptions::default()
        });
        assert_eq!(
            formatter.format("[a](b)\nc"),
            "<a href=\"b\" target=\"_self\" rel=\"noopener noreferrer\">a</a><br/>c"
        );
    }

    #[test]
    fn test_formatter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MessageFormatter>();
    }
}
