//! Inline markdown substitutions
//!
//! Applied in a fixed order: bold, italic, code, links, then line breaks. Each pass is a plain
//! regex substitution; unterminated markers are left as literal text.

use regex::Captures;

use super::patterns::{BOLD, CODE, ITALIC, LINK, NEWLINE};
use super::FormatterOptions;

/// Apply every inline pass to `text`.
pub fn apply_inline(text: &str, options: &FormatterOptions) -> String {
    convert_line_breaks(&apply_spans(text, options), &options.line_break)
}

/// Apply the bold, italic, code and link passes, leaving newlines alone.
pub fn apply_spans(text: &str, options: &FormatterOptions) -> String {
    let text = BOLD.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    let text = CODE.replace_all(&text, "<code>${1}</code>");
    let text = LINK.replace_all(&text, |caps: &Captures| {
        format!(
            "<a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
            caps[2].replace('"', "&quot;"),
            options.link_target,
            options.link_rel,
            &caps[1]
        )
    });
    text.into_owned()
}

/// Replace newlines with `line_break`, except in front of table markup.
pub fn convert_line_breaks(text: &str, line_break: &str) -> String {
    NEWLINE
        .replace_all(text, |caps: &Captures| match caps.get(1) {
            Some(table) => format!("\n{}", table.as_str()),
            None => line_break.to_string(),
        })
        .into_owned()
}
