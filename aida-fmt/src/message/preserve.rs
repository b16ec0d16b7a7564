//! Placeholder round-trip for embedded HTML
//!
//! Each paired element (`<name ...>...</name>`) or self-closing element (`<name .../>`) is cut
//! out of the text and replaced by a token. The inline passes then run over text that contains
//! no markup at all, and [`PreservedHtml::restore`] puts every element back byte for byte.
//!
//! Tokens are delimited by the private-use characters U+E000 and U+E001, which none of the
//! inline patterns touch. The letter after the opening delimiter marks preserved tables (`T`)
//! apart from everything else (`H`) so that line-break conversion can still see a table.
//!
//! A paired element ends at the first matching close tag, so nested elements of the same name
//! are cut short. An opening tag with no close tag is not extracted.
//!
//! Delimiter characters already present in the message are preserved as fragments of their own,
//! so a token-shaped run of input text comes back unchanged.

use std::collections::HashMap;

use regex::Captures;

use super::patterns::{OPEN_TAG, PLACEHOLDER};

const TOKEN_START: char = '\u{E000}';
const TOKEN_END: char = '\u{E001}';

/// Text with its HTML elements swapped out for placeholder tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreservedHtml {
    pub text: String,
    pub fragments: Vec<String>,
}

impl PreservedHtml {
    /// Cut every HTML element out of `content`, in textual order.
    pub fn extract(content: &str) -> Self {
        let mut preserved = PreservedHtml {
            text: String::with_capacity(content.len()),
            fragments: Vec::new(),
        };
        let mut closings = ClosingTags::new(content);
        let mut cursor = 0;
        let mut search = 0;

        while let Some(caps) = OPEN_TAG.captures_at(content, search) {
            let Some(open) = caps.get(0) else { break };
            let name = &caps[1];
            let self_closing = caps.get(2).is_some_and(|slash| !slash.is_empty());

            let end = if self_closing {
                Some(open.end())
            } else {
                closings.after(open.end(), name)
            };

            match end {
                Some(end) => {
                    preserved.push_text(&content[cursor..open.start()]);
                    preserved.push_fragment(&content[open.start()..end], name);
                    cursor = end;
                    search = end;
                }
                None => search = open.end(),
            }
        }

        preserved.push_text(&content[cursor..]);
        preserved
    }

    /// Copy plain text, turning stray token delimiters into fragments.
    fn push_text(&mut self, text: &str) {
        let mut rest = text;
        while let Some(offset) = rest.find([TOKEN_START, TOKEN_END]) {
            self.text.push_str(&rest[..offset]);
            let delimiter_len = TOKEN_START.len_utf8();
            self.push_fragment(&rest[offset..offset + delimiter_len], "");
            rest = &rest[offset + delimiter_len..];
        }
        self.text.push_str(rest);
    }

    fn push_fragment(&mut self, fragment: &str, name: &str) {
        let kind = if name.eq_ignore_ascii_case("table") {
            'T'
        } else {
            'H'
        };
        self.text.push(TOKEN_START);
        self.text.push(kind);
        self.text.push_str(&self.fragments.len().to_string());
        self.text.push(TOKEN_END);
        self.fragments.push(fragment.to_string());
    }

    /// Replace every placeholder in `text` with its recorded fragment.
    ///
    /// Tokens with an index that was never issued are left as they are.
    pub fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .map_or_else(|| caps[0].to_string(), Clone::clone)
            })
            .into_owned()
    }
}

/// Close-tag lookup over one message.
///
/// The message is lowercased once. For each tag name the last close tag found is remembered:
/// it answers every later lookup that starts at or before it, and a name with no close tag
/// after some offset has none after any later offset either.
struct ClosingTags {
    lowered: String,
    found: HashMap<String, Option<usize>>,
}

impl ClosingTags {
    fn new(content: &str) -> Self {
        Self {
            lowered: content.to_ascii_lowercase(),
            found: HashMap::new(),
        }
    }

    /// Byte offset just past the first `</name>` at or after `from`.
    fn after(&mut self, from: usize, name: &str) -> Option<usize> {
        let name = name.to_ascii_lowercase();
        match self.found.get(&name) {
            Some(None) => return None,
            Some(Some(end)) if *end - closing_len(&name) >= from => return Some(*end),
            _ => {}
        }

        let closing = format!("</{}>", name);
        let end = self.lowered[from..]
            .find(&closing)
            .map(|offset| from + offset + closing.len());
        self.found.insert(name, end);
        end
    }
}

fn closing_len(name: &str) -> usize {
    name.len() + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_paired_element() {
        let preserved = PreservedHtml::extract("Click <button onclick=\"x()\">Go</button> now");
        assert_eq!(preserved.text, "Click \u{E000}H0\u{E001} now");
        assert_eq!(
            preserved.fragments,
            vec!["<button onclick=\"x()\">Go</button>"]
        );
    }

    #[test]
    fn test_extract_self_closing_and_table() {
        let preserved = PreservedHtml::extract("<img src=\"a.png\"/>\n<table><tr></tr></table>");
        assert_eq!(preserved.text, "\u{E000}H0\u{E001}\n\u{E000}T1\u{E001}");
        assert_eq!(preserved.fragments[1], "<table><tr></tr></table>");
    }

    #[test]
    fn test_unclosed_tag_is_left_in_place() {
        let preserved = PreservedHtml::extract("a <div class=\"x\"> b <em>c</em>");
        assert_eq!(preserved.text, "a <div class=\"x\"> b \u{E000}H0\u{E001}");
        assert_eq!(preserved.fragments, vec!["<em>c</em>"]);
    }

    #[test]
    fn test_closing_tag_case_insensitive_and_multiline() {
        let preserved = PreservedHtml::extract("<DIV>\nline\n</div>!");
        assert_eq!(preserved.fragments, vec!["<DIV>\nline\n</div>"]);
        assert_eq!(preserved.text, "\u{E000}H0\u{E001}!");
    }

    #[test]
    fn test_restore_round_trip() {
        let content = "x <b>1</b> y <i>2</i> z";
        let preserved = PreservedHtml::extract(content);
        assert_eq!(preserved.restore(&preserved.text), content);
    }

    #[test]
    fn test_many_unclosed_tags_extract_in_linear_time() {
        let content = "<p>x".repeat(40_000);
        let started = std::time::Instant::now();
        let preserved = PreservedHtml::extract(&content);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
        assert!(preserved.fragments.is_empty());
        assert_eq!(preserved.text, content);
    }

    #[test]
    fn test_close_tag_is_reused_across_lookups() {
        let preserved = PreservedHtml::extract("<b>a <b>b</B> <b>c</b> <b>d");
        assert_eq!(preserved.fragments, vec!["<b>a <b>b</B>", "<b>c</b>"]);
        assert_eq!(
            preserved.text,
            "\u{E000}H0\u{E001} \u{E000}H1\u{E001} <b>d"
        );
    }

    #[test]
    fn test_literal_delimiters_round_trip() {
        let content = "keep \u{E000}H0\u{E001} and <b>x</b>";
        let preserved = PreservedHtml::extract(content);
        assert_eq!(preserved.fragments.len(), 3);
        assert!(!preserved.text.contains("\u{E000}H0\u{E001} and"));
        assert_eq!(preserved.restore(&preserved.text), content);
    }

    #[test]
    fn test_restore_leaves_unknown_tokens() {
        let preserved = PreservedHtml::default();
        assert_eq!(
            preserved.restore("\u{E000}H7\u{E001}"),
            "\u{E000}H7\u{E001}"
        );
    }
}
