//! Compiled patterns shared by the formatting passes
//!
//! All patterns are compiled once, on first use, and are immutable afterwards so the formatter
//! can be called from any number of threads.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening-or-self-closing tag anywhere in the text. Used only to classify a message.
pub(super) static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").unwrap());

/// Opening tag with its name in group 1 and an optional self-closing slash in group 2.
pub(super) static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Za-z][A-Za-z0-9-]*)(?:\s[^<>]*?)?(/?)>").unwrap());

/// One or more blank lines between two sections.
pub(super) static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// A table separator row such as `|---|:---:|`.
pub(super) static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s|:-]+$").unwrap());

pub(super) static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

pub(super) static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

pub(super) static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

pub(super) static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap());

/// A newline, with group 1 set when table markup (or a preserved table) follows it.
pub(super) static NEWLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n([ \t]*(?:<table\b|<tr\b|</table>|\x{E000}T\d+\x{E001}))?").unwrap()
});

/// A placeholder token left by the HTML preservation pass.
pub(super) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x{E000}[TH](\d+)\x{E001}").unwrap());
