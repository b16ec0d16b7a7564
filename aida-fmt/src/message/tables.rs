//! Markdown pipe table conversion
//!
//! The message is split into sections on blank lines. A section holding at least two lines that
//! contain `|` becomes a single `<table>`; every other section is left alone, and so are the blank
//! lines between sections.
//!
//! Within a table section:
//!
//! - A separator row (`|---|:---:|`) is never emitted. It switches the remaining rows to body
//!   cells.
//! - The first emitted row uses `<th>` cells unless a separator came before it.
//! - Cells are trimmed; the empty cells produced by leading and trailing pipes are dropped.
//! - Lines without a pipe stay prose: those before the first pipe line go above the table, the
//!   rest below it.
//! - Cell text goes through a caller-supplied renderer, one cell at a time, so inline markup
//!   never pairs across a cell boundary.

use std::borrow::Cow;

use tracing::debug;

use super::patterns::{BLANK_LINES, SEPARATOR_ROW};
use super::FormatterOptions;

/// A transient table assembled from one section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBlock {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub header: bool,
    pub cells: Vec<String>,
}

impl TableBlock {
    /// Render as a single-line `<table>` element
    pub fn to_html(&self, class: &str) -> String {
        self.to_html_with(class, &verbatim)
    }

    /// Render as [`TableBlock::to_html`] does, passing each cell through `render_cell`.
    pub fn to_html_with(&self, class: &str, render_cell: &dyn Fn(&str) -> String) -> String {
        let mut html = format!("<table class=\"{}\">", class);
        for row in &self.rows {
            let tag = if row.header { "th" } else { "td" };
            html.push_str("<tr>");
            for cell in &row.cells {
                html.push_str(&format!("<{tag}>{}</{tag}>", render_cell(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }
}

/// Convert every qualifying section of `content` to table markup.
///
/// Returns the input untouched when no section qualifies. Cell text is copied as is.
pub fn convert_markdown_tables<'a>(content: &'a str, options: &FormatterOptions) -> Cow<'a, str> {
    convert_markdown_tables_with(content, options, &verbatim)
}

/// Convert tables like [`convert_markdown_tables`], rendering each cell with `render_cell`.
pub fn convert_markdown_tables_with<'a>(
    content: &'a str,
    options: &FormatterOptions,
    render_cell: &dyn Fn(&str) -> String,
) -> Cow<'a, str> {
    let mut output = String::with_capacity(content.len());
    let mut changed = false;
    let mut start = 0;
    let mut index = 0;

    for separator in BLANK_LINES.find_iter(content) {
        let section = &content[start..separator.start()];
        changed |= push_section(&mut output, section, index, options, render_cell);
        output.push_str(separator.as_str());
        start = separator.end();
        index += 1;
    }
    changed |= push_section(&mut output, &content[start..], index, options, render_cell);

    if changed {
        Cow::Owned(output)
    } else {
        Cow::Borrowed(content)
    }
}

fn push_section(
    output: &mut String,
    section: &str,
    index: usize,
    options: &FormatterOptions,
    render_cell: &dyn Fn(&str) -> String,
) -> bool {
    match convert_section(section, options, render_cell) {
        Some((html, rows)) => {
            debug!(section = index, rows, "converted markdown table");
            output.push_str(&html);
            true
        }
        None => {
            output.push_str(section);
            false
        }
    }
}

/// Convert one section, returning the markup and the number of emitted rows.
fn convert_section(
    section: &str,
    options: &FormatterOptions,
    render_cell: &dyn Fn(&str) -> String,
) -> Option<(String, usize)> {
    let lines: Vec<&str> = section.split('\n').collect();
    if lines.iter().filter(|line| line.contains('|')).count() < 2 {
        return None;
    }

    let table = parse_table(&lines);
    let (before, after) = prose_lines(&lines);

    let mut parts = Vec::with_capacity(3);
    if !before.is_empty() {
        parts.push(before.join("\n"));
    }
    parts.push(table.to_html_with(&options.table_class, render_cell));
    if !after.is_empty() {
        parts.push(after.join("\n"));
    }

    Some((parts.join("\n"), table.rows.len()))
}

/// Build the table from the pipe lines of a section.
pub fn parse_table(lines: &[&str]) -> TableBlock {
    let mut table = TableBlock::default();
    let mut header = true;

    for line in lines.iter().filter(|line| line.contains('|')) {
        if SEPARATOR_ROW.is_match(line) {
            header = false;
            continue;
        }
        table.rows.push(TableRow {
            header,
            cells: split_cells(line),
        });
        header = false;
    }

    table
}

/// Non-pipe lines of a table section, split around the first pipe line.
fn prose_lines<'a>(lines: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    let first_pipe = lines
        .iter()
        .position(|line| line.contains('|'))
        .unwrap_or(lines.len());

    let before = lines[..first_pipe].to_vec();
    let after = lines[first_pipe..]
        .iter()
        .copied()
        .filter(|line| !line.contains('|'))
        .collect();
    (before, after)
}

fn verbatim(cell: &str) -> String {
    cell.to_string()
}

fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}
