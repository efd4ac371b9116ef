//! Pipe-table parser

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::core::model::{Alignment, Cell, Row, Table};

lazy_static! {
    /// `| --- | :-: | --: |` and friends
    static ref SEPARATOR_ROW: Regex = Regex::new(r"^\|[\s\-:|]+\|$").unwrap();
}

/// Whether `line` (already trimmed) is a header/body separator row
pub fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line)
}

/// Split input into trimmed, non-blank lines
pub(crate) fn table_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a Markdown pipe table.
///
/// Lines before the first separator row are header rows, lines after it are
/// data rows. Returns `None` when the input has fewer than two non-blank lines
/// or no separator row.
pub fn parse_markdown_table(input: &str) -> Option<Table> {
    let lines = table_lines(input);
    if lines.len() < 2 {
        debug!(lines = lines.len(), "markdown input too short for a table");
        return None;
    }

    let Some(sep_idx) = lines.iter().position(|line| is_separator_row(line)) else {
        debug!("markdown input has no separator row");
        return None;
    };

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for (idx, line) in lines.iter().enumerate() {
        if idx == sep_idx {
            continue;
        }
        let cells = split_cells(line).into_iter().map(Cell::new).collect();
        rows.push(if idx < sep_idx {
            Row::header(cells)
        } else {
            Row::new(cells)
        });
    }

    let alignments = parse_alignments(lines[sep_idx]);
    let mut table = Table::with_alignments(rows, alignments);
    table.normalize();

    trace!(
        rows = table.rows.len(),
        columns = table.column_count(),
        headers = sep_idx,
        "parsed markdown table"
    );
    Some(table)
}

/// Alignment of each separator segment
pub fn parse_alignments(separator: &str) -> Vec<Alignment> {
    split_cells(separator)
        .iter()
        .map(|segment| segment_alignment(segment))
        .collect()
}

/// `:--:` center, `--:` right, anything else left (including `:--`)
fn segment_alignment(segment: &str) -> Alignment {
    match (segment.starts_with(':'), segment.ends_with(':')) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

/// Split a table line into trimmed cell contents.
///
/// One outer pipe is stripped from each end; `\|` is a literal pipe.
pub fn split_cells(line: &str) -> Vec<String> {
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = match line.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => line,
    };

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}
