//! Pipe-table generator

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::model::{Alignment, Table};

/// Markdown output options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarkdownOptions {
    /// Pad every cell to its column width so pipes line up
    pub pad_columns: bool,
    /// Lower bound on column width, leaves room for the `---` separator
    pub min_column_width: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            pad_columns: true,
            min_column_width: 3,
        }
    }
}

impl MarkdownOptions {
    /// Unpadded output: `| a | b |` with `---` separators
    pub fn compact() -> Self {
        Self {
            pad_columns: false,
            ..Default::default()
        }
    }
}

/// Escape literal pipes so they survive as cell content
pub fn escape_cell(content: &str) -> String {
    content.replace('|', "\\|")
}

/// Render a table model as a Markdown pipe table
pub fn table_model_to_markdown(table: &Table) -> String {
    table_model_to_markdown_with_options(table, &MarkdownOptions::default())
}

/// Render a table model as a Markdown pipe table with custom options.
///
/// Header rows come first followed by a single separator row. A table with no
/// header rows promotes its first row to header. Empty tables render as `""`.
pub fn table_model_to_markdown_with_options(table: &Table, options: &MarkdownOptions) -> String {
    if table.rows.is_empty() {
        return String::new();
    }

    let columns = table
        .rows
        .iter()
        .map(|r| r.cells.len())
        .max()
        .unwrap_or(0);

    let grid: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|col| {
                    row.cells
                        .get(col)
                        .map(|c| escape_cell(&c.content))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            grid.iter()
                .map(|cells| cells[col].chars().count())
                .max()
                .unwrap_or(0)
                .max(options.min_column_width)
        })
        .collect();

    let header_rows: Vec<usize> = match table.header_count() {
        0 => vec![0],
        _ => (0..table.rows.len())
            .filter(|&i| table.rows[i].is_header)
            .collect(),
    };
    let body_rows = (0..table.rows.len()).filter(|i| !header_rows.contains(i));

    let mut output = String::new();
    for &idx in &header_rows {
        write_row(&mut output, &grid[idx], &widths, options);
    }
    write_separator(&mut output, table, &widths, options);
    for idx in body_rows {
        write_row(&mut output, &grid[idx], &widths, options);
    }

    output.truncate(output.trim_end_matches('\n').len());
    output
}

fn write_row(output: &mut String, cells: &[String], widths: &[usize], options: &MarkdownOptions) {
    output.push('|');
    for (cell, &width) in cells.iter().zip(widths) {
        if options.pad_columns {
            let _ = write!(output, " {:<width$} |", cell, width = width);
        } else {
            let _ = write!(output, " {} |", cell);
        }
    }
    output.push('\n');
}

fn write_separator(output: &mut String, table: &Table, widths: &[usize], options: &MarkdownOptions) {
    output.push('|');
    for (col, &width) in widths.iter().enumerate() {
        let align = table.alignment(col);
        let segment = if options.pad_columns {
            // Segment spans the cell plus its two padding spaces
            let inner = width + 2;
            match align {
                Alignment::Left => "-".repeat(inner),
                Alignment::Center => format!(":{}:", "-".repeat(inner - 2)),
                Alignment::Right => format!("{}:", "-".repeat(inner - 1)),
            }
        } else {
            match align {
                Alignment::Left => " --- ",
                Alignment::Center => " :-: ",
                Alignment::Right => " --: ",
            }
            .to_string()
        };
        output.push_str(&segment);
        output.push('|');
    }
    output.push('\n');
}
