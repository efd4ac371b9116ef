//! HTML table generator with inline styling

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::model::{Row, Table};

/// HTML output options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HtmlOptions {
    /// Inline style of the `<table>` element (omitted when empty)
    pub table_style: String,
    /// Style shared by every cell, alignment is appended per column
    pub cell_style: String,
    /// Add `font-weight: bold` to header cells
    pub bold_header: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::word()
    }
}

impl HtmlOptions {
    /// Bordered cells that survive pasting into a word processor
    pub fn word() -> Self {
        Self {
            table_style: "border-collapse: collapse;".to_string(),
            cell_style: "border: 1px solid #000; padding: 4px 8px;".to_string(),
            bold_header: true,
        }
    }

    /// Alignment only, no borders or padding
    pub fn minimal() -> Self {
        Self {
            table_style: String::new(),
            cell_style: String::new(),
            bold_header: false,
        }
    }
}

/// Render a normalized table model as an HTML `<table>` fragment
pub fn table_model_to_html(table: &Table) -> String {
    table_model_to_html_with_options(table, &HtmlOptions::default())
}

/// Render a normalized table model as an HTML `<table>` fragment with custom options.
///
/// Header rows go into `<thead>` (omitted when there are none), the rest into
/// `<tbody>`.
pub fn table_model_to_html_with_options(table: &Table, options: &HtmlOptions) -> String {
    let mut output = String::new();

    if options.table_style.is_empty() {
        output.push_str("<table>\n");
    } else {
        let _ = writeln!(
            output,
            "<table style=\"{}\">",
            html_escape::encode_double_quoted_attribute(&options.table_style)
        );
    }

    let (header, body): (Vec<&Row>, Vec<&Row>) = table.rows.iter().partition(|r| r.is_header);

    if !header.is_empty() {
        output.push_str("<thead>\n");
        for row in header {
            write_row(&mut output, table, row, "th", options);
        }
        output.push_str("</thead>\n");
    }

    output.push_str("<tbody>\n");
    for row in body {
        write_row(&mut output, table, row, "td", options);
    }
    output.push_str("</tbody>\n");

    output.push_str("</table>");
    output
}

fn write_row(output: &mut String, table: &Table, row: &Row, tag: &str, options: &HtmlOptions) {
    output.push_str("<tr>");
    for (col, cell) in row.cells.iter().enumerate() {
        let mut style = options.cell_style.clone();
        if !style.is_empty() {
            style.push(' ');
        }
        let _ = write!(style, "text-align: {};", table.alignment(col).as_css());
        if tag == "th" && options.bold_header {
            style.push_str(" font-weight: bold;");
        }

        let _ = write!(
            output,
            "<{tag} style=\"{}\">{}</{tag}>",
            html_escape::encode_double_quoted_attribute(&style),
            html_escape::encode_double_quoted_attribute(&cell.content),
        );
    }
    output.push_str("</tr>\n");
}
