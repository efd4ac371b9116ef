//! State-aware HTML table parser
//!
//! Walks a sanitized `<table>` element and expands every `colspan`/`rowspan`
//! into independent cells, since the Markdown side has no merge syntax.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::node::Node;
use scraper::ElementRef;
use tracing::{debug, trace};

use crate::core::model::{Alignment, Cell, Row, Table};

lazy_static! {
    /// Inline `text-align` declaration
    pub(crate) static ref TEXT_ALIGN: Regex = Regex::new(r"(?i)text-align\s*:\s*([a-z-]+)").unwrap();
}

/// Elements whose boundaries separate words in extracted text
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
];

/// A `<tr>` found while walking the table, tagged with its section
struct SourceRow<'a> {
    element: ElementRef<'a>,
    in_thead: bool,
}

/// Rows still owed an empty filler cell in one column
#[derive(Debug, Clone, Copy, Default)]
struct Carry {
    remaining: usize,
}

/// Convert a sanitized `<table>` element into a normalized table model.
///
/// Rows inside `<thead>` are headers; a table without any `<thead>` treats
/// only its first row as header. Alignment is read from the first header row
/// and frozen. Returns `None` when the table has no rows.
pub fn html_table_to_model(table: ElementRef<'_>) -> Option<Table> {
    let source_rows = collect_rows(table);
    if source_rows.is_empty() {
        debug!("html table has no rows");
        return None;
    }

    let has_thead = source_rows.iter().any(|r| r.in_thead);
    let mut carry: Vec<Carry> = Vec::new();
    let mut alignments: Option<Vec<Alignment>> = None;
    let mut rows = Vec::with_capacity(source_rows.len());

    for (row_idx, source) in source_rows.iter().enumerate() {
        let is_header = if has_thead {
            source.in_thead
        } else {
            row_idx == 0
        };

        let mut cells = Vec::new();
        let mut row_aligns = Vec::new();
        let mut sources = row_cells(source.element).into_iter();
        let mut col = 0;

        loop {
            if carry.get(col).is_some_and(|c| c.remaining > 0) {
                carry[col].remaining -= 1;
                cells.push(Cell::empty());
                row_aligns.push(Alignment::Left);
                col += 1;
                continue;
            }

            let Some(element) = sources.next() else {
                break;
            };

            let colspan = span_attr(element, "colspan");
            let rowspan = span_attr(element, "rowspan");
            let align = cell_alignment(element);

            if col + colspan > carry.len() {
                carry.resize(col + colspan, Carry::default());
            }

            for offset in 0..colspan {
                cells.push(if offset == 0 {
                    Cell::new(cell_text(element))
                } else {
                    Cell::empty()
                });
                row_aligns.push(align);
                if rowspan > 1 {
                    carry[col + offset].remaining = rowspan - 1;
                }
            }
            col += colspan;
        }

        // Fillers owed past the last source cell
        for trailing in col..carry.len() {
            if carry[trailing].remaining > 0 {
                carry[trailing].remaining -= 1;
                while cells.len() < trailing {
                    cells.push(Cell::empty());
                }
                cells.push(Cell::empty());
            }
        }

        if is_header && alignments.is_none() {
            alignments = Some(row_aligns);
        }

        rows.push(Row { is_header, cells });
    }

    let mut table = Table::with_alignments(rows, alignments.unwrap_or_default());
    table.normalize();

    trace!(
        rows = table.rows.len(),
        columns = table.column_count(),
        "parsed html table"
    );
    Some(table)
}

/// Whether any cell of `table` spans more than one row or column
pub fn has_merged_cells(table: ElementRef<'_>) -> bool {
    collect_rows(table).iter().any(|row| {
        row_cells(row.element)
            .into_iter()
            .any(|cell| span_attr(cell, "colspan") > 1 || span_attr(cell, "rowspan") > 1)
    })
}

/// Rows of `table` in document order, without descending into nested tables
fn collect_rows(table: ElementRef<'_>) -> Vec<SourceRow<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(SourceRow {
                element: child,
                in_thead: false,
            }),
            section @ ("thead" | "tbody" | "tfoot") => {
                let in_thead = section == "thead";
                rows.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|e| e.value().name() == "tr")
                        .map(|element| SourceRow { element, in_thead }),
                );
            }
            _ => {}
        }
    }
    rows
}

fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "td" | "th"))
        .collect()
}

/// Positive integer span attribute, 1 when absent or malformed
fn span_attr(cell: ElementRef<'_>, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// `align` attribute, else inline `text-align`, else left
fn cell_alignment(cell: ElementRef<'_>) -> Alignment {
    if let Some(align) = cell.value().attr("align") {
        return Alignment::from_keyword(align);
    }
    cell.value()
        .attr("style")
        .and_then(|style| TEXT_ALIGN.captures(style))
        .map(|caps| Alignment::from_keyword(&caps[1]))
        .unwrap_or_default()
}

/// Plain text of a cell on a single line.
///
/// Block boundaries become spaces, then whitespace runs collapse to one space.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(cell, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let is_block = BLOCK_ELEMENTS.contains(&el.name());
                if is_block {
                    out.push(' ');
                }
                push_text(child_el, out);
                if is_block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
