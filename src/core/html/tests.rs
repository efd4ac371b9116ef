//! Tests for HTML table parsing and generation

use super::sanitize::TABLE_SELECTOR;
use super::*;
use crate::core::model::{Alignment, Cell, Row, Table};
use pretty_assertions::assert_eq;
use scraper::Html;

fn parse(html: &str) -> Option<Table> {
    let fragment = Html::parse_fragment(html);
    let table = fragment.select(&TABLE_SELECTOR).next()?;
    html_table_to_model(table)
}

fn merged(html: &str) -> bool {
    let fragment = Html::parse_fragment(html);
    let table = fragment.select(&TABLE_SELECTOR).next().unwrap();
    has_merged_cells(table)
}

fn contents(row: &Row) -> Vec<&str> {
    row.cells.iter().map(|c| c.content.as_str()).collect()
}

#[test]
fn test_basic_table() {
    let table = parse(
        "<table><tr><th>A</th><th>B</th></tr>\
         <tr><td>1</td><td>2</td></tr></table>",
    )
    .unwrap();

    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[0].is_header);
    assert!(!table.rows[1].is_header);
    assert_eq!(contents(&table.rows[0]), vec!["A", "B"]);
    assert_eq!(contents(&table.rows[1]), vec!["1", "2"]);
}

#[test]
fn test_colspan_expanded() {
    let html = "<table><tr><th>A</th><th>B</th><th>C</th></tr>\
                <tr><td colspan=\"2\">Merged</td><td>Single</td></tr></table>";
    let table = parse(html).unwrap();

    assert_eq!(contents(&table.rows[1]), vec!["Merged", "", "Single"]);
    assert!(table
        .rows
        .iter()
        .flat_map(|r| &r.cells)
        .all(|c| c.colspan == 1 && c.rowspan == 1));
    assert!(merged(html));
}

#[test]
fn test_rowspan_first_column() {
    let table = parse(
        "<table><tr><th>A</th><th>B</th><th>C</th></tr>\
         <tr><td rowspan=\"2\">X</td><td>1</td><td>2</td></tr>\
         <tr><td>3</td><td>4</td></tr></table>",
    )
    .unwrap();

    assert_eq!(contents(&table.rows[1]), vec!["X", "1", "2"]);
    assert_eq!(contents(&table.rows[2]), vec!["", "3", "4"]);
}

#[test]
fn test_rowspan_last_column() {
    let table = parse(
        "<table><tr><th>A</th><th>B</th><th>C</th></tr>\
         <tr><td>1</td><td>2</td><td rowspan=\"3\">Z</td></tr>\
         <tr><td>3</td><td>4</td></tr>\
         <tr><td>5</td><td>6</td></tr></table>",
    )
    .unwrap();

    assert_eq!(contents(&table.rows[2]), vec!["3", "4", ""]);
    assert_eq!(contents(&table.rows[3]), vec!["5", "6", ""]);
}

#[test]
fn test_rowspan_middle_column_from_header() {
    let table = parse(
        "<table><tr><th>A</th><th rowspan=\"2\">B</th><th>C</th></tr>\
         <tr><td>1</td><td>2</td></tr></table>",
    )
    .unwrap();

    assert_eq!(contents(&table.rows[1]), vec!["1", "", "2"]);
}

#[test]
fn test_colspan_and_rowspan() {
    let table = parse(
        "<table><tr><th>A</th><th>B</th><th>C</th></tr>\
         <tr><td colspan=\"2\" rowspan=\"2\">Big</td><td>1</td></tr>\
         <tr><td>2</td></tr>\
         <tr><td>x</td><td>y</td><td>z</td></tr></table>",
    )
    .unwrap();

    assert_eq!(contents(&table.rows[1]), vec!["Big", "", "1"]);
    assert_eq!(contents(&table.rows[2]), vec!["", "", "2"]);
    assert_eq!(contents(&table.rows[3]), vec!["x", "y", "z"]);
}

#[test]
fn test_short_rows_padded() {
    let table = parse(
        "<table><tr><td>A</td><td>B</td><td>C</td></tr>\
         <tr><td>1</td></tr></table>",
    )
    .unwrap();

    assert_eq!(contents(&table.rows[1]), vec!["1", "", ""]);
    assert_eq!(table.alignments.len(), 3);
}

#[test]
fn test_thead_rows_are_headers() {
    let table = parse(
        "<table><thead><tr><th>Top</th></tr><tr><th>Sub</th></tr></thead>\
         <tbody><tr><th>Row head</th></tr><tr><td>1</td></tr></tbody></table>",
    )
    .unwrap();

    let flags: Vec<bool> = table.rows.iter().map(|r| r.is_header).collect();
    assert_eq!(flags, vec![true, true, false, false]);
}

#[test]
fn test_without_thead_only_first_row_is_header() {
    let table = parse(
        "<table><tr><th>A</th></tr><tr><th>B</th></tr><tr><td>1</td></tr></table>",
    )
    .unwrap();

    assert_eq!(table.header_count(), 1);
    assert!(table.rows[0].is_header);
}

#[test]
fn test_alignment_from_header_row() {
    let table = parse(
        "<table><tr><th align=\"center\">A</th><th style=\"color: red; text-align: right\">B</th><th>C</th></tr>\
         <tr><td>1</td><td>2</td><td align=\"right\">3</td></tr></table>",
    )
    .unwrap();

    assert_eq!(
        table.alignments,
        vec![Alignment::Center, Alignment::Right, Alignment::Left]
    );
}

#[test]
fn test_header_colspan_alignment_covers_span() {
    let table = parse(
        "<table><tr><th colspan=\"2\" align=\"right\">Wide</th></tr>\
         <tr><td>1</td><td>2</td></tr></table>",
    )
    .unwrap();

    assert_eq!(table.alignments, vec![Alignment::Right, Alignment::Right]);
}

#[test]
fn test_multi_paragraph_cell_collapsed() {
    let table = parse(
        "<table><tr><td><p>First para</p><p>Second\n   para</p></td></tr></table>",
    )
    .unwrap();

    assert_eq!(table.rows[0].cells[0].content, "First para Second para");
}

#[test]
fn test_line_break_and_entities() {
    let table = parse("<table><tr><td>a&nbsp;&amp;<br>b&lt;c&nbsp;</td></tr></table>").unwrap();
    assert_eq!(table.rows[0].cells[0].content, "a & b<c");
}

#[test]
fn test_no_rows() {
    assert!(parse("<table></table>").is_none());
}

#[test]
fn test_has_merged_cells_false() {
    assert!(!merged("<table><tr><td colspan=\"1\">a</td></tr></table>"));
}

#[test]
fn test_malformed_span_defaults_to_one() {
    let table = parse(
        "<table><tr><td colspan=\"zero\">a</td><td colspan=\"0\">b</td></tr></table>",
    )
    .unwrap();
    assert_eq!(contents(&table.rows[0]), vec!["a", "b"]);
}

fn sample_table() -> Table {
    let mut table = Table::with_alignments(
        vec![
            Row::header(vec![Cell::new("Item"), Cell::new("Note"), Cell::new("Qty")]),
            Row::new(vec![Cell::new("Pear"), Cell::new("<ripe> & \"sweet\""), Cell::new("3")]),
            Row::new(vec![Cell::new("Fig"), Cell::empty(), Cell::new("12")]),
        ],
        vec![Alignment::Left, Alignment::Center, Alignment::Right],
    );
    table.normalize();
    table
}

#[test]
fn test_generate_structure() {
    let html = table_model_to_html(&sample_table());

    assert!(html.starts_with("<table style=\"border-collapse: collapse;\">"));
    assert!(html.ends_with("</table>"));
    assert!(html.contains("<thead>"));
    assert!(html.contains("<tbody>"));
    assert!(html.contains(
        "<th style=\"border: 1px solid #000; padding: 4px 8px; text-align: center; font-weight: bold;\">Note</th>"
    ));
    assert!(html.contains(
        "<td style=\"border: 1px solid #000; padding: 4px 8px; text-align: right;\">12</td>"
    ));
}

#[test]
fn test_generate_escapes_content() {
    let html = table_model_to_html(&sample_table());
    assert!(html.contains("&lt;ripe&gt; &amp; &quot;sweet&quot;"));
    assert!(!html.contains("<ripe>"));
}

#[test]
fn test_generate_without_header() {
    let table = Table::new(vec![Row::new(vec![Cell::new("a")])]);
    let html = table_model_to_html(&table);
    assert!(!html.contains("<thead>"));
    assert!(html.contains("text-align: left;"));
}

#[test]
fn test_generate_minimal() {
    let html = table_model_to_html_with_options(&sample_table(), &HtmlOptions::minimal());
    assert!(html.starts_with("<table>\n"));
    assert!(html.contains("<th style=\"text-align: left;\">Item</th>"));
    assert!(!html.contains("border"));
}

#[test]
fn test_round_trip_preserves_model() {
    let original = sample_table();
    let html = table_model_to_html(&original);
    let parsed = parse(&html).unwrap();
    assert_eq!(parsed, original);
}
