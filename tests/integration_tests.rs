//! Integration tests for Tablix table conversion

use pretty_assertions::assert_eq;
use tablix::{
    html_to_markdown, markdown_to_html, normalize_table, parse_markdown_table,
    table_model_to_html, table_model_to_markdown, Alignment, Cell, Row, Table, WarningKind,
};

fn contents(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|r| r.cells.iter().map(|c| c.content.clone()).collect())
        .collect()
}

// ============================================================================
// Markdown → HTML → Markdown
// ============================================================================

mod md_round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    const INPUT: &str = "\
| Item | Price | Stock |
| :--- | :---: | ----: |
| Apple | 1.20 | 14 |
| Kiwi \\| gold | 0.80 |  |
";

    #[test]
    fn test_content_and_shape_survive() {
        let original = parse_markdown_table(INPUT).unwrap();

        let html = markdown_to_html(INPUT).unwrap();
        let back = html_to_markdown(&html).unwrap();
        assert!(!back.has_warnings());

        let recovered = parse_markdown_table(&back.content).unwrap();
        assert_eq!(contents(&recovered), contents(&original));
        assert_eq!(recovered.column_count(), 3);
    }

    #[test]
    fn test_center_and_right_survive() {
        let html = markdown_to_html(INPUT).unwrap();
        let back = html_to_markdown(&html).unwrap();
        let recovered = parse_markdown_table(&back.content).unwrap();

        assert_eq!(recovered.alignments[1], Alignment::Center);
        assert_eq!(recovered.alignments[2], Alignment::Right);
    }

    #[test]
    fn test_escaped_pipe_survives() {
        let html = markdown_to_html(INPUT).unwrap();
        assert!(html.contains(">Kiwi | gold<"));

        let back = html_to_markdown(&html).unwrap();
        assert!(back.content.contains(r"Kiwi \| gold"));
    }

    #[test]
    fn test_padding_of_short_row() {
        let table = parse_markdown_table("| A | B | C |\n|---|---|---|\n| 1 | 2 |").unwrap();
        assert_eq!(table.rows[1].cells.len(), 3);
        assert_eq!(table.rows[1].cells[2].content, "");
    }
}

// ============================================================================
// HTML → Markdown → HTML
// ============================================================================

mod html_round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_model_survives() {
        let mut table = Table::with_alignments(
            vec![
                Row::header(vec![Cell::new("Name"), Cell::new("Score")]),
                Row::new(vec![Cell::new("Ada"), Cell::new("97")]),
                Row::new(vec![Cell::new("Brendan & co"), Cell::new("")]),
            ],
            vec![Alignment::Left, Alignment::Right],
        );
        normalize_table(&mut table);

        let markdown = html_to_markdown(&table_model_to_html(&table)).unwrap().content;
        let html = markdown_to_html(&markdown).unwrap();
        let recovered = html_to_markdown(&html).unwrap().content;

        let reparsed = parse_markdown_table(&recovered).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_generated_markdown_round_trips_unchanged() {
        let html = "<table><thead><tr><th align=\"center\">A</th><th>B</th></tr></thead>\
                    <tbody><tr><td>1</td><td>2</td></tr></tbody></table>";
        let first = html_to_markdown(html).unwrap().content;
        let second = html_to_markdown(&markdown_to_html(&first).unwrap())
            .unwrap()
            .content;
        assert_eq!(first, second);
    }
}

// ============================================================================
// Clipboard HTML
// ============================================================================

mod clipboard_html {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_colspan_expansion_warns() {
        let html = "<table><tr><th>A</th><th>B</th><th>C</th></tr>\
                    <tr><td colspan=\"2\">Merged</td><td>Single</td></tr></table>";
        let output = html_to_markdown(html).unwrap();

        let table = parse_markdown_table(&output.content).unwrap();
        assert_eq!(contents(&table)[1], vec!["Merged", "", "Single"]);
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].kind, WarningKind::MergedCells);
    }

    #[test]
    fn test_multiple_tables_warns_with_count() {
        let html = "<table><tr><td>first</td></tr></table>\
                    <p>between</p>\
                    <table><tr><td>second</td></tr></table>";
        let output = html_to_markdown(html).unwrap();

        assert!(output.content.contains("first"));
        assert!(!output.content.contains("second"));
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].message.contains('2'));
        assert_eq!(
            output.warnings[0].kind,
            WarningKind::MultipleTables { count: 2 }
        );
    }

    #[test]
    fn test_no_table() {
        assert!(html_to_markdown("<p>no table here</p>").is_none());
        assert!(parse_markdown_table("not a table").is_none());
        assert!(parse_markdown_table("").is_none());
    }

    #[test]
    fn test_multi_paragraph_cell_is_one_line() {
        let html = "<table><tr><th>Notes</th></tr>\
                    <tr><td><p>First paragraph.</p>\n<p>Second\nparagraph.</p></td></tr></table>";
        let output = html_to_markdown(html).unwrap();

        let lines: Vec<&str> = output.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains("First paragraph. Second paragraph."));
    }

    #[test]
    fn test_word_processor_markup() {
        let html = r#"<html xmlns:o="urn:schemas-microsoft-com:office:office">
<head><style>td { mso-style: x; }</style></head>
<body>
<!--StartFragment-->
<table class=MsoTableGrid border=1 cellspacing=0 style='border-collapse:collapse'>
 <tr>
  <td width=200 valign=top style='width:150pt;padding:0in 5.4pt'>
   <p class=MsoNormal style='text-align:center'><b>Region<o:p></o:p></b></p>
  </td>
  <td width=200 valign=top style='width:150pt;text-align:right'>
   <p class=MsoNormal><b>Sales<o:p></o:p></b></p>
  </td>
 </tr>
 <tr>
  <td><p class=MsoNormal>North<o:p></o:p></p></td>
  <td><p class=MsoNormal>1&nbsp;200<o:p></o:p></p></td>
 </tr>
</table>
<!--EndFragment-->
</body></html>"#;

        let output = html_to_markdown(html).unwrap();
        assert!(!output.has_warnings());

        let table = parse_markdown_table(&output.content).unwrap();
        assert_eq!(
            contents(&table),
            vec![vec!["Region", "Sales"], vec!["North", "1 200"]]
        );
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
    }
}

// ============================================================================
// Model
// ============================================================================

mod model {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalization_idempotent() {
        let mut table = Table::with_alignments(
            vec![
                Row::header(vec![Cell::new("a")]),
                Row::new(vec![Cell::new("1"), Cell::new("2"), Cell::new("3")]),
            ],
            vec![Alignment::Right; 5],
        );
        normalize_table(&mut table);
        let once = table.clone();
        normalize_table(&mut table);
        assert_eq!(table, once);
        assert_eq!(table.alignments.len(), 3);
    }

    #[test]
    fn test_markdown_generation_of_unflagged_model() {
        let table = Table::new(vec![
            Row::new(vec![Cell::new("x"), Cell::new("y")]),
            Row::new(vec![Cell::new("1"), Cell::new("2")]),
        ]);
        let markdown = table_model_to_markdown(&table);
        let reparsed = parse_markdown_table(&markdown).unwrap();
        assert_eq!(reparsed.header_count(), 1);
        assert_eq!(contents(&reparsed), contents(&table));
    }
}
