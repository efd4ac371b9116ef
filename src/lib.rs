//! # tablix
//!
//! Bidirectional Markdown ↔ HTML table converter written in Rust.
//!
//! ## Features
//!
//! - **Bidirectional**: Markdown pipe tables → styled HTML, and clipboard HTML → Markdown
//! - **Word-processor aware**: Strips office markup before reading the table
//! - **Merged cells**: `colspan`/`rowspan` are expanded into a regular grid
//! - **Alignment**: Column alignment survives both directions
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! Both directions pass through one format-neutral [`Table`] model:
//!
//! ```text
//! Markdown -> markdown::parse -> Table -> html::generate -> HTML
//! HTML -> sanitize -> html::parse -> Table -> markdown::generate -> Markdown
//! ```
//!
//! ## Usage Examples
//!
//! ### Markdown to HTML
//!
//! ```rust
//! use tablix::markdown_to_html;
//!
//! let html = markdown_to_html("| Fruit | Qty |\n| --- | --: |\n| Pear | 3 |").unwrap();
//! assert!(html.contains("<th"));
//! assert!(html.contains("text-align: right;"));
//!
//! assert!(markdown_to_html("not a table").is_none());
//! ```
//!
//! ### HTML to Markdown
//!
//! ```rust
//! use tablix::html_to_markdown;
//!
//! let output = html_to_markdown(
//!     "<table><tr><th>A</th><th>B</th></tr><tr><td colspan=\"2\">wide</td></tr></table>",
//! )
//! .unwrap();
//! assert!(output.content.starts_with("| A"));
//! assert_eq!(output.warnings.len(), 1);
//! ```

/// Core conversion modules
pub mod core;

/// Feature modules - helpers built on the core converters
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

use tracing::debug;

// Re-export core modules and types
pub use crate::core::{html, markdown, model};
pub use crate::core::{
    get_column_count, html_table_to_model, normalize_table, parse_markdown_table,
    table_model_to_html, table_model_to_html_with_options, table_model_to_markdown,
    table_model_to_markdown_with_options, Alignment, Cell, HtmlOptions, MarkdownOptions, Row,
    SanitizedTable, Table, TableSanitizer, WordSanitizer,
};

// Re-export feature modules
pub use features::clipboard;
pub use features::{markdown_to_clipboard, ClipboardPayload};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};

/// Convert a Markdown table to an HTML table fragment
///
/// # Arguments
/// * `input` - Markdown text containing a pipe table
///
/// # Returns
/// Inline-styled `<table>` markup, or `None` if no table was found
pub fn markdown_to_html(input: &str) -> Option<String> {
    markdown_to_html_with_options(input, &HtmlOptions::default())
}

/// Convert a Markdown table to an HTML table fragment with custom styling
pub fn markdown_to_html_with_options(input: &str, options: &HtmlOptions) -> Option<String> {
    let table = parse_markdown_table(input)?;
    Some(table_model_to_html_with_options(&table, options))
}

/// Convert clipboard HTML to a Markdown table
///
/// Only the first table is converted. Warnings report extra tables and
/// merged cells that were split.
///
/// # Arguments
/// * `markup` - Raw HTML, e.g. the `text/html` clipboard flavor
///
/// # Returns
/// The Markdown table with warnings, or `None` if no table was found
pub fn html_to_markdown(markup: &str) -> Option<ConversionOutput> {
    html_to_markdown_with_options(markup, &MarkdownOptions::default())
}

/// Convert clipboard HTML to a Markdown table with custom options
pub fn html_to_markdown_with_options(
    markup: &str,
    options: &MarkdownOptions,
) -> Option<ConversionOutput> {
    html_to_markdown_with_sanitizer(markup, &WordSanitizer, options)
}

/// Convert clipboard HTML to a Markdown table using a custom sanitizer
pub fn html_to_markdown_with_sanitizer<S: TableSanitizer + ?Sized>(
    markup: &str,
    sanitizer: &S,
    options: &MarkdownOptions,
) -> Option<ConversionOutput> {
    let clean = sanitizer.sanitize(markup)?;
    let fragment = clean.parse();
    let element = SanitizedTable::table(&fragment)?;
    let table = html_table_to_model(element)?;

    let mut warnings = Vec::new();
    if clean.table_count > 1 {
        debug!(count = clean.table_count, "converting first of several tables");
        warnings.push(ConversionWarning::multiple_tables(clean.table_count));
    }
    if html::has_merged_cells(element) {
        debug!("expanded merged cells");
        warnings.push(ConversionWarning::merged_cells());
    }

    let content = table_model_to_markdown_with_options(&table, options);
    Some(ConversionOutput::with_warnings(content, warnings))
}

/// Like [`markdown_to_html`], but reports a missing table as an error
pub fn try_markdown_to_html(input: &str) -> ConversionResult<String> {
    markdown_to_html(input).ok_or(ConversionError::no_table("markdown"))
}

/// Like [`html_to_markdown`], but reports a missing table as an error
pub fn try_html_to_markdown(markup: &str) -> ConversionResult<ConversionOutput> {
    html_to_markdown(markup).ok_or(ConversionError::no_table("html"))
}

/// Detect input format
///
/// Returns "html", "markdown", or "unknown" based on content analysis.
pub fn detect_format(input: &str) -> &'static str {
    let lower = input.to_ascii_lowercase();

    let html_score: i32 = if lower.contains("<table") { 10 } else { 0 }
        + if lower.contains("<tr") { 5 } else { 0 }
        + if lower.contains("<td") || lower.contains("<th") { 5 } else { 0 }
        + if lower.trim_start().starts_with('<') { 2 } else { 0 };

    let lines = markdown::table_lines(input);
    let md_score: i32 = if lines.iter().any(|l| markdown::is_separator_row(l)) {
        10
    } else {
        0
    } + lines.iter().filter(|l| l.starts_with('|')).count().min(5) as i32;

    if html_score > md_score {
        "html"
    } else if md_score > 0 {
        "markdown"
    } else {
        "unknown"
    }
}

/// Convert with automatic direction detection
///
/// HTML input becomes Markdown, anything else is tried as Markdown and becomes
/// HTML. Returns the output and the name of its format.
pub fn convert_auto(input: &str) -> Option<(String, &'static str)> {
    match detect_format(input) {
        "html" => html_to_markdown(input).map(|out| (out.content, "markdown")),
        _ => markdown_to_html(input).map(|html| (html, "html")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html_basic() {
        let html = markdown_to_html("| A | B |\n|---|:-:|\n| 1 | 2 |").unwrap();
        assert!(html.contains("<thead>"));
        assert!(html.contains(">A</th>"));
        assert!(html.contains(">2</td>"));
        assert!(html.contains("text-align: center;"));
    }

    #[test]
    fn test_markdown_to_html_no_table() {
        assert!(markdown_to_html("").is_none());
        assert!(markdown_to_html("hello\nworld").is_none());
    }

    #[test]
    fn test_html_to_markdown_basic() {
        let output =
            html_to_markdown("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>").unwrap();
        assert_eq!(output.content, "| A   |\n|-----|\n| 1   |");
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_html_to_markdown_no_table() {
        assert!(html_to_markdown("<p>no table here</p>").is_none());
        assert!(html_to_markdown("<table></table>").is_none());
    }

    #[test]
    fn test_try_variants() {
        assert_eq!(
            try_markdown_to_html("nope"),
            Err(ConversionError::no_table("markdown"))
        );
        assert!(try_html_to_markdown("<p></p>").is_err());
        assert!(try_markdown_to_html("|a|\n|-|").is_ok());
    }

    #[test]
    fn test_html_to_markdown_compact() {
        let output = html_to_markdown_with_options(
            "<table><tr><th>Name</th></tr><tr><td>x</td></tr></table>",
            &MarkdownOptions::compact(),
        )
        .unwrap();
        assert_eq!(output.content, "| Name |\n| --- |\n| x |");
    }

    #[test]
    fn test_custom_sanitizer() {
        struct Fixed;
        impl TableSanitizer for Fixed {
            fn sanitize(&self, _markup: &str) -> Option<SanitizedTable> {
                Some(SanitizedTable {
                    markup: "<table><tr><td>fixed</td></tr></table>".to_string(),
                    table_count: 1,
                })
            }
        }

        let output =
            html_to_markdown_with_sanitizer("ignored", &Fixed, &MarkdownOptions::default())
                .unwrap();
        assert!(output.content.contains("fixed"));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("<table><tr><td>1</td></tr></table>"), "html");
        assert_eq!(detect_format("| a |\n|---|"), "markdown");
        assert_eq!(detect_format("| a | b |"), "markdown");
        assert_eq!(detect_format("plain words"), "unknown");
    }

    #[test]
    fn test_convert_auto() {
        let (out, format) = convert_auto("| a |\n|---|\n| 1 |").unwrap();
        assert_eq!(format, "html");
        assert!(out.contains("<table"));

        let (out, format) = convert_auto("<table><tr><td>x</td></tr></table>").unwrap();
        assert_eq!(format, "markdown");
        assert!(out.contains("| x"));

        assert!(convert_auto("plain words").is_none());
    }
}
