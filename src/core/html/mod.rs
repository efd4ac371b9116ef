//! HTML tables
//!
//! Converts between `<table>` markup, as produced by word processors and
//! browsers, and the shared table model.
//!
//! # Architecture
//!
//! ```text
//! Clipboard HTML -> Sanitizer -> clean <table> -> Span expansion -> Table model
//! Table model -> Inline-styled <table> fragment
//! ```
//!
//! # Example
//!
//! ```
//! use tablix::html::{html_table_to_model, SanitizedTable, TableSanitizer, WordSanitizer};
//!
//! let clean = WordSanitizer
//!     .sanitize("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>")
//!     .unwrap();
//! let fragment = clean.parse();
//! let table = html_table_to_model(SanitizedTable::table(&fragment).unwrap()).unwrap();
//! assert_eq!(table.rows.len(), 2);
//! ```

mod generator;
mod parser;
mod sanitize;

#[cfg(test)]
mod tests;

// Re-export public API
pub use generator::{table_model_to_html, table_model_to_html_with_options, HtmlOptions};
pub use parser::{cell_text, has_merged_cells, html_table_to_model};
pub use sanitize::{SanitizedTable, TableSanitizer, WordSanitizer};
