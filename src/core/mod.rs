//! Core conversion modules
//!
//! This module contains the table model and both format engines:
//! - `model`: the shared, format-neutral table representation
//! - `markdown`: pipe table parser and generator
//! - `html`: `<table>` sanitizer, parser and generator

pub mod html;
pub mod markdown;
pub mod model;

// Re-export main types and functions
pub use html::{
    html_table_to_model, table_model_to_html, table_model_to_html_with_options, HtmlOptions,
    SanitizedTable, TableSanitizer, WordSanitizer,
};
pub use markdown::{
    parse_markdown_table, table_model_to_markdown, table_model_to_markdown_with_options,
    MarkdownOptions,
};
pub use model::{get_column_count, normalize_table, Alignment, Cell, Row, Table};
