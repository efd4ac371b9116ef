//! Markdown pipe tables
//!
//! Converts between GitHub-style pipe tables and the shared table model.
//!
//! ```text
//! | Name | Qty |        header row(s)
//! | :--- | --: |        separator (encodes alignment)
//! | Pear |   3 |        data rows
//! ```
//!
//! Any number of lines may precede the separator; all of them become header
//! rows. A literal pipe inside a cell is written `\|`.

mod generator;
mod parser;


// Re-export public API
pub use generator::{
    escape_cell, table_model_to_markdown, table_model_to_markdown_with_options, MarkdownOptions,
};
pub use parser::{is_separator_row, parse_alignments, parse_markdown_table, split_cells};

pub(crate) use parser::table_lines;
