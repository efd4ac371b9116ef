//! Clipboard payloads
//!
//! A clipboard writer takes two flavors of the same table: `text/html` for
//! rich editors and `text/plain` for everything else. The writer itself lives
//! outside this crate; it only needs the strings built here and reports
//! success as a boolean.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::html::{table_model_to_html_with_options, HtmlOptions};
use crate::core::markdown::{parse_markdown_table, table_model_to_markdown};

/// Both clipboard flavors of one table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipboardPayload {
    /// `text/html` flavor
    pub html: String,
    /// `text/plain` fallback: the table re-rendered as aligned Markdown
    pub text: String,
}

/// Build a clipboard payload from Markdown text, `None` if it holds no table
pub fn markdown_to_clipboard(input: &str) -> Option<ClipboardPayload> {
    markdown_to_clipboard_with_options(input, &HtmlOptions::default())
}

/// Build a clipboard payload with custom HTML styling
pub fn markdown_to_clipboard_with_options(
    input: &str,
    options: &HtmlOptions,
) -> Option<ClipboardPayload> {
    let table = parse_markdown_table(input)?;
    Some(ClipboardPayload {
        html: table_model_to_html_with_options(&table, options),
        text: table_model_to_markdown(&table),
    })
}
