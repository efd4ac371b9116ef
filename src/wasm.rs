//! WASM bindings for tablix
//!
//! This module provides JavaScript-accessible functions for Markdown ↔ HTML table conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{HtmlOptions, MarkdownOptions};

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl ConvertResult {
    fn no_table(err: crate::ConversionError) -> Self {
        ConvertResult {
            output: String::new(),
            success: false,
            error: Some(err.to_string()),
            warnings: vec![],
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a Markdown table to HTML
///
/// # Returns
/// `{ output, success, error, warnings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "markdownToHtml")]
pub fn markdown_to_html_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: HtmlOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match crate::markdown_to_html_with_options(input, &opts) {
        Some(output) => ConvertResult {
            output,
            success: true,
            error: None,
            warnings: vec![],
        },
        None => ConvertResult::no_table(crate::ConversionError::no_table("markdown")),
    };

    to_js(&result)
}

/// Convert clipboard HTML to a Markdown table
///
/// # Returns
/// `{ output, success, error, warnings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "htmlToMarkdown")]
pub fn html_to_markdown_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: MarkdownOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match crate::html_to_markdown_with_options(input, &opts) {
        Some(out) => ConvertResult {
            warnings: out.warning_messages(),
            output: out.content,
            success: true,
            error: None,
        },
        None => ConvertResult::no_table(crate::ConversionError::no_table("html")),
    };

    to_js(&result)
}

/// Build `{ html, text }` for a clipboard write, or `null` if no table was found
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "markdownToClipboard")]
pub fn markdown_to_clipboard_wasm(input: &str) -> JsValue {
    match crate::markdown_to_clipboard(input) {
        Some(payload) => to_js(&payload),
        None => JsValue::NULL,
    }
}

/// Detect input format (html, markdown or unknown)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check Markdown input for table problems
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkMarkdown")]
pub fn check_markdown_wasm(input: &str) -> JsValue {
    to_js(&summarize(&crate::diagnostics::check_markdown(input)))
}

/// Check clipboard HTML for table problems
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkHtml")]
pub fn check_html_wasm(input: &str) -> JsValue {
    to_js(&summarize(&crate::diagnostics::check_html(input)))
}

/// Summary of check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}

#[cfg(feature = "wasm")]
fn summarize(result: &crate::diagnostics::CheckResult) -> CheckSummary {
    use crate::diagnostics::DiagnosticLevel;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Error => errors.push(d.message.clone()),
            DiagnosticLevel::Warning => warnings.push(d.message.clone()),
            DiagnosticLevel::Info => infos.push(d.message.clone()),
        }
    }

    CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    }
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
