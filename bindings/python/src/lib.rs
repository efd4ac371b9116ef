//! Python bindings for tablix

use pyo3::prelude::*;

/// Convert a Markdown table to an HTML table fragment, or `None`
#[pyfunction]
#[pyo3(signature = (text, minimal = false))]
fn markdown_to_html(text: &str, minimal: bool) -> Option<String> {
    let options = if minimal {
        tablix::HtmlOptions::minimal()
    } else {
        tablix::HtmlOptions::default()
    };
    tablix::markdown_to_html_with_options(text, &options)
}

/// Convert clipboard HTML to `(markdown, warnings)`, or `None`
#[pyfunction]
#[pyo3(signature = (markup, compact = false))]
fn html_to_markdown(markup: &str, compact: bool) -> Option<(String, Vec<String>)> {
    let options = if compact {
        tablix::MarkdownOptions::compact()
    } else {
        tablix::MarkdownOptions::default()
    };
    tablix::html_to_markdown_with_options(markup, &options)
        .map(|out| (out.content.clone(), out.warning_messages()))
}

/// Detect input format: "html", "markdown" or "unknown"
#[pyfunction]
fn detect_format(text: &str) -> &'static str {
    tablix::detect_format(text)
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(markdown_to_html, m)?)?;
    m.add_function(wrap_pyfunction!(html_to_markdown, m)?)?;
    m.add_function(wrap_pyfunction!(detect_format, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
