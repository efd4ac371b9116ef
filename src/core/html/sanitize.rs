//! Word-processor HTML cleanup
//!
//! Clipboard HTML from office suites wraps a table in namespaced tags
//! (`<o:p>`, `<w:sdt>`, `<st1:place>`), conditional comments, `<col>` width
//! hints and a wall of `mso-*` styles. [`WordSanitizer`] reduces the first
//! table to plain structure: rows, cells, text, spans and alignment.

use lazy_static::lazy_static;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::parser::TEXT_ALIGN;

lazy_static! {
    pub(crate) static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
}

/// Elements dropped together with their content
const DROPPED_ELEMENTS: &[&str] = &[
    "col", "colgroup", "style", "script", "meta", "link", "title", "xml", "template",
];

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "wbr"];

/// Attributes that survive sanitization
const KEPT_ATTRIBUTES: &[&str] = &["colspan", "rowspan", "align"];

/// The first table of a clipboard payload, cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedTable {
    /// Markup of a single clean `<table>` element
    pub markup: String,
    /// How many `<table>` elements the source contained
    pub table_count: usize,
}

impl SanitizedTable {
    /// Parse the cleaned markup; select the table with [`SanitizedTable::table`]
    pub fn parse(&self) -> Html {
        Html::parse_fragment(&self.markup)
    }

    /// The `<table>` element inside a fragment returned by [`SanitizedTable::parse`]
    pub fn table(fragment: &Html) -> Option<ElementRef<'_>> {
        fragment.select(&TABLE_SELECTOR).next()
    }
}

/// Reduces raw clipboard HTML to a clean table element
pub trait TableSanitizer {
    /// `None` when the markup contains no table
    fn sanitize(&self, markup: &str) -> Option<SanitizedTable>;
}

/// Default sanitizer for word-processor and browser clipboard HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSanitizer;

impl TableSanitizer for WordSanitizer {
    fn sanitize(&self, markup: &str) -> Option<SanitizedTable> {
        let document = Html::parse_document(markup);
        let mut tables = document.select(&TABLE_SELECTOR);

        let Some(first) = tables.next() else {
            debug!("clipboard html contains no table");
            return None;
        };
        let table_count = 1 + tables.count();

        let mut clean = String::new();
        write_clean(first, &mut clean);

        Some(SanitizedTable {
            markup: clean,
            table_count,
        })
    }
}

fn write_clean(element: ElementRef<'_>, out: &mut String) {
    let el = element.value();
    let name = el.name();

    if DROPPED_ELEMENTS.contains(&name) {
        return;
    }

    // Namespaced office tags: keep their text, drop the tag
    if name.contains(':') {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);

    let mut has_align = false;
    for (attr, value) in el.attrs() {
        let attr = attr.to_ascii_lowercase();
        if KEPT_ATTRIBUTES.contains(&attr.as_str()) {
            has_align |= attr == "align";
            push_attr(out, &attr, value);
        }
    }
    if !has_align {
        if let Some(caps) = el.attr("style").and_then(|s| TEXT_ALIGN.captures(s)) {
            push_attr(out, "align", &caps[1].to_ascii_lowercase());
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, out);

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&html_escape::encode_text(&**text)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    write_clean(child_el, out);
                }
            }
            // Comments, including `<!--[if gte mso 9]>` blocks
            _ => {}
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
