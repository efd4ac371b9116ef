//! Input diagnostics
//!
//! The converters only say "table" or "no table". This module explains the
//! second answer, and flags inputs that convert with losses:
//!
//! - Empty input, too few lines, missing or malformed separator rows
//! - Rows whose cell count disagrees with the separator
//! - Clipboard HTML without a table, with several tables, or with merged cells
//!
//! ## Example
//!
//! ```rust
//! use tablix::diagnostics::check_markdown;
//!
//! let result = check_markdown("| A | B |\n| 1 | 2 |");
//! assert!(result.has_errors());
//! ```

use std::fmt;

use crate::core::html::{
    has_merged_cells, html_table_to_model, SanitizedTable, TableSanitizer, WordSanitizer,
};
use crate::core::markdown::{is_separator_row, split_cells};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - conversion succeeds but loses something
    Warning,
    /// Error - conversion will find no table
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add location information
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(line) = self.line {
            write!(f, "\n  --> line {}", line)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(n: usize, noun: &str) -> String {
    format!("{} {}{}", n, noun, if n == 1 { "" } else { "s" })
}

/// Check Markdown input for table problems
pub fn check_markdown(input: &str) -> CheckResult {
    let mut result = CheckResult::new();

    // (1-indexed line number, trimmed text), blank lines dropped
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    if lines.is_empty() {
        result.add(Diagnostic::new(DiagnosticLevel::Error, "input is empty"));
        return result;
    }

    if lines.len() < 2 {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                "a table needs a header row and a separator row",
            )
            .with_line(lines[0].0)
            .with_source(lines[0].1)
            .with_suggestion("Add a separator such as | --- | --- | below the header"),
        );
        return result;
    }

    let Some(sep_pos) = lines.iter().position(|(_, l)| is_separator_row(l)) else {
        report_missing_separator(&lines, &mut result);
        return result;
    };

    let (sep_line, separator) = lines[sep_pos];
    let columns = split_cells(separator).len();

    if sep_pos == 0 {
        result.add(
            Diagnostic::new(DiagnosticLevel::Info, "table has no header row")
                .with_line(sep_line)
                .with_suggestion("The first data row will be used as header in Markdown output"),
        );
    }

    for &(line_no, line) in lines.iter().filter(|(n, _)| *n != sep_line) {
        let cells = split_cells(line).len();
        if cells > columns {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    format!(
                        "row has {} cells but the separator defines {} columns; missing alignments default to left",
                        cells, columns
                    ),
                )
                .with_line(line_no)
                .with_source(line),
            );
        } else if cells < columns {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    format!(
                        "row has {} of {} cells; it will be padded with empty cells",
                        cells, columns
                    ),
                )
                .with_line(line_no)
                .with_source(line),
            );
        }
    }

    result
}

/// A line that would be a separator if it started and ended with `|`
fn looks_like_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| matches!(c, '-' | ':' | '|' | ' ' | '\t'))
}

fn report_missing_separator(lines: &[(usize, &str)], result: &mut CheckResult) {
    match lines.iter().find(|(_, l)| looks_like_separator(l)) {
        Some(&(line_no, line)) => result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                "separator row must start and end with '|'",
            )
            .with_line(line_no)
            .with_source(line)
            .with_suggestion(format!(
                "Write it as |{}|",
                line.trim_matches('|').trim()
            )),
        ),
        None => result.add(
            Diagnostic::new(DiagnosticLevel::Error, "no separator row found")
                .with_suggestion("Add a row such as | --- | --- | below the header"),
        ),
    }
}

/// Check clipboard HTML for table problems
pub fn check_html(markup: &str) -> CheckResult {
    let mut result = CheckResult::new();

    if markup.trim().is_empty() {
        result.add(Diagnostic::new(DiagnosticLevel::Error, "input is empty"));
        return result;
    }

    let Some(clean) = WordSanitizer.sanitize(markup) else {
        result.add(Diagnostic::new(
            DiagnosticLevel::Error,
            "no <table> element found",
        ));
        return result;
    };

    if clean.table_count > 1 {
        result.add(Diagnostic::new(
            DiagnosticLevel::Warning,
            format!(
                "found {} tables; only the first one will be converted",
                clean.table_count
            ),
        ));
    }

    let fragment = clean.parse();
    match SanitizedTable::table(&fragment) {
        Some(table) if html_table_to_model(table).is_some() => {
            if has_merged_cells(table) {
                result.add(
                    Diagnostic::new(DiagnosticLevel::Warning, "table contains merged cells")
                        .with_suggestion(
                            "Merged cells are split; the text stays in the top-left cell",
                        ),
                );
            }
        }
        _ => result.add(Diagnostic::new(DiagnosticLevel::Error, "table has no rows")),
    }

    result
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
