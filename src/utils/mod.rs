//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics explaining why input holds no table
//! - Error, warning and output types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    check_html, check_markdown, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel,
};
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
