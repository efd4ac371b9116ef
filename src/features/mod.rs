//! Feature modules built on top of the core converters
//!
//! - `clipboard`: rich + plain text payloads for clipboard writers

pub mod clipboard;

pub use clipboard::{markdown_to_clipboard, markdown_to_clipboard_with_options, ClipboardPayload};
