//! Editor module
//!
//! This module defines the host editor interface the markdown decorations
//! drive, plus an in-memory buffer implementing it.

mod buffer;
mod host;

pub use buffer::TextBuffer;
pub use host::{EditBlock, Selection, TextEditor};
