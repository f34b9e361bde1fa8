//! Markdown decoration module
//!
//! Cursor-based markdown edits (headings, emphasis, inline code, links and
//! images) applied to any host editor implementing
//! [`TextEditor`](crate::editor::TextEditor).
//!
//! # Example
//! ```ignore
//! use crate::editor::TextBuffer;
//! use crate::markdown::{MarkdownCommand, ItalicMarker};
//!
//! let mut buffer = TextBuffer::new("Hello world").with_selection(0, 5);
//! MarkdownCommand::Bold.apply(&mut buffer, ItalicMarker::default());
//! assert_eq!(buffer.text(), "**Hello** world");
//! ```

mod commands;
pub mod decorate;

pub use commands::{HeadingLevel, ItalicMarker, MarkdownCommand};
pub use decorate::{
    goto_line, insert_heading, insert_heading_at, insert_image, insert_link, wrap_selection,
};
