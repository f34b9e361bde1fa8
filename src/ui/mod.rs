//! UI registration module
//!
//! This module publishes the markdown actions to the host editor's menus and
//! toolbar and dispatches their triggers.

mod actions;
mod host;
pub mod layout;

pub use actions::{Action, ActionEntry, MarkdownEdit};
pub use host::{MenuSink, ToolbarSink, UiHost};
pub use layout::HeadlessUi;
