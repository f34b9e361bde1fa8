//! Host UI registration interface
//!
//! The host application owns its menus and toolbar; the plugin only hands
//! it actions to insert. Every surface is optional because not every editor
//! exposes all of them.

use crate::ui::actions::{Action, ActionEntry};

/// A menu the plugin can append entries to.
pub trait MenuSink {
    /// Append a separator line.
    fn add_separator(&mut self);

    /// Append a single action.
    fn add_action(&mut self, action: &Action);

    /// Append a titled submenu holding `actions`.
    fn add_submenu(&mut self, title: &str, actions: &[Action]);
}

/// A toolbar with a designated anchor (spacer) before which plugin buttons go.
pub trait ToolbarSink {
    /// Insert `entries`, in order, immediately before the spacer anchor.
    fn insert_before_spacer(&mut self, entries: &[ActionEntry]);
}

/// Registration surfaces published by the host editor.
pub trait UiHost {
    /// The editor's "Edit" menu, if it has one.
    fn edit_menu(&mut self) -> Option<&mut dyn MenuSink>;

    /// The editor's right-click context menu, if it has one.
    fn context_menu(&mut self) -> Option<&mut dyn MenuSink>;

    /// The editor's toolbar, if it has one.
    fn toolbar(&mut self) -> Option<&mut dyn ToolbarSink>;
}
