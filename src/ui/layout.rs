//! Headless UI surfaces
//!
//! Plain in-memory menus and toolbar implementing the registration traits.
//! The command line tool uses them to print the layout a GUI host would
//! receive; tests use them to inspect registration.

use crate::ui::actions::{Action, ActionEntry};
use crate::ui::host::{MenuSink, ToolbarSink, UiHost};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Menu
// ─────────────────────────────────────────────────────────────────────────────

/// One row of a [`Menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action(Action),
    Separator,
    Submenu { title: String, actions: Vec<Action> },
}

/// A menu that records what was added to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl MenuSink for Menu {
    fn add_separator(&mut self) {
        self.items.push(MenuItem::Separator);
    }

    fn add_action(&mut self, action: &Action) {
        self.items.push(MenuItem::Action(action.clone()));
    }

    fn add_submenu(&mut self, title: &str, actions: &[Action]) {
        self.items.push(MenuItem::Submenu {
            title: title.to_string(),
            actions: actions.to_vec(),
        });
    }
}

fn write_action(f: &mut fmt::Formatter<'_>, indent: &str, action: &Action) -> fmt::Result {
    match &action.shortcut {
        Some(shortcut) => writeln!(f, "{}{:<14}{}", indent, action.label, shortcut),
        None => writeln!(f, "{}{}", indent, action.label),
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            match item {
                MenuItem::Separator => writeln!(f, "  ────────────")?,
                MenuItem::Action(action) => write_action(f, "  ", action)?,
                MenuItem::Submenu { title, actions } => {
                    writeln!(f, "  {} ▸", title)?;
                    for action in actions {
                        write_action(f, "      ", action)?;
                    }
                }
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toolbar
// ─────────────────────────────────────────────────────────────────────────────

/// One slot of a [`Toolbar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    /// A button owned by the host
    Host(String),
    /// The anchor plugin buttons are inserted before
    Spacer,
    /// A plugin-provided entry
    Plugin(ActionEntry),
}

/// A toolbar with a spacer anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub items: Vec<ToolbarItem>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            items: vec![ToolbarItem::Spacer],
        }
    }
}

impl Toolbar {
    /// A toolbar with host buttons on both sides of the spacer.
    pub fn with_host_buttons(leading: &[&str], trailing: &[&str]) -> Self {
        let host = |names: &[&str]| {
            names
                .iter()
                .map(|n| ToolbarItem::Host(n.to_string()))
                .collect::<Vec<_>>()
        };
        let mut items = host(leading);
        items.push(ToolbarItem::Spacer);
        items.extend(host(trailing));
        Self { items }
    }

    /// Entries the plugin inserted, in toolbar order.
    pub fn plugin_entries(&self) -> Vec<ActionEntry> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ToolbarItem::Plugin(entry) => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ToolbarSink for Toolbar {
    fn insert_before_spacer(&mut self, entries: &[ActionEntry]) {
        let anchor = self
            .items
            .iter()
            .position(|item| *item == ToolbarItem::Spacer)
            .unwrap_or(self.items.len());
        let tail = self.items.split_off(anchor);
        self.items
            .extend(entries.iter().cloned().map(ToolbarItem::Plugin));
        self.items.extend(tail);
    }
}

impl fmt::Display for Toolbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .items
            .iter()
            .map(|item| match item {
                ToolbarItem::Host(name) => name.clone(),
                ToolbarItem::Spacer => "<spacer>".to_string(),
                ToolbarItem::Plugin(ActionEntry::Separator) => "|".to_string(),
                ToolbarItem::Plugin(ActionEntry::Action(action)) => format!("[{}]", action.label),
            })
            .collect();
        writeln!(f, "  {}", cells.join(" "))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless Host
// ─────────────────────────────────────────────────────────────────────────────

/// A UI host whose surfaces are plain in-memory values.
#[derive(Debug, Clone, Default)]
pub struct HeadlessUi {
    pub edit_menu: Option<Menu>,
    pub context_menu: Option<Menu>,
    pub toolbar: Option<Toolbar>,
}

impl HeadlessUi {
    /// A host exposing an edit menu, a context menu and a toolbar.
    pub fn full() -> Self {
        Self {
            edit_menu: Some(Menu::default()),
            context_menu: Some(Menu::default()),
            toolbar: Some(Toolbar::default()),
        }
    }
}

impl UiHost for HeadlessUi {
    fn edit_menu(&mut self) -> Option<&mut dyn MenuSink> {
        self.edit_menu.as_mut().map(|m| m as &mut dyn MenuSink)
    }

    fn context_menu(&mut self) -> Option<&mut dyn MenuSink> {
        self.context_menu.as_mut().map(|m| m as &mut dyn MenuSink)
    }

    fn toolbar(&mut self) -> Option<&mut dyn ToolbarSink> {
        self.toolbar.as_mut().map(|t| t as &mut dyn ToolbarSink)
    }
}

impl fmt::Display for HeadlessUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(menu) = &self.edit_menu {
            writeln!(f, "Edit menu:")?;
            write!(f, "{}", menu)?;
        }
        if let Some(menu) = &self.context_menu {
            writeln!(f, "Context menu:")?;
            write!(f, "{}", menu)?;
        }
        if let Some(toolbar) = &self.toolbar {
            writeln!(f, "Toolbar:")?;
            write!(f, "{}", toolbar)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::MarkdownCommand;

    #[test]
    fn test_toolbar_inserts_before_spacer() {
        let mut toolbar = Toolbar::with_host_buttons(&["Save"], &["Find"]);
        toolbar.insert_before_spacer(&[
            ActionEntry::Separator,
            ActionEntry::Action(Action::new(MarkdownCommand::Bold)),
        ]);

        assert_eq!(toolbar.items.len(), 5);
        assert_eq!(toolbar.items[0], ToolbarItem::Host("Save".into()));
        assert_eq!(toolbar.items[1], ToolbarItem::Plugin(ActionEntry::Separator));
        assert_eq!(toolbar.items[3], ToolbarItem::Spacer);
        assert_eq!(toolbar.items[4], ToolbarItem::Host("Find".into()));
        assert_eq!(toolbar.to_string(), "  Save | [Bold] <spacer> Find\n");
    }

    #[test]
    fn test_toolbar_without_spacer_appends() {
        let mut toolbar = Toolbar { items: Vec::new() };
        toolbar.insert_before_spacer(&[ActionEntry::Separator]);
        assert_eq!(toolbar.plugin_entries(), vec![ActionEntry::Separator]);
    }

    #[test]
    fn test_menu_display() {
        let mut menu = Menu::default();
        menu.add_separator();
        menu.add_action(&Action::new(MarkdownCommand::Link));
        let text = menu.to_string();
        assert!(text.contains("────"));
        assert!(text.contains("Link"));
        assert!(text.contains("Ctrl+Shift+L"));
    }

    #[test]
    fn test_headless_ui_surfaces() {
        let mut ui = HeadlessUi::default();
        assert!(ui.edit_menu().is_none());
        assert!(ui.toolbar().is_none());

        let mut ui = HeadlessUi::full();
        assert!(ui.context_menu().is_some());
        assert_eq!(ui.to_string().lines().next(), Some("Edit menu:"));
    }
}
