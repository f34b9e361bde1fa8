//! Markdown actions and their registration
//!
//! `MarkdownEdit` builds one [`Action`] per [`MarkdownCommand`], inserts them
//! into the host's edit menu, context menu and toolbar, and routes triggers
//! (button clicks, menu picks, key shortcuts) straight to the decoration.

use crate::config::Settings;
use crate::editor::TextEditor;
use crate::markdown::{HeadingLevel, ItalicMarker, MarkdownCommand};
use crate::string_utils::normalize_shortcut;
use crate::ui::host::UiHost;
use log::{debug, info};

/// Title of the edit menu's heading submenu.
const HEADING_MENU_TITLE: &str = "Heading";

// ─────────────────────────────────────────────────────────────────────────────
// Action Values
// ─────────────────────────────────────────────────────────────────────────────

/// A labelled, iconized, optionally shortcut-bound command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Text shown in menus and as the toolbar tooltip
    pub label: String,
    /// Icon resource reference
    pub icon: String,
    /// Keyboard shortcut, if bound
    pub shortcut: Option<String>,
    /// The decoration this action runs
    pub command: MarkdownCommand,
}

impl Action {
    /// Action for `command` with its default label, icon and shortcut.
    pub fn new(command: MarkdownCommand) -> Self {
        Self {
            label: command.label().to_string(),
            icon: command.icon(),
            shortcut: Some(command.shortcut_label().to_string()),
            command,
        }
    }

    /// Action for `command` using the shortcut configured in `settings`.
    pub fn from_settings(command: MarkdownCommand, settings: &Settings) -> Self {
        Self {
            shortcut: settings.shortcut_for(command),
            ..Self::new(command)
        }
    }

    /// Whether `shortcut` triggers this action.
    pub fn matches_shortcut(&self, shortcut: &str) -> bool {
        self.shortcut
            .as_deref()
            .is_some_and(|own| normalize_shortcut(own) == normalize_shortcut(shortcut))
    }
}

/// An entry of an ordered action list: an action or a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEntry {
    Action(Action),
    Separator,
}

// ─────────────────────────────────────────────────────────────────────────────
// Markdown Edit Plugin
// ─────────────────────────────────────────────────────────────────────────────

/// The markdown decoration plugin attached to one editor.
#[derive(Debug, Clone)]
pub struct MarkdownEdit {
    /// One action per command, in menu order
    actions: Vec<Action>,
    /// Delimiter the Italic action inserts
    italic_marker: ItalicMarker,
    /// Heading buttons shown on the toolbar
    toolbar_heading_count: u8,
    /// Whether attaching turns on line wrapping
    line_wrap: bool,
}

impl Default for MarkdownEdit {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl MarkdownEdit {
    /// Build the action set from `settings` without registering anything.
    pub fn new(settings: &Settings) -> Self {
        let actions = MarkdownCommand::all()
            .into_iter()
            .map(|command| Action::from_settings(command, settings))
            .collect();
        Self {
            actions,
            italic_marker: settings.italic_marker,
            toolbar_heading_count: settings
                .toolbar_heading_count
                .clamp(Settings::MIN_TOOLBAR_HEADINGS, Settings::MAX_TOOLBAR_HEADINGS),
            line_wrap: settings.line_wrap,
        }
    }

    /// Build the plugin, configure `editor` and register with `ui`.
    pub fn attach<E: TextEditor + ?Sized>(
        settings: &Settings,
        editor: &mut E,
        ui: &mut dyn UiHost,
    ) -> Self {
        let plugin = Self::new(settings);
        if plugin.line_wrap {
            editor.set_line_wrap(true);
        }
        plugin.register(ui);
        plugin
    }

    /// All actions, in menu order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The action bound to `command`.
    pub fn action(&self, command: MarkdownCommand) -> Option<&Action> {
        self.actions.iter().find(|a| a.command == command)
    }

    fn actions_for(&self, commands: &[MarkdownCommand]) -> Vec<&Action> {
        commands.iter().filter_map(|&cmd| self.action(cmd)).collect()
    }

    /// Entries inserted into the toolbar, in order.
    pub fn toolbar_entries(&self) -> Vec<ActionEntry> {
        let headings = HeadingLevel::ALL
            .iter()
            .take(self.toolbar_heading_count as usize)
            .map(|&level| MarkdownCommand::Heading(level));
        let inline = [
            MarkdownCommand::Bold,
            MarkdownCommand::Italic,
            MarkdownCommand::InlineCode,
            MarkdownCommand::Link,
            MarkdownCommand::Image,
        ];

        std::iter::once(ActionEntry::Separator)
            .chain(
                headings
                    .chain(inline)
                    .filter_map(|cmd| self.action(cmd).cloned())
                    .map(ActionEntry::Action),
            )
            .collect()
    }

    /// Insert the actions into every surface `ui` provides.
    ///
    /// Missing surfaces are skipped silently.
    pub fn register(&self, ui: &mut dyn UiHost) {
        let emphasis = self.actions_for(&[
            MarkdownCommand::Bold,
            MarkdownCommand::Italic,
            MarkdownCommand::InlineCode,
        ]);
        let links = self.actions_for(&[MarkdownCommand::Link, MarkdownCommand::Image]);

        if let Some(menu) = ui.edit_menu() {
            let headings: Vec<Action> = HeadingLevel::ALL
                .iter()
                .filter_map(|&level| self.action(MarkdownCommand::Heading(level)).cloned())
                .collect();
            menu.add_separator();
            menu.add_submenu(HEADING_MENU_TITLE, &headings);
            menu.add_separator();
            emphasis.iter().for_each(|a| menu.add_action(a));
            menu.add_separator();
            links.iter().for_each(|a| menu.add_action(a));
            debug!("Registered markdown actions in edit menu");
        }

        if let Some(menu) = ui.context_menu() {
            menu.add_separator();
            emphasis.iter().for_each(|a| menu.add_action(a));
            menu.add_separator();
            links.iter().for_each(|a| menu.add_action(a));
            debug!("Registered markdown actions in context menu");
        }

        if let Some(toolbar) = ui.toolbar() {
            toolbar.insert_before_spacer(&self.toolbar_entries());
            debug!("Registered markdown actions in toolbar");
        }

        info!("Markdown actions registered ({} actions)", self.actions.len());
    }

    /// Run `command` against `editor`.
    pub fn trigger<E: TextEditor + ?Sized>(&self, editor: &mut E, command: MarkdownCommand) -> bool {
        debug!("Markdown action triggered: {}", command);
        command.apply(editor, self.italic_marker)
    }

    /// Run the action bound to `shortcut`, if any.
    ///
    /// Returns `true` if an action matched.
    pub fn handle_shortcut<E: TextEditor + ?Sized>(&self, editor: &mut E, shortcut: &str) -> bool {
        match self.actions.iter().find(|a| a.matches_shortcut(shortcut)) {
            Some(action) => {
                debug!("Keyboard shortcut: {} ({})", shortcut, action.label);
                self.trigger(editor, action.command);
                true
            }
            None => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
