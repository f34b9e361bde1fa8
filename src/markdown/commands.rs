//! Markdown decoration commands
//!
//! The closed set of decorations the plugin offers, with the metadata the
//! action layer needs (label, icon, default shortcut) and dispatch into
//! [`crate::markdown::decorate`].

use crate::editor::TextEditor;
use crate::error::Error;
use crate::markdown::decorate::{insert_heading, insert_image, insert_link, wrap_selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Heading Level
// ─────────────────────────────────────────────────────────────────────────────

/// Heading level (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl From<u8> for HeadingLevel {
    /// Out-of-range levels clamp into 1..=6.
    fn from(level: u8) -> Self {
        match level {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }
}

impl HeadingLevel {
    /// All levels in order.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The `#` run for this level, e.g. `"###"` for H3.
    pub fn marker(self) -> String {
        "#".repeat(self as usize)
    }

    /// The marker followed by the separating space, e.g. `"## "`.
    pub fn marker_with_space(self) -> String {
        format!("{} ", self.marker())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Italic Marker
// ─────────────────────────────────────────────────────────────────────────────

/// Delimiter used for italic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItalicMarker {
    /// `_text_`
    #[default]
    Underscore,
    /// `*text*`
    Asterisk,
}

impl ItalicMarker {
    pub fn delimiter(self) -> &'static str {
        match self {
            ItalicMarker::Underscore => "_",
            ItalicMarker::Asterisk => "*",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Command Enum
// ─────────────────────────────────────────────────────────────────────────────

/// Markdown decorations that can be applied to an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownCommand {
    /// Heading marker at the start of the cursor line
    Heading(HeadingLevel),
    /// Bold text (**text**)
    Bold,
    /// Italic text (_text_ or *text*)
    Italic,
    /// Inline code (`code`)
    InlineCode,
    /// Link ([text](url))
    Link,
    /// Image (![alt](url))
    Image,
}

impl MarkdownCommand {
    /// Every command, in menu order.
    pub fn all() -> Vec<MarkdownCommand> {
        HeadingLevel::ALL
            .iter()
            .map(|&level| MarkdownCommand::Heading(level))
            .chain([
                MarkdownCommand::Bold,
                MarkdownCommand::Italic,
                MarkdownCommand::InlineCode,
                MarkdownCommand::Link,
                MarkdownCommand::Image,
            ])
            .collect()
    }

    /// Stable identifier used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading(HeadingLevel::H1) => "h1",
            Self::Heading(HeadingLevel::H2) => "h2",
            Self::Heading(HeadingLevel::H3) => "h3",
            Self::Heading(HeadingLevel::H4) => "h4",
            Self::Heading(HeadingLevel::H5) => "h5",
            Self::Heading(HeadingLevel::H6) => "h6",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::InlineCode => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// Label shown on menu entries and toolbar buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading(HeadingLevel::H1) => "H1",
            Self::Heading(HeadingLevel::H2) => "H2",
            Self::Heading(HeadingLevel::H3) => "H3",
            Self::Heading(HeadingLevel::H4) => "H4",
            Self::Heading(HeadingLevel::H5) => "H5",
            Self::Heading(HeadingLevel::H6) => "H6",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::InlineCode => "Inline Code",
            Self::Link => "Link",
            Self::Image => "Image",
        }
    }

    /// Icon resource reference, resolved by the host.
    pub fn icon(&self) -> String {
        format!("icon:markdown/images/{}.png", self.name())
    }

    /// Get the default keyboard shortcut label for this command.
    pub fn shortcut_label(&self) -> &'static str {
        match self {
            Self::Heading(HeadingLevel::H1) => "Ctrl+1",
            Self::Heading(HeadingLevel::H2) => "Ctrl+2",
            Self::Heading(HeadingLevel::H3) => "Ctrl+3",
            Self::Heading(HeadingLevel::H4) => "Ctrl+4",
            Self::Heading(HeadingLevel::H5) => "Ctrl+5",
            Self::Heading(HeadingLevel::H6) => "Ctrl+6",
            Self::Bold => "Ctrl+B",
            Self::Italic => "Ctrl+I",
            Self::InlineCode => "Ctrl+K",
            Self::Link => "Ctrl+Shift+L",
            Self::Image => "Ctrl+Shift+I",
        }
    }

    /// Get the tooltip text for this command.
    pub fn tooltip(&self) -> String {
        let name = match self {
            Self::Heading(level) => return format!("Heading {} ({})", level.number(), self.shortcut_label()),
            Self::Link => "Insert Link",
            Self::Image => "Insert Image",
            other => other.label(),
        };
        format!("{} ({})", name, self.shortcut_label())
    }

    /// Apply this command to `editor`.
    ///
    /// Returns `false` only when a heading could not be placed because the
    /// cursor line no longer resolves.
    pub fn apply<E: TextEditor + ?Sized>(self, editor: &mut E, italic: ItalicMarker) -> bool {
        match self {
            Self::Heading(level) => return insert_heading(editor, level),
            Self::Bold => wrap_selection(editor, "**"),
            Self::Italic => wrap_selection(editor, italic.delimiter()),
            Self::InlineCode => wrap_selection(editor, "`"),
            Self::Link => insert_link(editor),
            Self::Image => insert_image(editor),
        }
        true
    }
}

impl fmt::Display for MarkdownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkdownCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        MarkdownCommand::all()
            .into_iter()
            .find(|cmd| cmd.name() == wanted)
            .ok_or_else(|| Error::UnknownCommand(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextBuffer;

    #[test]
    fn test_heading_level_from_u8_clamps() {
        assert_eq!(HeadingLevel::from(0), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from(3), HeadingLevel::H3);
        assert_eq!(HeadingLevel::from(42), HeadingLevel::H6);
    }

    #[test]
    fn test_heading_markers() {
        assert_eq!(HeadingLevel::H1.marker(), "#");
        assert_eq!(HeadingLevel::H6.marker(), "######");
        assert_eq!(HeadingLevel::H2.marker_with_space(), "## ");
    }

    #[test]
    fn test_all_commands_in_menu_order() {
        let names: Vec<&str> = MarkdownCommand::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["h1", "h2", "h3", "h4", "h5", "h6", "bold", "italic", "code", "link", "image"]
        );
    }

    #[test]
    fn test_parse_command_names() {
        assert_eq!("bold".parse::<MarkdownCommand>().unwrap(), MarkdownCommand::Bold);
        assert_eq!(" H4 ".parse::<MarkdownCommand>().unwrap(), MarkdownCommand::Heading(HeadingLevel::H4));
        assert!(matches!(
            "strike".parse::<MarkdownCommand>(),
            Err(Error::UnknownCommand(name)) if name == "strike"
        ));
    }

    #[test]
    fn test_display_matches_name() {
        for cmd in MarkdownCommand::all() {
            assert_eq!(cmd.to_string(), cmd.name());
        }
    }

    #[test]
    fn test_shortcut_labels() {
        assert_eq!(MarkdownCommand::Bold.shortcut_label(), "Ctrl+B");
        assert_eq!(MarkdownCommand::InlineCode.shortcut_label(), "Ctrl+K");
        assert_eq!(MarkdownCommand::Image.shortcut_label(), "Ctrl+Shift+I");
        assert_eq!(MarkdownCommand::Heading(HeadingLevel::H5).shortcut_label(), "Ctrl+5");
    }

    #[test]
    fn test_icons() {
        assert_eq!(MarkdownCommand::Bold.icon(), "icon:markdown/images/bold.png");
        assert_eq!(
            MarkdownCommand::Heading(HeadingLevel::H2).icon(),
            "icon:markdown/images/h2.png"
        );
    }

    #[test]
    fn test_tooltips() {
        let tooltip = MarkdownCommand::Bold.tooltip();
        assert!(tooltip.contains("Bold"));
        assert!(tooltip.contains("Ctrl+B"));
        assert_eq!(MarkdownCommand::Heading(HeadingLevel::H1).tooltip(), "Heading 1 (Ctrl+1)");
        assert_eq!(MarkdownCommand::Link.tooltip(), "Insert Link (Ctrl+Shift+L)");
    }

    #[test]
    fn test_apply_italic_marker() {
        let mut buffer = TextBuffer::new("word").with_selection(0, 4);
        MarkdownCommand::Italic.apply(&mut buffer, ItalicMarker::Underscore);
        assert_eq!(buffer.text(), "_word_");

        let mut buffer = TextBuffer::new("word").with_selection(0, 4);
        MarkdownCommand::Italic.apply(&mut buffer, ItalicMarker::Asterisk);
        assert_eq!(buffer.text(), "*word*");
    }

    #[test]
    fn test_apply_dispatch() {
        let mut buffer = TextBuffer::new("x").with_selection(0, 1);
        assert!(MarkdownCommand::InlineCode.apply(&mut buffer, ItalicMarker::default()));
        assert_eq!(buffer.text(), "`x`");

        let mut buffer = TextBuffer::new("Title");
        assert!(MarkdownCommand::Heading(HeadingLevel::H2).apply(&mut buffer, ItalicMarker::default()));
        assert_eq!(buffer.text(), "## Title");
    }
}
