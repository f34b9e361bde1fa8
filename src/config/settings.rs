//! User settings for the markdown decorations
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use crate::markdown::{ItalicMarker, MarkdownCommand};
use crate::string_utils::normalize_shortcut;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences for the markdown decorations.
///
/// All fields have sensible defaults via the `Default` trait and
/// `#[serde(default)]`, so partial config files load fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Switch the editor to widget-width line wrapping on attach
    pub line_wrap: bool,

    /// Delimiter used by the Italic command
    pub italic_marker: ItalicMarker,

    /// Number of heading buttons (H1..Hn) placed on the toolbar
    pub toolbar_heading_count: u8,

    /// Shortcut overrides keyed by command name (`"bold"`, `"h2"`, ...)
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_wrap: true,
            italic_marker: ItalicMarker::default(),
            toolbar_heading_count: 3,
            shortcuts: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Minimum number of toolbar heading buttons.
    pub const MIN_TOOLBAR_HEADINGS: u8 = 1;
    /// Maximum number of toolbar heading buttons.
    pub const MAX_TOOLBAR_HEADINGS: u8 = 6;

    /// Shortcut bound to `command`, honouring user overrides.
    ///
    /// An override set to the empty string unbinds the command.
    pub fn shortcut_for(&self, command: MarkdownCommand) -> Option<String> {
        match self.shortcuts.get(command.name()) {
            Some(custom) if custom.is_empty() => None,
            Some(custom) => Some(custom.clone()),
            None => Some(command.shortcut_label().to_string()),
        }
    }

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// Shortcut overrides for unknown commands are dropped.
    pub fn sanitize(&mut self) {
        self.toolbar_heading_count = self
            .toolbar_heading_count
            .clamp(Self::MIN_TOOLBAR_HEADINGS, Self::MAX_TOOLBAR_HEADINGS);

        // Keys are rewritten to canonical command names
        self.shortcuts = std::mem::take(&mut self.shortcuts)
            .into_iter()
            .filter_map(|(name, shortcut)| match name.parse::<MarkdownCommand>() {
                Ok(command) => Some((command.name().to_string(), shortcut.trim().to_string())),
                Err(_) => {
                    warn!("Ignoring shortcut override for unknown command '{}'", name);
                    None
                }
            })
            .collect();

        for (shortcut, first, second) in self.conflicting_shortcuts() {
            warn!(
                "Shortcut '{}' is bound to both '{}' and '{}'; '{}' wins",
                shortcut, first, second, first
            );
        }
    }

    /// Shortcuts bound to more than one command, after overrides.
    ///
    /// Each entry is `(shortcut, first, other)` where `first` comes earlier in
    /// menu order and is the one a key press triggers.
    pub fn conflicting_shortcuts(&self) -> Vec<(String, MarkdownCommand, MarkdownCommand)> {
        let mut seen: BTreeMap<String, MarkdownCommand> = BTreeMap::new();
        let mut conflicts = Vec::new();
        for command in MarkdownCommand::all() {
            let Some(shortcut) = self.shortcut_for(command) else {
                continue;
            };
            match seen.entry(normalize_shortcut(&shortcut)) {
                Entry::Occupied(first) => conflicts.push((shortcut, *first.get(), command)),
                Entry::Vacant(slot) => {
                    slot.insert(command);
                }
            }
        }
        conflicts
    }

    /// Load settings and sanitize them to ensure validity.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::HeadingLevel;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.line_wrap);
        assert_eq!(settings.italic_marker, ItalicMarker::Underscore);
        assert_eq!(settings.toolbar_heading_count, 3);
        assert!(settings.shortcuts.is_empty());
    }

    #[test]
    fn test_shortcut_defaults_and_overrides() {
        let mut settings = Settings::default();
        assert_eq!(settings.shortcut_for(MarkdownCommand::Bold).as_deref(), Some("Ctrl+B"));

        settings.shortcuts.insert("bold".into(), "Alt+B".into());
        settings.shortcuts.insert("h1".into(), String::new());
        assert_eq!(settings.shortcut_for(MarkdownCommand::Bold).as_deref(), Some("Alt+B"));
        assert_eq!(settings.shortcut_for(MarkdownCommand::Heading(HeadingLevel::H1)), None);
    }

    #[test]
    fn test_sanitize_clamps_heading_count() {
        let mut settings = Settings {
            toolbar_heading_count: 0,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!(settings.toolbar_heading_count, Settings::MIN_TOOLBAR_HEADINGS);

        settings.toolbar_heading_count = 40;
        settings.sanitize();
        assert_eq!(settings.toolbar_heading_count, Settings::MAX_TOOLBAR_HEADINGS);
    }

    #[test]
    fn test_sanitize_drops_unknown_shortcuts() {
        let mut settings = Settings::default();
        settings.shortcuts.insert("strike".into(), "Ctrl+S".into());
        settings.shortcuts.insert("link".into(), "  Ctrl+L ".into());
        settings.sanitize();

        assert!(!settings.shortcuts.contains_key("strike"));
        assert_eq!(settings.shortcuts.get("link").map(String::as_str), Some("Ctrl+L"));
    }

    #[test]
    fn test_sanitize_canonicalizes_shortcut_keys() {
        let mut settings = Settings::default();
        settings.shortcuts.insert("H2".into(), "Alt+2".into());
        settings.sanitize();
        assert_eq!(
            settings.shortcut_for(MarkdownCommand::Heading(HeadingLevel::H2)).as_deref(),
            Some("Alt+2")
        );
    }

    #[test]
    fn test_default_shortcuts_do_not_conflict() {
        assert!(Settings::default().conflicting_shortcuts().is_empty());
    }

    #[test]
    fn test_conflicting_override_reported() {
        let mut settings = Settings::default();
        settings.shortcuts.insert("code".into(), " ctrl+b".into());
        settings.sanitize();

        let conflicts = settings.conflicting_shortcuts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].1, MarkdownCommand::Bold);
        assert_eq!(conflicts[0].2, MarkdownCommand::InlineCode);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_sanitized(r#"{"italic_marker": "asterisk"}"#).unwrap();
        assert_eq!(settings.italic_marker, ItalicMarker::Asterisk);
        assert!(settings.line_wrap);
        assert_eq!(settings.toolbar_heading_count, 3);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let result = Settings::from_json_sanitized(r#"{"line_wrap": false, "future_feature": 1}"#);
        assert!(!result.unwrap().line_wrap);
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(Settings::from_json_sanitized(r#"{"toolbar_heading_count": "three"}"#).is_err());
        assert!(Settings::from_json_sanitized(r#"{"italic_marker": "tilde"}"#).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut original = Settings {
            line_wrap: false,
            italic_marker: ItalicMarker::Asterisk,
            toolbar_heading_count: 6,
            ..Settings::default()
        };
        original.shortcuts.insert("image".into(), "Ctrl+Alt+I".into());

        let json = serde_json::to_string_pretty(&original).unwrap();
        let loaded = Settings::from_json_sanitized(&json).unwrap();
        assert_eq!(original, loaded);
    }
}
