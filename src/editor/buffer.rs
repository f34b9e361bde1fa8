//! In-memory text buffer
//!
//! `TextBuffer` is a self-contained [`TextEditor`] implementation used when
//! no GUI host is around: the `mdecorate` command line tool and the test
//! suite both drive decorations against it. It keeps an anchor/cursor
//! selection in character offsets and a snapshot undo history in which a
//! whole edit block collapses into one step.

use crate::editor::host::{Selection, TextEditor};
use crate::string_utils::{byte_offset, char_len, line_of, line_starts};
use log::debug;

/// Default maximum undo history size.
const DEFAULT_MAX_UNDO: usize = 100;

/// Document state captured for undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    content: String,
    selection: Selection,
}

/// A plain string document with cursor, selection and undo history.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Document text
    content: String,
    /// Cached character count of `content`
    len_chars: usize,
    /// Current selection (collapsed when there is none)
    selection: Selection,
    /// Undo history stack
    undo_stack: Vec<Snapshot>,
    /// Redo history stack
    redo_stack: Vec<Snapshot>,
    /// Maximum undo history size
    max_undo_size: usize,
    /// Nesting depth of open edit blocks
    edit_depth: usize,
    /// State captured when the outermost edit block opened
    block_start: Option<Snapshot>,
    /// Whether lines wrap at the widget width
    line_wrap: bool,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextBuffer {
    /// Create a buffer holding `text` with the cursor at the start.
    pub fn new(text: impl Into<String>) -> Self {
        let content = text.into();
        Self {
            len_chars: char_len(&content),
            content,
            selection: Selection::default(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo_size: DEFAULT_MAX_UNDO,
            edit_depth: 0,
            block_start: None,
            line_wrap: false,
        }
    }

    /// Builder: place the cursor at `pos`.
    pub fn with_cursor(mut self, pos: usize) -> Self {
        self.set_position(pos);
        self
    }

    /// Builder: select from `anchor` to `cursor`.
    pub fn with_selection(mut self, anchor: usize, cursor: usize) -> Self {
        self.set_selection(anchor, cursor);
        self
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Consume the buffer, returning its text.
    pub fn into_text(self) -> String {
        self.content
    }

    /// Whether the host asked for widget-width line wrapping.
    pub fn line_wrap(&self) -> bool {
        self.line_wrap
    }

    /// Current edit block nesting depth (0 when no block is open).
    pub fn edit_depth(&self) -> usize {
        self.edit_depth
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Undo / Redo
    // ─────────────────────────────────────────────────────────────────────────

    /// Undo the last edit step.
    ///
    /// Returns `true` if undo was performed.
    pub fn undo(&mut self) -> bool {
        if let Some(previous) = self.undo_stack.pop() {
            let current = self.snapshot();
            self.redo_stack.push(current);
            self.restore(previous);
            true
        } else {
            false
        }
    }

    /// Redo the last undone edit step.
    ///
    /// Returns `true` if redo was performed.
    pub fn redo(&mut self) -> bool {
        if let Some(next) = self.redo_stack.pop() {
            let current = self.snapshot();
            self.undo_stack.push(current);
            self.restore(next);
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of items in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content.clone(),
            selection: self.selection,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.len_chars = char_len(&snapshot.content);
        self.content = snapshot.content;
        self.selection = snapshot.selection;
    }

    /// Push a pre-edit snapshot as one undo step.
    fn record_edit(&mut self, before: Snapshot) {
        if before.content == self.content {
            return;
        }
        self.undo_stack.push(before);
        if self.undo_stack.len() > self.max_undo_size {
            self.undo_stack.remove(0);
        }
        // Clear redo stack on new edit
        self.redo_stack.clear();
    }
}

impl TextEditor for TextBuffer {
    fn len_chars(&self) -> usize {
        self.len_chars
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn selected_text(&self) -> String {
        let start = byte_offset(&self.content, self.selection.start());
        let end = byte_offset(&self.content, self.selection.end());
        self.content[start..end].to_string()
    }

    fn insert_text(&mut self, text: &str) {
        let before = (self.edit_depth == 0).then(|| self.snapshot());

        let start = self.selection.start();
        let start_byte = byte_offset(&self.content, start);
        let end_byte = byte_offset(&self.content, self.selection.end());
        self.content.replace_range(start_byte..end_byte, text);
        self.len_chars = char_len(&self.content);
        self.selection = Selection::caret(start + char_len(text));

        if let Some(before) = before {
            self.record_edit(before);
        }
    }

    fn set_position(&mut self, pos: usize) {
        self.selection = Selection::caret(pos.min(self.len_chars));
    }

    fn set_selection(&mut self, anchor: usize, cursor: usize) {
        self.selection = Selection::new(anchor.min(self.len_chars), cursor.min(self.len_chars));
    }

    fn line_start(&self, line: usize) -> Option<usize> {
        line_starts(&self.content).get(line).copied()
    }

    fn line_number(&self, pos: usize) -> usize {
        line_of(&self.content, pos)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.content.chars().nth(pos)
    }

    fn begin_edit_block(&mut self) {
        if self.edit_depth == 0 {
            self.block_start = Some(self.snapshot());
        }
        self.edit_depth += 1;
    }

    fn end_edit_block(&mut self) {
        if self.edit_depth == 0 {
            debug!("end_edit_block called without an open block");
            return;
        }
        self.edit_depth -= 1;
        if self.edit_depth == 0 {
            if let Some(before) = self.block_start.take() {
                self.record_edit(before);
            }
        }
    }

    fn set_line_wrap(&mut self, wrap: bool) {
        self.line_wrap = wrap;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_caret_at_start() {
        let buffer = TextBuffer::new("Hello");
        assert_eq!(buffer.selection(), Selection::caret(0));
        assert_eq!(buffer.len_chars(), 5);
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut buffer = TextBuffer::new("Hello world").with_cursor(5);
        buffer.insert_text(",");
        assert_eq!(buffer.text(), "Hello, world");
        assert_eq!(buffer.position(), 6);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buffer = TextBuffer::new("Hello world").with_selection(6, 11);
        assert_eq!(buffer.selected_text(), "world");
        buffer.insert_text("there");
        assert_eq!(buffer.text(), "Hello there");
        assert!(!buffer.has_selection());
        assert_eq!(buffer.position(), 11);
    }

    #[test]
    fn test_backwards_selection() {
        let buffer = TextBuffer::new("Hello world").with_selection(11, 6);
        assert_eq!(buffer.selected_text(), "world");
        assert_eq!(buffer.position(), 6);
    }

    #[test]
    fn test_positions_are_clamped() {
        let mut buffer = TextBuffer::new("abc");
        buffer.set_position(50);
        assert_eq!(buffer.position(), 3);
        buffer.set_selection(10, 1);
        assert_eq!(buffer.selection(), Selection::new(3, 1));
    }

    #[test]
    fn test_multibyte_offsets_are_characters() {
        let mut buffer = TextBuffer::new("Hei på deg").with_selection(4, 6);
        assert_eq!(buffer.selected_text(), "på");
        buffer.insert_text("x");
        assert_eq!(buffer.text(), "Hei x deg");
        assert_eq!(buffer.char_at(4), Some('x'));
    }

    #[test]
    fn test_line_queries() {
        let buffer = TextBuffer::new("one\ntwo\n");
        assert_eq!(buffer.line_start(0), Some(0));
        assert_eq!(buffer.line_start(1), Some(4));
        assert_eq!(buffer.line_start(2), Some(8));
        assert_eq!(buffer.line_start(3), None);
        assert_eq!(buffer.line_number(5), 1);
        assert_eq!(buffer.char_at(8), None);
    }

    #[test]
    fn test_each_insert_outside_block_is_an_undo_step() {
        let mut buffer = TextBuffer::new("");
        buffer.insert_text("a");
        buffer.insert_text("b");
        assert_eq!(buffer.undo_count(), 2);
        assert!(buffer.undo());
        assert_eq!(buffer.text(), "a");
    }

    #[test]
    fn test_edit_block_coalesces_into_one_step() {
        let mut buffer = TextBuffer::new("text");
        buffer.begin_edit_block();
        buffer.insert_text("[");
        buffer.set_position(5);
        buffer.insert_text("]()");
        buffer.end_edit_block();

        assert_eq!(buffer.text(), "[text]()");
        assert_eq!(buffer.undo_count(), 1);
        assert!(buffer.undo());
        assert_eq!(buffer.text(), "text");
        assert_eq!(buffer.position(), 0);
    }

    #[test]
    fn test_nested_edit_blocks() {
        let mut buffer = TextBuffer::new("");
        buffer.begin_edit_block();
        buffer.insert_text("a");
        buffer.begin_edit_block();
        buffer.insert_text("b");
        buffer.end_edit_block();
        assert_eq!(buffer.undo_count(), 0);
        buffer.end_edit_block();
        assert_eq!(buffer.undo_count(), 1);
    }

    #[test]
    fn test_empty_edit_block_records_nothing() {
        let mut buffer = TextBuffer::new("abc");
        buffer.begin_edit_block();
        buffer.set_position(2);
        buffer.end_edit_block();
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_unbalanced_end_is_ignored() {
        let mut buffer = TextBuffer::new("abc");
        buffer.end_edit_block();
        assert_eq!(buffer.edit_depth(), 0);
    }

    #[test]
    fn test_redo_restores_edit_and_selection() {
        let mut buffer = TextBuffer::new("ab").with_cursor(1);
        buffer.insert_text("x");
        assert!(buffer.undo());
        assert!(buffer.can_redo());
        assert!(buffer.redo());
        assert_eq!(buffer.text(), "axb");
        assert_eq!(buffer.position(), 2);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut buffer = TextBuffer::new("");
        buffer.insert_text("a");
        buffer.undo();
        buffer.insert_text("b");
        assert!(!buffer.can_redo());
    }

    #[test]
    fn test_undo_history_is_bounded() {
        let mut buffer = TextBuffer::new("");
        for _ in 0..DEFAULT_MAX_UNDO + 10 {
            buffer.insert_text("x");
        }
        assert_eq!(buffer.undo_count(), DEFAULT_MAX_UNDO);
    }

    #[test]
    fn test_line_wrap_flag() {
        let mut buffer = TextBuffer::new("");
        assert!(!buffer.line_wrap());
        buffer.set_line_wrap(true);
        assert!(buffer.line_wrap());
    }
}
