//! Host editor interface
//!
//! The markdown decorations never own a document. They drive whatever text
//! widget the host application provides through the [`TextEditor`] trait,
//! which exposes the small set of cursor, selection and insertion primitives
//! the decorations need. All offsets are character offsets.

use std::ops::{Deref, DerefMut};

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// A selection expressed as a fixed anchor and a moving cursor.
///
/// The anchor may be after the cursor when the user selected backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection started
    pub anchor: usize,
    /// Where the cursor currently is
    pub cursor: usize,
}

impl Selection {
    /// Create a selection from an anchor and a cursor position.
    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    /// A collapsed selection (plain caret) at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Lower bound of the selected range.
    pub fn start(&self) -> usize {
        self.anchor.min(self.cursor)
    }

    /// Upper bound of the selected range.
    pub fn end(&self) -> usize {
        self.anchor.max(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Host Editor Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Text editing primitives consumed from the host editor widget.
pub trait TextEditor {
    /// Total number of characters in the document.
    fn len_chars(&self) -> usize;

    /// Current cursor/selection state.
    fn selection(&self) -> Selection;

    /// Text covered by the current selection (empty if none).
    fn selected_text(&self) -> String;

    /// Insert `text` at the cursor, replacing the selection if there is one.
    ///
    /// The cursor ends up right after the inserted text with no selection.
    fn insert_text(&mut self, text: &str);

    /// Move the cursor to `pos`, clearing any selection.
    ///
    /// Positions past the end of the document are clamped.
    fn set_position(&mut self, pos: usize);

    /// Select from `anchor` to `cursor`.
    fn set_selection(&mut self, anchor: usize, cursor: usize);

    /// Character offset at which `line` (zero-based) begins, or `None` if the
    /// document has no such line.
    fn line_start(&self, line: usize) -> Option<usize>;

    /// Zero-based line number containing `pos`.
    fn line_number(&self, pos: usize) -> usize;

    /// Character at `pos`, or `None` past the end of the document.
    fn char_at(&self, pos: usize) -> Option<char>;

    /// Open an edit block. Every edit until the matching
    /// [`end_edit_block`](Self::end_edit_block) is a single undo step.
    fn begin_edit_block(&mut self);

    /// Close the edit block opened by [`begin_edit_block`](Self::begin_edit_block).
    fn end_edit_block(&mut self);

    /// Scroll the view so the cursor is visible.
    fn ensure_cursor_visible(&mut self) {}

    /// Wrap long lines at the widget width instead of scrolling horizontally.
    fn set_line_wrap(&mut self, _wrap: bool) {}

    // ─────────────────────────────────────────────────────────────────────────
    // Provided helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Current cursor position.
    fn position(&self) -> usize {
        self.selection().cursor
    }

    /// Whether a non-empty selection is active.
    fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Open an edit block that is closed when the returned guard drops.
    fn edit_block(&mut self) -> EditBlock<'_, Self>
    where
        Self: Sized,
    {
        EditBlock::new(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit Block Guard
// ─────────────────────────────────────────────────────────────────────────────

/// Scoped edit transaction.
///
/// Calls `begin_edit_block` on creation and `end_edit_block` on drop, so the
/// block is closed on every exit path including early returns.
pub struct EditBlock<'a, E: TextEditor + ?Sized> {
    editor: &'a mut E,
}

impl<'a, E: TextEditor + ?Sized> EditBlock<'a, E> {
    pub fn new(editor: &'a mut E) -> Self {
        editor.begin_edit_block();
        Self { editor }
    }
}

impl<E: TextEditor + ?Sized> Deref for EditBlock<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.editor
    }
}

impl<E: TextEditor + ?Sized> DerefMut for EditBlock<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.editor
    }
}

impl<E: TextEditor + ?Sized> Drop for EditBlock<'_, E> {
    fn drop(&mut self) {
        self.editor.end_edit_block();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
