//! Markdown Text Decorations
//!
//! Cursor-based edits applied through a [`TextEditor`] host:
//! - **Headings**: insert a `#` marker at the start of a line
//! - **Delimiters**: wrap the selection in a symmetric marker (`**`, `_`, `` ` ``)
//! - **Links/Images**: insert a `[label]()` or `![alt]()` template
//!
//! Each decoration runs inside one edit block, so the host records it as a
//! single undo step, and leaves the cursor where the user types next.
//! Invalid preconditions make a decoration a silent no-op.

use crate::editor::{EditBlock, TextEditor};
use crate::markdown::HeadingLevel;
use log::debug;

/// Closing part shared by link and image templates.
const LINK_SUFFIX: &str = "]()";

// ─────────────────────────────────────────────────────────────────────────────
// Line Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Characters skipped when jumping to the start of a line's content.
///
/// Only ASCII space and tab count; other Unicode spaces are left alone.
#[inline]
pub fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Move the cursor to `line` (zero-based).
///
/// With `column > 0` the cursor lands that many characters into the line
/// (clamped to the end of the document). With `column == 0` it lands on the
/// first character that is not a space or tab.
///
/// Returns `false` and leaves the editor untouched if the line does not exist.
pub fn goto_line<E: TextEditor + ?Sized>(editor: &mut E, line: usize, column: usize) -> bool {
    let Some(line_start) = editor.line_start(line) else {
        debug!("goto_line: line {} does not exist", line);
        return false;
    };

    let pos = if column > 0 {
        (line_start + column).min(editor.len_chars())
    } else {
        let mut pos = line_start;
        while editor.char_at(pos).is_some_and(is_indent_char) {
            pos += 1;
        }
        pos
    };

    editor.set_position(pos);
    editor.ensure_cursor_visible();
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Heading Insertion
// ─────────────────────────────────────────────────────────────────────────────

/// Insert a heading marker at the start of `line`, after any indentation.
///
/// `"Title"` becomes `"# Title"` for [`HeadingLevel::H1`]. The cursor ends
/// right after the inserted `"# "`. Does nothing if `line` does not exist.
pub fn insert_heading_at<E: TextEditor + ?Sized>(editor: &mut E, line: usize, level: HeadingLevel) -> bool {
    let mut block = EditBlock::new(editor);
    if !goto_line(&mut *block, line, 0) {
        return false;
    }
    block.insert_text(&level.marker_with_space());
    debug!("Inserted {:?} marker on line {}", level, line);
    true
}

/// Insert a heading marker on the line containing the cursor.
pub fn insert_heading<E: TextEditor + ?Sized>(editor: &mut E, level: HeadingLevel) -> bool {
    let line = editor.line_number(editor.position());
    insert_heading_at(editor, line, level)
}

// ─────────────────────────────────────────────────────────────────────────────
// Delimiter Wrapping
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap the selection in `delimiter` on both sides.
///
/// - With a selection `S`: the text becomes `D + S + D` and `S` stays
///   selected between the new markers.
/// - Without a selection: `D + D` is inserted and the cursor is placed
///   between the two copies.
pub fn wrap_selection<E: TextEditor + ?Sized>(editor: &mut E, delimiter: &str) {
    if delimiter.is_empty() {
        return;
    }
    let marker_len = delimiter.chars().count();
    let mut block = EditBlock::new(editor);

    let selection = block.selection();
    if selection.is_empty() {
        let pos = selection.cursor;
        block.insert_text(&format!("{delimiter}{delimiter}"));
        block.set_position(pos + marker_len);
    } else {
        let (start, end) = (selection.start(), selection.end());
        let text = block.selected_text();
        block.insert_text(&format!("{delimiter}{text}{delimiter}"));
        block.set_selection(start + marker_len, end + marker_len);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Link / Image Templates
// ─────────────────────────────────────────────────────────────────────────────

/// Insert a `prefix...]()` template around the selection or at the cursor.
///
/// - With a selection: the selection becomes the label and the cursor lands
///   between the parentheses, ready for the URL.
/// - Without a selection: the empty template is inserted and the cursor
///   lands right after `prefix`, ready for the label.
fn insert_link_template<E: TextEditor + ?Sized>(editor: &mut E, prefix: &str) {
    let prefix_len = prefix.chars().count();
    let mut block = EditBlock::new(editor);

    let selection = block.selection();
    if selection.is_empty() {
        let pos = selection.cursor;
        block.insert_text(&format!("{prefix}{LINK_SUFFIX}"));
        block.set_position(pos + prefix_len);
    } else {
        let (start, end) = (selection.start(), selection.end());
        block.set_position(start);
        block.insert_text(prefix);
        // The label shifted right by the prefix
        let label_end = end + prefix_len;
        block.set_position(label_end);
        block.insert_text(LINK_SUFFIX);
        // "]" then "(" precede the URL slot
        block.set_position(label_end + 2);
    }
}

/// Insert a markdown link, `[label]()`.
pub fn insert_link<E: TextEditor + ?Sized>(editor: &mut E) {
    insert_link_template(editor, "[");
}

/// Insert a markdown image, `![alt]()`.
pub fn insert_image<E: TextEditor + ?Sized>(editor: &mut E) {
    insert_link_template(editor, "![");
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
