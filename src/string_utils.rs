//! Character Offset Utilities
//!
//! Editor hosts address text by character (Unicode scalar) offsets, while
//! Rust strings are indexed by UTF-8 byte offsets. These helpers map
//! character offsets onto the text and never panic on out-of-range input.
//!
//! # Example
//! ```ignore
//! use crate::string_utils::byte_offset;
//!
//! let text = "Hei på deg"; // 'å' is 2 bytes
//! assert_eq!(byte_offset(text, 6), 7);
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Offset Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a character offset to a byte offset.
///
/// Offsets past the end of the string map to `s.len()`.
pub fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Number of characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Boundaries
// ─────────────────────────────────────────────────────────────────────────────

/// Character offsets at which each line of `s` begins.
///
/// Always contains at least one entry (offset 0), and a trailing newline
/// yields an empty final line.
pub fn line_starts(s: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, c) in s.chars().enumerate() {
        if c == '\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Zero-based line number containing the character at `char_offset`.
pub fn line_of(s: &str, char_offset: usize) -> usize {
    s.chars().take(char_offset).filter(|&c| c == '\n').count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Shortcuts
// ─────────────────────────────────────────────────────────────────────────────

/// Comparison key for a shortcut label: case and whitespace are ignored.
pub fn normalize_shortcut(shortcut: &str) -> String {
    shortcut
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
