//! Text buffers backing flat surfaces
//!
//! `TextBuffer` abstracts over a `String` (single-line inputs) and a
//! `ropey::Rope` (multi-line text areas). All offsets are character indices,
//! never bytes, so a caret offset reported by the surface can be used directly.

use ropey::Rope;
use std::ops::Range;

/// Character-indexed text storage for a flat surface
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Convert a character offset to (line, column)
    fn offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Full content as a String
    fn content(&self) -> String;

    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace a range with new text, returning the offset just after it
    fn splice(&mut self, range: Range<usize>, text: &str) -> usize {
        let start = range.start.min(self.len_chars());
        let end = range.end.clamp(start, self.len_chars());
        self.remove(start..end);
        self.insert(start, text);
        start + text.chars().count()
    }
}

// =============================================================================
// StringBuffer - for single-line inputs
// =============================================================================

/// TextBuffer implementation wrapping String. Used for single-line inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        (0, offset.min(self.len_chars()))
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end).max(start_byte);
        self.text.replace_range(start_byte..end_byte, "");
    }
}

// =============================================================================
// RopeBuffer - for multi-line text areas
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        (line, clamped - line_start)
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}
