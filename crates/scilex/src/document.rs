//! In-memory reference host.
//!
//! [`Document`] keeps the text in a [`Rope`] and stores everything a lexer derives (a style per
//! byte, a state word and a fold level per line) next to it. Edits keep the derived arrays
//! aligned with the text and lower the [`Document::styled_end`] watermark so the next lexing
//! pass knows where to restart.

use std::ops::Range;

use ropey::Rope;
use tracing::debug;

use crate::accessor::Accessor;
use crate::error::{Result, ScilexError};
use crate::fold::FoldLevel;

/// Text plus lexer-derived state.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    styles: Vec<u8>,
    line_states: Vec<u32>,
    fold_levels: Vec<FoldLevel>,
    styled_end: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

impl Document {
    /// A document holding `text`, entirely unstyled.
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let lines = rope.len_lines();
        Self {
            styles: vec![0; rope.len_bytes()],
            line_states: vec![0; lines],
            fold_levels: vec![FoldLevel::BASE; lines],
            styled_end: 0,
            rope,
        }
    }

    /// The full text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text of `line` including its terminator.
    pub fn line_text(&self, line: usize) -> String {
        if line >= self.rope.len_lines() {
            return String::new();
        }
        self.rope.line(line).to_string()
    }

    /// Text in a byte range.
    pub fn text_range(&self, range: Range<usize>) -> Result<String> {
        self.check_range(&range)?;
        let start = self.rope.byte_to_char(range.start);
        let end = self.rope.byte_to_char(range.end);
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Style of every byte.
    pub fn styles(&self) -> &[u8] {
        &self.styles
    }

    /// State word of every line.
    pub fn line_states(&self) -> &[u32] {
        &self.line_states
    }

    /// Fold level of every line.
    pub fn fold_levels(&self) -> &[FoldLevel] {
        &self.fold_levels
    }

    /// Everything before this position is styled and up to date.
    pub fn styled_end(&self) -> usize {
        self.styled_end
    }

    /// Move the watermark (clamped to the document).
    pub fn set_styled_end(&mut self, pos: usize) {
        self.styled_end = pos.min(self.rope.len_bytes());
    }

    /// Byte offset to char offset (positions inside a character round down).
    pub fn byte_to_char(&self, pos: usize) -> usize {
        self.rope.byte_to_char(pos.min(self.rope.len_bytes()))
    }

    /// Char offset to byte offset.
    pub fn char_to_byte(&self, pos: usize) -> usize {
        self.rope.char_to_byte(pos.min(self.rope.len_chars()))
    }

    /// Whether `pos` falls between two characters.
    pub fn is_char_boundary(&self, pos: usize) -> bool {
        pos <= self.rope.len_bytes() && self.char_to_byte(self.byte_to_char(pos)) == pos
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        let len = self.rope.len_bytes();
        if range.start > range.end || range.end > len {
            return Err(ScilexError::EditOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for pos in [range.start, range.end] {
            if !self.is_char_boundary(pos) {
                return Err(ScilexError::NotCharBoundary(pos));
            }
        }
        Ok(())
    }

    /// Replace `range` (bytes) with `text`.
    ///
    /// Styles of the replaced bytes are dropped and the inserted bytes start unstyled. Line
    /// states and fold levels of lines after the edit shift with their lines. Returns the
    /// first line whose derived state is stale; [`Document::styled_end`] is lowered to its
    /// start.
    pub fn edit(&mut self, range: Range<usize>, text: &str) -> Result<usize> {
        self.check_range(&range)?;

        let old_lines = self.rope.len_lines();
        let first_line = self.rope.byte_to_line(range.start);
        let removed_breaks = self.rope.byte_to_line(range.end) - first_line;

        let start_char = self.rope.byte_to_char(range.start);
        let end_char = self.rope.byte_to_char(range.end);
        self.rope.remove(start_char..end_char);
        self.rope.insert(start_char, text);

        self.styles
            .splice(range.clone(), std::iter::repeat_n(0, text.len()));

        let new_lines = self.rope.len_lines();
        let added_breaks = (removed_breaks + new_lines).saturating_sub(old_lines);
        let tail = (first_line + 1).min(self.line_states.len());
        let removed_end = (tail + removed_breaks).min(self.line_states.len());
        self.line_states
            .splice(tail..removed_end, std::iter::repeat_n(0, added_breaks));
        self.fold_levels
            .splice(tail..removed_end, std::iter::repeat_n(FoldLevel::BASE, added_breaks));
        self.line_states.resize(new_lines, 0);
        self.fold_levels.resize(new_lines, FoldLevel::BASE);

        let dirty = self.rope.line_to_byte(first_line);
        self.styled_end = self.styled_end.min(dirty);
        debug!(
            start = range.start,
            end = range.end,
            inserted = text.len(),
            first_line,
            lines = new_lines,
            "document edited"
        );
        Ok(first_line)
    }

    /// Insert `text` at `pos`.
    pub fn insert(&mut self, pos: usize, text: &str) -> Result<usize> {
        self.edit(pos..pos, text)
    }

    /// Delete the bytes in `range`.
    pub fn delete(&mut self, range: Range<usize>) -> Result<usize> {
        self.edit(range, "")
    }
}

impl Accessor for Document {
    fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    fn byte_at(&self, pos: usize) -> u8 {
        if pos < self.rope.len_bytes() {
            self.rope.byte(pos)
        } else {
            0
        }
    }

    fn style_at(&self, pos: usize) -> u8 {
        self.styles.get(pos).copied().unwrap_or(0)
    }

    fn set_style_range(&mut self, start: usize, end: usize, style: u8) {
        let end = end.min(self.styles.len());
        if start < end {
            self.styles[start..end].fill(style);
        }
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_of(&self, pos: usize) -> usize {
        self.rope.byte_to_line(pos.min(self.rope.len_bytes()))
    }

    fn line_start(&self, line: usize) -> usize {
        if line < self.rope.len_lines() {
            self.rope.line_to_byte(line)
        } else {
            self.rope.len_bytes()
        }
    }

    fn line_state(&self, line: usize) -> u32 {
        self.line_states.get(line).copied().unwrap_or(0)
    }

    fn set_line_state(&mut self, line: usize, state: u32) {
        if let Some(slot) = self.line_states.get_mut(line) {
            *slot = state;
        }
    }

    fn fold_level(&self, line: usize) -> FoldLevel {
        self.fold_levels.get(line).copied().unwrap_or(FoldLevel::BASE)
    }

    fn set_fold_level(&mut self, line: usize, level: FoldLevel) {
        if let Some(slot) = self.fold_levels.get_mut(line) {
            *slot = level;
        }
    }
}
