//! The host interface consumed by lexers and folders.

use crate::fold::FoldLevel;

/// Random access to a host document and its derived per-byte / per-line state.
///
/// Positions are byte offsets into UTF-8 text; lines are 0-based and end after `\n`, after a
/// lone `\r`, or after `\r\n`.
///
/// Lexers write styles, line states and fold levels only through this trait, so all persisted
/// state lives with the host. A single writer per range is assumed: invocations on one document
/// must not overlap.
pub trait Accessor {
    /// Document length in bytes.
    fn len(&self) -> usize;

    /// Returns `true` for an empty document.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `pos`, or `0` past the end of the document.
    fn byte_at(&self, pos: usize) -> u8;

    /// The style persisted for the byte at `pos` (`0` past the end).
    fn style_at(&self, pos: usize) -> u8;

    /// Assign `style` to every byte in `[start, end)`.
    fn set_style_range(&mut self, start: usize, end: usize, style: u8);

    /// Number of lines (at least 1).
    fn line_count(&self) -> usize;

    /// The line containing `pos` (positions past the end map to the last line).
    fn line_of(&self, pos: usize) -> usize;

    /// Start position of `line`; the document length for lines past the end.
    fn line_start(&self, line: usize) -> usize;

    /// The state word persisted for `line` (`0` if never written).
    fn line_state(&self, line: usize) -> u32;

    /// Persist the state word for `line`.
    fn set_line_state(&mut self, line: usize, state: u32);

    /// The fold level persisted for `line`.
    fn fold_level(&self, line: usize) -> FoldLevel;

    /// Persist the fold level for `line`.
    fn set_fold_level(&mut self, line: usize, level: FoldLevel);

    /// Whether the bytes starting at `pos` equal `expected`.
    fn matches_at(&self, pos: usize, expected: &[u8]) -> bool {
        expected
            .iter()
            .enumerate()
            .all(|(i, &b)| self.byte_at(pos + i) == b)
    }
}
