//! Escape sequence tracking inside string-like literals.

use crate::char_class::is_octal_or_hex;
use crate::style::LexStyle;

/// Progress through an escape sequence such as `\n`, `\x41` or `\u00e9`.
///
/// A grammar calls [`EscapeSequence::begin`] when it meets the backslash, switches to its escape
/// style, and then feeds each following byte to [`EscapeSequence::at_escape_end`] until it
/// reports the end; it then returns to [`EscapeSequence::outer`].
#[derive(Debug, Clone, Copy)]
pub struct EscapeSequence<S: LexStyle> {
    outer: S,
    digits_left: u8,
    hex: bool,
}

impl<S: LexStyle> Default for EscapeSequence<S> {
    fn default() -> Self {
        Self {
            outer: S::DEFAULT,
            digits_left: 0,
            hex: false,
        }
    }
}

impl<S: LexStyle> EscapeSequence<S> {
    /// Start a sequence inside `outer`.
    ///
    /// `digits_left` counts the backslash's successor as the first digit, so a single-character
    /// escape uses `1` and a `\u` escape uses `5`.
    pub fn begin(&mut self, outer: S, digits_left: u8, hex: bool) {
        self.outer = outer;
        self.digits_left = digits_left;
        self.hex = hex;
    }

    /// The literal style to return to.
    #[inline]
    pub fn outer(&self) -> S {
        self.outer
    }

    /// Consume the byte under the cursor; `true` once the sequence has ended before `ch`.
    pub fn at_escape_end(&mut self, ch: u8) -> bool {
        self.digits_left = self.digits_left.saturating_sub(1);
        self.digits_left == 0 || !is_octal_or_hex(ch, self.hex)
    }
}
