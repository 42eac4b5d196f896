//! A forward-only cursor that assigns styles to contiguous byte runs.
//!
//! [`StyleContext`] walks one byte at a time over `[start, start + length)` and tracks the
//! current, previous and next byte, line boundaries, and the style of the token in progress.
//! A token's style is committed when the state changes ([`StyleContext::set_state`]) or the
//! scan completes ([`StyleContext::complete`]).

use crate::accessor::Accessor;
use crate::char_class::is_space_char;
use crate::style::LexStyle;

/// Longest token prefix retained by [`StyleContext::current_token`].
pub const MAX_TOKEN_LEN: usize = 127;

/// Bounded copy of the token in progress.
#[derive(Clone, Copy)]
pub struct TokenText {
    buf: [u8; MAX_TOKEN_LEN + 1],
    len: usize,
}

impl TokenText {
    fn new() -> Self {
        Self {
            buf: [0; MAX_TOKEN_LEN + 1],
            len: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        if self.len < MAX_TOKEN_LEN {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    /// The retained bytes (truncated at [`MAX_TOKEN_LEN`]).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of retained bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when nothing was retained.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exact comparison with `word`.
    pub fn is(&self, word: &str) -> bool {
        self.as_bytes() == word.as_bytes()
    }

    /// Whether the token equals any of `words`.
    pub fn is_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.is(w))
    }
}

impl std::fmt::Debug for TokenText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Style-assigning cursor over a host document.
pub struct StyleContext<'a, A: Accessor + ?Sized, S: LexStyle> {
    styler: &'a mut A,
    end_pos: usize,
    style_start: usize,
    current_pos: usize,
    current_line: usize,
    line_start_next: usize,
    at_line_start: bool,
    at_line_end: bool,
    state: S,
    ch_prev: u8,
    ch: u8,
    ch_next: u8,
}

impl<'a, A: Accessor + ?Sized, S: LexStyle> StyleContext<'a, A, S> {
    /// Start a scan at `start` covering `length` bytes, in state `init_style`.
    ///
    /// `start` is expected to be a line start; `length` is clamped to the document.
    pub fn new(start: usize, length: usize, init_style: u8, styler: &'a mut A) -> Self {
        let doc_len = styler.len();
        let start = start.min(doc_len);
        let end_pos = start.saturating_add(length).min(doc_len);
        let current_line = styler.line_of(start);
        let line_start_next = styler.line_start(current_line + 1);
        let at_line_start = styler.line_start(current_line) == start;
        let ch_prev = if start > 0 { styler.byte_at(start - 1) } else { 0 };
        let ch = styler.byte_at(start);
        let ch_next = styler.byte_at(start + 1);

        let mut sc = Self {
            styler,
            end_pos,
            style_start: start,
            current_pos: start,
            current_line,
            line_start_next,
            at_line_start,
            at_line_end: false,
            state: S::from_raw_or_default(init_style),
            ch_prev,
            ch,
            ch_next,
        };
        sc.update_line_end();
        sc
    }

    fn update_line_end(&mut self) {
        self.at_line_end = self.current_pos + 1 >= self.line_start_next;
    }

    /// Whether the cursor is still inside the scan range.
    #[inline]
    pub fn more(&self) -> bool {
        self.current_pos < self.end_pos
    }

    /// Advance one byte.
    pub fn forward(&mut self) {
        if self.current_pos < self.end_pos {
            self.at_line_start = self.at_line_end;
            if self.at_line_start {
                self.current_line += 1;
                self.line_start_next = self.styler.line_start(self.current_line + 1);
            }
            self.ch_prev = self.ch;
            self.current_pos += 1;
            self.ch = self.ch_next;
            self.ch_next = self.styler.byte_at(self.current_pos + 1);
            self.update_line_end();
        } else {
            self.at_line_start = false;
            self.ch_prev = b' ';
            self.ch = b' ';
            self.ch_next = b' ';
            self.at_line_end = true;
        }
    }

    /// Advance `n` bytes.
    pub fn forward_by(&mut self, n: usize) {
        for _ in 0..n {
            self.forward();
        }
    }

    /// Commit the token in progress with the current state, then switch to `state`.
    pub fn set_state(&mut self, state: S) {
        if self.current_pos > self.style_start {
            self.styler
                .set_style_range(self.style_start, self.current_pos, self.state.to_raw());
        }
        self.style_start = self.current_pos;
        self.state = state;
    }

    /// Retag the token in progress without committing it.
    #[inline]
    pub fn change_state(&mut self, state: S) {
        self.state = state;
    }

    /// [`forward`](Self::forward) followed by [`set_state`](Self::set_state).
    pub fn forward_set_state(&mut self, state: S) {
        self.forward();
        self.set_state(state);
    }

    /// Step back one byte within the current line.
    pub fn rewind(&mut self) {
        if self.current_pos <= self.style_start {
            return;
        }
        self.current_pos -= 1;
        self.ch_next = self.ch;
        self.ch = self.ch_prev;
        self.ch_prev = if self.current_pos > 0 {
            self.styler.byte_at(self.current_pos - 1)
        } else {
            0
        };
        self.at_line_start = self.styler.line_start(self.current_line) == self.current_pos;
        self.update_line_end();
    }

    /// Commit the final token.
    pub fn complete(&mut self) {
        if self.current_pos > self.style_start {
            self.styler
                .set_style_range(self.style_start, self.current_pos, self.state.to_raw());
        }
        self.style_start = self.current_pos;
    }

    /// Current state (style of the token in progress).
    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    /// The byte under the cursor.
    #[inline]
    pub fn ch(&self) -> u8 {
        self.ch
    }

    /// The byte after the cursor.
    #[inline]
    pub fn ch_next(&self) -> u8 {
        self.ch_next
    }

    /// The byte before the cursor.
    #[inline]
    pub fn ch_prev(&self) -> u8 {
        self.ch_prev
    }

    /// Cursor position.
    #[inline]
    pub fn current_pos(&self) -> usize {
        self.current_pos
    }

    /// Line of the cursor.
    #[inline]
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// Start position of the following line.
    #[inline]
    pub fn line_start_next(&self) -> usize {
        self.line_start_next
    }

    /// True on the first byte of a line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// True on the last byte of a line (its terminator, or the final byte of the document).
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.at_line_end
    }

    /// `ch == a`
    #[inline]
    pub fn matches(&self, a: u8) -> bool {
        self.ch == a
    }

    /// `ch == a && ch_next == b`
    #[inline]
    pub fn matches2(&self, a: u8, b: u8) -> bool {
        self.ch == a && self.ch_next == b
    }

    /// `ch`, `ch_next` and the byte after equal `a`, `b`, `c`.
    #[inline]
    pub fn matches3(&self, a: u8, b: u8, c: u8) -> bool {
        self.ch == a && self.ch_next == b && self.get_relative(2) == c
    }

    /// `ch_next == a` and the byte after equals `b`.
    #[inline]
    pub fn match_next(&self, a: u8, b: u8) -> bool {
        self.ch_next == a && self.get_relative(2) == b
    }

    /// The byte `offset` positions ahead of the cursor.
    #[inline]
    pub fn get_relative(&self, offset: usize) -> u8 {
        self.styler.byte_at(self.current_pos + offset)
    }

    /// The byte at an absolute position.
    #[inline]
    pub fn char_at(&self, pos: usize) -> u8 {
        self.styler.byte_at(pos)
    }

    /// Whether the bytes at the cursor equal `expected`.
    pub fn matches_str(&self, expected: &str) -> bool {
        self.styler.matches_at(self.current_pos, expected.as_bytes())
    }

    /// Length in bytes of the token in progress.
    #[inline]
    pub fn length_current(&self) -> usize {
        self.current_pos - self.style_start
    }

    /// Copy of the token in progress, truncated to [`MAX_TOKEN_LEN`] bytes.
    pub fn current_token(&self) -> TokenText {
        let mut text = TokenText::new();
        let end = self.current_pos.min(self.style_start + MAX_TOKEN_LEN);
        for pos in self.style_start..end {
            text.push(self.styler.byte_at(pos));
        }
        text
    }

    /// First non-whitespace byte at or after the cursor, crossing lines; `0` at end of document.
    pub fn get_doc_next_char(&self, ignore_current: bool) -> u8 {
        let mut pos = self.current_pos + usize::from(ignore_current);
        loop {
            let ch = self.styler.byte_at(pos);
            if !is_space_char(ch) {
                return ch;
            }
            pos += 1;
        }
    }

    /// First non-whitespace byte at or after the cursor on the current line; `0` if none.
    pub fn get_line_next_char(&self, ignore_current: bool) -> u8 {
        let mut pos = self.current_pos + usize::from(ignore_current);
        while pos < self.line_start_next {
            let ch = self.styler.byte_at(pos);
            if !is_space_char(ch) {
                return ch;
            }
            pos += 1;
        }
        0
    }

    /// Persisted state word of `line`.
    #[inline]
    pub fn line_state(&self, line: usize) -> u32 {
        self.styler.line_state(line)
    }

    /// Persist the state word of `line`.
    #[inline]
    pub fn set_line_state(&mut self, line: usize, state: u32) {
        self.styler.set_line_state(line, state);
    }

    /// Shared access to the host.
    pub fn styler(&self) -> &A {
        self.styler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    crate::lex_styles! {
        enum TestStyle {
            Default = 0,
            Word = 1,
        }
    }

    #[test]
    fn test_line_boundaries() {
        let mut doc = Document::new("ab\r\ncd\nx");
        let mut sc: StyleContext<'_, Document, TestStyle> = StyleContext::new(0, 9, 0, &mut doc);
        let mut line_ends = Vec::new();
        let mut line_starts = Vec::new();
        while sc.more() {
            if sc.at_line_start() {
                line_starts.push(sc.current_pos());
            }
            if sc.at_line_end() {
                line_ends.push(sc.current_pos());
            }
            sc.forward();
        }
        assert_eq!(line_starts, vec![0, 4, 7]);
        assert_eq!(line_ends, vec![3, 6, 7]);
    }

    #[test]
    fn test_set_state_commits_previous_token() {
        let mut doc = Document::new("foo bar");
        {
            let mut sc: StyleContext<'_, Document, TestStyle> = StyleContext::new(0, 7, 0, &mut doc);
            sc.set_state(TestStyle::Word);
            sc.forward_by(3);
            assert!(sc.current_token().is("foo"));
            sc.set_state(TestStyle::Default);
            sc.forward();
            sc.set_state(TestStyle::Word);
            sc.forward_by(3);
            sc.complete();
        }
        assert_eq!(doc.styles(), &[1, 1, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn test_lookahead_helpers() {
        let mut doc = Document::new("a   \n  b");
        let sc: StyleContext<'_, Document, TestStyle> = StyleContext::new(0, 8, 0, &mut doc);
        assert_eq!(sc.get_line_next_char(true), 0);
        assert_eq!(sc.get_doc_next_char(true), b'b');
        assert!(sc.matches_str("a "));
    }

    #[test]
    fn test_rewind_restores_neighbours() {
        let mut doc = Document::new("{12}");
        let mut sc: StyleContext<'_, Document, TestStyle> = StyleContext::new(0, 4, 0, &mut doc);
        sc.forward();
        sc.set_state(TestStyle::Word);
        sc.forward_by(2);
        sc.rewind();
        assert_eq!((sc.ch_prev(), sc.ch(), sc.ch_next()), (b'1', b'2', b'}'));
    }
}
