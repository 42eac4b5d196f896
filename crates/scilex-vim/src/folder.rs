//! Vim fold levels.
//!
//! Block keywords (`if`, `while`, `for`, `try`, `def`, `fun...`) open a level and `end...`
//! closes it. Runs of comment lines and continuation lines fold as a group.

use scilex::{Accessor, KeywordSets, LevelTracker, LexStyle};

use crate::style::{VimLineFlags, VimStyle};

/// Long enough for `while`; longer words are compared by prefix.
const MAX_FOLD_WORD_LEN: usize = 7;

fn line_flags<A: Accessor + ?Sized>(styler: &A, line: usize) -> VimLineFlags {
    VimLineFlags::from_line_state(styler.line_state(line))
}

fn has(flags: VimLineFlags, flag: VimLineFlags) -> i32 {
    i32::from(flags.contains(flag))
}

fn fold_word_delta(word: &[u8]) -> i32 {
    match word {
        b"if" | b"while" | b"for" | b"try" | b"def" => 1,
        _ if word.starts_with(b"fun") => 1,
        _ if word.starts_with(b"end") => -1,
        _ => 0,
    }
}

/// Compute fold levels for the lines of `[start, start + length)`.
pub fn fold_vim(
    start: usize,
    length: usize,
    _init_style: u8,
    _keywords: &KeywordSets,
    styler: &mut dyn Accessor,
) {
    let word_style = VimStyle::Word.to_raw();
    let end = (start + length).min(styler.len());
    let mut pos = start;

    let first_line = styler.line_of(start);
    let mut levels = LevelTracker::resume(&*styler, first_line);
    let mut fold_prev = if first_line > 0 {
        line_flags(&*styler, first_line - 1)
    } else {
        VimLineFlags::empty()
    };
    let mut fold_current = line_flags(&*styler, first_line);
    let mut line_start_next = styler.line_start(first_line + 1).min(end);

    let mut word = [0u8; MAX_FOLD_WORD_LEN];
    let mut word_len = 0;
    let mut style_next = styler.style_at(pos);

    while pos < end {
        let style = style_next;
        pos += 1;
        style_next = styler.style_at(pos);

        if style == word_style {
            if word_len < MAX_FOLD_WORD_LEN {
                word[word_len] = styler.byte_at(pos - 1);
                word_len += 1;
            }
            if style_next != word_style {
                levels.adjust(fold_word_delta(&word[..word_len]));
                word_len = 0;
            }
        }

        if pos == line_start_next {
            let line = levels.line();
            let fold_next = line_flags(&*styler, line + 1);
            if fold_current.contains(VimLineFlags::LINE_COMMENT) {
                levels.adjust(
                    has(fold_next, VimLineFlags::LINE_COMMENT)
                        - has(fold_prev, VimLineFlags::LINE_COMMENT),
                );
            }
            levels.adjust(
                has(fold_next, VimLineFlags::LINE_CONTINUATION)
                    - has(fold_current, VimLineFlags::LINE_CONTINUATION),
            );
            levels.clamp_to_base();

            levels.finish_line(&mut *styler);
            line_start_next = styler.line_start(line + 2).min(end);
            fold_prev = fold_current;
            fold_current = fold_next;
        }
    }
}
