//! Java fold levels.
//!
//! Brackets, block comments and text blocks open levels. Runs of `//` comment lines and runs of
//! `import` lines fold as a group, and a `{` alone on the line after a declaration folds with
//! the declaration.

use scilex::{Accessor, KeywordSets, LevelTracker, LexStyle, brace_on_next_line};

use crate::style::{JavaLineFlags, JavaStyle, is_space_equiv};

fn line_flags<A: Accessor + ?Sized>(styler: &A, line: usize) -> JavaLineFlags {
    JavaLineFlags::from_line_state(styler.line_state(line))
}

/// `+1` when a run of `flag` lines starts, `-1` when one ends.
fn flag_delta(next: JavaLineFlags, prev: JavaLineFlags, flag: JavaLineFlags) -> i32 {
    i32::from(next.contains(flag)) - i32::from(prev.contains(flag))
}

/// Compute fold levels for the lines of `[start, start + length)`.
///
/// `start` must be a line start and the range must already be styled.
pub fn fold_java(
    start: usize,
    length: usize,
    init_style: u8,
    _keywords: &KeywordSets,
    styler: &mut dyn Accessor,
) {
    let operator = JavaStyle::Operator.to_raw();
    let end = (start + length).min(styler.len());
    let mut pos = start;
    let mut style = init_style;

    let first_line = styler.line_of(start);
    let mut levels = LevelTracker::resume(&*styler, first_line);
    let mut fold_prev = JavaLineFlags::empty();
    if first_line > 0 {
        fold_prev = line_flags(&*styler, first_line - 1);
        // comment and import runs never take the brace of the following line
        let grouped = fold_prev.intersects(JavaLineFlags::LINE_COMMENT | JavaLineFlags::IMPORT);
        let brace = brace_on_next_line(&*styler, first_line - 1, operator, is_space_equiv);
        if let Some(brace) = brace.filter(|_| !grouped) {
            // already counted with the previous line
            pos = brace + 1;
            style = operator;
        }
    }

    let mut fold_current = line_flags(&*styler, first_line);
    let mut line_start_next = styler.line_start(first_line + 1).min(end);
    let mut style_next = styler.style_at(pos);
    let mut visible_chars = 0usize;

    while pos < end {
        let style_prev = style;
        style = style_next;
        pos += 1;
        style_next = styler.style_at(pos);

        match JavaStyle::from_raw_or_default(style) {
            JavaStyle::CommentBlock
            | JavaStyle::CommentBlockDoc
            | JavaStyle::TripleString
            | JavaStyle::TripleTemplate => {
                if style != style_prev {
                    levels.open();
                }
                if style != style_next {
                    levels.close();
                }
            }
            JavaStyle::Operator | JavaStyle::Operator2 => match styler.byte_at(pos - 1) {
                b'{' | b'[' | b'(' => levels.open(),
                b'}' | b']' | b')' => levels.close(),
                _ => {}
            },
            _ => {}
        }

        if visible_chars == 0 && !is_space_equiv(style) {
            visible_chars += 1;
        }
        if pos == line_start_next {
            let line = levels.line();
            let fold_next = line_flags(&*styler, line + 1);
            levels.clamp_to_base();
            if fold_current.contains(JavaLineFlags::LINE_COMMENT) {
                levels.adjust(flag_delta(fold_next, fold_prev, JavaLineFlags::LINE_COMMENT));
            } else if fold_current.contains(JavaLineFlags::IMPORT) {
                levels.adjust(flag_delta(fold_next, fold_prev, JavaLineFlags::IMPORT));
            } else if visible_chars > 0 {
                if let Some(brace) = brace_on_next_line(&*styler, line, operator, is_space_equiv) {
                    levels.open();
                    pos = brace + 1;
                    style = operator;
                    style_next = styler.style_at(pos);
                }
            }

            levels.finish_line(&mut *styler);
            line_start_next = styler.line_start(line + 2).min(end);
            fold_prev = fold_current;
            fold_current = fold_next;
            visible_chars = 0;
        }
    }

    // a skipped brace can be the last byte of the range
    if levels.line() < styler.line_count() && styler.line_start(levels.line()) < end {
        levels.clamp_to_base();
        levels.finish_line(&mut *styler);
    }
}
