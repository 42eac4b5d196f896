//! Task markers (`TODO`, `FIXME:` ...) inside comments.

use crate::accessor::Accessor;
use crate::char_class::{is_digit, is_space_char, is_upper};
use crate::style::LexStyle;
use crate::style_context::StyleContext;

/// Marker words recognised without a trailing `:` or `(`.
const KNOWN_MARKERS: &[&[u8]] = &[b"TODO", b"FIXME", b"XXX", b"HACK", b"NOTE", b"BUG", b"TBD"];

const MAX_MARKER_LEN: usize = 32;

#[inline]
const fn is_task_marker_prev(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'/' | b'*' | b'-' | b'!')
}

/// Style a task marker starting at the cursor, if there is one.
///
/// A marker is an upper-case word (`[A-Z][A-Z0-9_]*`) that either is at least two characters
/// long and directly followed by `:` or `(`, or is one of the well known markers followed by
/// whitespace or the end of the document. It must be the first visible text of the comment
/// line, or appear within three characters of the comment opener after a space or comment
/// punctuation.
///
/// On success the marker is styled with `marker_style`, the cursor moves past it, the comment
/// style resumes, and `visible_chars` grows by the marker length.
pub fn highlight_task_marker<A: Accessor + ?Sized, S: LexStyle>(
    sc: &mut StyleContext<'_, A, S>,
    visible_chars: &mut usize,
    visible_chars_before: usize,
    marker_style: S,
) -> bool {
    if !is_upper(sc.ch()) {
        return false;
    }
    let placed = *visible_chars == 0
        || (*visible_chars <= visible_chars_before + 3 && is_task_marker_prev(sc.ch_prev()));
    if !placed {
        return false;
    }

    let start = sc.current_pos();
    let mut word = [0u8; MAX_MARKER_LEN];
    let mut len = 0;
    loop {
        let ch = sc.char_at(start + len);
        if !(is_upper(ch) || is_digit(ch) || ch == b'_') {
            break;
        }
        if len == MAX_MARKER_LEN {
            return false;
        }
        word[len] = ch;
        len += 1;
    }

    let after = sc.char_at(start + len);
    let accepted = if after == b':' || after == b'(' {
        len >= 2
    } else if is_space_char(after) || after == 0 {
        KNOWN_MARKERS.contains(&&word[..len])
    } else {
        false
    };
    if !accepted {
        return false;
    }

    let outer = sc.state();
    sc.set_state(marker_style);
    sc.forward_by(len);
    sc.set_state(outer);
    *visible_chars += len;
    true
}
