//! `java.util.Formatter` conversions inside string literals.

use scilex::char_class::{is_digit, is_hex_digit, is_space_or_tab};
use scilex::{Accessor, StyleContext};

use crate::style::JavaStyle;

const fn is_conversion(ch: u8) -> bool {
    matches!(
        ch,
        b'a' | b'A'
            | b'b'
            | b'B'
            | b'c'
            | b'C'
            | b'd'
            | b'e'
            | b'E'
            | b'f'
            | b'g'
            | b'G'
            | b'h'
            | b'H'
            | b'n'
            | b'o'
            | b's'
            | b'S'
            | b'x'
            | b'X'
    )
}

const fn is_date_time_conversion(ch: u8) -> bool {
    matches!(
        ch,
        // time
        b'H' | b'I' | b'k' | b'l' | b'M' | b'S' | b'L' | b'N' | b'p' | b'z' | b'Z' | b's' | b'Q'
        // date
        | b'B' | b'b' | b'h' | b'A' | b'a' | b'C' | b'Y' | b'y' | b'j' | b'm' | b'd' | b'e'
        // composites
        | b'R' | b'T' | b'r' | b'D' | b'F' | b'c'
    )
}

/// Length of the format specifier starting at the cursor's `%`, or `0` if there is none.
///
/// Recognises `%[argument_index$|<][flags][width][.precision]conversion`, `%t`/`%T` date-time
/// conversions and `%%`. A `%` followed by hex digits inside a URL is percent-encoding, and
/// `5% x` is prose.
pub(crate) fn format_specifier_len<A: Accessor + ?Sized>(
    sc: &StyleContext<'_, A, JavaStyle>,
    inside_url: bool,
) -> usize {
    let next = sc.ch_next();
    if next == b'%' {
        return 2;
    }
    if inside_url && is_hex_digit(next) {
        return 0;
    }
    if is_space_or_tab(next) && is_digit(sc.ch_prev()) {
        return 0;
    }

    let start = sc.current_pos();
    let mut pos = start + 1;
    if next == b'<' {
        pos += 1;
    }
    let mut ch = sc.char_at(pos);
    let bump = |pos: &mut usize| {
        *pos += 1;
        sc.char_at(*pos)
    };

    while is_digit(ch) {
        ch = bump(&mut pos);
    }
    if ch == b'$' && is_digit(next) {
        ch = bump(&mut pos);
    }
    while matches!(ch, b' ' | b'+' | b'-' | b'#' | b'0' | b'(' | b',') {
        ch = bump(&mut pos);
    }
    while is_digit(ch) {
        ch = bump(&mut pos);
    }
    if ch == b'.' {
        ch = bump(&mut pos);
        while is_digit(ch) {
            ch = bump(&mut pos);
        }
    }

    if (ch == b't' || ch == b'T') && is_date_time_conversion(sc.char_at(pos + 1)) {
        return pos - start + 2;
    }
    if is_conversion(ch) {
        return pos - start + 1;
    }
    0
}
