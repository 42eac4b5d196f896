//! Byte classification shared by all grammars.
//!
//! Lexers run over UTF-8 bytes. Every byte `>= 0x80` belongs to a multi-byte character and is
//! treated as an identifier character by the `_ex` predicates.

/// Space, tab, and the ASCII line/page breaks (`0x09..=0x0d`).
#[inline]
pub const fn is_space_char(ch: u8) -> bool {
    ch == b' ' || (ch >= 0x09 && ch <= 0x0d)
}

/// Space or tab.
#[inline]
pub const fn is_space_or_tab(ch: u8) -> bool {
    ch == b' ' || ch == b'\t'
}

/// `\r` or `\n`.
#[inline]
pub const fn is_eol_char(ch: u8) -> bool {
    ch == b'\r' || ch == b'\n'
}

/// `[0-9]`
#[inline]
pub const fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// `[0-7]`
#[inline]
pub const fn is_octal_digit(ch: u8) -> bool {
    ch >= b'0' && ch <= b'7'
}

/// `[0-9A-Fa-f]`
#[inline]
pub const fn is_hex_digit(ch: u8) -> bool {
    ch.is_ascii_hexdigit()
}

/// Whether `ch` is a digit of the given radix (hex when `hex` is set, octal otherwise).
#[inline]
pub const fn is_octal_or_hex(ch: u8, hex: bool) -> bool {
    if hex { is_hex_digit(ch) } else { is_octal_digit(ch) }
}

/// `[A-Za-z]`
#[inline]
pub const fn is_alpha(ch: u8) -> bool {
    ch.is_ascii_alphabetic()
}

/// `[a-z]`
#[inline]
pub const fn is_lower(ch: u8) -> bool {
    ch.is_ascii_lowercase()
}

/// `[A-Z]`
#[inline]
pub const fn is_upper(ch: u8) -> bool {
    ch.is_ascii_uppercase()
}

/// `[A-Za-z0-9_]`
#[inline]
pub const fn is_identifier_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// `[A-Za-z_]`
#[inline]
pub const fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Identifier character, or any byte of a multi-byte UTF-8 sequence.
#[inline]
pub const fn is_identifier_char_ex(ch: u8) -> bool {
    is_identifier_char(ch) || ch >= 0x80
}

/// Identifier start, or any byte of a multi-byte UTF-8 sequence.
#[inline]
pub const fn is_identifier_start_ex(ch: u8) -> bool {
    is_identifier_start(ch) || ch >= 0x80
}

/// Printable, non-space ASCII.
#[inline]
pub const fn is_graphic(ch: u8) -> bool {
    ch > 0x20 && ch < 0x7f
}

/// `ch` (with `next` as lookahead) starts a numeric literal: a digit, or `.` before a digit.
#[inline]
pub const fn is_number_start(ch: u8, next: u8) -> bool {
    is_digit(ch) || (ch == b'.' && is_digit(next))
}

/// Whether `ch` continues a numeric literal, given its neighbours.
///
/// Radix prefixes (`0x`, `0b`), digit separators (`_`), suffixes and hex digits are all
/// identifier characters; `.` continues unless it is part of `..`; a sign continues only right
/// after an exponent marker (`e`, `E`, `p`, `P`).
#[inline]
pub const fn is_decimal_number(prev: u8, ch: u8, next: u8) -> bool {
    is_identifier_char(ch)
        || (ch == b'.' && prev != b'.' && next != b'.')
        || ((ch == b'+' || ch == b'-') && matches!(prev, b'e' | b'E' | b'p' | b'P'))
}

/// [`is_decimal_number`] that also accepts non-ASCII bytes.
#[inline]
pub const fn is_decimal_number_ex(prev: u8, ch: u8, next: u8) -> bool {
    ch >= 0x80 || is_decimal_number(prev, ch, next)
}

/// Characters after which `identifier:` declares a jump label.
#[inline]
pub const fn is_jump_label_prev_char(ch: u8) -> bool {
    matches!(ch, b';' | b'{' | b'}')
}

/// Characters allowed right before a documentation tag (`@param`, ...).
#[inline]
pub const fn is_comment_tag_prev(ch: u8) -> bool {
    ch <= b' ' || ch == b'*' || ch == b'/'
}

/// Characters that terminate a URL embedded in a string literal.
#[inline]
pub const fn is_invalid_url_char(ch: u8) -> bool {
    ch <= b' ' || matches!(ch, b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}')
}
