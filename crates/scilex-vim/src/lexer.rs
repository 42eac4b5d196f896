//! The Vim script tokenizer.

use scilex::char_class::{
    is_decimal_number, is_eol_char, is_graphic, is_identifier_char, is_identifier_start,
    is_lower, is_number_start, is_octal_digit, is_space_char,
};
use scilex::{Accessor, EscapeSequence, KeywordCategory, KeywordSets, StyleContext};

use crate::style::{VimLineFlags, VimStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordType {
    None,
    /// `export def`
    Export,
}

/// Digits consumed by the escape starting with `ch_next`, and whether they are hex.
///
/// See <https://vimhelp.org/eval.txt.html#string>.
fn escape_digits(ch_next: u8) -> Option<(u8, bool)> {
    match ch_next {
        b'x' | b'X' => Some((3, true)),
        b'u' => Some((5, true)),
        b'U' => Some((9, true)),
        ch if is_octal_digit(ch) => Some((3, false)),
        b'\\' | b'"' | b'b' | b'e' | b'f' | b'n' | b'r' | b't' => Some((1, true)),
        _ => None,
    }
}

/// Style `[start, start + length)` of a Vim script.
pub fn lex_vim(
    start: usize,
    length: usize,
    init_style: u8,
    keywords: &KeywordSets,
    styler: &mut dyn Accessor,
) {
    let mut line_flags = VimLineFlags::empty();
    let mut line_visible_chars = 0usize;
    // visible characters since the start of the current command (reset by `|`)
    let mut logical_visible_chars = 0usize;
    let mut command_separator = false;
    let mut kw_type = KeywordType::None;
    let mut prefer_regex = false;
    let mut inside_regex_range = false;
    let mut escape = EscapeSequence::<VimStyle>::default();

    let mut sc = StyleContext::<_, VimStyle>::new(start, length, init_style, styler);
    if sc.current_line() > 0 {
        line_flags = VimLineFlags::from_line_state(sc.line_state(sc.current_line() - 1))
            & VimLineFlags::CARRIED;
    } else if start == 0 && sc.matches2(b'#', b'!') {
        // shebang
        sc.set_state(VimStyle::CommentLine);
        sc.forward();
        line_flags = VimLineFlags::LINE_COMMENT;
    }

    while sc.more() {
        match sc.state() {
            VimStyle::Operator => sc.set_state(VimStyle::Default),

            VimStyle::Number => {
                if !is_decimal_number(sc.ch_prev(), sc.ch(), sc.ch_next()) {
                    sc.set_state(VimStyle::Default);
                }
            }

            VimStyle::Identifier => {
                if !is_identifier_char(sc.ch()) {
                    let kw_prev = kw_type;
                    kw_type = KeywordType::None;
                    let s = sc.current_token();
                    let len = sc.length_current();
                    if keywords.contains(KeywordCategory::Keyword, s.as_bytes()) {
                        if !line_flags.contains(VimLineFlags::AUTO_COMMAND)
                            && logical_visible_chars == len
                        {
                            sc.change_state(VimStyle::Word);
                            if s.is_any(&["au", "autocmd"]) {
                                line_flags |= VimLineFlags::AUTO_COMMAND;
                            } else if s.is("export") {
                                kw_type = KeywordType::Export;
                            }
                        } else if kw_prev == KeywordType::Export && s.is("def") {
                            sc.change_state(VimStyle::Word);
                        } else {
                            sc.change_state(VimStyle::WordDemoted);
                        }
                    } else if keywords.contains(KeywordCategory::Command, s.as_bytes()) {
                        sc.change_state(VimStyle::Commands);
                        if line_visible_chars == len {
                            if s.is_any(&["syn", "syntax"]) {
                                // syntax match, syntax region
                                let ch_next = sc.get_line_next_char(false);
                                prefer_regex = ch_next == b'm' || ch_next == b'r';
                            } else if s.is("vim9script") {
                                line_flags |= VimLineFlags::VIM9_SCRIPT;
                            }
                        }
                    } else if sc.get_line_next_char(false) == b'(' {
                        sc.change_state(VimStyle::Function);
                    }
                    sc.set_state(VimStyle::Default);
                }
            }

            VimStyle::StringDq => {
                if sc.at_line_start() {
                    sc.set_state(VimStyle::Default);
                } else if sc.ch() == b'\\' {
                    if let Some((digits, hex)) = escape_digits(sc.ch_next()) {
                        escape.begin(VimStyle::StringDq, digits, hex);
                        sc.set_state(VimStyle::EscapeChar);
                    }
                    sc.forward();
                } else if sc.ch() == b'"' {
                    sc.forward_set_state(VimStyle::Default);
                }
            }

            VimStyle::EscapeChar => {
                if escape.at_escape_end(sc.ch()) {
                    sc.set_state(escape.outer());
                    continue;
                }
            }

            VimStyle::StringSq => {
                if sc.at_line_start() {
                    sc.set_state(VimStyle::Default);
                } else if sc.ch() == b'\'' {
                    if sc.ch_next() == b'\'' {
                        sc.set_state(VimStyle::EscapeChar);
                        sc.forward();
                        sc.forward_set_state(VimStyle::StringSq);
                        continue;
                    }
                    sc.forward_set_state(VimStyle::Default);
                }
            }

            VimStyle::Regex => {
                if sc.at_line_start() {
                    sc.set_state(VimStyle::Default);
                } else if sc.ch() == b'\\' {
                    sc.forward();
                } else if sc.ch() == b'[' || sc.ch() == b']' {
                    inside_regex_range = sc.ch() == b'[';
                } else if sc.ch() == b'/' && !inside_regex_range {
                    sc.forward_set_state(VimStyle::Default);
                }
            }

            VimStyle::CommentLine => {
                if sc.at_line_start() {
                    sc.set_state(VimStyle::Default);
                }
            }

            VimStyle::BlobHex => {
                if !(is_identifier_char(sc.ch()) || sc.ch() == b'.') {
                    sc.set_state(VimStyle::Default);
                }
            }

            VimStyle::EnvVariable | VimStyle::Option | VimStyle::Register => {
                if !is_identifier_char(sc.ch()) {
                    sc.set_state(VimStyle::Default);
                }
            }

            _ => {}
        }

        if sc.state() == VimStyle::Default {
            if sc.ch() == b'"' {
                let state = if logical_visible_chars != 0
                    || line_flags.contains(VimLineFlags::VIM9_SCRIPT)
                {
                    VimStyle::StringDq
                } else {
                    VimStyle::CommentLine
                };
                sc.set_state(state);
                if line_visible_chars == 0 && state == VimStyle::CommentLine {
                    line_flags |= VimLineFlags::LINE_COMMENT;
                }
            } else if sc.ch() == b'#' {
                // Vim9 comment
                sc.set_state(if sc.ch_prev() <= b' ' {
                    VimStyle::CommentLine
                } else {
                    VimStyle::Operator
                });
                if line_visible_chars == 0 {
                    line_flags |= VimLineFlags::LINE_COMMENT;
                }
            } else if sc.ch() == b'\'' {
                sc.set_state(VimStyle::StringSq);
            } else if sc.ch() == b'0' && sc.ch_next().to_ascii_lowercase() == b'z' {
                sc.set_state(VimStyle::BlobHex);
            } else if is_number_start(sc.ch(), sc.ch_next()) {
                sc.set_state(VimStyle::Number);
            } else if (sc.ch() == b'$' || sc.ch() == b'&') && is_identifier_char(sc.ch_next()) {
                sc.set_state(if sc.ch() == b'$' {
                    VimStyle::EnvVariable
                } else {
                    VimStyle::Option
                });
                sc.forward();
            } else if sc.ch() == b'@' {
                sc.set_state(VimStyle::Register);
                sc.forward();
            } else if sc.ch() == b'\\' && logical_visible_chars != 0 {
                sc.forward();
            } else if is_identifier_start(sc.ch()) {
                if sc.ch_next() == b':' && is_lower(sc.ch()) {
                    // variable namespace: g:, s:, b:, w:, t:, l:, a:, v:
                    sc.set_state(VimStyle::EnvVariable);
                    sc.forward_set_state(VimStyle::Operator);
                } else {
                    sc.set_state(VimStyle::Identifier);
                }
            } else if sc.ch() == b'/' && prefer_regex && !is_eol_char(sc.ch_next()) {
                inside_regex_range = false;
                sc.set_state(VimStyle::Regex);
            } else if is_graphic(sc.ch()) {
                sc.set_state(VimStyle::Operator);
                if sc.ch() == b'|'
                    && sc.ch_next() != b'|'
                    && !line_flags.contains(VimLineFlags::AUTO_COMMAND)
                {
                    command_separator = true;
                }
            }
        }

        // a leading `:` does not make the command any less first
        if !is_space_char(sc.ch()) && !(line_visible_chars == 0 && sc.ch() == b':') {
            if line_visible_chars == 0 {
                if sc.ch() == b'\\' {
                    line_flags |= VimLineFlags::LINE_CONTINUATION;
                } else {
                    line_flags.remove(VimLineFlags::AUTO_COMMAND);
                }
            }
            line_visible_chars += 1;
            if command_separator {
                command_separator = false;
                logical_visible_chars = 0;
            } else {
                logical_visible_chars += 1;
            }
        }

        if sc.at_line_end() {
            let line = sc.current_line();
            sc.set_line_state(line, line_flags.to_line_state());
            line_flags &= VimLineFlags::CARRIED;
            line_visible_chars = 0;
            logical_visible_chars = 0;
            kw_type = KeywordType::None;
            prefer_regex = false;
        }
        sc.forward();
    }

    sc.complete();
}
