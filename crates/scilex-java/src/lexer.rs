//! The Java tokenizer.

use scilex::char_class::{
    is_alpha, is_comment_tag_prev, is_decimal_number_ex, is_digit, is_eol_char, is_graphic,
    is_identifier_char, is_identifier_char_ex, is_identifier_start_ex, is_invalid_url_char,
    is_jump_label_prev_char, is_lower, is_number_start, is_octal_digit, is_space_char,
};
use scilex::{
    Accessor, EscapeSequence, KeywordCategory, KeywordSets, LexStyle, LineState,
    NestedStateStack, StyleContext, highlight_task_marker, lookback_non_white,
};

use crate::format::format_specifier_len;
use crate::style::{JavaLineFlags, JavaStyle, NESTED_STATE_BASE, is_space_equiv};

/// Position inside a documentation comment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocTagState {
    None,
    /// `@param x`
    At,
    /// `{@link package.class#member label}`
    InlineAt,
    /// `<tag>`
    TagOpen,
    /// `</tag>`
    TagClose,
}

/// What the last keyword says about the identifiers that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordType {
    None,
    Annotation,
    Class,
    Interface,
    Enum,
    Record,
    Label,
    /// `return` / `yield`: a following `name(` is a call.
    Return,
    /// `if` / `while`: `(name) expr` is not a cast.
    While,
}

impl KeywordType {
    /// The style forced onto the next identifier, for declaration-like keywords.
    fn context_style(self) -> Option<JavaStyle> {
        match self {
            Self::Annotation => Some(JavaStyle::Annotation),
            Self::Class => Some(JavaStyle::Class),
            Self::Interface => Some(JavaStyle::Interface),
            Self::Enum => Some(JavaStyle::Enum),
            Self::Record => Some(JavaStyle::Record),
            Self::Label => Some(JavaStyle::Label),
            Self::None | Self::Return | Self::While => None,
        }
    }
}

/// Digits an escape consumes after the backslash, or `None` for a backslash at line end.
fn escape_digits(ch_next: u8) -> Option<(u8, bool)> {
    if is_eol_char(ch_next) {
        None
    } else if ch_next == b'u' {
        Some((5, true))
    } else if is_octal_digit(ch_next) {
        Some((3, false))
    } else {
        Some((1, false))
    }
}

const SEALED_SUFFIX: &str = "-sealed";

/// `-sealed` at the cursor, followed by a space or comment.
fn match_sealed<A: Accessor + ?Sized>(sc: &StyleContext<'_, A, JavaStyle>) -> bool {
    if !sc.matches_str(SEALED_SUFFIX) {
        return false;
    }
    let ch = sc.get_relative(SEALED_SUFFIX.len());
    ch <= b' ' || ch == b'/'
}

#[inline]
fn is_text_block(style: JavaStyle) -> bool {
    matches!(style, JavaStyle::TripleString | JavaStyle::TripleTemplate)
}

/// Inside a text block, possibly within one of its interpolations.
fn in_text_block(state: JavaStyle, nested: &NestedStateStack<JavaStyle>) -> bool {
    is_text_block(state) || nested.as_slice().iter().copied().any(is_text_block)
}

/// Style `[start, start + length)` of a Java document.
pub fn lex_java(
    start: usize,
    length: usize,
    init_style: u8,
    keywords: &KeywordSets,
    styler: &mut dyn Accessor,
) {
    let mut line_flags = JavaLineFlags::empty();
    let mut inside_url = false;

    let mut kw_type = KeywordType::None;
    let mut ch_before_identifier = 0u8;
    let mut nested = NestedStateStack::new(NESTED_STATE_BASE.to_raw());

    let mut visible_chars = 0usize;
    let mut ch_before = 0u8;
    let mut visible_chars_before = 0usize;
    let mut doc_tag = DocTagState::None;
    let mut escape = EscapeSequence::<JavaStyle>::default();
    let mut placeholder_outer = JavaStyle::Default;

    let mut sc = StyleContext::<_, JavaStyle>::new(start, length, init_style, styler);
    if sc.current_line() > 0 {
        LineState::from_raw(sc.line_state(sc.current_line() - 1)).unpack_into(&mut nested);
    }
    if start == 0 && sc.matches2(b'#', b'!') {
        // shebang
        sc.set_state(JavaStyle::CommentLine);
        sc.forward();
        line_flags = JavaLineFlags::LINE_COMMENT;
    }
    let mut multiline_literal = in_text_block(sc.state(), &nested);

    while sc.more() {
        match sc.state() {
            JavaStyle::Operator | JavaStyle::Operator2 => {
                sc.set_state(JavaStyle::Default);
            }

            JavaStyle::Number => {
                if !is_decimal_number_ex(sc.ch_prev(), sc.ch(), sc.ch_next()) {
                    sc.set_state(JavaStyle::Default);
                }
            }

            JavaStyle::Identifier | JavaStyle::Annotation => {
                if !is_identifier_char_ex(sc.ch()) {
                    if sc.state() == JavaStyle::Annotation {
                        if sc.ch() == b'.' || sc.ch() == b'$' {
                            sc.set_state(JavaStyle::Operator);
                            sc.forward_set_state(JavaStyle::Annotation);
                            continue;
                        }
                    } else {
                        let s = sc.current_token();
                        let word = s.as_bytes();
                        if word.first() == Some(&b'@') {
                            if s.is("@interface") {
                                sc.change_state(JavaStyle::Word);
                                kw_type = KeywordType::Annotation;
                            } else {
                                sc.change_state(JavaStyle::Annotation);
                                continue;
                            }
                        } else if keywords.contains(KeywordCategory::Keyword, word) {
                            sc.change_state(JavaStyle::Word);
                            if s.is("import") {
                                if visible_chars == sc.length_current() {
                                    line_flags |= JavaLineFlags::IMPORT;
                                }
                            } else if s.is_any(&["class", "new", "extends", "instanceof", "throws"]) {
                                kw_type = KeywordType::Class;
                            } else if s.is_any(&["interface", "implements"]) {
                                kw_type = KeywordType::Interface;
                            } else if s.is("enum") {
                                kw_type = KeywordType::Enum;
                            } else if s.is("record") {
                                kw_type = KeywordType::Record;
                            } else if s.is_any(&["break", "continue"]) {
                                kw_type = KeywordType::Label;
                            } else if s.is_any(&["return", "yield"]) {
                                kw_type = KeywordType::Return;
                            } else if s.is_any(&["if", "while"]) {
                                // if (identifier) expression, while (identifier) expression
                                kw_type = KeywordType::While;
                            }
                            if kw_type.context_style().is_some()
                                && !is_identifier_start_ex(sc.get_doc_next_char(false))
                            {
                                kw_type = KeywordType::None;
                            }
                        } else if s.is("non") && match_sealed(&sc) {
                            sc.change_state(JavaStyle::Word);
                            sc.forward_by(SEALED_SUFFIX.len());
                        } else if keywords.contains(KeywordCategory::Type, word) {
                            sc.change_state(JavaStyle::Word2);
                        } else if keywords.contains(KeywordCategory::Directive, word) {
                            sc.change_state(JavaStyle::Directive);
                        } else if keywords.contains(KeywordCategory::Class, word) {
                            sc.change_state(JavaStyle::Class);
                        } else if keywords.contains(KeywordCategory::Interface, word) {
                            sc.change_state(JavaStyle::Interface);
                        } else if keywords.contains(KeywordCategory::Enumeration, word) {
                            sc.change_state(JavaStyle::Enum);
                        } else if keywords.contains(KeywordCategory::Constant, word) {
                            sc.change_state(JavaStyle::Constant);
                        } else if sc.ch() == b':' {
                            if sc.ch_next() == b':' {
                                // Type::method
                                sc.change_state(JavaStyle::Class);
                            } else if is_jump_label_prev_char(ch_before) {
                                sc.change_state(JavaStyle::Label);
                            }
                        } else if sc.ch() != b'.' {
                            if let Some(style) = kw_type.context_style() {
                                sc.change_state(style);
                            } else {
                                let ch_next = sc.get_doc_next_char(sc.ch() == b')');
                                if sc.ch() == b')' {
                                    // (Type)(expression), (Type)expression, (Type)++value
                                    if ch_before_identifier == b'('
                                        && (ch_next == b'('
                                            || (kw_type != KeywordType::While
                                                && is_identifier_char_ex(ch_next)))
                                    {
                                        sc.change_state(JavaStyle::Class);
                                    }
                                } else if ch_next == b'(' {
                                    // Type method(), Type[] method(), Type<T> method()
                                    if kw_type != KeywordType::Return
                                        && (is_identifier_char_ex(ch_before) || ch_before == b']')
                                    {
                                        sc.change_state(JavaStyle::FunctionDefinition);
                                    } else {
                                        sc.change_state(JavaStyle::Function);
                                    }
                                } else if sc.matches2(b'[', b']')
                                    || (sc.ch() == b'<'
                                        && (sc.ch_next() == b'>' || sc.ch_next() == b'?'))
                                    || (ch_before_identifier == b'<'
                                        && (ch_next == b'>' || ch_next == b'<'))
                                    || is_identifier_start_ex(ch_next)
                                {
                                    // Type[] name, Type<>, Type<?>, Type<Type<T>>, Type name
                                    sc.change_state(JavaStyle::Class);
                                }
                            }
                        }
                        if sc.state() != JavaStyle::Word && sc.ch() != b'.' {
                            kw_type = KeywordType::None;
                        }
                    }
                    sc.set_state(JavaStyle::Default);
                }
            }

            JavaStyle::CommentLine => {
                if sc.at_line_start() {
                    sc.set_state(JavaStyle::Default);
                } else {
                    highlight_task_marker(
                        &mut sc,
                        &mut visible_chars,
                        visible_chars_before,
                        JavaStyle::TaskMarker,
                    );
                }
            }

            JavaStyle::CommentBlock => {
                if sc.matches2(b'*', b'/') {
                    sc.forward();
                    sc.forward_set_state(JavaStyle::Default);
                } else if highlight_task_marker(
                    &mut sc,
                    &mut visible_chars,
                    visible_chars_before,
                    JavaStyle::TaskMarker,
                ) {
                    continue;
                }
            }

            JavaStyle::CommentBlockDoc => {
                match doc_tag {
                    DocTagState::At => doc_tag = DocTagState::None,
                    DocTagState::InlineAt => {
                        if sc.ch() == b'}' {
                            doc_tag = DocTagState::None;
                            sc.set_state(JavaStyle::CommentTagAt);
                            sc.forward_set_state(JavaStyle::CommentBlockDoc);
                        }
                    }
                    DocTagState::TagOpen | DocTagState::TagClose => {
                        if sc.matches2(b'/', b'>') || sc.ch() == b'>' {
                            doc_tag = DocTagState::None;
                            sc.set_state(JavaStyle::CommentTagHtml);
                            sc.forward_by(if sc.ch() == b'/' { 2 } else { 1 });
                            sc.set_state(JavaStyle::CommentBlockDoc);
                        }
                    }
                    DocTagState::None => {}
                }
                if sc.matches2(b'*', b'/') {
                    sc.forward();
                    sc.forward_set_state(JavaStyle::Default);
                } else if sc.ch() == b'@' && is_alpha(sc.ch_next()) && is_comment_tag_prev(sc.ch_prev())
                {
                    doc_tag = DocTagState::At;
                    sc.set_state(JavaStyle::CommentTagAt);
                } else if sc.matches2(b'{', b'@') && is_alpha(sc.get_relative(2)) {
                    doc_tag = DocTagState::InlineAt;
                    sc.set_state(JavaStyle::CommentTagAt);
                    sc.forward();
                } else if sc.ch() == b'<' {
                    if is_alpha(sc.ch_next()) {
                        doc_tag = DocTagState::TagOpen;
                        sc.set_state(JavaStyle::CommentTagHtml);
                    } else if sc.ch_next() == b'/' && is_alpha(sc.get_relative(2)) {
                        doc_tag = DocTagState::TagClose;
                        sc.set_state(JavaStyle::CommentTagHtml);
                        sc.forward();
                    }
                } else if highlight_task_marker(
                    &mut sc,
                    &mut visible_chars,
                    visible_chars_before,
                    JavaStyle::TaskMarker,
                ) {
                    continue;
                }
            }

            JavaStyle::CommentTagAt | JavaStyle::CommentTagHtml => {
                if !(is_identifier_char(sc.ch()) || sc.ch() == b'-' || sc.ch() == b':') {
                    sc.set_state(JavaStyle::CommentBlockDoc);
                    continue;
                }
            }

            JavaStyle::Character
            | JavaStyle::String
            | JavaStyle::Template
            | JavaStyle::TripleTemplate
            | JavaStyle::TripleString => {
                let state = sc.state();
                if sc.at_line_start() && state <= JavaStyle::Template {
                    sc.set_state(JavaStyle::Default);
                } else if sc.ch() == b'\\' {
                    if sc.ch_next() == b'{'
                        && matches!(state, JavaStyle::Template | JavaStyle::TripleTemplate)
                    {
                        nested.push(state);
                        sc.set_state(JavaStyle::Operator2);
                        sc.forward();
                    } else if let Some((digits, hex)) = escape_digits(sc.ch_next()) {
                        escape.begin(state, digits, hex);
                        sc.set_state(JavaStyle::EscapeChar);
                        sc.forward();
                    }
                } else if sc.ch() == b'\'' && state == JavaStyle::Character {
                    sc.forward_set_state(JavaStyle::Default);
                } else if state != JavaStyle::Character {
                    if sc.ch() == b'%' {
                        let len = format_specifier_len(&sc, inside_url);
                        if len != 0 {
                            sc.set_state(JavaStyle::FormatSpecifier);
                            sc.forward_by(len);
                            sc.set_state(state);
                            continue;
                        }
                    } else if sc.ch() == b'{' {
                        if is_digit(sc.ch_next()) {
                            placeholder_outer = state;
                            sc.set_state(JavaStyle::Placeholder);
                        }
                    } else if sc.ch() == b'"'
                        && (state <= JavaStyle::Template || sc.match_next(b'"', b'"'))
                    {
                        if state > JavaStyle::Template {
                            sc.forward_by(2);
                            multiline_literal = in_text_block(JavaStyle::Default, &nested);
                        }
                        sc.forward_set_state(JavaStyle::Default);
                    } else if sc.matches3(b':', b'/', b'/') && is_lower(sc.ch_prev()) {
                        inside_url = true;
                    } else if inside_url && is_invalid_url_char(sc.ch()) {
                        inside_url = false;
                    }
                }
            }

            JavaStyle::EscapeChar => {
                if escape.at_escape_end(sc.ch()) {
                    sc.set_state(escape.outer());
                    continue;
                }
            }

            JavaStyle::Placeholder => {
                // java.text.MessageFormat, simplest form only: {0}
                if !is_digit(sc.ch()) {
                    if sc.ch() != b'}' {
                        sc.rewind();
                        sc.change_state(placeholder_outer);
                    }
                    sc.forward();
                    sc.set_state(placeholder_outer);
                    continue;
                }
            }

            _ => {}
        }

        if sc.state() == JavaStyle::Default {
            if sc.matches2(b'/', b'/') {
                visible_chars_before = visible_chars;
                sc.set_state(JavaStyle::CommentLine);
                if visible_chars == 0 {
                    line_flags |= JavaLineFlags::LINE_COMMENT;
                }
            } else if sc.matches2(b'/', b'*') {
                visible_chars_before = visible_chars;
                doc_tag = DocTagState::None;
                sc.set_state(JavaStyle::CommentBlock);
                sc.forward_by(2);
                if sc.ch() == b'*' && sc.ch_next() != b'*' {
                    sc.change_state(JavaStyle::CommentBlockDoc);
                }
                continue;
            } else if sc.ch() == b'"' {
                inside_url = false;
                let template = sc.ch_prev() == b'.';
                if sc.match_next(b'"', b'"') {
                    sc.set_state(if template {
                        JavaStyle::TripleTemplate
                    } else {
                        JavaStyle::TripleString
                    });
                    sc.forward_by(2);
                } else {
                    sc.set_state(if template {
                        JavaStyle::Template
                    } else {
                        JavaStyle::String
                    });
                }
            } else if sc.ch() == b'\'' {
                sc.set_state(JavaStyle::Character);
            } else if is_number_start(sc.ch(), sc.ch_next()) {
                sc.set_state(JavaStyle::Number);
            } else if is_identifier_start_ex(sc.ch()) || sc.matches2(b'@', b'i') {
                sc.set_state(JavaStyle::Identifier);
                // everything before the identifier is committed, including earlier lines
                ch_before = lookback_non_white(sc.styler(), sc.current_pos(), is_space_equiv);
                if ch_before != b'.' {
                    ch_before_identifier = ch_before;
                }
            } else if sc.ch() == b'@' && is_identifier_start_ex(sc.ch_next()) {
                sc.set_state(JavaStyle::Annotation);
            } else if is_graphic(sc.ch()) && sc.ch() != b'\\' {
                sc.set_state(JavaStyle::Operator);
                if !nested.is_empty() {
                    sc.change_state(JavaStyle::Operator2);
                    if sc.ch() == b'{' {
                        nested.push(JavaStyle::Default);
                    } else if sc.ch() == b'}' {
                        let outer = nested.take_and_pop();
                        sc.forward_set_state(outer);
                        continue;
                    }
                }
            }
        }

        if !is_space_char(sc.ch()) {
            visible_chars += 1;
        }
        if sc.at_line_end() {
            if multiline_literal {
                line_flags |= JavaLineFlags::MULTILINE_LITERAL;
            }
            let line_state = LineState::pack(line_flags.bits(), &nested);
            let line = sc.current_line();
            sc.set_line_state(line, line_state.raw());
            line_flags = JavaLineFlags::empty();
            visible_chars = 0;
            visible_chars_before = 0;
            doc_tag = DocTagState::None;
            kw_type = KeywordType::None;
            ch_before_identifier = 0;
            inside_url = false;
            multiline_literal = in_text_block(sc.state(), &nested);
        }
        sc.forward();
    }

    sc.complete();
}
