//! Java styles and per-line flags.

use bitflags::bitflags;
use scilex::{KeywordCategory, LexStyle};

scilex::lex_styles! {
    /// Token classes of the Java grammar.
    ///
    /// The order is significant: styles up to [`JavaStyle::TaskMarker`] are whitespace
    /// equivalent, single-line literals precede [`JavaStyle::TripleTemplate`], and the nested
    /// literal styles follow [`JavaStyle::String`].
    pub enum JavaStyle {
        Default = 0,
        CommentLine = 1,
        CommentBlock = 2,
        CommentBlockDoc = 3,
        CommentTagAt = 4,
        CommentTagHtml = 5,
        TaskMarker = 6,
        Character = 7,
        String = 8,
        Template = 9,
        TripleTemplate = 10,
        TripleString = 11,
        EscapeChar = 12,
        Placeholder = 13,
        FormatSpecifier = 14,
        Operator = 15,
        /// Braces and operators inside a template interpolation.
        Operator2 = 16,
        Number = 17,
        Identifier = 18,
        Word = 19,
        Word2 = 20,
        Directive = 21,
        Annotation = 22,
        Class = 23,
        Interface = 24,
        Enum = 25,
        Record = 26,
        Function = 27,
        FunctionDefinition = 28,
        Constant = 29,
        Label = 30,
    }
}

/// Nested literal styles are stored relative to this style.
pub const NESTED_STATE_BASE: JavaStyle = JavaStyle::String;

/// Styles that count as whitespace for look-behind and folding.
#[inline]
pub fn is_space_equiv(style: u8) -> bool {
    style <= JavaStyle::TaskMarker.to_raw()
}

bitflags! {
    /// Mode flags in the low byte of a Java line state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct JavaLineFlags: u8 {
        /// The line's first visible text opens a `//` comment.
        const LINE_COMMENT = 1;
        /// The line starts with `import`.
        const IMPORT = 1 << 1;
        /// The line starts inside a text block and stays inside it.
        const MULTILINE_LITERAL = 1 << 2;
    }
}

impl JavaLineFlags {
    /// Flags of a persisted line state.
    pub fn from_line_state(raw: u32) -> Self {
        Self::from_bits_truncate(scilex::LineState::from_raw(raw).flags())
    }
}

/// Keyword categories consulted by the Java lexer, in lookup order.
pub const WORD_LISTS: &[KeywordCategory] = &[
    KeywordCategory::Keyword,
    KeywordCategory::Type,
    KeywordCategory::Directive,
    KeywordCategory::Class,
    KeywordCategory::Interface,
    KeywordCategory::Enumeration,
    KeywordCategory::Constant,
    KeywordCategory::Function,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_layout() {
        assert_eq!(JavaStyle::ALL.len(), 31);
        assert_eq!(NESTED_STATE_BASE.to_raw() + 1, JavaStyle::Template.to_raw());
        assert_eq!(NESTED_STATE_BASE.to_raw() + 2, JavaStyle::TripleTemplate.to_raw());
        assert!(is_space_equiv(JavaStyle::CommentBlockDoc.to_raw()));
        assert!(!is_space_equiv(JavaStyle::Character.to_raw()));
    }

    #[test]
    fn test_flags_ignore_nested_bits() {
        let raw = 0b101 | (2 << 8) | (1 << 11);
        assert_eq!(
            JavaLineFlags::from_line_state(raw),
            JavaLineFlags::LINE_COMMENT | JavaLineFlags::MULTILINE_LITERAL
        );
    }
}
