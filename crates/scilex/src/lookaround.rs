//! Look-behind and next-line look-ahead over already styled text.

use crate::accessor::Accessor;
use crate::char_class::{is_space_char, is_space_or_tab};

/// The last byte before `start` that is neither whitespace nor styled as whitespace-equivalent
/// (default, comment, task marker ...); `0` when the document start is reached.
///
/// Used when lexing resumes mid-document so context such as "previous significant character"
/// matches what a scan from the start would have seen.
pub fn lookback_non_white<A, F>(styler: &A, start: usize, is_space_equiv: F) -> u8
where
    A: Accessor + ?Sized,
    F: Fn(u8) -> bool,
{
    let mut pos = start.min(styler.len());
    while pos > 0 {
        pos -= 1;
        let ch = styler.byte_at(pos);
        if !is_space_char(ch) && !is_space_equiv(styler.style_at(pos)) {
            return ch;
        }
    }
    0
}

/// Detect a block brace placed alone at the start of the next line.
///
/// Returns the brace position when line `line + 1` starts (after spaces and tabs) with `{`
/// styled as `operator_style`, and `line` has significant content whose last character is not
/// an operator among `{ } ; , ( [`. The brace's depth increment then belongs to `line`.
pub fn brace_on_next_line<A, F>(
    styler: &A,
    line: usize,
    operator_style: u8,
    is_space_equiv: F,
) -> Option<usize>
where
    A: Accessor + ?Sized,
    F: Fn(u8) -> bool,
{
    let next_start = styler.line_start(line + 1);
    let doc_len = styler.len();
    if next_start >= doc_len {
        return None;
    }

    let mut brace_pos = next_start;
    while brace_pos < doc_len && is_space_or_tab(styler.byte_at(brace_pos)) {
        brace_pos += 1;
    }
    if styler.byte_at(brace_pos) != b'{' || styler.style_at(brace_pos) != operator_style {
        return None;
    }

    let line_start = styler.line_start(line);
    let mut pos = next_start;
    let last = loop {
        if pos <= line_start {
            return None;
        }
        pos -= 1;
        if !is_space_equiv(styler.style_at(pos)) && !is_space_char(styler.byte_at(pos)) {
            break pos;
        }
    };

    let ch = styler.byte_at(last);
    if styler.style_at(last) == operator_style && matches!(ch, b'{' | b'}' | b';' | b',' | b'(' | b'[') {
        return None;
    }
    Some(brace_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    const OPERATOR: u8 = 5;
    const WORD: u8 = 3;

    fn is_space_equiv(style: u8) -> bool {
        style <= 1
    }

    /// Styles every punctuation byte as an operator and everything else as a word.
    fn styled(text: &str) -> Document {
        let mut doc = Document::new(text);
        for (i, b) in text.bytes().enumerate() {
            let style = match b {
                b' ' | b'\t' | b'\r' | b'\n' => 0,
                b'{' | b'}' | b'(' | b')' | b';' | b',' | b'[' => OPERATOR,
                _ => WORD,
            };
            doc.set_style_range(i, i + 1, style);
        }
        doc
    }

    #[test]
    fn test_brace_after_signature() {
        let doc = styled("void f()\n  {\n}\n");
        assert_eq!(brace_on_next_line(&doc, 0, OPERATOR, is_space_equiv), Some(11));
    }

    #[test]
    fn test_brace_after_statement_terminator() {
        let doc = styled("x;\n{\n}\n");
        assert_eq!(brace_on_next_line(&doc, 0, OPERATOR, is_space_equiv), None);
    }

    #[test]
    fn test_no_brace_for_blank_line() {
        let doc = styled("\n{\n}\n");
        assert_eq!(brace_on_next_line(&doc, 0, OPERATOR, is_space_equiv), None);
    }

    #[test]
    fn test_lookback_skips_comments() {
        let mut doc = styled("a; // c\n");
        doc.set_style_range(3, 7, 1);
        assert_eq!(lookback_non_white(&doc, 8, is_space_equiv), b';');
        assert_eq!(lookback_non_white(&doc, 0, is_space_equiv), 0);
    }
}
