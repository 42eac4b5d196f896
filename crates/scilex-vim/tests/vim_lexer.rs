use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scilex::{Accessor, Document, FOLD_LEVEL_BASE, KeywordCategory, KeywordSets, LexStyle, WordList};
use scilex_vim::{VIM_LEXER, VimLineFlags, VimStyle};

fn keywords() -> KeywordSets {
    KeywordSets::new()
        .with(
            KeywordCategory::Keyword,
            WordList::from_words(
                "au autocmd call def else endfor endfunction endif endwhile export for function \
                 if let return var while",
            ),
        )
        .with(
            KeywordCategory::Command,
            WordList::from_words("echo set syn syntax vim9script"),
        )
}

fn lex(text: &str) -> Document {
    let keywords = keywords();
    let mut doc = Document::new(text);
    VIM_LEXER.lex(0, doc.len(), 0, &keywords, &mut doc);
    VIM_LEXER.fold(0, doc.len(), 0, &keywords, &mut doc);
    doc
}

/// Style of the first occurrence of `needle`, which must be uniform.
fn style_of(doc: &Document, needle: &str) -> VimStyle {
    let text = doc.text();
    let start = text
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in document"));
    let styles = &doc.styles()[start..start + needle.len()];
    assert!(
        styles.iter().all(|&s| s == styles[0]),
        "{needle:?} has mixed styles {styles:?}"
    );
    VimStyle::from_raw(styles[0]).expect("valid style")
}

fn flags(doc: &Document, line: usize) -> VimLineFlags {
    VimLineFlags::from_line_state(doc.line_state(line))
}

fn levels(doc: &Document, lines: usize) -> Vec<(u16, u16, bool)> {
    (0..lines)
        .map(|line| {
            let level = doc.fold_level(line);
            (
                level.current() - FOLD_LEVEL_BASE,
                level.next() - FOLD_LEVEL_BASE,
                level.is_header(),
            )
        })
        .collect()
}

#[test]
fn test_quote_starts_comment_or_string() {
    let doc = lex("\" a comment\nlet x = \"str\"\n");

    assert_eq!(style_of(&doc, "\" a comment"), VimStyle::CommentLine);
    assert_eq!(flags(&doc, 0), VimLineFlags::LINE_COMMENT);
    assert_eq!(style_of(&doc, "let"), VimStyle::Word);
    assert_eq!(style_of(&doc, "\"str\""), VimStyle::StringDq);
    assert_eq!(flags(&doc, 1), VimLineFlags::empty());
}

#[test]
fn test_vim9_script() {
    let doc = lex("vim9script\n# comment\nvar s = \"a\\tb\"\nvar t = a#b\n");

    assert_eq!(style_of(&doc, "vim9script"), VimStyle::Commands);
    assert_eq!(flags(&doc, 0), VimLineFlags::VIM9_SCRIPT);
    assert_eq!(style_of(&doc, "# comment"), VimStyle::CommentLine);
    assert_eq!(
        flags(&doc, 1),
        VimLineFlags::VIM9_SCRIPT | VimLineFlags::LINE_COMMENT
    );
    assert_eq!(style_of(&doc, "var"), VimStyle::Word);
    assert_eq!(style_of(&doc, "\"a"), VimStyle::StringDq);
    assert_eq!(style_of(&doc, "\\t"), VimStyle::EscapeChar);
    assert_eq!(style_of(&doc, "b\""), VimStyle::StringDq);
    assert_eq!(style_of(&doc, "#"), VimStyle::CommentLine);
    let text = doc.text();
    let hash = text.rfind('#').unwrap();
    assert_eq!(doc.style_at(hash), VimStyle::Operator as u8);
}

#[test]
fn test_double_quoted_escapes() {
    let doc = lex("let s = \"\\x41\\u00e9\\101\\q\"\n");

    assert_eq!(style_of(&doc, "\\x41"), VimStyle::EscapeChar);
    assert_eq!(style_of(&doc, "\\u00e9"), VimStyle::EscapeChar);
    assert_eq!(style_of(&doc, "\\101"), VimStyle::EscapeChar);
    assert_eq!(style_of(&doc, "\\q\""), VimStyle::StringDq);
}

#[test]
fn test_single_quoted_string() {
    let doc = lex("let s = 'it''s'\n");

    assert_eq!(style_of(&doc, "'it"), VimStyle::StringSq);
    assert_eq!(style_of(&doc, "''"), VimStyle::EscapeChar);
    assert_eq!(style_of(&doc, "s'"), VimStyle::StringSq);
}

#[test]
fn test_references() {
    let doc = lex(
        "let b = 0zFF00.ED01\nlet h = $HOME\nlet &tabstop = 4\nlet r = @a\nlet g:name = 1\n",
    );

    assert_eq!(style_of(&doc, "0zFF00.ED01"), VimStyle::BlobHex);
    assert_eq!(style_of(&doc, "$HOME"), VimStyle::EnvVariable);
    assert_eq!(style_of(&doc, "&tabstop"), VimStyle::Option);
    assert_eq!(style_of(&doc, "4"), VimStyle::Number);
    assert_eq!(style_of(&doc, "@a"), VimStyle::Register);
    assert_eq!(style_of(&doc, "g"), VimStyle::EnvVariable);
    assert_eq!(style_of(&doc, ":"), VimStyle::Operator);
    assert_eq!(style_of(&doc, "name"), VimStyle::Identifier);
}

#[test]
fn test_keywords_need_command_position() {
    let doc = lex("let x = 1 | if x | endif\necho function('f')\nlet n = len(x)\n");

    assert_eq!(style_of(&doc, "if"), VimStyle::Word);
    assert_eq!(style_of(&doc, "endif"), VimStyle::Word);
    assert_eq!(style_of(&doc, "echo"), VimStyle::Commands);
    assert_eq!(style_of(&doc, "function"), VimStyle::WordDemoted);
    assert_eq!(style_of(&doc, "len"), VimStyle::Function);
}

#[test]
fn test_export_def() {
    let doc = lex("export def Hello()\nenddef\n");

    assert_eq!(style_of(&doc, "export"), VimStyle::Word);
    assert_eq!(style_of(&doc, "def"), VimStyle::Word);
    assert_eq!(style_of(&doc, "Hello"), VimStyle::Function);
}

#[test]
fn test_autocmd_body_demotes_keywords() {
    let doc = lex("autocmd BufRead * if 1 | endif\n  \\ | if 2\nif 3\nendif\n");

    assert_eq!(style_of(&doc, "autocmd"), VimStyle::Word);
    assert_eq!(flags(&doc, 0), VimLineFlags::AUTO_COMMAND);
    assert_eq!(style_of(&doc, "if"), VimStyle::WordDemoted);
    assert_eq!(style_of(&doc, "endif"), VimStyle::WordDemoted);
    assert_eq!(
        flags(&doc, 1),
        VimLineFlags::AUTO_COMMAND | VimLineFlags::LINE_CONTINUATION
    );

    let text = doc.text();
    let if3 = text.find("if 3").unwrap();
    assert_eq!(doc.style_at(if3), VimStyle::Word as u8);
    assert_eq!(flags(&doc, 2), VimLineFlags::empty());
}

#[test]
fn test_syntax_pattern_is_regex() {
    let doc = lex("syntax match Foo /a[/]b/ contained\nlet x = a / b\n");

    assert_eq!(style_of(&doc, "syntax"), VimStyle::Commands);
    assert_eq!(style_of(&doc, "/a[/]b/"), VimStyle::Regex);
    assert_eq!(style_of(&doc, "contained"), VimStyle::Identifier);
    assert_eq!(style_of(&doc, "/"), VimStyle::Regex);
    let text = doc.text();
    let divide = text.rfind('/').unwrap();
    assert_eq!(doc.style_at(divide), VimStyle::Operator as u8);
}

#[test]
fn test_block_keywords_fold() {
    let doc = lex("function! Foo()\n  if x\n    echo 1\n  endif\nendfunction\n");

    assert_eq!(style_of(&doc, "Foo"), VimStyle::Function);
    assert_eq!(
        levels(&doc, 5),
        vec![
            (0, 1, true),
            (1, 2, true),
            (2, 2, false),
            (2, 1, false),
            (1, 0, false),
        ]
    );
}

#[test]
fn test_comment_and_continuation_runs_fold() {
    let doc = lex("\" a\n\" b\nlet x = [\n      \\ 1,\n      \\ 2]\necho x\n");

    assert_eq!(flags(&doc, 3), VimLineFlags::LINE_CONTINUATION);
    assert_eq!(
        levels(&doc, 6),
        vec![
            (0, 1, true),
            (1, 0, false),
            (0, 1, true),
            (1, 1, false),
            (1, 0, false),
            (0, 0, false),
        ]
    );
}

#[test]
fn test_resume_at_every_line_matches_full_pass() {
    let source = "\" settings\nset nocompatible\n\nfunction! s:Greet(name) abort\n  let l:msg = 'hi ' .. a:name\n  if l:msg =~# '^hi'\n    echo l:msg | return\n  endif\nendfunction\n\nautocmd BufRead *.txt\n      \\ setlocal tw=72\nsyntax match Todo /TODO/\nlet g:blob = 0z0102\n";
    let keywords = keywords();
    let expected = lex(source);

    for line in 1..expected.line_count() - 1 {
        let doc = split_pass(source, &keywords, line);
        assert_eq!(doc.styles(), expected.styles(), "styles, split at line {line}");
        assert_eq!(doc.line_states(), expected.line_states(), "line states, split at line {line}");
        assert_eq!(doc.fold_levels(), expected.fold_levels(), "fold levels, split at line {line}");
    }
}

fn split_pass(source: &str, keywords: &KeywordSets, line: usize) -> Document {
    let mut doc = Document::new(source);
    let split = doc.line_start(line);
    VIM_LEXER.lex(0, split, 0, keywords, &mut doc);
    let init_style = if split > 0 { doc.style_at(split - 1) } else { 0 };
    VIM_LEXER.lex(split, doc.len() - split, init_style, keywords, &mut doc);
    VIM_LEXER.fold(0, split, 0, keywords, &mut doc);
    VIM_LEXER.fold(split, doc.len() - split, init_style, keywords, &mut doc);
    doc
}

/// Nested `function`, `if`, `for` and `augroup` blocks, always closed.
fn balanced_vim() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just(String::new()),
        Just("let x = 1\n".to_string()),
        Just("\" note\n".to_string()),
        Just("echo x\n".to_string()),
        Just("call F()\n".to_string()),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|parts| parts.concat()),
            inner.clone().prop_map(|body| format!("function F()\n{body}endfunction\n")),
            inner.clone().prop_map(|body| format!("if x\n{body}endif\n")),
            inner.clone().prop_map(|body| format!("for i in l\n{body}endfor\n")),
            inner.prop_map(|body| format!("augroup g\n{body}augroup END\n")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_balanced_blocks_fold_back_to_base(text in balanced_vim()) {
        let doc = lex(&text);
        let levels = doc.fold_levels();
        for level in levels {
            prop_assert!(level.current() >= FOLD_LEVEL_BASE);
            prop_assert!(level.next() >= FOLD_LEVEL_BASE);
        }
        if let Some(last) = levels.len().checked_sub(2) {
            prop_assert_eq!(levels[last].next(), FOLD_LEVEL_BASE);
        }
    }

    #[test]
    fn prop_resume_matches_full_pass(
        text in "(if |endif|let |au |\\\\ |vim9script|[a-z \"'#|/@$&:0()\n]){0,60}",
        pick in 0usize..64,
    ) {
        let keywords = keywords();
        let expected = lex(&text);
        prop_assume!(expected.line_count() > 1);
        let line = 1 + pick % (expected.line_count() - 1);

        let doc = split_pass(&text, &keywords, line);
        prop_assert_eq!(doc.styles(), expected.styles());
        prop_assert_eq!(doc.line_states(), expected.line_states());
        prop_assert_eq!(doc.fold_levels(), expected.fold_levels());
    }
}
