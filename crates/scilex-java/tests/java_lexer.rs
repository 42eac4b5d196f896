use pretty_assertions::assert_eq;
use scilex::{Accessor, Document, FOLD_LEVEL_BASE, KeywordCategory, KeywordSets, LexStyle, WordList};
use scilex_java::{JAVA_LEXER, JavaLineFlags, JavaStyle};

fn keywords() -> KeywordSets {
    KeywordSets::new()
        .with(
            KeywordCategory::Keyword,
            WordList::from_words(
                "abstract break case catch class continue default do else enum extends final for \
                 if implements import instanceof interface new package private protected public \
                 record return static super this throws try void while yield",
            ),
        )
        .with(
            KeywordCategory::Type,
            WordList::from_words("boolean byte char double float int long short var"),
        )
        .with(KeywordCategory::Class, WordList::from_words("Object String System"))
        .with(KeywordCategory::Interface, WordList::from_words("Runnable"))
        .with(KeywordCategory::Constant, WordList::from_words("null true false"))
}

fn lex(text: &str) -> Document {
    let keywords = keywords();
    let mut doc = Document::new(text);
    JAVA_LEXER.lex(0, doc.len(), 0, &keywords, &mut doc);
    JAVA_LEXER.fold(0, doc.len(), 0, &keywords, &mut doc);
    doc
}

/// Style of every byte of the first occurrence of `needle`, which must be uniform.
fn style_of(doc: &Document, needle: &str) -> JavaStyle {
    let text = doc.text();
    let start = text
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in document"));
    let styles = &doc.styles()[start..start + needle.len()];
    assert!(
        styles.iter().all(|&s| s == styles[0]),
        "{needle:?} has mixed styles {styles:?}"
    );
    JavaStyle::from_raw(styles[0]).expect("valid style")
}

fn flags(doc: &Document, line: usize) -> JavaLineFlags {
    JavaLineFlags::from_line_state(doc.line_state(line))
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
fn test_task_marker_in_line_comment() {
    let doc = lex("// TODO: fix\nint y;\n");

    assert_eq!(style_of(&doc, "//"), JavaStyle::CommentLine);
    assert_eq!(style_of(&doc, "TODO"), JavaStyle::TaskMarker);
    assert_eq!(style_of(&doc, ": fix"), JavaStyle::CommentLine);
    assert_eq!(style_of(&doc, "int"), JavaStyle::Word2);
    assert_eq!(style_of(&doc, "y"), JavaStyle::Identifier);
    assert_eq!(flags(&doc, 0), JavaLineFlags::LINE_COMMENT);
    assert_eq!(flags(&doc, 1), JavaLineFlags::empty());
}

#[test]
fn test_task_marker_needs_to_lead_the_comment() {
    let doc = lex("// later TODO here\n/* FIXME soon */\n");

    assert_eq!(style_of(&doc, "later TODO here"), JavaStyle::CommentLine);
    assert_eq!(style_of(&doc, "FIXME"), JavaStyle::TaskMarker);
    assert_eq!(style_of(&doc, " soon */"), JavaStyle::CommentBlock);
}

#[test]
fn test_import_lines_fold_as_group() {
    let doc = lex("import java.util.List;\nimport java.util.Map;\n\nclass A {\n}\n");

    assert_eq!(flags(&doc, 0), JavaLineFlags::IMPORT);
    assert_eq!(flags(&doc, 1), JavaLineFlags::IMPORT);
    assert_eq!(flags(&doc, 2), JavaLineFlags::empty());
    assert_eq!(style_of(&doc, "A"), JavaStyle::Class);
    assert_eq!(
        levels(&doc, 5),
        vec![
            (0, 1, true),
            (1, 0, false),
            (0, 0, false),
            (0, 1, true),
            (1, 0, false),
        ]
    );
}

#[test]
fn test_comment_lines_fold_as_group() {
    let doc = lex("// one\n// two\n// three\nint x;\n");

    assert_eq!(
        levels(&doc, 4),
        vec![(0, 1, true), (1, 1, false), (1, 0, false), (0, 0, false)]
    );
}

#[test]
fn test_cast_and_condition() {
    let doc = lex("x = (Foo)bar;\nif (ok) run();\n");

    assert_eq!(style_of(&doc, "Foo"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "bar"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "ok"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "run"), JavaStyle::Function);
}

#[test]
fn test_declarations_and_calls() {
    let doc = lex(
        "public class Greeter implements Runnable {\n    void greet() {\n        return build();\n    }\n}\n",
    );

    assert_eq!(style_of(&doc, "public"), JavaStyle::Word);
    assert_eq!(style_of(&doc, "Greeter"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "implements"), JavaStyle::Word);
    assert_eq!(style_of(&doc, "Runnable"), JavaStyle::Interface);
    assert_eq!(style_of(&doc, "greet"), JavaStyle::FunctionDefinition);
    assert_eq!(style_of(&doc, "build"), JavaStyle::Function);
}

#[test]
fn test_type_shapes() {
    let doc = lex("Foo::bar;\nMap<> m;\nList<?> l;\nWidget w;\n");

    assert_eq!(style_of(&doc, "Foo"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "bar"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "Map"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "List"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "Widget"), JavaStyle::Class);
    assert_eq!(style_of(&doc, "w"), JavaStyle::Identifier);
}

#[test]
fn test_labels() {
    let doc = lex("void f() {\n    outer: while (ok) {\n        break outer;\n    }\n}\n");

    let text = doc.text();
    let declared = text.find("outer").unwrap();
    let used = text.rfind("outer").unwrap();
    assert_ne!(declared, used);
    assert_eq!(doc.style_at(declared), JavaStyle::Label as u8);
    assert_eq!(style_of(&doc, "break"), JavaStyle::Word);
    assert_eq!(doc.style_at(used), JavaStyle::Label as u8);
}

#[test]
fn test_non_sealed() {
    let doc = lex("public non-sealed class Shape {}\n");

    assert_eq!(style_of(&doc, "non-sealed"), JavaStyle::Word);
    assert_eq!(style_of(&doc, "Shape"), JavaStyle::Class);
}

#[test]
fn test_annotations() {
    let doc = lex("@Override\n@interface Marker {}\n@java.lang.Deprecated\n");

    assert_eq!(style_of(&doc, "@Override"), JavaStyle::Annotation);
    assert_eq!(style_of(&doc, "@interface"), JavaStyle::Word);
    assert_eq!(style_of(&doc, "Marker"), JavaStyle::Annotation);
    assert_eq!(style_of(&doc, "@java"), JavaStyle::Annotation);
    assert_eq!(style_of(&doc, "."), JavaStyle::Operator);
    assert_eq!(style_of(&doc, "Deprecated"), JavaStyle::Annotation);
}

#[test]
fn test_string_escapes_and_specifiers() {
    let doc = lex("s = \"a\\tb\\101x %5.2f%% {0} {1x}\";\n");

    assert_eq!(style_of(&doc, "\"a"), JavaStyle::String);
    assert_eq!(style_of(&doc, "\\t"), JavaStyle::EscapeChar);
    assert_eq!(style_of(&doc, "\\101"), JavaStyle::EscapeChar);
    assert_eq!(style_of(&doc, "x "), JavaStyle::String);
    assert_eq!(style_of(&doc, "%5.2f"), JavaStyle::FormatSpecifier);
    assert_eq!(style_of(&doc, "%%"), JavaStyle::FormatSpecifier);
    assert_eq!(style_of(&doc, "{0}"), JavaStyle::Placeholder);
    assert_eq!(style_of(&doc, "{1x}"), JavaStyle::String);
}

#[test]
fn test_percent_encoding_in_url_is_not_a_specifier() {
    let doc = lex("u = \"http://example.com/a%41b\";\n");

    assert_eq!(style_of(&doc, "http://example.com/a%41b"), JavaStyle::String);
}

#[test]
fn test_character_literal_with_unicode_escape() {
    let doc = lex("char c = '\\u0041';\n");

    assert_eq!(style_of(&doc, "'"), JavaStyle::Character);
    assert_eq!(style_of(&doc, "\\u0041"), JavaStyle::EscapeChar);
    assert_eq!(style_of(&doc, ";"), JavaStyle::Operator);
}

#[test]
fn test_unterminated_string_ends_at_line_end() {
    let doc = lex("s = \"open\nint y;\n");

    assert_eq!(style_of(&doc, "\"open"), JavaStyle::String);
    assert_eq!(style_of(&doc, "int"), JavaStyle::Word2);
}

#[test]
fn test_doc_comment_tags() {
    let doc = lex("/** Returns {@link Foo#bar} and <b>bold</b>. @since 1 */\nint x;\n");

    assert_eq!(style_of(&doc, "/**"), JavaStyle::CommentBlockDoc);
    assert_eq!(style_of(&doc, "{@link"), JavaStyle::CommentTagAt);
    assert_eq!(style_of(&doc, " Foo#bar"), JavaStyle::CommentBlockDoc);
    assert_eq!(style_of(&doc, "}"), JavaStyle::CommentTagAt);
    assert_eq!(style_of(&doc, "<b>"), JavaStyle::CommentTagHtml);
    assert_eq!(style_of(&doc, "</b>"), JavaStyle::CommentTagHtml);
    assert_eq!(style_of(&doc, "@since"), JavaStyle::CommentTagAt);
    assert_eq!(style_of(&doc, " 1 */"), JavaStyle::CommentBlockDoc);
    assert_eq!(style_of(&doc, "int"), JavaStyle::Word2);
}

#[test]
fn test_text_block_flags_and_folding() {
    let text = "class A {\n    String s = \"\"\"\n        hello\n        world\n        \"\"\";\n}\n";
    let doc = lex(text);

    assert_eq!(style_of(&doc, "hello"), JavaStyle::TripleString);
    assert_eq!(style_of(&doc, "        \"\"\""), JavaStyle::TripleString);
    assert_eq!(flags(&doc, 1), JavaLineFlags::empty());
    assert_eq!(flags(&doc, 2), JavaLineFlags::MULTILINE_LITERAL);
    assert_eq!(flags(&doc, 3), JavaLineFlags::MULTILINE_LITERAL);
    assert_eq!(flags(&doc, 4), JavaLineFlags::empty());
    assert_eq!(
        levels(&doc, 6),
        vec![
            (0, 1, true),
            (1, 2, true),
            (2, 2, false),
            (2, 2, false),
            (2, 1, false),
            (1, 0, false),
        ]
    );
}

#[test]
fn test_string_template_interpolation() {
    let doc = lex("var s = STR.\"a \\{ x + 1 } b\";\n");

    assert_eq!(style_of(&doc, "STR"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "\"a "), JavaStyle::Template);
    assert_eq!(style_of(&doc, "\\{"), JavaStyle::Operator2);
    assert_eq!(style_of(&doc, "x"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "+"), JavaStyle::Operator2);
    assert_eq!(style_of(&doc, "1"), JavaStyle::Number);
    assert_eq!(style_of(&doc, "}"), JavaStyle::Operator2);
    assert_eq!(style_of(&doc, " b\""), JavaStyle::Template);
    assert_eq!(doc.line_state(0), 0);
}

#[test]
fn test_interpolation_spanning_lines_keeps_nesting() {
    let doc = lex("t = STR.\"\"\"\n  a \\{\n  x\n  } b\n  \"\"\";\n");

    assert_eq!(scilex::LineState::from_raw(doc.line_state(1)).nested_count(), 1);
    assert_eq!(scilex::LineState::from_raw(doc.line_state(2)).nested_count(), 1);
    assert_eq!(scilex::LineState::from_raw(doc.line_state(3)).nested_count(), 0);
    assert_eq!(style_of(&doc, "x"), JavaStyle::Identifier);
    assert_eq!(style_of(&doc, "}"), JavaStyle::Operator2);
    assert_eq!(style_of(&doc, " b\n"), JavaStyle::TripleTemplate);
}

#[test]
fn test_interpolation_inside_text_block_keeps_multiline_flag() {
    let doc = lex("t = STR.\"\"\"\n  a \\{ x }\n  b \\{\n  y\n  }\n  \"\"\";\n");

    assert_eq!(flags(&doc, 0), JavaLineFlags::empty());
    for line in 1..5 {
        assert_eq!(flags(&doc, line), JavaLineFlags::MULTILINE_LITERAL, "line {line}");
    }
    assert_eq!(flags(&doc, 5), JavaLineFlags::empty());
    assert_eq!(style_of(&doc, "y"), JavaStyle::Identifier);
}

#[test]
fn test_brace_on_next_line_folds_with_declaration() {
    let doc = lex("void f()\n{\n    g();\n}\n");

    assert_eq!(
        levels(&doc, 4),
        vec![(0, 1, true), (1, 1, false), (1, 1, false), (1, 0, false)]
    );
}

#[test]
fn test_shebang() {
    let doc = lex("#!/usr/bin/env java\nint x;\n");

    assert_eq!(style_of(&doc, "#!/usr/bin/env java"), JavaStyle::CommentLine);
    assert_eq!(flags(&doc, 0), JavaLineFlags::LINE_COMMENT);
}

#[test]
fn test_extreme_input_does_not_panic() {
    for text in ["", "\"", "'\\", "/*", "/**", "STR.\"\\{", "@", "%", "a\r\nb\r", "\\u"] {
        let doc = lex(text);
        assert_eq!(doc.styles().len(), text.len());
    }
}
