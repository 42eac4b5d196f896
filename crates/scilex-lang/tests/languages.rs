use pretty_assertions::assert_eq;
use scilex::{Accessor, Document, KeywordCategory, LexerId, LexerProcessor};
use scilex_java::JavaStyle;
use scilex_lang::{
    JAVA, KeywordConfig, LanguageError, VIM, catalogue, find_by_name, require_by_name,
    require_by_path,
};
use scilex_vim::VimStyle;
use std::sync::Arc;

fn style_at(doc: &Document, needle: &str) -> u8 {
    let pos = doc
        .text()
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in document"));
    doc.style_at(pos)
}

#[test]
fn test_catalogue_registers_every_language() {
    let catalogue = catalogue();
    assert_eq!(catalogue.find(LexerId::JAVA).map(|m| m.name()), Some("java"));
    assert_eq!(catalogue.find(LexerId::VIM).map(|m| m.name()), Some("vim"));
    assert_eq!(catalogue.find_by_name("VIM").map(|m| m.id()), Some(LexerId::VIM));
}

#[test]
fn test_lookup_errors() {
    assert_eq!(require_by_name("Java").unwrap().display_name, "Java Source");
    assert!(find_by_name("cobol").is_none());

    let err = require_by_name("cobol").unwrap_err();
    assert_eq!(err.to_string(), "unknown language 'cobol'");

    let err = require_by_path("notes.txt").unwrap_err();
    assert!(matches!(err, LanguageError::UnknownFileType(ref name) if name == "notes.txt"));
}

#[test]
fn test_comment_tokens() {
    assert_eq!(JAVA.comments.line, Some("//"));
    assert_eq!(JAVA.comments.block, Some(("/*", "*/")));
    assert!(VIM.comments.is_line_comment("  \" note"));
    assert!(!VIM.comments.has_block());
}

#[test]
fn test_java_defaults_drive_the_lexer() {
    let keywords = JAVA.default_keywords();
    let mut doc = Document::new(
        "interface Shape extends Comparable<Shape> {\n    int area(); // TODO: units\n}\n",
    );
    JAVA.lexer.lex(0, doc.len(), 0, &keywords, &mut doc);

    assert_eq!(style_at(&doc, "interface"), JavaStyle::Word as u8);
    assert_eq!(style_at(&doc, "Shape"), JavaStyle::Interface as u8);
    assert_eq!(style_at(&doc, "Comparable"), JavaStyle::Interface as u8);
    assert_eq!(style_at(&doc, "int"), JavaStyle::Word2 as u8);
    assert_eq!(style_at(&doc, "area"), JavaStyle::FunctionDefinition as u8);
    assert_eq!(style_at(&doc, "TODO"), JavaStyle::TaskMarker as u8);
}

#[test]
fn test_aidl_directives() {
    let keywords = JAVA.default_keywords();
    let mut doc = Document::new("oneway interface IListener {\n    void done(in Bundle b);\n}\n");
    JAVA.lexer.lex(0, doc.len(), 0, &keywords, &mut doc);

    assert_eq!(style_at(&doc, "oneway"), JavaStyle::Directive as u8);
    assert_eq!(style_at(&doc, "in "), JavaStyle::Directive as u8);
}

#[test]
fn test_vim_defaults_drive_the_lexer() {
    let keywords = VIM.default_keywords();
    let mut doc = Document::new("function! Foo()\n  setlocal nowrap\nendfunction\n");
    VIM.lexer.lex(0, doc.len(), 0, &keywords, &mut doc);
    VIM.lexer.fold(0, doc.len(), 0, &keywords, &mut doc);

    assert_eq!(style_at(&doc, "function"), VimStyle::Word as u8);
    assert_eq!(style_at(&doc, "setlocal"), VimStyle::Commands as u8);
    assert_eq!(style_at(&doc, "endfunction"), VimStyle::Word as u8);
    assert!(doc.fold_level(0).is_header());
    assert_eq!(doc.fold_level(2).next(), doc.fold_level(0).current());
}

#[test]
fn test_keyword_config_extends_defaults() {
    let config = KeywordConfig::from_yaml_str(
        "language: java\nkeywords:\n  class: [Widget]\n  constant: LIMIT\n",
    )
    .unwrap();
    let keywords = JAVA.keywords_with(&config).unwrap();
    assert!(keywords.contains(KeywordCategory::Class, b"Widget"));
    assert!(keywords.contains(KeywordCategory::Class, b"String"));

    let mut doc = Document::new("Widget w = LIMIT;\n");
    let mut processor = LexerProcessor::new(JAVA.lexer, Arc::new(keywords));
    processor.update(&mut doc);

    assert_eq!(style_at(&doc, "Widget"), JavaStyle::Class as u8);
    assert_eq!(style_at(&doc, "LIMIT"), JavaStyle::Constant as u8);
}

#[test]
fn test_keyword_config_for_another_language() {
    let config = KeywordConfig::from_yaml_str("language: vim\nkeywords:\n  command: Foo\n").unwrap();
    let err = JAVA.keywords_with(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "keyword configuration is for 'vim', not 'java'"
    );
    assert!(VIM.keywords_with(&config).is_ok());
}

#[test]
fn test_keyword_config_from_file() {
    let path = std::env::temp_dir().join(format!("scilex-lang-{}.yaml", std::process::id()));
    std::fs::write(&path, "replace: true\nkeywords:\n  type: u8 u16\n").unwrap();
    let loaded = KeywordConfig::load_from_path(&path);
    std::fs::remove_file(&path).unwrap();

    let keywords = JAVA.keywords_with(&loaded.unwrap()).unwrap();
    assert!(keywords.contains(KeywordCategory::Type, b"u16"));
    assert!(!keywords.contains(KeywordCategory::Type, b"int"));
    assert!(keywords.contains(KeywordCategory::Keyword, b"class"));

    let err = KeywordConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, LanguageError::Io(_)));
}
