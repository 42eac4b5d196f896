#![warn(missing_docs)]
//! Scilex Java - Java Lexer and Folder
//!
//! # Overview
//!
//! Styles Java source (including Android IDL and BeanShell scripts) for the `scilex` kernel:
//! doc comments with `@tags` and HTML tags, task markers, text blocks, string templates with
//! nested `\{ ... }` interpolation, `java.util.Formatter` specifiers and `MessageFormat`
//! placeholders. Identifiers are classified by keyword lists and by local shape (declarations,
//! calls, casts, generics).
//!
//! # Line state
//!
//! Each line stores [`JavaLineFlags`] in its low byte and the stack of open template literals
//! above it, so lexing can resume at any line inside a nested template.
//!
//! # Quick Start
//!
//! ```rust
//! use scilex::{Accessor, Document, KeywordCategory, KeywordSets, WordList};
//! use scilex_java::{JAVA_LEXER, JavaStyle};
//!
//! let keywords = KeywordSets::new()
//!     .with(KeywordCategory::Keyword, WordList::from_words("class public"));
//! let mut doc = Document::new("public class Foo {\n}\n");
//! JAVA_LEXER.lex(0, doc.len(), 0, &keywords, &mut doc);
//! JAVA_LEXER.fold(0, doc.len(), 0, &keywords, &mut doc);
//!
//! assert_eq!(doc.style_at(0), JavaStyle::Word as u8);
//! assert_eq!(doc.style_at(13), JavaStyle::Class as u8);
//! assert!(doc.fold_level(0).is_header());
//! ```

mod folder;
mod format;
mod lexer;
pub mod style;

pub use folder::fold_java;
pub use lexer::lex_java;
pub use style::{JavaLineFlags, JavaStyle, NESTED_STATE_BASE, WORD_LISTS, is_space_equiv};

use scilex::{LexerId, LexerModule};

/// The Java grammar, ready to register in a [`scilex::Catalogue`].
pub static JAVA_LEXER: LexerModule =
    LexerModule::new(LexerId::JAVA, "java", lex_java, Some(fold_java), WORD_LISTS);
