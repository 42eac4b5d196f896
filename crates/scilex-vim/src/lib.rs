#![warn(missing_docs)]
//! Scilex Vim - Vim Script Lexer and Folder
//!
//! Styles legacy Vim script and Vim9 script: `"` and `#` comments, string escapes, blobs,
//! `$ENV` / `&option` / `@register` references, variable namespaces, keywords in command
//! position, `autocmd` bodies and `syntax match` / `syntax region` patterns.
//!
//! A keyword is only styled as [`VimStyle::Word`] at the start of a command (the line start,
//! or after a `|` separator); elsewhere it becomes [`VimStyle::WordDemoted`].
//!
//! ```rust
//! use scilex::{Accessor, Document, KeywordCategory, KeywordSets, WordList};
//! use scilex_vim::{VIM_LEXER, VimStyle};
//!
//! let keywords = KeywordSets::new()
//!     .with(KeywordCategory::Keyword, WordList::from_words("if endif let"))
//!     .with(KeywordCategory::Command, WordList::from_words("echo"));
//! let mut doc = Document::new("if x\n  echo 'yes'\nendif\n");
//! VIM_LEXER.lex(0, doc.len(), 0, &keywords, &mut doc);
//! VIM_LEXER.fold(0, doc.len(), 0, &keywords, &mut doc);
//!
//! assert_eq!(doc.style_at(0), VimStyle::Word as u8);
//! assert_eq!(doc.style_at(7), VimStyle::Commands as u8);
//! assert!(doc.fold_level(0).is_header());
//! ```

mod folder;
mod lexer;
pub mod style;

pub use folder::fold_vim;
pub use lexer::lex_vim;
pub use style::{VimLineFlags, VimStyle, WORD_LISTS};

use scilex::{LexerId, LexerModule};

/// The Vim grammar, ready to register in a [`scilex::Catalogue`].
pub static VIM_LEXER: LexerModule =
    LexerModule::new(LexerId::VIM, "vim", lex_vim, Some(fold_vim), WORD_LISTS);
