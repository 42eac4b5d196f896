#![warn(missing_docs)]
//! `scilex-lang` - language descriptors for `scilex`.
//!
//! Ties each grammar to the data a host needs around it: the lookup name, file extensions,
//! comment tokens and built-in keyword lists. Users can extend or replace keyword lists with a
//! small YAML file ([`KeywordConfig`]).
//!
//! ```rust
//! use scilex::{Accessor, Document};
//! use scilex_lang::{catalogue, find_by_path};
//! use scilex_java::JavaStyle;
//!
//! let lang = find_by_path("Hello.java").unwrap();
//! assert!(catalogue().find(lang.lexer.id()).is_some());
//!
//! let keywords = lang.default_keywords();
//! let mut doc = Document::new("String s = null;\n");
//! lang.lexer.lex(0, doc.len(), 0, &keywords, &mut doc);
//! assert_eq!(doc.style_at(0), JavaStyle::Class as u8);
//! ```

mod comment;
mod config;
mod error;
mod java;
mod language;
mod vim;

pub use comment::CommentTokens;
pub use config::{KeywordConfig, Words};
pub use error::LanguageError;
pub use java::JAVA;
pub use language::{
    LANGUAGES, Language, catalogue, find_by_name, find_by_path, require_by_name, require_by_path,
};
pub use vim::VIM;
