#![warn(missing_docs)]
//! Scilex - Restartable Lexing and Folding Kernel
//!
//! # Overview
//!
//! `scilex` classifies source text into styles (token classes) and per-line fold levels for an
//! interactive editor. Grammars are single-pass, character-at-a-time state machines that can be
//! restarted at any line boundary: everything needed to resume is the style of the byte before
//! the restart point plus one state word persisted per line.
//!
//! All derived state (styles, line states, fold levels) is owned by the host behind the
//! [`Accessor`] trait. [`Document`] is a ready-made host on top of a rope.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LexerProcessor / ProcessingEdit            │  ← Editor integration
//! ├─────────────────────────────────────────────┤
//! │  LexerModule + Catalogue                    │  ← Registration
//! ├─────────────────────────────────────────────┤
//! │  Grammars (scilex-java, scilex-vim)         │  ← Tokenizer + Folder
//! ├─────────────────────────────────────────────┤
//! │  StyleContext, LineState, EscapeSequence,   │  ← Shared machinery
//! │  FoldLevel, task markers, look-around       │
//! ├─────────────────────────────────────────────┤
//! │  Accessor (Document: rope + derived state)  │  ← Host storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use scilex::{Accessor, Document, FoldLevel, KeywordSets, LexerId, LexerModule};
//!
//! // A toy grammar: digits are style 1, everything else default.
//! fn lex_digits(start: usize, length: usize, _: u8, _: &KeywordSets, styler: &mut dyn Accessor) {
//!     for pos in start..start + length {
//!         let style = u8::from(styler.byte_at(pos).is_ascii_digit());
//!         styler.set_style_range(pos, pos + 1, style);
//!     }
//! }
//!
//! static DIGITS: LexerModule = LexerModule::new(LexerId::new(999), "digits", lex_digits, None, &[]);
//!
//! let mut doc = Document::new("a1b22");
//! DIGITS.lex(0, doc.len(), 0, &KeywordSets::new(), &mut doc);
//! assert_eq!(doc.styles(), &[0, 1, 0, 1, 1]);
//! assert_eq!(doc.fold_level(0), FoldLevel::BASE);
//! ```
//!
//! # Module Description
//!
//! - [`accessor`] - host interface
//! - [`document`] - rope-backed reference host with edit tracking
//! - [`style_context`] - style-assigning cursor
//! - [`line_state`] - per-line resume state and nested-state packing
//! - [`fold`] - fold level record and level tracking
//! - [`registry`] - lexer modules and catalogue
//! - [`intervals`] / [`processing`] - editor-facing output

pub mod accessor;
pub mod char_class;
pub mod document;
pub mod error;
pub mod escape;
pub mod fold;
pub mod intervals;
pub mod keywords;
pub mod line_state;
pub mod lookaround;
pub mod markers;
pub mod processing;
pub mod registry;
pub mod style;
pub mod style_context;

pub use accessor::Accessor;
pub use document::Document;
pub use error::ScilexError;
pub use escape::EscapeSequence;
pub use fold::{FOLD_LEVEL_BASE, FoldLevel, LevelTracker};
pub use intervals::{FoldRegion, Interval, StyleId, StyleLayerId, lexer_style_id};
pub use keywords::{KeywordCategory, KeywordSets, WordList};
pub use line_state::{LineState, NestedStateStack};
pub use lookaround::{brace_on_next_line, lookback_non_white};
pub use markers::highlight_task_marker;
pub use processing::{
    DocumentProcessor, LexerProcessor, LexerProcessorConfig, ProcessingEdit, UpdateMode,
};
pub use registry::{Catalogue, LexFn, LexerId, LexerModule};
pub use style::LexStyle;
pub use style_context::{StyleContext, TokenText};
