//! Errors raised by the host-facing layers.
//!
//! Lexing and folding never fail; only document edits and lexer lookups do.

use thiserror::Error;

/// Errors returned by [`Document`](crate::Document) and [`Catalogue`](crate::Catalogue).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScilexError {
    #[error("edit range {start}..{end} is outside the document (length {len})")]
    /// The edited range does not lie inside the document.
    EditOutOfBounds {
        /// Range start (bytes).
        start: usize,
        /// Range end (bytes, exclusive).
        end: usize,
        /// Document length (bytes).
        len: usize,
    },

    #[error("byte offset {0} is not on a UTF-8 character boundary")]
    /// An edit boundary splits a multi-byte character.
    NotCharBoundary(usize),

    #[error("no lexer named '{0}'")]
    /// Lookup by name failed.
    UnknownLexer(String),

    #[error("no lexer with id {0}")]
    /// Lookup by id failed.
    UnknownLexerId(u32),
}

/// Result alias for fallible host operations.
pub type Result<T> = std::result::Result<T, ScilexError>;
