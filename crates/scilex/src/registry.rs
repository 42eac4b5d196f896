//! Lexer registration and lookup.

use std::fmt;

use tracing::trace;

use crate::accessor::Accessor;
use crate::error::{Result, ScilexError};
use crate::keywords::{KeywordCategory, KeywordSets};

/// Numeric lexer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexerId(pub u32);

impl LexerId {
    /// Create a lexer id from a raw numeric identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Plain text: no styling.
    pub const NULL: Self = Self(1);

    /// Java (also Android IDL and BeanShell).
    pub const JAVA: Self = Self(3);

    /// Vim script, legacy and Vim9.
    pub const VIM: Self = Self(120);
}

impl fmt::Display for LexerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tokenizer / folder entry point: `(start, length, init_style, keywords, host)`.
///
/// `start` must be a line start; `init_style` is the style of the byte before `start`.
pub type LexFn = fn(usize, usize, u8, &KeywordSets, &mut dyn Accessor);

/// A grammar as the host sees it.
#[derive(Clone, Copy)]
pub struct LexerModule {
    id: LexerId,
    name: &'static str,
    lexer: LexFn,
    folder: Option<LexFn>,
    word_lists: &'static [KeywordCategory],
}

impl fmt::Debug for LexerModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexerModule")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("has_folder", &self.folder.is_some())
            .field("word_lists", &self.word_lists)
            .finish()
    }
}

impl LexerModule {
    /// Describe a grammar.
    pub const fn new(
        id: LexerId,
        name: &'static str,
        lexer: LexFn,
        folder: Option<LexFn>,
        word_lists: &'static [KeywordCategory],
    ) -> Self {
        Self {
            id,
            name,
            lexer,
            folder,
            word_lists,
        }
    }

    /// Numeric id.
    pub fn id(&self) -> LexerId {
        self.id
    }

    /// Lower-case name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Keyword categories the lexer consults, in lookup order.
    pub fn word_lists(&self) -> &'static [KeywordCategory] {
        self.word_lists
    }

    /// Whether the grammar folds.
    pub fn has_folder(&self) -> bool {
        self.folder.is_some()
    }

    /// Style `[start, start + length)`.
    pub fn lex(
        &self,
        start: usize,
        length: usize,
        init_style: u8,
        keywords: &KeywordSets,
        styler: &mut dyn Accessor,
    ) {
        trace!(lexer = self.name, start, length, init_style, "lex");
        (self.lexer)(start, length, init_style, keywords, styler);
    }

    /// Fold the lines covering `[start, start + length)`.
    ///
    /// Folding restarts one line earlier: an edit may have removed what made the previous line
    /// a header, and the brace-on-next-line rule ties a line's level to its successor.
    pub fn fold(
        &self,
        start: usize,
        length: usize,
        init_style: u8,
        keywords: &KeywordSets,
        styler: &mut dyn Accessor,
    ) {
        let Some(folder) = self.folder else {
            return;
        };
        let end = start.saturating_add(length).min(styler.len());
        let mut start = start.min(end);
        let mut init_style = init_style;
        let line = styler.line_of(start);
        if line > 0 {
            start = styler.line_start(line - 1);
            init_style = if start > 0 { styler.style_at(start - 1) } else { 0 };
        }
        trace!(lexer = self.name, start, end, "fold");
        folder(start, end - start, init_style, keywords, styler);
    }
}

/// The set of lexers available to a host.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    modules: Vec<&'static LexerModule>,
}

impl Catalogue {
    /// An empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `module`, replacing any module with the same id.
    pub fn register(&mut self, module: &'static LexerModule) {
        match self.modules.iter_mut().find(|m| m.id == module.id) {
            Some(slot) => *slot = module,
            None => self.modules.push(module),
        }
    }

    /// Lookup by id.
    pub fn find(&self, id: LexerId) -> Option<&'static LexerModule> {
        self.modules.iter().copied().find(|m| m.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&'static LexerModule> {
        self.modules
            .iter()
            .copied()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Lookup by id, as an error when missing.
    pub fn require(&self, id: LexerId) -> Result<&'static LexerModule> {
        self.find(id).ok_or(ScilexError::UnknownLexerId(id.0))
    }

    /// Lookup by name, as an error when missing.
    pub fn require_by_name(&self, name: &str) -> Result<&'static LexerModule> {
        self.find_by_name(name)
            .ok_or_else(|| ScilexError::UnknownLexer(name.to_string()))
    }

    /// Registered modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static LexerModule> + '_ {
        self.modules.iter().copied()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
