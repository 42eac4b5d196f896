//! Language descriptors and lookup.

use std::path::Path;

use scilex::{Catalogue, KeywordCategory, KeywordSets, LexerModule, WordList};
use tracing::debug;

use crate::comment::CommentTokens;
use crate::config::KeywordConfig;
use crate::error::LanguageError;
use crate::java::JAVA;
use crate::vim::VIM;

/// Everything a host needs to lex one language.
#[derive(Debug)]
pub struct Language {
    /// Lower-case lookup name.
    pub name: &'static str,
    /// Name shown to users.
    pub display_name: &'static str,
    /// File extensions without the dot, matched case-insensitively.
    pub extensions: &'static [&'static str],
    /// Exact file names (e.g. `.vimrc`).
    pub file_names: &'static [&'static str],
    /// Comment delimiters.
    pub comments: CommentTokens,
    /// The grammar.
    pub lexer: &'static LexerModule,
    /// Built-in words per category, whitespace separated.
    pub keywords: &'static [(KeywordCategory, &'static str)],
}

impl Language {
    /// The built-in keyword tables.
    pub fn default_keywords(&self) -> KeywordSets {
        let mut sets = KeywordSets::new();
        for &(category, words) in self.keywords {
            sets.entry(category).extend(&WordList::from_words(words));
        }
        sets
    }

    /// The built-in tables with `config` merged over them.
    pub fn keywords_with(&self, config: &KeywordConfig) -> Result<KeywordSets, LanguageError> {
        if let Some(found) = config.language.as_deref()
            && !found.eq_ignore_ascii_case(self.name)
        {
            return Err(LanguageError::LanguageMismatch {
                expected: self.name.to_string(),
                found: found.to_string(),
            });
        }
        let mut sets = self.default_keywords();
        config.apply_to(&mut sets);
        debug!(
            language = self.name,
            replace = config.replace,
            categories = config.keywords.len(),
            "merged keyword configuration"
        );
        Ok(sets)
    }

    /// Whether `path` names a file of this language.
    pub fn matches_path(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && self.file_names.contains(&name)
        {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Every built-in language.
pub static LANGUAGES: [&Language; 2] = [&JAVA, &VIM];

/// Case-insensitive lookup by language name or lexer name.
pub fn find_by_name(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().copied().find(|lang| {
        lang.name.eq_ignore_ascii_case(name) || lang.lexer.name().eq_ignore_ascii_case(name)
    })
}

/// Lookup by file name, then extension.
pub fn find_by_path(path: impl AsRef<Path>) -> Option<&'static Language> {
    let path = path.as_ref();
    LANGUAGES.iter().copied().find(|lang| lang.matches_path(path))
}

/// [`find_by_name`], as an error when missing.
pub fn require_by_name(name: &str) -> Result<&'static Language, LanguageError> {
    find_by_name(name).ok_or_else(|| LanguageError::UnknownLanguage(name.to_string()))
}

/// [`find_by_path`], as an error when missing.
pub fn require_by_path(path: impl AsRef<Path>) -> Result<&'static Language, LanguageError> {
    let path = path.as_ref();
    find_by_path(path).ok_or_else(|| LanguageError::UnknownFileType(path.display().to_string()))
}

/// A catalogue with every built-in grammar registered.
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    for lang in LANGUAGES {
        catalogue.register(lang.lexer);
    }
    catalogue
}
