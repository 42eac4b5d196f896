//! Keyword lists consulted when an identifier closes.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// The role a keyword list plays for a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    /// Reserved words.
    Keyword,
    /// Primitive / built-in type names.
    Type,
    /// Preprocessor-like directives (Java: AIDL modifiers).
    Directive,
    /// Well-known class names.
    Class,
    /// Well-known interface names.
    Interface,
    /// Well-known enumeration names.
    Enumeration,
    /// Well-known constants.
    Constant,
    /// Well-known functions.
    Function,
    /// Commands (Vim `:` commands).
    Command,
}

impl KeywordCategory {
    /// Every category.
    pub const ALL: [Self; 9] = [
        Self::Keyword,
        Self::Type,
        Self::Directive,
        Self::Class,
        Self::Interface,
        Self::Enumeration,
        Self::Constant,
        Self::Function,
        Self::Command,
    ];

    /// The name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Directive => "directive",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enumeration => "enumeration",
            Self::Constant => "constant",
            Self::Function => "function",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of words compared byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<Box<[u8]>>,
}

impl WordList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated word list.
    ///
    /// A trailing `()` marks a function-like word in keyword data files and is dropped.
    pub fn from_words(text: &str) -> Self {
        let mut list = Self::new();
        for word in text.split_whitespace() {
            list.insert(word);
        }
        list
    }

    /// Add one word.
    pub fn insert(&mut self, word: &str) {
        let word = word.strip_suffix("()").unwrap_or(word);
        if !word.is_empty() {
            self.words.insert(word.as_bytes().into());
        }
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for an empty list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add every word of `other`.
    pub fn extend(&mut self, other: &WordList) {
        self.words.extend(other.words.iter().cloned());
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word);
        }
        list
    }
}

/// Immutable keyword tables handed to a lexer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSets {
    lists: BTreeMap<KeywordCategory, WordList>,
}

impl KeywordSets {
    /// No keywords at all; every identifier falls through to the heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`KeywordSets::set`].
    pub fn with(mut self, category: KeywordCategory, list: WordList) -> Self {
        self.set(category, list);
        self
    }

    /// Replace the list of `category`.
    pub fn set(&mut self, category: KeywordCategory, list: WordList) {
        self.lists.insert(category, list);
    }

    /// The list of `category`, if any.
    pub fn get(&self, category: KeywordCategory) -> Option<&WordList> {
        self.lists.get(&category)
    }

    /// Mutable access, creating an empty list on demand.
    pub fn entry(&mut self, category: KeywordCategory) -> &mut WordList {
        self.lists.entry(category).or_default()
    }

    /// Whether `word` belongs to `category`.
    #[inline]
    pub fn contains(&self, category: KeywordCategory, word: &[u8]) -> bool {
        self.lists.get(&category).is_some_and(|list| list.contains(word))
    }

    /// Categories with a list, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = KeywordCategory> + '_ {
        self.lists.keys().copied()
    }
}
