//! YAML keyword overrides.
//!
//! ```yaml
//! language: java        # optional; checked against the language it is applied to
//! replace: false        # true replaces the listed categories instead of extending them
//! keywords:
//!   class: Foo Bar      # whitespace separated
//!   constant: [LIMIT, ORIGIN]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use scilex::{KeywordCategory, KeywordSets, WordList};
use serde::{Deserialize, Serialize};

use crate::error::LanguageError;

/// Words of one category, as a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Words {
    /// Whitespace separated words.
    Text(String),
    /// One word per entry.
    List(Vec<String>),
}

impl Words {
    /// The parsed word list.
    pub fn to_word_list(&self) -> WordList {
        match self {
            Words::Text(text) => WordList::from_words(text),
            Words::List(words) => words.iter().map(String::as_str).collect(),
        }
    }
}

/// User keyword configuration, merged over a language's built-in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
    /// Language the file is written for.
    #[serde(default)]
    pub language: Option<String>,
    /// Replace the listed categories instead of extending them.
    #[serde(default)]
    pub replace: bool,
    /// Words per category.
    #[serde(default)]
    pub keywords: BTreeMap<KeywordCategory, Words>,
}

impl KeywordConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LanguageError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a configuration file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, LanguageError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Merge into `sets`.
    pub fn apply_to(&self, sets: &mut KeywordSets) {
        for (&category, words) in &self.keywords {
            let list = words.to_word_list();
            if self.replace {
                sets.set(category, list);
            } else {
                sets.entry(category).extend(&list);
            }
        }
    }
}
