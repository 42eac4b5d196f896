//! Errors from language lookup and keyword configuration loading.

use thiserror::Error;

/// Errors produced while resolving languages and loading keyword configuration.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("YAML parse error: {0}")]
    /// The keyword configuration is not valid YAML or has an unexpected shape.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("unknown language '{0}'")]
    /// No language with this name.
    UnknownLanguage(String),

    #[error("no language for file '{0}'")]
    /// Neither the file name nor its extension maps to a language.
    UnknownFileType(String),

    #[error("keyword configuration is for '{found}', not '{expected}'")]
    /// A keyword configuration names a different language than the one it is applied to.
    LanguageMismatch {
        /// The language the configuration is applied to.
        expected: String,
        /// The language named in the configuration.
        found: String,
    },
}
