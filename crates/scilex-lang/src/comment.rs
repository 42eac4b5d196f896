//! Comment delimiters of a language.

/// Comment tokens of a language, usable in `static` descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentTokens {
    /// Line comment token (e.g. `//`, `"`).
    pub line: Option<&'static str>,
    /// Block comment start and end tokens (e.g. `/*`, `*/`).
    pub block: Option<(&'static str, &'static str)>,
}

impl CommentTokens {
    /// Only line comments.
    pub const fn line(token: &'static str) -> Self {
        Self {
            line: Some(token),
            block: None,
        }
    }

    /// Only block comments.
    pub const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            line: None,
            block: Some((start, end)),
        }
    }

    /// Both line and block comments.
    pub const fn line_and_block(line: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            line: Some(line),
            block: Some((start, end)),
        }
    }

    /// Returns `true` if a non-empty line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are non-empty.
    pub fn has_block(&self) -> bool {
        self.block
            .is_some_and(|(start, end)| !start.is_empty() && !end.is_empty())
    }

    /// Whether the first visible text of `line` is a line comment token.
    pub fn is_line_comment(&self, line: &str) -> bool {
        match self.line {
            Some(token) if !token.is_empty() => line.trim_start().starts_with(token),
            _ => false,
        }
    }
}
