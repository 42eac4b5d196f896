//! Vim styles and per-line flags.

use bitflags::bitflags;
use scilex::{KeywordCategory, LineState};

scilex::lex_styles! {
    /// Token classes of the Vim grammar.
    pub enum VimStyle {
        Default = 0,
        CommentLine = 1,
        Number = 2,
        /// `0zFF00.ED01`
        BlobHex = 3,
        StringDq = 4,
        StringSq = 5,
        EscapeChar = 6,
        Regex = 7,
        Operator = 8,
        Identifier = 9,
        /// `$HOME`, and the `g` of `g:name`.
        EnvVariable = 10,
        /// `&tabstop`
        Option = 11,
        /// `@a`
        Register = 12,
        Word = 13,
        /// A keyword used outside command position (`let end = 1`).
        WordDemoted = 14,
        Commands = 15,
        Function = 16,
    }
}

bitflags! {
    /// Mode flags of a Vim line state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VimLineFlags: u8 {
        /// The line's first visible text opens a comment.
        const LINE_COMMENT = 1;
        /// The line starts with `\` and continues the previous one.
        const LINE_CONTINUATION = 1 << 1;
        /// Inside an `autocmd` definition (kept across continuation lines).
        const AUTO_COMMAND = 1 << 2;
        /// After `vim9script`.
        const VIM9_SCRIPT = 1 << 3;
    }
}

impl VimLineFlags {
    /// Flags that survive into the next line.
    pub const CARRIED: Self = Self::AUTO_COMMAND.union(Self::VIM9_SCRIPT);

    /// Flags of a persisted line state.
    pub fn from_line_state(raw: u32) -> Self {
        Self::from_bits_truncate(LineState::from_raw(raw).flags())
    }

    /// The persisted word for these flags.
    pub fn to_line_state(self) -> u32 {
        LineState::default().with_flags(self.bits()).raw()
    }
}

/// Keyword categories consulted by the Vim lexer.
pub const WORD_LISTS: &[KeywordCategory] = &[KeywordCategory::Keyword, KeywordCategory::Command];
