//! Per-line resume state.
//!
//! A [`LineState`] is the only context carried from one line to the next. Its layout:
//!
//! | bits      | content                                                  |
//! |-----------|----------------------------------------------------------|
//! | `0..=7`   | grammar mode flags                                       |
//! | `8..=10`  | nested-state count, saturating at 7                      |
//! | `11..=22` | up to four 3-bit outer-style codes, innermost stored last |
//!
//! Nested styles are stored relative to a grammar's base style: code `0` is the default style
//! and code `n` is `base + n`.

use crate::style::LexStyle;

const COUNT_SHIFT: u32 = 8;
const COUNT_MASK: u32 = 0b111;
const VALUES_SHIFT: u32 = 11;
const VALUE_BITS: u32 = 3;
const VALUE_MASK: u32 = 0b111;

/// Stack of literal styles suspended by an open interpolation (`\{ ... }`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedStateStack<S: LexStyle> {
    base: u8,
    states: Vec<S>,
}

impl<S: LexStyle> NestedStateStack<S> {
    /// An empty stack whose entries are encoded relative to `base`.
    pub fn new(base: u8) -> Self {
        Self {
            base,
            states: Vec::new(),
        }
    }

    /// Push an outer style.
    pub fn push(&mut self, state: S) {
        self.states.push(state);
    }

    /// Pop the innermost style, or the default style when empty.
    pub fn take_and_pop(&mut self) -> S {
        self.states.pop().unwrap_or(S::DEFAULT)
    }

    /// Returns `true` outside any interpolation.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of open interpolations.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Entries from outermost to innermost.
    pub fn as_slice(&self) -> &[S] {
        &self.states
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    fn encode(&self, state: S) -> u32 {
        if state == S::DEFAULT {
            0
        } else {
            u32::from(state.to_raw().wrapping_sub(self.base)) & VALUE_MASK
        }
    }

    fn decode(&self, code: u32) -> S {
        if code == 0 {
            S::DEFAULT
        } else {
            // code is at most 7
            S::from_raw_or_default(self.base.wrapping_add(code as u8))
        }
    }
}

/// Packed per-line state word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineState(u32);

impl LineState {
    /// Most nested styles a state word can hold.
    pub const MAX_NESTED_VALUES: usize = 4;

    /// Reinterpret a persisted word.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The persisted word.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Grammar mode flags (low byte).
    #[inline]
    pub const fn flags(self) -> u8 {
        self.0 as u8
    }

    /// Same nested section, different flags.
    #[inline]
    pub const fn with_flags(self, flags: u8) -> Self {
        Self((self.0 & !0xff) | flags as u32)
    }

    /// Stored nested depth (saturated at 7).
    #[inline]
    pub const fn nested_count(self) -> usize {
        ((self.0 >> COUNT_SHIFT) & COUNT_MASK) as usize
    }

    /// Compose a state word from mode flags and the nested stack.
    ///
    /// Stacks deeper than [`LineState::MAX_NESTED_VALUES`] keep their innermost entries.
    pub fn pack<S: LexStyle>(flags: u8, stack: &NestedStateStack<S>) -> Self {
        let states = stack.as_slice();
        let count = (states.len() as u32).min(COUNT_MASK);
        let stored = states.len().min(Self::MAX_NESTED_VALUES);
        let values = states[states.len() - stored..]
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &state)| {
                acc | (stack.encode(state) << (i as u32 * VALUE_BITS))
            });
        Self(u32::from(flags) | (count << COUNT_SHIFT) | (values << VALUES_SHIFT))
    }

    /// Restore the nested stack encoded in this word, replacing `stack`'s contents.
    pub fn unpack_into<S: LexStyle>(self, stack: &mut NestedStateStack<S>) {
        stack.clear();
        let stored = self.nested_count().min(Self::MAX_NESTED_VALUES);
        for i in 0..stored as u32 {
            let code = (self.0 >> (VALUES_SHIFT + i * VALUE_BITS)) & VALUE_MASK;
            let state = stack.decode(code);
            stack.push(state);
        }
    }
}
