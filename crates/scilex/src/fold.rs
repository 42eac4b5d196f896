//! Fold levels and the per-line bookkeeping shared by folders.

use crate::accessor::Accessor;

/// Level of a line outside every fold.
pub const FOLD_LEVEL_BASE: u16 = 0x400;
/// Mask selecting the level number from the low half of a packed level.
pub const FOLD_LEVEL_NUMBER_MASK: u32 = 0x0FFF;
/// Set on lines that open a fold.
pub const FOLD_LEVEL_HEADER_FLAG: u32 = 0x2000;

/// The fold level of one line: the depth at its start and the depth carried to the next line.
///
/// Packed as `current | header | next << 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldLevel {
    current: u16,
    next: u16,
    header: bool,
}

impl Default for FoldLevel {
    fn default() -> Self {
        Self::BASE
    }
}

impl FoldLevel {
    /// A line outside every fold.
    pub const BASE: Self = Self::new(FOLD_LEVEL_BASE, FOLD_LEVEL_BASE);

    /// Level of a line starting at depth `current` and ending at depth `next`.
    ///
    /// The line is a header iff `current < next`.
    pub const fn new(current: u16, next: u16) -> Self {
        Self {
            current,
            next,
            header: current < next,
        }
    }

    /// Depth at the start of the line.
    #[inline]
    pub const fn current(self) -> u16 {
        self.current
    }

    /// Depth carried to the next line.
    #[inline]
    pub const fn next(self) -> u16 {
        self.next
    }

    /// Whether the line opens a fold.
    #[inline]
    pub const fn is_header(self) -> bool {
        self.header
    }

    /// Nesting depth relative to [`FOLD_LEVEL_BASE`].
    #[inline]
    pub const fn depth(self) -> u16 {
        self.current.saturating_sub(FOLD_LEVEL_BASE)
    }

    /// The persisted representation.
    pub const fn to_raw(self) -> u32 {
        let mut raw = (self.current as u32 & FOLD_LEVEL_NUMBER_MASK) | ((self.next as u32) << 16);
        if self.header {
            raw |= FOLD_LEVEL_HEADER_FLAG;
        }
        raw
    }

    /// Decode a persisted level.
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            current: (raw & FOLD_LEVEL_NUMBER_MASK) as u16,
            next: (raw >> 16) as u16,
            header: raw & FOLD_LEVEL_HEADER_FLAG != 0,
        }
    }
}

/// Running depth of a fold pass, written out one line at a time.
#[derive(Debug, Clone, Copy)]
pub struct LevelTracker {
    line: usize,
    level_current: i32,
    level_next: i32,
}

impl LevelTracker {
    /// Resume at `line`, continuing from the depth the previous line carried forward.
    pub fn resume<A: Accessor + ?Sized>(styler: &A, line: usize) -> Self {
        let level_current = if line > 0 {
            i32::from(styler.fold_level(line - 1).next())
        } else {
            i32::from(FOLD_LEVEL_BASE)
        };
        Self {
            line,
            level_current,
            level_next: level_current,
        }
    }

    /// The line being folded.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Open one level.
    #[inline]
    pub fn open(&mut self) {
        self.level_next += 1;
    }

    /// Close one level.
    #[inline]
    pub fn close(&mut self) {
        self.level_next -= 1;
    }

    /// Apply a signed delta to the running depth.
    #[inline]
    pub fn adjust(&mut self, delta: i32) {
        self.level_next += delta;
    }

    /// Raise the running depth back to the base if unbalanced closers took it lower.
    #[inline]
    pub fn clamp_to_base(&mut self) {
        self.level_next = self.level_next.max(i32::from(FOLD_LEVEL_BASE));
    }

    /// Persist the current line's level and move to the next line.
    pub fn finish_line<A: Accessor + ?Sized>(&mut self, styler: &mut A) -> FoldLevel {
        let clamp = |level: i32| {
            level.clamp(i32::from(FOLD_LEVEL_BASE), FOLD_LEVEL_NUMBER_MASK as i32) as u16
        };
        let level = FoldLevel::new(clamp(self.level_current), clamp(self.level_next));
        styler.set_fold_level(self.line, level);
        self.line += 1;
        self.level_current = self.level_next;
        level
    }
}
