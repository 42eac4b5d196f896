//! Lexer output in editor-facing form: style intervals and fold regions.

use crate::document::Document;
use crate::fold::FoldLevel;
use crate::registry::LexerId;

/// Style ID type
pub type StyleId = u32;

/// Namespace of style ids produced from lexer styles: `LEXER_STYLE_BASE | lexer << 8 | style`.
pub const LEXER_STYLE_BASE: StyleId = 0x0500_0000;

/// The style id for `style` of lexer `lexer`.
pub const fn lexer_style_id(lexer: LexerId, style: u8) -> StyleId {
    LEXER_STYLE_BASE | ((lexer.0 & 0xffff) << 8) | style as u32
}

/// Inverse of [`lexer_style_id`]; `None` for ids outside the lexer namespace.
pub const fn split_lexer_style_id(id: StyleId) -> Option<(LexerId, u8)> {
    if id & 0xff00_0000 != LEXER_STYLE_BASE {
        return None;
    }
    Some((LexerId((id >> 8) & 0xffff), id as u8))
}

/// Style layer ID
///
/// Distinguishes style sources so that one layer can be replaced or cleared without touching
/// the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleLayerId(pub u32);

impl StyleLayerId {
    /// Create a style layer id from a raw numeric identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Styles produced by a registered lexer.
    pub const LEXER: Self = Self(6);
}

/// A styled run `[start, end)` in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    /// Start offset (chars)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Style ID
    pub style_id: StyleId,
}

impl Interval {
    /// Create a new interval with `[start, end)` offsets and a style id.
    pub fn new(start: usize, end: usize, style_id: StyleId) -> Self {
        Self {
            start,
            end,
            style_id,
        }
    }

    /// Check if interval contains a specific position
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if two intervals overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Convert the document's per-byte styles into char-offset intervals.
///
/// Adjacent bytes with equal style merge into one interval; the default style (`0`) produces
/// none.
pub fn styles_to_intervals(document: &Document, lexer: LexerId) -> Vec<Interval> {
    let styles = document.styles();
    let mut intervals = Vec::new();
    let mut run_start = 0;
    while run_start < styles.len() {
        let style = styles[run_start];
        let run_end = styles[run_start..]
            .iter()
            .position(|&s| s != style)
            .map_or(styles.len(), |n| run_start + n);
        if style != 0 {
            let start = document.byte_to_char(run_start);
            let end = document.byte_to_char(run_end);
            if start < end {
                intervals.push(Interval::new(start, end, lexer_style_id(lexer, style)));
            }
        }
        run_start = run_end;
    }
    intervals
}

/// Fold region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    /// Start line number (the header line)
    pub start_line: usize,
    /// End line number (inclusive)
    pub end_line: usize,
    /// Whether folded
    pub is_collapsed: bool,
    /// Placeholder text shown when folded (e.g., "[...]")
    pub placeholder: String,
}

impl FoldRegion {
    /// Create a folding region for an inclusive line range.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self::with_placeholder(start_line, end_line, String::from("[...]"))
    }

    /// Create a folding region with a custom placeholder string.
    pub fn with_placeholder(start_line: usize, end_line: usize, placeholder: String) -> Self {
        Self {
            start_line,
            end_line,
            is_collapsed: false,
            placeholder,
        }
    }

    /// Collapse
    pub fn collapse(&mut self) {
        self.is_collapsed = true;
    }

    /// Toggle fold state
    pub fn toggle(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    /// Check if line number is within fold region
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// Derive fold regions from per-line levels.
///
/// Each header line opens a region that extends over the following lines whose starting depth
/// is deeper than the header's. Regions are returned ordered by start line.
pub fn fold_regions_from_levels(levels: &[FoldLevel]) -> Vec<FoldRegion> {
    let mut regions = Vec::new();
    let mut open: Vec<(usize, u16)> = Vec::new();
    for (line, level) in levels.iter().enumerate() {
        while let Some(&(start, depth)) = open.last() {
            if level.current() > depth {
                break;
            }
            open.pop();
            if line - 1 > start {
                regions.push(FoldRegion::new(start, line - 1));
            }
        }
        if level.is_header() {
            open.push((line, level.current()));
        }
    }
    let last = levels.len().saturating_sub(1);
    for (start, _) in open.into_iter().rev() {
        if last > start {
            regions.push(FoldRegion::new(start, last));
        }
    }
    regions.sort_by_key(|region| (region.start_line, std::cmp::Reverse(region.end_line)));
    regions
}

/// Copy the collapsed flag from `previous` onto regions of `regions` with the same line range.
pub fn preserve_collapsed(regions: &mut [FoldRegion], previous: &[FoldRegion]) {
    for region in regions.iter_mut() {
        region.is_collapsed = previous.iter().any(|old| {
            old.is_collapsed
                && old.start_line == region.start_line
                && old.end_line == region.end_line
        });
    }
}
