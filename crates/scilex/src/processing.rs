//! Document processing: running a lexer over the dirty part of a [`Document`] and reporting the
//! derived state as editor-facing edits.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::debug;

use crate::accessor::Accessor;
use crate::document::Document;
use crate::intervals::{
    FoldRegion, Interval, StyleLayerId, fold_regions_from_levels, preserve_collapsed,
    styles_to_intervals,
};
use crate::keywords::KeywordSets;
use crate::registry::LexerModule;

/// What a lexer run changed in the editor-facing view of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingEdit {
    /// The lexer's styled runs, replacing everything previously shown on `layer`.
    ReplaceStyleLayer {
        /// Target layer.
        layer: StyleLayerId,
        /// Non-default runs in char offsets, ordered and non-overlapping.
        intervals: Vec<Interval>,
    },
    /// The document has no styled runs left.
    ClearStyleLayer {
        /// Target layer.
        layer: StyleLayerId,
    },
    /// Every fold region of the document.
    ReplaceFoldingRegions {
        /// Regions ordered by start line; `is_collapsed` is carried over from the previous run
        /// for regions whose line range did not change.
        regions: Vec<FoldRegion>,
        /// The host should keep its own collapsed state for unchanged ranges.
        preserve_collapsed: bool,
    },
    /// The document has no fold regions left.
    ClearFoldingRegions,
}

/// A processor that brings a document's derived state up to date.
pub trait DocumentProcessor {
    /// The error type returned by [`DocumentProcessor::process`].
    type Error;

    /// Update the document's persisted styles / states / levels and describe the result.
    fn process(&mut self, document: &mut Document) -> Result<Vec<ProcessingEdit>, Self::Error>;
}

/// How the last [`LexerProcessor`] run covered the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// First run: the whole document was lexed.
    Initial,
    /// Re-lexed from the first dirty line to the end.
    Incremental,
    /// Nothing was dirty.
    Skipped,
}

/// [`LexerProcessor`] options.
#[derive(Debug, Clone)]
pub struct LexerProcessorConfig {
    /// Layer the style intervals are reported on.
    pub layer: StyleLayerId,
    /// Report fold regions (for grammars with a folder).
    pub emit_folding: bool,
    /// Keep regions collapsed across updates when their line range is unchanged.
    pub preserve_collapsed: bool,
}

impl Default for LexerProcessorConfig {
    fn default() -> Self {
        Self {
            layer: StyleLayerId::LEXER,
            emit_folding: true,
            preserve_collapsed: true,
        }
    }
}

/// Drives one registered lexer over a [`Document`].
#[derive(Debug, Clone)]
pub struct LexerProcessor {
    module: &'static LexerModule,
    keywords: Arc<KeywordSets>,
    config: LexerProcessorConfig,
    initialized: bool,
    last_update_mode: Option<UpdateMode>,
    regions: Vec<FoldRegion>,
}

impl LexerProcessor {
    /// A processor for `module` using `keywords`.
    pub fn new(module: &'static LexerModule, keywords: Arc<KeywordSets>) -> Self {
        Self::with_config(module, keywords, LexerProcessorConfig::default())
    }

    /// A processor with explicit options.
    pub fn with_config(
        module: &'static LexerModule,
        keywords: Arc<KeywordSets>,
        config: LexerProcessorConfig,
    ) -> Self {
        Self {
            module,
            keywords,
            config,
            initialized: false,
            last_update_mode: None,
            regions: Vec::new(),
        }
    }

    /// The lexer being driven.
    pub fn module(&self) -> &'static LexerModule {
        self.module
    }

    /// Current options.
    pub fn config(&self) -> &LexerProcessorConfig {
        &self.config
    }

    /// How the most recent run covered the document.
    pub fn last_update_mode(&self) -> Option<UpdateMode> {
        self.last_update_mode
    }

    /// Fold regions reported by the most recent [`process`](DocumentProcessor::process) call.
    pub fn fold_regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    /// Collapse or expand the innermost region containing `line`.
    ///
    /// Returns the new collapsed state, or `None` when no region contains `line`.
    pub fn toggle_fold(&mut self, line: usize) -> Option<bool> {
        let region = self
            .regions
            .iter_mut()
            .rev()
            .find(|region| region.contains_line(line))?;
        region.toggle();
        debug!(
            start_line = region.start_line,
            end_line = region.end_line,
            collapsed = region.is_collapsed,
            "toggled fold"
        );
        Some(region.is_collapsed)
    }

    /// Lex and fold everything from the first dirty line to the end of `document`.
    pub fn update(&mut self, document: &mut Document) -> UpdateMode {
        let len = document.len();
        if self.initialized && document.styled_end() >= len {
            self.last_update_mode = Some(UpdateMode::Skipped);
            return UpdateMode::Skipped;
        }

        let mode = if self.initialized {
            UpdateMode::Incremental
        } else {
            UpdateMode::Initial
        };
        let first_line = match mode {
            UpdateMode::Initial => 0,
            _ => document.line_of(document.styled_end()),
        };
        let start = document.line_start(first_line);
        let init_style = if start > 0 {
            document.style_at(start - 1)
        } else {
            0
        };

        self.module
            .lex(start, len - start, init_style, &self.keywords, document);
        self.module
            .fold(start, len - start, init_style, &self.keywords, document);
        document.set_styled_end(len);

        debug!(
            lexer = self.module.name(),
            ?mode,
            first_line,
            bytes = len - start,
            "lexer pass"
        );
        self.initialized = true;
        self.last_update_mode = Some(mode);
        mode
    }
}

impl DocumentProcessor for LexerProcessor {
    type Error = Infallible;

    fn process(&mut self, document: &mut Document) -> Result<Vec<ProcessingEdit>, Self::Error> {
        if self.update(document) == UpdateMode::Skipped {
            return Ok(Vec::new());
        }

        let layer = self.config.layer;
        let intervals = styles_to_intervals(document, self.module.id());
        let mut edits = vec![if intervals.is_empty() {
            ProcessingEdit::ClearStyleLayer { layer }
        } else {
            ProcessingEdit::ReplaceStyleLayer { layer, intervals }
        }];

        if self.config.emit_folding && self.module.has_folder() {
            let mut regions = fold_regions_from_levels(document.fold_levels());
            if self.config.preserve_collapsed {
                preserve_collapsed(&mut regions, &self.regions);
            }
            self.regions.clone_from(&regions);
            edits.push(if regions.is_empty() {
                ProcessingEdit::ClearFoldingRegions
            } else {
                ProcessingEdit::ReplaceFoldingRegions {
                    regions,
                    preserve_collapsed: self.config.preserve_collapsed,
                }
            });
        }
        Ok(edits)
    }
}
