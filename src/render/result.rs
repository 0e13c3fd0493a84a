//! Rendering result with statistics.

use crate::model::BlockKind;
use serde::{Deserialize, Serialize};

/// Result of rendering content, including output and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Check if any formula failed to render.
    pub fn has_errors(&self) -> bool {
        self.stats.has_errors()
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of HTML blocks rendered
    pub html_blocks: u32,

    /// Number of LaTeX blocks rendered
    pub latex_blocks: u32,

    /// Number of plain text blocks rendered
    pub plain_blocks: u32,

    /// Number of Markdown blocks rendered
    pub markdown_blocks: u32,

    /// Number of augmented text blocks rendered
    pub augmented_blocks: u32,

    /// Number of inline math spans found
    pub math_spans: u32,

    /// Spans the converter rejected
    pub conversion_errors: u32,

    /// Formulas the typesetting engine rejected
    pub typeset_errors: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a block kind.
    pub fn add_block(&mut self, kind: BlockKind) {
        match kind {
            BlockKind::Html => self.html_blocks += 1,
            BlockKind::Latex => self.latex_blocks += 1,
            BlockKind::Plain => self.plain_blocks += 1,
            BlockKind::Markdown => self.markdown_blocks += 1,
            BlockKind::Augmented => self.augmented_blocks += 1,
        }
    }

    /// Count for a single block kind.
    pub fn blocks_of(&self, kind: BlockKind) -> u32 {
        match kind {
            BlockKind::Html => self.html_blocks,
            BlockKind::Latex => self.latex_blocks,
            BlockKind::Plain => self.plain_blocks,
            BlockKind::Markdown => self.markdown_blocks,
            BlockKind::Augmented => self.augmented_blocks,
        }
    }

    /// Total number of blocks rendered.
    pub fn block_count(&self) -> u32 {
        BlockKind::ALL.iter().map(|kind| self.blocks_of(*kind)).sum()
    }

    /// Increment math span count.
    pub fn add_math_span(&mut self) {
        self.math_spans += 1;
    }

    /// Increment conversion error count.
    pub fn add_conversion_error(&mut self) {
        self.conversion_errors += 1;
    }

    /// Increment typeset error count.
    pub fn add_typeset_error(&mut self) {
        self.typeset_errors += 1;
    }

    /// Total number of failed formulas.
    pub fn error_count(&self) -> u32 {
        self.conversion_errors + self.typeset_errors
    }

    /// Check if any formula failed.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.html_blocks += other.html_blocks;
        self.latex_blocks += other.latex_blocks;
        self.plain_blocks += other.plain_blocks;
        self.markdown_blocks += other.markdown_blocks;
        self.augmented_blocks += other.augmented_blocks;
        self.math_spans += other.math_spans;
        self.conversion_errors += other.conversion_errors;
        self.typeset_errors += other.typeset_errors;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
