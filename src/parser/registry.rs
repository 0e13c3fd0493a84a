//! Block sentinel registry.

use crate::model::BlockKind;
use serde::Serialize;

/// Start and end sentinels for one block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockPattern {
    /// Block kind
    pub kind: BlockKind,
    /// Opening sentinel (empty for the implicit kind)
    pub start: &'static str,
    /// Closing sentinel (empty for the implicit kind)
    pub end: &'static str,
}

impl BlockPattern {
    /// Whether this pattern has explicit sentinels.
    pub fn is_explicit(&self) -> bool {
        !self.start.is_empty()
    }
}

/// All block patterns in registry order: html, latex, plain, markdown,
/// augmented.
///
/// When two start sentinels match at the same offset, the earlier entry
/// wins. No explicit sentinel is a prefix of another.
pub static PATTERNS: [BlockPattern; 5] = [
    BlockPattern {
        kind: BlockKind::Html,
        start: "--- START HTML BLOCK",
        end: "--- CLOSE HTML BLOCK",
    },
    BlockPattern {
        kind: BlockKind::Latex,
        start: "--- START LATEX BLOCK",
        end: "--- CLOSE LATEX BLOCK",
    },
    BlockPattern {
        kind: BlockKind::Plain,
        start: "--- START PLAIN TEXT BLOCK",
        end: "--- CLOSE PLAIN TEXT BLOCK",
    },
    BlockPattern {
        kind: BlockKind::Markdown,
        start: "--- START MARKDOWN BLOCK",
        end: "--- CLOSE MARKDOWN BLOCK",
    },
    BlockPattern {
        kind: BlockKind::Augmented,
        start: "",
        end: "",
    },
];

/// Get the pattern for a block kind.
pub fn lookup(kind: BlockKind) -> &'static BlockPattern {
    match kind {
        BlockKind::Html => &PATTERNS[0],
        BlockKind::Latex => &PATTERNS[1],
        BlockKind::Plain => &PATTERNS[2],
        BlockKind::Markdown => &PATTERNS[3],
        BlockKind::Augmented => &PATTERNS[4],
    }
}

/// All patterns in registry order.
pub fn all_patterns() -> &'static [BlockPattern] {
    &PATTERNS
}

/// Patterns with explicit sentinels, in registry order.
pub fn explicit_patterns() -> impl Iterator<Item = &'static BlockPattern> {
    PATTERNS.iter().filter(|p| p.is_explicit())
}
