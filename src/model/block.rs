//! Block-level types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a text block.
///
/// The set is closed. `Augmented` is the implicit kind for any text that is
/// not wrapped in explicit sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Raw HTML, passed through unmodified
    Html,
    /// Typeset notation rendered as display math
    Latex,
    /// Literal text with line breaks
    Plain,
    /// Markdown source (currently rendered as literal text)
    Markdown,
    /// Prose with inline math spans
    Augmented,
}

impl BlockKind {
    /// All kinds, in registry order.
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Html,
        BlockKind::Latex,
        BlockKind::Plain,
        BlockKind::Markdown,
        BlockKind::Augmented,
    ];

    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Html => "html",
            BlockKind::Latex => "latex",
            BlockKind::Plain => "plain",
            BlockKind::Markdown => "markdown",
            BlockKind::Augmented => "augmented",
        }
    }

    /// Whether blocks of this kind are delimited by sentinels.
    pub fn is_explicit(&self) -> bool {
        !matches!(self, BlockKind::Augmented)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span of a document's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block kind
    pub kind: BlockKind,

    /// Block content with sentinels removed
    pub content: String,
}

impl TextBlock {
    /// Create a new block.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Create an implicit augmented block.
    pub fn augmented(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Augmented, content)
    }

    /// Check if the block holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Number of lines in the block content.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Editing mode selected for a whole document.
///
/// `Embed` is the default: the document is segmented into blocks and
/// augmented text is scanned for inline math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Literal text
    Plain,
    /// Whole document is typeset notation
    Latex,
    /// Whole document is raw HTML
    Html,
    /// Whole document is Markdown (rendered as literal text)
    Markdown,
    /// Block-segmented document with inline math
    #[default]
    #[serde(alias = "augmented")]
    Embed,
}

impl EditorMode {
    /// All modes.
    pub const ALL: [EditorMode; 5] = [
        EditorMode::Plain,
        EditorMode::Latex,
        EditorMode::Html,
        EditorMode::Markdown,
        EditorMode::Embed,
    ];

    /// Canonical lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Plain => "plain",
            EditorMode::Latex => "latex",
            EditorMode::Html => "html",
            EditorMode::Markdown => "markdown",
            EditorMode::Embed => "embed",
        }
    }

    /// Whether rendering in this mode runs the block segmenter.
    pub fn segments_blocks(&self) -> bool {
        matches!(self, EditorMode::Embed)
    }

    /// Block kind the whole document is treated as in this mode.
    pub fn block_kind(&self) -> BlockKind {
        match self {
            EditorMode::Plain => BlockKind::Plain,
            EditorMode::Latex => BlockKind::Latex,
            EditorMode::Html => BlockKind::Html,
            EditorMode::Markdown => BlockKind::Markdown,
            EditorMode::Embed => BlockKind::Augmented,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(EditorMode::Plain),
            "latex" => Ok(EditorMode::Latex),
            "html" => Ok(EditorMode::Html),
            "markdown" => Ok(EditorMode::Markdown),
            "embed" | "augmented" => Ok(EditorMode::Embed),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

impl From<BlockKind> for EditorMode {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Html => EditorMode::Html,
            BlockKind::Latex => EditorMode::Latex,
            BlockKind::Plain => EditorMode::Plain,
            BlockKind::Markdown => EditorMode::Markdown,
            BlockKind::Augmented => EditorMode::Embed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_explicit() {
        assert!(BlockKind::Html.is_explicit());
        assert!(BlockKind::Markdown.is_explicit());
        assert!(!BlockKind::Augmented.is_explicit());
    }

    #[test]
    fn test_editor_mode_parse() {
        assert_eq!("plain".parse::<EditorMode>().unwrap(), EditorMode::Plain);
        assert_eq!("LaTeX".parse::<EditorMode>().unwrap(), EditorMode::Latex);
        assert_eq!("augmented".parse::<EditorMode>().unwrap(), EditorMode::Embed);
        assert_eq!(" embed ".parse::<EditorMode>().unwrap(), EditorMode::Embed);
        assert!(matches!(
            "rtf".parse::<EditorMode>(),
            Err(Error::UnknownMode(_))
        ));
    }

    #[test]
    fn test_editor_mode_display_round_trip() {
        for mode in EditorMode::ALL {
            assert_eq!(mode.to_string().parse::<EditorMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_editor_mode_serde_alias() {
        let mode: EditorMode = serde_json::from_str("\"augmented\"").unwrap();
        assert_eq!(mode, EditorMode::Embed);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"embed\"");
    }

    #[test]
    fn test_only_embed_segments() {
        assert!(EditorMode::Embed.segments_blocks());
        assert!(!EditorMode::Plain.segments_blocks());
        assert!(!EditorMode::Markdown.segments_blocks());
    }

    #[test]
    fn test_text_block_blank() {
        assert!(TextBlock::augmented("  \n\t").is_blank());
        assert!(!TextBlock::new(BlockKind::Plain, "x").is_blank());
    }
}
