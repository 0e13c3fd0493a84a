//! Display tree produced by rendering.

use super::BlockKind;
use serde::{Deserialize, Serialize};

/// How typeset notation is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Flows with surrounding text
    #[default]
    Inline,
    /// Centered on its own line
    Block,
}

/// A node of the rendered display tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    /// Literal text (escaped on output)
    Text {
        /// The text
        text: String,
    },

    /// Explicit line break
    LineBreak,

    /// Raw HTML inserted unmodified
    RawHtml {
        /// The markup
        html: String,
    },

    /// Typeset math markup from the engine
    Math {
        /// Typeset notation the markup was produced from
        notation: String,
        /// Engine output
        markup: String,
        /// Layout
        display: DisplayMode,
    },

    /// Visible error in place of a failed formula
    Error {
        /// Message shown to the reader
        message: String,
        /// Original source that failed
        source: String,
    },

    /// Neutral placeholder for empty content
    Placeholder {
        /// Placeholder text
        text: String,
    },

    /// Container for one block's fragments
    Block {
        /// Kind of the source block
        kind: BlockKind,
        /// Rendered children
        children: Vec<Fragment>,
    },
}

impl Fragment {
    /// Create a text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    /// Check if this fragment or any descendant is an error.
    pub fn has_error(&self) -> bool {
        match self {
            Fragment::Error { .. } => true,
            Fragment::Block { children, .. } => children.iter().any(Fragment::has_error),
            _ => false,
        }
    }

    /// Plain text content, with line breaks as `\n`.
    ///
    /// Math shows its notation rather than the engine markup.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_plain_text(&self, out: &mut String) {
        match self {
            Fragment::Text { text } => out.push_str(text),
            Fragment::LineBreak => out.push('\n'),
            Fragment::RawHtml { html } => out.push_str(html),
            Fragment::Math { notation, .. } => out.push_str(notation),
            Fragment::Error { message, .. } => out.push_str(message),
            Fragment::Placeholder { text } => out.push_str(text),
            Fragment::Block { children, .. } => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
        }
    }
}
