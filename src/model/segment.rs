//! Inline math segment types.

use serde::{Deserialize, Serialize};

/// Marker appended to spans whose source could not be converted.
pub const CONVERSION_ERROR_MARKER: &str = "(Conversion Error)";

/// One piece of augmented text after inline math extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MathSegment {
    /// Prose between math spans, verbatim
    Text {
        /// Raw text
        text: String,
    },

    /// A successfully converted math span
    Math {
        /// Trimmed span interior
        source: String,
        /// Converted typeset notation
        typeset: String,
    },

    /// A span the converter rejected; rendered as literal text
    Invalid {
        /// Trimmed span interior
        source: String,
        /// Converter's reason
        reason: String,
    },
}

impl MathSegment {
    /// Create a text segment.
    pub fn text(text: impl Into<String>) -> Self {
        MathSegment::Text { text: text.into() }
    }

    /// Create a converted math segment.
    pub fn math(source: impl Into<String>, typeset: impl Into<String>) -> Self {
        MathSegment::Math {
            source: source.into(),
            typeset: typeset.into(),
        }
    }

    /// Check if this segment is converted math.
    pub fn is_math(&self) -> bool {
        matches!(self, MathSegment::Math { .. })
    }

    /// Check if this segment failed conversion.
    pub fn is_invalid(&self) -> bool {
        matches!(self, MathSegment::Invalid { .. })
    }

    /// Get the typeset notation for math segments.
    pub fn typeset(&self) -> Option<&str> {
        match self {
            MathSegment::Math { typeset, .. } => Some(typeset),
            _ => None,
        }
    }

    /// Text shown for this segment when it is rendered literally.
    ///
    /// Invalid spans keep their back-ticks and carry the error marker.
    pub fn literal(&self) -> String {
        match self {
            MathSegment::Text { text } => text.clone(),
            MathSegment::Math { source, .. } => format!("`{}`", source),
            MathSegment::Invalid { source, .. } => {
                format!("`{}` {}", source, CONVERSION_ERROR_MARKER)
            }
        }
    }

    /// Reconstruct the source text of this segment, back-ticks included.
    pub fn source_text(&self) -> String {
        match self {
            MathSegment::Text { text } => text.clone(),
            MathSegment::Math { source, .. } | MathSegment::Invalid { source, .. } => {
                format!("`{}`", source)
            }
        }
    }
}
