//! JSON rendering of parser and renderer output.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{MathSegment, TextBlock};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any output value (fragments, results, stats) to JSON.
pub fn to_json<T>(value: &T, format: JsonFormat) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize segmented blocks to JSON.
pub fn to_json_blocks(blocks: &[TextBlock], format: JsonFormat) -> Result<String> {
    to_json(blocks, format)
}

/// Serialize extracted math segments to JSON.
pub fn to_json_segments(segments: &[MathSegment], format: JsonFormat) -> Result<String> {
    to_json(segments, format)
}
