//! Editor mode detection.

use crate::model::EditorMode;
use crate::parser::registry::explicit_patterns;
use std::path::Path;

/// Pick an editor mode from a file extension.
///
/// `tex` and `latex` map to LaTeX, `html` and `htm` to HTML, `md` and
/// `markdown` to Markdown, `txt` to plain text. Anything else, including a
/// missing extension, is rendered as an embed document.
///
/// # Example
/// ```
/// use mathblock::detect::mode_from_path;
/// use mathblock::model::EditorMode;
///
/// assert_eq!(mode_from_path("notes/limits.tex"), EditorMode::Latex);
/// assert_eq!(mode_from_path("lecture.mb"), EditorMode::Embed);
/// ```
pub fn mode_from_path<P: AsRef<Path>>(path: P) -> EditorMode {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(mode_from_extension)
        .unwrap_or_default()
}

/// Pick an editor mode from an extension without the leading dot.
pub fn mode_from_extension(ext: &str) -> EditorMode {
    match ext.to_ascii_lowercase().as_str() {
        "tex" | "latex" => EditorMode::Latex,
        "html" | "htm" => EditorMode::Html,
        "md" | "markdown" => EditorMode::Markdown,
        "txt" => EditorMode::Plain,
        _ => EditorMode::Embed,
    }
}

/// Check if text contains any block start sentinel.
pub fn has_block_sentinels(text: &str) -> bool {
    explicit_patterns().any(|pattern| text.contains(pattern.start))
}
