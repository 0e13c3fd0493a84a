//! Helpers for writing block sentinels into text.

use super::registry::lookup;
use crate::model::{BlockKind, TextBlock};

/// Wrap `body` in the sentinels of `kind`.
///
/// Augmented text has no sentinels and is returned unchanged.
pub fn wrap_block(kind: BlockKind, body: &str) -> String {
    let pattern = lookup(kind);
    if !pattern.is_explicit() {
        return body.to_string();
    }
    format!("{}\n{}\n{}", pattern.start, body, pattern.end)
}

/// Insert an empty block skeleton of `kind` at byte `offset`.
///
/// The offset is clamped to the text length and moved back to the nearest
/// char boundary. Returns the new text and the byte offset of the empty
/// line between the sentinels, where an editor would place the cursor.
pub fn insert_block(text: &str, offset: usize, kind: BlockKind) -> (String, usize) {
    let pattern = lookup(kind);
    if !pattern.is_explicit() {
        return (text.to_string(), offset.min(text.len()));
    }

    let mut at = offset.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }

    let skeleton = format!("{}\n{}", pattern.start, pattern.end);
    let mut result = String::with_capacity(text.len() + skeleton.len());
    result.push_str(&text[..at]);
    result.push_str(&skeleton);
    result.push_str(&text[at..]);

    (result, at + pattern.start.len() + 1)
}

/// Reassemble text from blocks.
///
/// Explicit blocks are re-wrapped with newlines around their content, so
/// the result matches the original input up to whitespace trimmed inside
/// explicit blocks.
pub fn join_blocks(blocks: &[TextBlock]) -> String {
    let mut output = String::new();
    for block in blocks {
        if block.kind.is_explicit() {
            output.push_str(&wrap_block(block.kind, &block.content));
        } else {
            output.push_str(&block.content);
        }
    }
    output
}
