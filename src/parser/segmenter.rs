//! Block segmentation.
//!
//! Splits raw text into typed blocks by locating explicit sentinel pairs.
//! Everything outside a pair becomes an implicit augmented block. A start
//! sentinel with no matching end sentinel does not open a block: the rest
//! of the input is kept as augmented text.

use super::registry::{explicit_patterns, BlockPattern};
use crate::model::TextBlock;

/// Segment `text` into an ordered sequence of blocks.
///
/// Segmentation is pure: the same input always yields the same blocks.
/// Non-empty input always yields at least one block.
///
/// # Example
///
/// ```
/// use mathblock::model::{BlockKind, TextBlock};
/// use mathblock::parser::segment;
///
/// let blocks = segment("pre --- START PLAIN TEXT BLOCK\nmid\n--- CLOSE PLAIN TEXT BLOCK post");
/// assert_eq!(
///     blocks,
///     vec![
///         TextBlock::augmented("pre "),
///         TextBlock::new(BlockKind::Plain, "mid"),
///         TextBlock::augmented(" post"),
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut remainder = text;

    while !remainder.is_empty() {
        let Some((start_at, pattern)) = earliest_start(remainder) else {
            blocks.push(TextBlock::augmented(remainder));
            break;
        };

        let body_at = start_at + pattern.start.len();
        let Some(end_rel) = remainder[body_at..].find(pattern.end) else {
            log::debug!(
                "unterminated {} block at byte {}, keeping rest as augmented text",
                pattern.kind,
                start_at
            );
            blocks.push(TextBlock::augmented(remainder));
            break;
        };

        if start_at > 0 {
            blocks.push(TextBlock::augmented(&remainder[..start_at]));
        }

        let end_at = body_at + end_rel;
        blocks.push(TextBlock::new(
            pattern.kind,
            remainder[body_at..end_at].trim(),
        ));
        remainder = &remainder[end_at + pattern.end.len()..];
    }

    log::debug!(
        "segmented {} bytes into {} blocks",
        text.len(),
        blocks.len()
    );
    blocks
}

/// Find the explicit start sentinel at the lowest offset.
///
/// `min_by_key` keeps the first of equal minima, so registry order breaks
/// ties.
fn earliest_start(text: &str) -> Option<(usize, &'static BlockPattern)> {
    explicit_patterns()
        .filter_map(|pattern| text.find(pattern.start).map(|at| (at, pattern)))
        .min_by_key(|(at, _)| *at)
}
