//! Content parsing: block segmentation and inline math extraction.
//!
//! Everything here is pure and returns plain data from [`crate::model`].

mod edit;
mod inline_math;
mod normalize;
pub mod registry;
mod segmenter;

pub use edit::{insert_block, join_blocks, wrap_block};
pub use inline_math::{count_math_spans, extract_math};
pub use normalize::{NormalizeOptions, NormalizePreset, Normalizer};
pub use registry::{all_patterns, lookup, BlockPattern};
pub use segmenter::segment;
