//! Content model types.
//!
//! This module defines the plain data passed between parsing and
//! rendering: typed blocks from the segmenter, segments from the inline
//! math extractor, and the fragment tree produced by rendering. None of
//! these types hold references to a render target.

mod block;
mod fragment;
mod identity;
mod segment;

pub use block::{BlockKind, EditorMode, TextBlock};
pub use fragment::{DisplayMode, Fragment};
pub use identity::Identity;
pub use segment::{MathSegment, CONVERSION_ERROR_MARKER};
