//! Streaming renderer that yields HTML one block at a time.
//!
//! Blocks are typeset lazily as the iterator advances, so a caller can
//! flush output for long documents before every formula is processed.
//! Concatenating the `Chunk` and `Placeholder` payloads gives the same
//! HTML as a full render.
//!
//! # Example
//!
//! ```
//! use mathblock::math::{DelimiterTypesetter, SymbolConverter};
//! use mathblock::model::EditorMode;
//! use mathblock::render::{RenderEvent, RenderOptions, StreamingRenderer};
//!
//! let converter = SymbolConverter::new();
//! let engine = DelimiterTypesetter::katex();
//! let text = "Intro `x^2`\n--- START HTML BLOCK\n<hr>\n--- CLOSE HTML BLOCK";
//! let stream = StreamingRenderer::new(
//!     text,
//!     EditorMode::Embed,
//!     &converter,
//!     &engine,
//!     RenderOptions::default(),
//! );
//!
//! for event in stream {
//!     if let RenderEvent::BlockStart { index, kind } = event {
//!         println!("block {} is {}", index, kind);
//!     }
//! }
//! ```

use super::html::HtmlTarget;
use super::renderer::ContentRenderer;
use super::target::RenderTarget;
use super::RenderOptions;
use crate::math::{MathConverter, TypesetEngine};
use crate::model::{BlockKind, EditorMode, TextBlock};
use crate::parser::segment;

/// Events emitted during streaming rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// Rendering has started.
    DocumentStart {
        /// Mode the content is rendered in
        mode: EditorMode,
        /// Number of blocks that will follow
        block_count: usize,
    },

    /// A block is starting.
    BlockStart {
        /// 0-based block index
        index: usize,
        /// Block kind
        kind: BlockKind,
    },

    /// Rendered HTML of the current block.
    Chunk(String),

    /// The current block has finished.
    BlockEnd {
        /// 0-based block index
        index: usize,
    },

    /// Placeholder HTML for empty content.
    Placeholder(String),

    /// Rendering has completed.
    DocumentEnd,
}

impl RenderEvent {
    /// Check if this is a content-bearing event.
    pub fn has_content(&self) -> bool {
        matches!(self, RenderEvent::Chunk(_) | RenderEvent::Placeholder(_))
    }

    /// Get the content if this is a content event.
    pub fn content(&self) -> Option<&str> {
        match self {
            RenderEvent::Chunk(s) | RenderEvent::Placeholder(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is a document boundary event.
    pub fn is_document_boundary(&self) -> bool {
        matches!(
            self,
            RenderEvent::DocumentStart { .. } | RenderEvent::DocumentEnd
        )
    }

    /// Check if this is a block boundary event.
    pub fn is_block_boundary(&self) -> bool {
        matches!(
            self,
            RenderEvent::BlockStart { .. } | RenderEvent::BlockEnd { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Initial,
    BlockStart(usize),
    Chunk(usize),
    BlockEnd(usize),
    Placeholder,
    Finished,
    Done,
}

/// Streaming renderer that yields rendering events as an iterator.
pub struct StreamingRenderer<'a> {
    renderer: ContentRenderer<'a>,
    mode: EditorMode,
    blocks: Vec<TextBlock>,
    state: StreamState,
}

impl<'a> StreamingRenderer<'a> {
    /// Create a new streaming renderer.
    pub fn new(
        content: &str,
        mode: EditorMode,
        converter: &'a dyn MathConverter,
        engine: &'a dyn TypesetEngine,
        options: RenderOptions,
    ) -> Self {
        let renderer = ContentRenderer::new(converter, engine).with_options(options);
        let prepared = renderer.prepare(content);

        let blocks = if prepared.trim().is_empty() {
            Vec::new()
        } else if mode.segments_blocks() {
            segment(&prepared)
        } else {
            vec![TextBlock::new(mode.block_kind(), prepared.into_owned())]
        };

        Self {
            renderer,
            mode,
            blocks,
            state: StreamState::Initial,
        }
    }

    /// Number of blocks this stream renders.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if rendering is complete.
    pub fn is_done(&self) -> bool {
        self.state == StreamState::Done
    }

    fn after_block(&self, index: usize) -> StreamState {
        if index + 1 < self.blocks.len() {
            StreamState::BlockStart(index + 1)
        } else {
            StreamState::Finished
        }
    }

    fn render_chunk(&mut self, index: usize) -> String {
        let mut target = HtmlTarget::with_options(self.renderer.options());
        let block = &self.blocks[index];
        if self.mode.segments_blocks() {
            self.renderer.render_block(block, &mut target);
        } else {
            self.renderer.render_body(block.kind, &block.content, &mut target);
        }
        target.into_string()
    }
}

impl<'a> Iterator for StreamingRenderer<'a> {
    type Item = RenderEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StreamState::Initial => {
                self.state = if self.blocks.is_empty() {
                    StreamState::Placeholder
                } else {
                    StreamState::BlockStart(0)
                };
                Some(RenderEvent::DocumentStart {
                    mode: self.mode,
                    block_count: self.blocks.len(),
                })
            }

            StreamState::BlockStart(index) => {
                self.state = StreamState::Chunk(index);
                Some(RenderEvent::BlockStart {
                    index,
                    kind: self.blocks[index].kind,
                })
            }

            StreamState::Chunk(index) => {
                self.state = StreamState::BlockEnd(index);
                Some(RenderEvent::Chunk(self.render_chunk(index)))
            }

            StreamState::BlockEnd(index) => {
                self.state = self.after_block(index);
                Some(RenderEvent::BlockEnd { index })
            }

            StreamState::Placeholder => {
                self.state = StreamState::Finished;
                let mut target = HtmlTarget::with_options(self.renderer.options());
                target.push_placeholder(&self.renderer.options().placeholder);
                Some(RenderEvent::Placeholder(target.into_string()))
            }

            StreamState::Finished => {
                self.state = StreamState::Done;
                Some(RenderEvent::DocumentEnd)
            }

            StreamState::Done => None,
        }
    }
}

/// Collect all HTML from a streaming renderer into a single string.
pub fn collect_html<I>(events: I) -> String
where
    I: IntoIterator<Item = RenderEvent>,
{
    let mut output = String::new();
    for event in events {
        if let Some(content) = event.content() {
            output.push_str(content);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{DelimiterTypesetter, PassthroughConverter};

    fn stream(content: &str, mode: EditorMode) -> Vec<RenderEvent> {
        let converter = PassthroughConverter;
        let engine = DelimiterTypesetter::katex();
        StreamingRenderer::new(content, mode, &converter, &engine, RenderOptions::default())
            .collect()
    }

    #[test]
    fn test_event_order() {
        let events = stream(
            "a\n--- START HTML BLOCK\n<hr>\n--- CLOSE HTML BLOCK",
            EditorMode::Embed,
        );

        assert_eq!(
            events[0],
            RenderEvent::DocumentStart {
                mode: EditorMode::Embed,
                block_count: 2
            }
        );
        assert_eq!(
            events[1],
            RenderEvent::BlockStart {
                index: 0,
                kind: BlockKind::Augmented
            }
        );
        assert!(events[2].has_content());
        assert_eq!(events[3], RenderEvent::BlockEnd { index: 0 });
        assert_eq!(
            events[5],
            RenderEvent::Chunk("<div class=\"text-block text-block-html\"><hr></div>".into())
        );
        assert_eq!(events.last(), Some(&RenderEvent::DocumentEnd));
        assert_eq!(events.len(), 8);
    }

    #[test]
    fn test_empty_content_streams_placeholder() {
        let events = stream("   ", EditorMode::Latex);
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            RenderEvent::Placeholder("<p class=\"text-block-placeholder\">No content</p>".into())
        );
    }

    #[test]
    fn test_whole_document_mode_is_one_block() {
        let events = stream("<b>x</b>", EditorMode::Html);
        assert_eq!(collect_html(events), "<b>x</b>");
    }
}
