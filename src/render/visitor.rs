//! Visitor pattern for customizing content rendering.
//!
//! A visitor sees every block and every inline math span before the
//! renderer draws it, and can let it through, replace it with literal
//! text, or drop it.
//!
//! # Example
//!
//! ```
//! use mathblock::render::visitor::{ContentVisitor, VisitorAction};
//! use mathblock::model::{BlockKind, Identity, TextBlock};
//!
//! struct NoRawHtml;
//!
//! impl ContentVisitor for NoRawHtml {
//!     fn visit_block(&mut self, block: &TextBlock, _viewer: Option<&Identity>) -> VisitorAction {
//!         if block.kind == BlockKind::Html {
//!             VisitorAction::Replace("[html omitted]".to_string())
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use crate::model::{BlockKind, EditorMode, Identity, MathSegment, TextBlock};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with literal text.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting content elements during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait ContentVisitor: Send + Sync {
    /// Called before rendering a segmented block.
    ///
    /// # Arguments
    /// * `block` - The block about to be rendered
    /// * `viewer` - Identity of whoever the content is rendered for, if known
    fn visit_block(&mut self, block: &TextBlock, viewer: Option<&Identity>) -> VisitorAction {
        let _ = (block, viewer);
        VisitorAction::Continue
    }

    /// Called before rendering an inline math span.
    ///
    /// Receives both converted and rejected spans.
    fn visit_math(&mut self, segment: &MathSegment) -> VisitorAction {
        let _ = segment;
        VisitorAction::Continue
    }

    /// Called before anything is rendered.
    fn on_render_start(&mut self, mode: EditorMode) {
        let _ = mode;
    }

    /// Called after the last fragment is rendered.
    fn on_render_end(&mut self) {}
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl ContentVisitor for DefaultVisitor {}

/// Visitor that drops raw HTML blocks.
#[derive(Debug, Clone, Default)]
pub struct SkipHtmlVisitor;

impl ContentVisitor for SkipHtmlVisitor {
    fn visit_block(&mut self, block: &TextBlock, _viewer: Option<&Identity>) -> VisitorAction {
        if block.kind == BlockKind::Html {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that shows raw HTML blocks as escaped source text.
#[derive(Debug, Clone, Default)]
pub struct HtmlAsTextVisitor;

impl ContentVisitor for HtmlAsTextVisitor {
    fn visit_block(&mut self, block: &TextBlock, _viewer: Option<&Identity>) -> VisitorAction {
        if block.kind == BlockKind::Html {
            VisitorAction::Replace(block.content.clone())
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that shows inline math as its back-tick source.
#[derive(Debug, Clone, Default)]
pub struct MathSourceVisitor;

impl ContentVisitor for MathSourceVisitor {
    fn visit_math(&mut self, segment: &MathSegment) -> VisitorAction {
        VisitorAction::Replace(segment.source_text())
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn ContentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: ContentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    /// Number of chained visitors.
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentVisitor for CompositeVisitor {
    fn visit_block(&mut self, block: &TextBlock, viewer: Option<&Identity>) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_block(block, viewer);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_math(&mut self, segment: &MathSegment) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_math(segment);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn on_render_start(&mut self, mode: EditorMode) {
        for visitor in &mut self.visitors {
            visitor.on_render_start(mode);
        }
    }

    fn on_render_end(&mut self) {
        for visitor in &mut self.visitors {
            visitor.on_render_end();
        }
    }
}
