//! Output sinks for rendering.

use crate::model::{BlockKind, DisplayMode, Fragment};

/// An output sink the renderer appends fragments to, in document order.
///
/// The renderer calls [`RenderTarget::clear`] before every pass, so a
/// target never keeps output from a previous render.
pub trait RenderTarget {
    /// Drop all previous output.
    fn clear(&mut self);

    /// Open a container for one block.
    fn begin_block(&mut self, kind: BlockKind);

    /// Close the innermost open container.
    fn end_block(&mut self);

    /// Append literal text. Targets escape it as needed.
    fn push_text(&mut self, text: &str);

    /// Append an explicit line break.
    fn push_line_break(&mut self);

    /// Append raw HTML unmodified.
    fn push_raw_html(&mut self, html: &str);

    /// Append typeset math markup produced from `notation`.
    fn push_math(&mut self, notation: &str, markup: &str, display: DisplayMode);

    /// Append a visible error in place of a failed formula.
    fn push_error(&mut self, message: &str, source: &str);

    /// Append the neutral placeholder for empty content.
    fn push_placeholder(&mut self, text: &str);
}

/// Target that builds a serializable fragment tree.
#[derive(Debug, Clone, Default)]
pub struct FragmentTree {
    roots: Vec<Fragment>,
    open: Vec<(BlockKind, Vec<Fragment>)>,
}

impl FragmentTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level fragments. Blocks still open are not included.
    pub fn fragments(&self) -> &[Fragment] {
        &self.roots
    }

    /// Close any open blocks and return the top-level fragments.
    pub fn into_fragments(mut self) -> Vec<Fragment> {
        while !self.open.is_empty() {
            self.end_block();
        }
        self.roots
    }

    /// Check if nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.open.is_empty()
    }

    fn push(&mut self, fragment: Fragment) {
        match self.open.last_mut() {
            Some((_, children)) => children.push(fragment),
            None => self.roots.push(fragment),
        }
    }
}

impl RenderTarget for FragmentTree {
    fn clear(&mut self) {
        self.roots.clear();
        self.open.clear();
    }

    fn begin_block(&mut self, kind: BlockKind) {
        self.open.push((kind, Vec::new()));
    }

    fn end_block(&mut self) {
        if let Some((kind, children)) = self.open.pop() {
            self.push(Fragment::Block { kind, children });
        }
    }

    fn push_text(&mut self, text: &str) {
        self.push(Fragment::text(text));
    }

    fn push_line_break(&mut self) {
        self.push(Fragment::LineBreak);
    }

    fn push_raw_html(&mut self, html: &str) {
        self.push(Fragment::RawHtml {
            html: html.to_string(),
        });
    }

    fn push_math(&mut self, notation: &str, markup: &str, display: DisplayMode) {
        self.push(Fragment::Math {
            notation: notation.to_string(),
            markup: markup.to_string(),
            display,
        });
    }

    fn push_error(&mut self, message: &str, source: &str) {
        self.push(Fragment::Error {
            message: message.to_string(),
            source: source.to_string(),
        });
    }

    fn push_placeholder(&mut self, text: &str) {
        self.push(Fragment::Placeholder {
            text: text.to_string(),
        });
    }
}

/// Replay a fragment tree into another target.
pub fn replay<T>(fragments: &[Fragment], target: &mut T)
where
    T: RenderTarget + ?Sized,
{
    for fragment in fragments {
        match fragment {
            Fragment::Text { text } => target.push_text(text),
            Fragment::LineBreak => target.push_line_break(),
            Fragment::RawHtml { html } => target.push_raw_html(html),
            Fragment::Math {
                notation,
                markup,
                display,
            } => target.push_math(notation, markup, *display),
            Fragment::Error { message, source } => target.push_error(message, source),
            Fragment::Placeholder { text } => target.push_placeholder(text),
            Fragment::Block { kind, children } => {
                target.begin_block(*kind);
                replay(children, target);
                target.end_block();
            }
        }
    }
}
