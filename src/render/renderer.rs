//! Content renderer: drives segmentation, math extraction and typesetting
//! into a [`RenderTarget`].

use std::borrow::Cow;

use super::result::RenderStats;
use super::target::RenderTarget;
use super::visitor::{ContentVisitor, VisitorAction};
use super::RenderOptions;
use crate::math::{MathConverter, TypesetEngine};
use crate::model::{BlockKind, DisplayMode, EditorMode, Identity, MathSegment, TextBlock};
use crate::parser::{extract_math, segment, Normalizer};

/// Error text for a LaTeX block or document the engine rejected.
pub fn latex_error_message(notation: &str) -> String {
    format!("Error rendering LaTeX: {}", notation)
}

/// Error text for an inline formula the engine rejected.
pub fn math_error_message(notation: &str) -> String {
    format!("[Math Error: {}]", notation)
}

/// Renders content in an editor mode.
///
/// Every call to [`ContentRenderer::render`] clears the target first. A
/// formula that fails to typeset becomes an error fragment in place of
/// that formula only; the rest of the content still renders.
pub struct ContentRenderer<'a> {
    converter: &'a dyn MathConverter,
    engine: &'a dyn TypesetEngine,
    options: RenderOptions,
    visitor: Option<&'a mut dyn ContentVisitor>,
    viewer: Option<&'a Identity>,
    stats: RenderStats,
}

impl<'a> ContentRenderer<'a> {
    /// Create a renderer with the given math collaborators.
    pub fn new(converter: &'a dyn MathConverter, engine: &'a dyn TypesetEngine) -> Self {
        Self {
            converter,
            engine,
            options: RenderOptions::default(),
            visitor: None,
            viewer: None,
            stats: RenderStats::default(),
        }
    }

    /// Set render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a visitor.
    pub fn with_visitor(mut self, visitor: &'a mut dyn ContentVisitor) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// Set the identity content is rendered for. Passed to the visitor.
    pub fn with_viewer(mut self, viewer: &'a Identity) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Statistics of the last render.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Take the statistics of the last render, leaving empty ones.
    pub fn take_stats(&mut self) -> RenderStats {
        std::mem::take(&mut self.stats)
    }

    /// Apply input normalization, if configured.
    pub fn prepare<'c>(&self, content: &'c str) -> Cow<'c, str> {
        match &self.options.normalize {
            Some(options) => Cow::Owned(Normalizer::new(options.clone()).process(content)),
            None => Cow::Borrowed(content),
        }
    }

    /// Render `content` in `mode`, replacing whatever `target` held.
    pub fn render<T>(&mut self, content: &str, mode: EditorMode, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        target.clear();
        self.stats = RenderStats::new();

        if let Some(visitor) = self.visitor.as_deref_mut() {
            visitor.on_render_start(mode);
        }

        let content = self.prepare(content);
        if content.trim().is_empty() {
            log::debug!("Rendering placeholder for empty {} content", mode);
            target.push_placeholder(&self.options.placeholder);
        } else if mode.segments_blocks() {
            for block in segment(&content) {
                self.render_block(&block, target);
            }
        } else {
            self.render_body(mode.block_kind(), &content, target);
        }

        if let Some(visitor) = self.visitor.as_deref_mut() {
            visitor.on_render_end();
        }
    }

    /// Render one segmented block, wrapped in a container when enabled.
    ///
    /// Does not clear the target.
    pub fn render_block<T>(&mut self, block: &TextBlock, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        let action = match self.visitor.as_deref_mut() {
            Some(visitor) => visitor.visit_block(block, self.viewer),
            None => VisitorAction::Continue,
        };
        if action.should_skip() {
            log::debug!("Skipping {} block", block.kind);
            return;
        }

        let wrap = self.options.wrap_blocks;
        if wrap {
            target.begin_block(block.kind);
        }
        match action {
            VisitorAction::Replace(text) => self.render_literal(&text, target),
            _ => self.render_body(block.kind, &block.content, target),
        }
        if wrap {
            target.end_block();
        }
    }

    /// Render content as a single body of `kind`, without a container.
    pub fn render_body<T>(&mut self, kind: BlockKind, content: &str, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        self.stats.add_block(kind);
        match kind {
            BlockKind::Html => target.push_raw_html(content),
            BlockKind::Latex => self.render_math(content, DisplayMode::Block, target),
            BlockKind::Plain | BlockKind::Markdown => self.render_literal(content, target),
            BlockKind::Augmented => self.render_augmented(content, target),
        }
    }

    fn render_augmented<T>(&mut self, text: &str, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        for segment in extract_math(text, self.converter) {
            if let MathSegment::Text { text } = &segment {
                self.render_literal(text, target);
                continue;
            }

            self.stats.add_math_span();
            if segment.is_invalid() {
                self.stats.add_conversion_error();
            }

            let action = match self.visitor.as_deref_mut() {
                Some(visitor) => visitor.visit_math(&segment),
                None => VisitorAction::Continue,
            };
            match action {
                VisitorAction::Skip => {}
                VisitorAction::Replace(text) => self.render_literal(&text, target),
                VisitorAction::Continue => match &segment {
                    MathSegment::Math { typeset, .. } => {
                        self.render_math(typeset, DisplayMode::Inline, target)
                    }
                    _ => self.render_literal(&segment.literal(), target),
                },
            }
        }
    }

    fn render_math<T>(&mut self, notation: &str, display: DisplayMode, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        match self.engine.typeset(notation, display) {
            Ok(markup) => target.push_math(notation, &markup, display),
            Err(err) => {
                log::warn!("{}", err);
                self.stats.add_typeset_error();
                let message = match display {
                    DisplayMode::Block => latex_error_message(notation),
                    DisplayMode::Inline => math_error_message(notation),
                };
                target.push_error(&message, notation);
            }
        }
    }

    fn render_literal<T>(&mut self, text: &str, target: &mut T)
    where
        T: RenderTarget + ?Sized,
    {
        if self.options.collect_stats {
            self.stats.count_text(text);
        }

        if !self.options.preserve_line_breaks {
            if !text.is_empty() {
                target.push_text(text);
            }
            return;
        }

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                target.push_line_break();
            }
            if !line.is_empty() {
                target.push_text(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, TypesetError};
    use crate::math::{DelimiterTypesetter, PassthroughConverter};
    use crate::model::Fragment;
    use crate::render::FragmentTree;

    fn render(content: &str, mode: EditorMode) -> Vec<Fragment> {
        let converter = PassthroughConverter;
        let engine = DelimiterTypesetter::katex();
        let mut tree = FragmentTree::new();
        ContentRenderer::new(&converter, &engine).render(content, mode, &mut tree);
        tree.into_fragments()
    }

    #[test]
    fn test_plain_line_breaks() {
        assert_eq!(
            render("a\nb", EditorMode::Plain),
            vec![Fragment::text("a"), Fragment::LineBreak, Fragment::text("b")]
        );
    }

    #[test]
    fn test_placeholder_for_whitespace() {
        for mode in EditorMode::ALL {
            assert_eq!(
                render(" \n\t", mode),
                vec![Fragment::Placeholder {
                    text: "No content".into()
                }]
            );
        }
    }

    #[test]
    fn test_html_mode_is_raw() {
        assert_eq!(
            render("<b>x</b>", EditorMode::Html),
            vec![Fragment::RawHtml {
                html: "<b>x</b>".into()
            }]
        );
    }

    #[test]
    fn test_latex_mode_error() {
        let fragments = render("\\frac{1}{", EditorMode::Latex);
        assert_eq!(
            fragments,
            vec![Fragment::Error {
                message: "Error rendering LaTeX: \\frac{1}{".into(),
                source: "\\frac{1}{".into(),
            }]
        );
    }

    #[test]
    fn test_inline_failure_is_isolated() {
        let converter = PassthroughConverter;
        let engine = |notation: &str, _display: DisplayMode| -> Result<String, TypesetError> {
            if notation == "bad" {
                Err(TypesetError::new(notation, "rejected"))
            } else {
                Ok(format!("<m>{}</m>", notation))
            }
        };
        let mut tree = FragmentTree::new();
        let mut renderer = ContentRenderer::new(&converter, &engine);
        renderer.render("`x` and `bad` then `y`", EditorMode::Embed, &mut tree);

        let fragments = tree.into_fragments();
        let Fragment::Block { kind, children } = &fragments[0] else {
            panic!("expected a block, got {:?}", fragments[0]);
        };
        assert_eq!(*kind, BlockKind::Augmented);
        assert_eq!(
            children,
            &vec![
                Fragment::Math {
                    notation: "x".into(),
                    markup: "<m>x</m>".into(),
                    display: DisplayMode::Inline
                },
                Fragment::text(" and "),
                Fragment::Error {
                    message: "[Math Error: bad]".into(),
                    source: "bad".into()
                },
                Fragment::text(" then "),
                Fragment::Math {
                    notation: "y".into(),
                    markup: "<m>y</m>".into(),
                    display: DisplayMode::Inline
                },
            ]
        );
        assert_eq!(renderer.stats().math_spans, 3);
        assert_eq!(renderer.stats().typeset_errors, 1);
    }

    #[test]
    fn test_conversion_failure_renders_literal() {
        let converter = |source: &str| -> Result<String, ConversionError> {
            Err(ConversionError::new(source, "nope"))
        };
        let engine = DelimiterTypesetter::katex();
        let mut tree = FragmentTree::new();
        let mut renderer = ContentRenderer::new(&converter, &engine)
            .with_options(RenderOptions::default().with_block_wrappers(false));
        renderer.render("`q`", EditorMode::Embed, &mut tree);

        assert_eq!(
            tree.into_fragments(),
            vec![Fragment::text("`q` (Conversion Error)")]
        );
        assert_eq!(renderer.stats().conversion_errors, 1);
    }

    #[test]
    fn test_render_replaces_previous_output() {
        let converter = PassthroughConverter;
        let engine = DelimiterTypesetter::katex();
        let mut renderer = ContentRenderer::new(&converter, &engine);
        let mut tree = FragmentTree::new();

        renderer.render("first", EditorMode::Plain, &mut tree);
        renderer.render("second", EditorMode::Plain, &mut tree);
        assert_eq!(tree.into_fragments(), vec![Fragment::text("second")]);
    }

    #[test]
    fn test_stats_word_count_opt_in() {
        let converter = PassthroughConverter;
        let engine = DelimiterTypesetter::katex();
        let mut tree = FragmentTree::new();
        let mut renderer = ContentRenderer::new(&converter, &engine)
            .with_options(RenderOptions::default().with_stats(true));
        renderer.render("one two\nthree", EditorMode::Markdown, &mut tree);

        let stats = renderer.take_stats();
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.markdown_blocks, 1);
        assert_eq!(renderer.stats().word_count, 0);
    }
}
