//! # mathblock
//!
//! Block-delimited rich content with inline math, for Rust.
//!
//! A document is plain text in which regions are marked by sentinel lines
//! (`--- START HTML BLOCK` ... `--- CLOSE HTML BLOCK`, and likewise for
//! LaTeX, plain text and Markdown). Text outside any block may contain
//! inline math between back-ticks. This library segments such documents,
//! converts and typesets their math, and renders them to HTML, plain text
//! or a JSON fragment tree.
//!
//! ## Quick Start
//!
//! ```
//! use mathblock::{render_to_html, EditorMode};
//!
//! let html = render_to_html("Area is `pi r^2`", EditorMode::Embed);
//! assert!(html.contains("\\pi r^2"));
//! ```
//!
//! ## Features
//!
//! - **Block segmentation**: HTML, LaTeX, plain text and Markdown blocks
//! - **Inline math**: back-tick spans converted per span
//! - **Failure isolation**: a bad formula becomes a visible error in place
//!   and never aborts the rest of the render
//! - **Pluggable math**: bring your own converter and typesetting engine
//! - **Multiple outputs**: HTML, plain text, JSON, streaming events

pub mod detect;
pub mod error;
pub mod math;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::mode_from_path;
pub use error::{ConversionError, Error, Result, TypesetError};
pub use math::{
    DelimiterTypesetter, MathBackend, MathConverter, PassthroughConverter, SymbolConverter,
    TypesetEngine,
};
pub use model::{
    BlockKind, DisplayMode, EditorMode, Fragment, Identity, MathSegment, TextBlock,
};
pub use parser::{segment, NormalizeOptions, NormalizePreset};
pub use render::{
    ContentVisitor, FragmentTree, HtmlTarget, JsonFormat, RenderOptions, RenderResult,
    RenderStats, RenderTarget, StreamingRenderer,
};

use render::ContentRenderer;
use std::path::Path;
use std::sync::OnceLock;

/// Built-in converter shared by the free functions.
fn symbol_converter() -> &'static SymbolConverter {
    static CONVERTER: OnceLock<SymbolConverter> = OnceLock::new();
    CONVERTER.get_or_init(SymbolConverter::new)
}

/// Extract inline math from augmented text with the built-in converter.
///
/// # Example
///
/// ```
/// use mathblock::{extract_math, MathSegment};
///
/// let segments = extract_math("so `a <= b`");
/// assert_eq!(segments[1], MathSegment::math("a <= b", "a \\le b"));
/// ```
pub fn extract_math(text: &str) -> Vec<MathSegment> {
    parser::extract_math(text, symbol_converter())
}

/// Render content to HTML with the built-in converter and KaTeX delimiters.
pub fn render_to_html(content: &str, mode: EditorMode) -> String {
    Mathblock::new().render_html(content, mode)
}

/// Read a file and render it to HTML, picking the mode from its extension.
///
/// # Example
///
/// ```no_run
/// use mathblock::render_file;
///
/// let html = render_file("notes/lecture.mb")?;
/// std::fs::write("lecture.html", html)?;
/// # Ok::<(), mathblock::Error>(())
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mode = mode_from_path(&path);
    render_file_with_mode(path, mode)
}

/// Read a file and render it to HTML in the given mode.
pub fn render_file_with_mode<P: AsRef<Path>>(path: P, mode: EditorMode) -> Result<String> {
    let content = std::fs::read_to_string(path.as_ref())?;
    log::debug!(
        "Rendering {} as {} ({} bytes)",
        path.as_ref().display(),
        mode,
        content.len()
    );
    Ok(render_to_html(&content, mode))
}

/// Builder for rendering content with custom collaborators.
///
/// # Example
///
/// ```
/// use mathblock::{EditorMode, Identity, MathBackend, Mathblock, RenderOptions};
/// use mathblock::render::SkipHtmlVisitor;
///
/// let mut mb = Mathblock::new()
///     .with_backend(MathBackend::MathJax)
///     .with_options(RenderOptions::new().with_placeholder("Type something"))
///     .with_visitor(SkipHtmlVisitor)
///     .with_identity(Identity::new("u-17"));
///
/// let html = mb.render_html("", EditorMode::Embed);
/// assert!(html.contains("Type something"));
/// ```
pub struct Mathblock {
    converter: Box<dyn MathConverter>,
    engine: Box<dyn TypesetEngine>,
    options: RenderOptions,
    visitor: Option<Box<dyn ContentVisitor>>,
    identity: Option<Identity>,
}

impl Mathblock {
    /// Create a builder with the built-in converter and KaTeX delimiters.
    pub fn new() -> Self {
        Self {
            converter: Box::new(SymbolConverter::new()),
            engine: Box::new(DelimiterTypesetter::katex()),
            options: RenderOptions::default(),
            visitor: None,
            identity: None,
        }
    }

    /// Replace the math notation converter.
    pub fn with_converter<C: MathConverter + 'static>(mut self, converter: C) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Replace the typesetting engine.
    pub fn with_engine<E: TypesetEngine + 'static>(mut self, engine: E) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Use the built-in typesetter with a different backend.
    pub fn with_backend(self, backend: MathBackend) -> Self {
        self.with_engine(DelimiterTypesetter::new(backend))
    }

    /// Set render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a visitor.
    pub fn with_visitor<V: ContentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Set the identity content is rendered for.
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// The options in effect.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render into any target, replacing its previous output.
    pub fn render_into<T>(&mut self, content: &str, mode: EditorMode, target: &mut T) -> RenderStats
    where
        T: RenderTarget + ?Sized,
    {
        let mut renderer = ContentRenderer::new(self.converter.as_ref(), self.engine.as_ref())
            .with_options(self.options.clone());
        if let Some(visitor) = self.visitor.as_deref_mut() {
            renderer = renderer.with_visitor(visitor);
        }
        if let Some(identity) = &self.identity {
            renderer = renderer.with_viewer(identity);
        }

        renderer.render(content, mode, target);
        renderer.take_stats()
    }

    /// Render to an HTML string.
    pub fn render_html(&mut self, content: &str, mode: EditorMode) -> String {
        let mut target = HtmlTarget::with_options(&self.options);
        self.render_into(content, mode, &mut target);
        target.into_string()
    }

    /// Render to a fragment tree.
    pub fn render_tree(&mut self, content: &str, mode: EditorMode) -> Vec<Fragment> {
        let mut tree = FragmentTree::new();
        self.render_into(content, mode, &mut tree);
        tree.into_fragments()
    }

    /// Render to plain text.
    pub fn render_text(&mut self, content: &str, mode: EditorMode) -> String {
        render::to_text(&self.render_tree(content, mode))
    }

    /// Render to HTML and return it with statistics.
    pub fn render_with_stats(&mut self, content: &str, mode: EditorMode) -> RenderResult {
        let mut target = HtmlTarget::with_options(&self.options);
        let stats = self.render_into(content, mode, &mut target);
        RenderResult::new(target.into_string(), stats)
    }

    /// Stream HTML events for `content`. Visitors are not applied.
    pub fn stream<'a>(&'a self, content: &str, mode: EditorMode) -> StreamingRenderer<'a> {
        StreamingRenderer::new(
            content,
            mode,
            self.converter.as_ref(),
            self.engine.as_ref(),
            self.options.clone(),
        )
    }

    /// Segment content, applying the configured normalization first.
    pub fn segment(&self, content: &str) -> Vec<TextBlock> {
        match &self.options.normalize {
            Some(options) => segment(&parser::Normalizer::new(options.clone()).process(content)),
            None => segment(content),
        }
    }

    /// Extract inline math with the configured converter.
    pub fn extract_math(&self, text: &str) -> Vec<MathSegment> {
        parser::extract_math(text, self.converter.as_ref())
    }
}

impl Default for Mathblock {
    fn default() -> Self {
        Self::new()
    }
}
