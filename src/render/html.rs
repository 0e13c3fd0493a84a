//! HTML output.

use super::target::{replay, RenderTarget};
use super::RenderOptions;
use crate::model::{BlockKind, DisplayMode, Fragment};

/// Target that writes an HTML string.
///
/// Literal text is escaped; raw HTML and typeset math markup pass through.
#[derive(Debug, Clone)]
pub struct HtmlTarget {
    output: String,
    class_prefix: String,
    error_color: String,
}

impl HtmlTarget {
    /// Create a target with default styling.
    pub fn new() -> Self {
        Self::with_options(&RenderOptions::default())
    }

    /// Create a target styled by render options.
    pub fn with_options(options: &RenderOptions) -> Self {
        Self {
            output: String::new(),
            class_prefix: options.class_prefix.clone(),
            error_color: options.error_color.clone(),
        }
    }

    /// The HTML written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the target and return the HTML.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl Default for HtmlTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for HtmlTarget {
    fn clear(&mut self) {
        self.output.clear();
    }

    fn begin_block(&mut self, kind: BlockKind) {
        self.output.push_str(&format!(
            "<div class=\"{prefix} {prefix}-{kind}\">",
            prefix = self.class_prefix,
            kind = kind.as_str()
        ));
    }

    fn end_block(&mut self) {
        self.output.push_str("</div>");
    }

    fn push_text(&mut self, text: &str) {
        self.output.push_str(&html_escape::encode_text(text));
    }

    fn push_line_break(&mut self) {
        self.output.push_str("<br />");
    }

    fn push_raw_html(&mut self, html: &str) {
        self.output.push_str(html);
    }

    fn push_math(&mut self, _notation: &str, markup: &str, _display: DisplayMode) {
        self.output.push_str(markup);
    }

    fn push_error(&mut self, message: &str, _source: &str) {
        self.output.push_str(&format!(
            "<span class=\"{}-error\" style=\"color: {};\">{}</span>",
            self.class_prefix,
            html_escape::encode_double_quoted_attribute(&self.error_color),
            html_escape::encode_text(message)
        ));
    }

    fn push_placeholder(&mut self, text: &str) {
        self.output.push_str(&format!(
            "<p class=\"{}-placeholder\">{}</p>",
            self.class_prefix,
            html_escape::encode_text(text)
        ));
    }
}

/// Render a fragment tree to HTML with default styling.
pub fn to_html(fragments: &[Fragment]) -> String {
    to_html_with_options(fragments, &RenderOptions::default())
}

/// Render a fragment tree to HTML styled by render options.
pub fn to_html_with_options(fragments: &[Fragment], options: &RenderOptions) -> String {
    let mut target = HtmlTarget::with_options(options);
    replay(fragments, &mut target);
    target.into_string()
}
