//! Delimiter-based typesetting for client-side math engines.

use super::{braces_balanced, TypesetEngine};
use crate::error::TypesetError;
use crate::model::DisplayMode;
use regex::Regex;

/// Client-side engine whose delimiters the output targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathBackend {
    /// `$...$` and `$$...$$`
    #[default]
    KaTeX,
    /// `\(...\)` and `\[...\]`
    MathJax,
}

impl MathBackend {
    fn delimiters(&self, display: DisplayMode) -> (&'static str, &'static str) {
        match (self, display) {
            (MathBackend::KaTeX, DisplayMode::Inline) => ("$", "$"),
            (MathBackend::KaTeX, DisplayMode::Block) => ("$$", "$$"),
            (MathBackend::MathJax, DisplayMode::Inline) => ("\\(", "\\)"),
            (MathBackend::MathJax, DisplayMode::Block) => ("\\[", "\\]"),
        }
    }
}

/// Engine that validates notation and wraps it for a client-side
/// typesetter.
///
/// Output is an HTML element holding the escaped notation between the
/// backend's delimiters. Notation with unbalanced braces or mismatched
/// `\begin`/`\end` environments is rejected.
pub struct DelimiterTypesetter {
    backend: MathBackend,
    environment_regex: Regex,
}

impl DelimiterTypesetter {
    /// Create a typesetter for the given backend.
    pub fn new(backend: MathBackend) -> Self {
        Self {
            backend,
            environment_regex: Regex::new(r"\\(begin|end)\{([^}]*)\}")
                .expect("environment pattern is valid"),
        }
    }

    /// Create a KaTeX typesetter.
    pub fn katex() -> Self {
        Self::new(MathBackend::KaTeX)
    }

    /// Create a MathJax typesetter.
    pub fn mathjax() -> Self {
        Self::new(MathBackend::MathJax)
    }

    /// The backend this typesetter targets.
    pub fn backend(&self) -> MathBackend {
        self.backend
    }

    fn validate(&self, notation: &str) -> Result<(), TypesetError> {
        if !braces_balanced(notation) {
            return Err(TypesetError::new(notation, "unbalanced braces"));
        }

        let mut open: Vec<&str> = Vec::new();
        for caps in self.environment_regex.captures_iter(notation) {
            let name = caps.get(2).map_or("", |m| m.as_str());
            match caps.get(1).map(|m| m.as_str()) {
                Some("begin") => open.push(name),
                _ => {
                    if open.pop() != Some(name) {
                        return Err(TypesetError::new(
                            notation,
                            format!("unexpected \\end{{{}}}", name),
                        ));
                    }
                }
            }
        }
        if let Some(name) = open.pop() {
            return Err(TypesetError::new(
                notation,
                format!("missing \\end{{{}}}", name),
            ));
        }

        Ok(())
    }
}

impl Default for DelimiterTypesetter {
    fn default() -> Self {
        Self::katex()
    }
}

impl TypesetEngine for DelimiterTypesetter {
    fn typeset(&self, notation: &str, display: DisplayMode) -> Result<String, TypesetError> {
        self.validate(notation)?;

        let (open, close) = self.backend.delimiters(display);
        let escaped = html_escape::encode_text(notation);
        let markup = match display {
            DisplayMode::Inline => format!(
                "<span class=\"math math-inline\">{}{}{}</span>",
                open, escaped, close
            ),
            DisplayMode::Block => format!(
                "<div class=\"math math-display\">{}{}{}</div>",
                open, escaped, close
            ),
        };
        Ok(markup)
    }
}
