//! Math notation capabilities.
//!
//! The pipeline depends on two collaborators it does not implement in full:
//! a converter from the compact ASCII notation used in inline spans to
//! typeset notation, and an engine that turns typeset notation into display
//! markup. Both are traits so callers can plug in their own.

mod convert;
mod typeset;

pub use convert::{PassthroughConverter, SymbolConverter};
pub use typeset::{DelimiterTypesetter, MathBackend};

use crate::error::{ConversionError, TypesetError};
use crate::model::DisplayMode;

/// Converts ASCII math notation to typeset notation.
pub trait MathConverter {
    /// Convert one trimmed span interior.
    fn convert(&self, source: &str) -> Result<String, ConversionError>;
}

impl<F> MathConverter for F
where
    F: Fn(&str) -> Result<String, ConversionError>,
{
    fn convert(&self, source: &str) -> Result<String, ConversionError> {
        self(source)
    }
}

/// Turns typeset notation into display markup.
///
/// Implementations return the complete markup or an error; they never
/// write partial output.
pub trait TypesetEngine {
    /// Typeset `notation` in the given layout.
    fn typeset(&self, notation: &str, display: DisplayMode) -> Result<String, TypesetError>;
}

impl<F> TypesetEngine for F
where
    F: Fn(&str, DisplayMode) -> Result<String, TypesetError>,
{
    fn typeset(&self, notation: &str, display: DisplayMode) -> Result<String, TypesetError> {
        self(notation, display)
    }
}

/// Check that `(`, `[` and `{` nest properly in a token stream.
///
/// Escaped braces (`\{`, `\}`) are not counted.
pub(crate) fn brackets_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let open = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Check that `{` and `}` nest properly, ignoring `\{` and `\}`.
///
/// Parentheses and square brackets are not checked: typeset notation may
/// leave them unpaired, as in `[0, 1)` or `\left( a \right]`.
pub(crate) fn braces_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    let mut escaped = false;
    for c in text.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_balanced() {
        assert!(brackets_balanced(""));
        assert!(brackets_balanced("(a+[b]){c}"));
        assert!(brackets_balanced("\\{ a \\}"));
        assert!(!brackets_balanced("(a"));
        assert!(!brackets_balanced("(a]"));
        assert!(!brackets_balanced("a)"));
    }

    #[test]
    fn test_braces_balanced() {
        assert!(braces_balanced("[0, 1)"));
        assert!(braces_balanced("\\left( a \\right]"));
        assert!(braces_balanced("\\frac{a}{b}"));
        assert!(braces_balanced("\\{ x \\}"));
        assert!(braces_balanced("\\{"));
        assert!(!braces_balanced("\\frac{a}{b"));
        assert!(!braces_balanced("}{"));
    }

    #[test]
    fn test_closure_converter() {
        let upper = |s: &str| -> Result<String, ConversionError> { Ok(s.to_uppercase()) };
        assert_eq!(upper.convert("ab").unwrap(), "AB");
    }
}
