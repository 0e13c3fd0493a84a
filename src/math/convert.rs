//! Built-in math notation converters.

use super::{brackets_balanced, MathConverter};
use crate::error::ConversionError;
use regex::Regex;

/// Converter that hands the source through unchanged.
///
/// Useful when inline spans are already written in typeset notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughConverter;

impl MathConverter for PassthroughConverter {
    fn convert(&self, source: &str) -> Result<String, ConversionError> {
        Ok(source.to_string())
    }
}

/// Table-driven converter for the common subset of ASCII math notation.
///
/// Known names (`alpha`, `sum`, `oo`, ...) and operators (`<=`, `->`,
/// `+-`, ...) are replaced by typeset commands. A parenthesized argument
/// directly after `sqrt`, `hat`, `bar`, `vec` or `dot` becomes a brace
/// group. Anything else passes through. Sources with unbalanced brackets
/// are rejected.
pub struct SymbolConverter {
    token_regex: Regex,
    symbols: Vec<(&'static str, &'static str)>,
}

/// Commands that take a single grouped argument.
const UNARY_COMMANDS: &[&str] = &["sqrt", "hat", "bar", "vec", "dot"];

impl SymbolConverter {
    /// Create a converter with the default symbol table.
    pub fn new() -> Self {
        Self {
            // Alternation is leftmost-first, so longer operators come first.
            token_regex: Regex::new(
                r"<=>|<=|>=|!=|->|=>|\+-|~~|-:|\*\*|\.\.\.|[A-Za-z]+|\s+|.",
            )
            .expect("token pattern is valid"),
            symbols: vec![
                // Greek
                ("alpha", "\\alpha"),
                ("beta", "\\beta"),
                ("gamma", "\\gamma"),
                ("delta", "\\delta"),
                ("epsilon", "\\epsilon"),
                ("zeta", "\\zeta"),
                ("eta", "\\eta"),
                ("theta", "\\theta"),
                ("iota", "\\iota"),
                ("kappa", "\\kappa"),
                ("lambda", "\\lambda"),
                ("mu", "\\mu"),
                ("nu", "\\nu"),
                ("xi", "\\xi"),
                ("pi", "\\pi"),
                ("rho", "\\rho"),
                ("sigma", "\\sigma"),
                ("tau", "\\tau"),
                ("upsilon", "\\upsilon"),
                ("phi", "\\phi"),
                ("chi", "\\chi"),
                ("psi", "\\psi"),
                ("omega", "\\omega"),
                ("Gamma", "\\Gamma"),
                ("Delta", "\\Delta"),
                ("Theta", "\\Theta"),
                ("Lambda", "\\Lambda"),
                ("Xi", "\\Xi"),
                ("Pi", "\\Pi"),
                ("Sigma", "\\Sigma"),
                ("Phi", "\\Phi"),
                ("Psi", "\\Psi"),
                ("Omega", "\\Omega"),
                // Functions
                ("sin", "\\sin"),
                ("cos", "\\cos"),
                ("tan", "\\tan"),
                ("log", "\\log"),
                ("ln", "\\ln"),
                ("exp", "\\exp"),
                ("lim", "\\lim"),
                ("min", "\\min"),
                ("max", "\\max"),
                ("det", "\\det"),
                // Large operators
                ("sum", "\\sum"),
                ("prod", "\\prod"),
                ("int", "\\int"),
                ("oint", "\\oint"),
                // Accents and roots
                ("sqrt", "\\sqrt"),
                ("hat", "\\hat"),
                ("bar", "\\overline"),
                ("vec", "\\vec"),
                ("dot", "\\dot"),
                // Named symbols
                ("oo", "\\infty"),
                ("del", "\\partial"),
                ("grad", "\\nabla"),
                ("AA", "\\forall"),
                ("EE", "\\exists"),
                ("in", "\\in"),
                ("xx", "\\times"),
                // Operators
                ("<=>", "\\Leftrightarrow"),
                ("<=", "\\le"),
                (">=", "\\ge"),
                ("!=", "\\ne"),
                ("->", "\\to"),
                ("=>", "\\Rightarrow"),
                ("+-", "\\pm"),
                ("~~", "\\approx"),
                ("-:", "\\div"),
                ("**", "\\ast"),
                ("*", "\\cdot"),
                ("...", "\\ldots"),
            ],
        }
    }

    fn lookup(&self, token: &str) -> Option<&'static str> {
        self.symbols
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, command)| *command)
    }
}

impl Default for SymbolConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MathConverter for SymbolConverter {
    fn convert(&self, source: &str) -> Result<String, ConversionError> {
        if !brackets_balanced(source) {
            return Err(ConversionError::new(source, "unbalanced brackets"));
        }

        let mut tokens: Vec<String> = self
            .token_regex
            .find_iter(source)
            .map(|m| m.as_str().to_string())
            .collect();

        // Turn `sqrt(x)` into `sqrt{x}` before symbol substitution.
        for i in 0..tokens.len() {
            if !UNARY_COMMANDS.contains(&tokens[i].as_str()) {
                continue;
            }
            if tokens.get(i + 1).map(String::as_str) != Some("(") {
                continue;
            }
            if let Some(close) = matching_paren(&tokens, i + 1) {
                tokens[i + 1] = "{".to_string();
                tokens[close] = "}".to_string();
            }
        }

        let mut output = String::with_capacity(source.len() * 2);
        for (i, token) in tokens.iter().enumerate() {
            match self.lookup(token) {
                Some(command) => {
                    output.push_str(command);
                    let next_is_alpha = tokens
                        .get(i + 1)
                        .and_then(|t| t.chars().next())
                        .is_some_and(|c| c.is_ascii_alphanumeric());
                    if next_is_alpha && command.starts_with('\\') {
                        output.push(' ');
                    }
                }
                None => output.push_str(token),
            }
        }

        Ok(output)
    }
}

/// Index of the `)` token matching the `(` at `open`.
fn matching_paren(tokens: &[String], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.as_str() {
            "(" => depth += 1,
            ")" => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
