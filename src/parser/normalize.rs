//! Optional input normalization applied before parsing.
//!
//! Normalization is off by default. Enabling it trades the lossless
//! round-trip between input text and parsed blocks for tolerance of pasted
//! content (Windows line endings, decomposed accents, invisible
//! characters that would otherwise split a sentinel).

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalization preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePreset {
    /// Line endings only
    Minimal,
    /// Line endings, NFC, invisible characters, trailing spaces
    #[default]
    Standard,
}

/// Options for input normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Convert `\r\n` and lone `\r` to `\n`
    pub normalize_line_endings: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove a leading byte order mark
    pub strip_bom: bool,

    /// Remove zero-width spaces and joiners
    pub remove_zero_width: bool,

    /// Remove spaces and tabs before line breaks
    pub trim_trailing_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl NormalizeOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        match preset {
            NormalizePreset::Minimal => Self::minimal(),
            NormalizePreset::Standard => Self::standard(),
        }
    }

    /// Minimal normalization options.
    pub fn minimal() -> Self {
        Self {
            normalize_line_endings: true,
            normalize_unicode: false,
            strip_bom: false,
            remove_zero_width: false,
            trim_trailing_whitespace: false,
            max_consecutive_newlines: 0,
        }
    }

    /// Standard normalization options.
    pub fn standard() -> Self {
        Self {
            normalize_line_endings: true,
            normalize_unicode: true,
            strip_bom: true,
            remove_zero_width: true,
            trim_trailing_whitespace: true,
            max_consecutive_newlines: 0,
        }
    }

    /// Limit runs of blank lines.
    pub fn with_max_newlines(mut self, max: u8) -> Self {
        self.max_consecutive_newlines = max;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Input normalization pipeline.
pub struct Normalizer {
    options: NormalizeOptions,
    trailing_ws_regex: Regex,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            trailing_ws_regex: Regex::new(r"[ \t]+\n").expect("trailing whitespace pattern is valid"),
        }
    }

    /// Create a normalizer from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        Self::new(NormalizeOptions::from_preset(preset))
    }

    /// The options this normalizer applies.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize text.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.strip_bom {
            if let Some(stripped) = result.strip_prefix('\u{FEFF}') {
                result = stripped.to_string();
            }
        }

        if self.options.normalize_line_endings {
            result = result.replace("\r\n", "\n").replace('\r', "\n");
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_zero_width {
            result.retain(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}'));
        }

        if self.options.trim_trailing_whitespace {
            result = self.trailing_ws_regex.replace_all(&result, "\n").into_owned();
        }

        if self.options.max_consecutive_newlines > 0 {
            result = self.limit_newlines(&result);
        }

        result
    }

    fn limit_newlines(&self, text: &str) -> String {
        let max = self.options.max_consecutive_newlines as usize;
        let pattern = format!(r"\n{{{},}}", max + 1);
        match Regex::new(&pattern) {
            Ok(re) => re.replace_all(text, "\n".repeat(max)).into_owned(),
            Err(e) => {
                log::warn!("Skipping newline limit: {}", e);
                text.to_string()
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}
