//! Rendering options and configuration.

use crate::parser::{NormalizeOptions, NormalizePreset};

/// Options for rendering content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown when the content is empty or whitespace-only
    pub placeholder: String,

    /// CSS color of error fragments
    pub error_color: String,

    /// CSS class prefix for block containers (`{prefix} {prefix}-{kind}`)
    pub class_prefix: String,

    /// Wrap each segmented block in a container
    pub wrap_blocks: bool,

    /// Turn `\n` in literal text into explicit line breaks
    pub preserve_line_breaks: bool,

    /// Normalize input before parsing
    pub normalize: Option<NormalizeOptions>,

    /// Count words and characters during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the error color.
    pub fn with_error_color(mut self, color: impl Into<String>) -> Self {
        self.error_color = color.into();
        self
    }

    /// Set the CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Enable or disable block containers.
    pub fn with_block_wrappers(mut self, wrap: bool) -> Self {
        self.wrap_blocks = wrap;
        self
    }

    /// Enable or disable line break preservation.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Set normalization preset.
    pub fn with_normalize_preset(mut self, preset: NormalizePreset) -> Self {
        self.normalize = Some(NormalizeOptions::from_preset(preset));
        self
    }

    /// Enable word and character counting during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder: "No content".to_string(),
            error_color: "red".to_string(),
            class_prefix: "text-block".to_string(),
            wrap_blocks: true,
            preserve_line_breaks: true,
            normalize: None,
            collect_stats: false,
        }
    }
}
