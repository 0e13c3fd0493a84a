//! Viewer identity passed explicitly into rendering.

use serde::{Deserialize, Serialize};

/// The user a document is rendered for.
///
/// The renderer never reads identity from global state; callers pass it
/// per render so that output stays a function of the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user id
    pub id: String,

    /// Name shown in the UI
    pub display_name: Option<String>,
}

impl Identity {
    /// Create an identity with just an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name to show, falling back to the id.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
