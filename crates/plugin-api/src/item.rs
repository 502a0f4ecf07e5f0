use serde::{Deserialize, Serialize};

/// Opaque icon token attached to every item a query event produces.
///
/// The engine never interprets the value; renderers decide whether it is a
/// URL, a glyph, or a theme key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Icon {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single suggestion produced by a handler.
///
/// `content` is the navigable target (a URL or an opaque key) and
/// `description` is display text that may carry `<match>` and `<dim>` tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub content: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Item {
    #[must_use]
    pub fn new(content: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            description: description.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
