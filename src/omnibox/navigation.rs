use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::Result;
use async_trait::async_trait;
use omnibox_plugin_api::Item;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static URL_PROTOCOLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?|file|chrome-extension|moz-extension)://")
        .expect("valid protocol pattern")
});

static DISAMBIGUATION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?\d+$").expect("valid suffix pattern"));

/// Whether `content` is a URL the omnibox navigates to.
#[must_use]
pub fn is_navigable(content: &str) -> bool {
    URL_PROTOCOLS.is_match(content)
}

/// Remove the `?N` suffix added to duplicate contents on a page.
#[must_use]
pub fn strip_disambiguation(content: &str) -> &str {
    match DISAMBIGUATION_SUFFIX.find(content) {
        Some(suffix) => &content[..suffix.start()],
        None => content,
    }
}

/// Where a chosen suggestion opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Disposition {
    #[default]
    CurrentTab,
    NewForegroundTab,
    NewBackgroundTab,
}

impl Disposition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentTab => "currentTab",
            Self::NewForegroundTab => "newForegroundTab",
            Self::NewBackgroundTab => "newBackgroundTab",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown disposition '{0}'")]
pub struct ParseDispositionError(String);

impl FromStr for Disposition {
    type Err = ParseDispositionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "currentTab" => Ok(Self::CurrentTab),
            "newForegroundTab" => Ok(Self::NewForegroundTab),
            "newBackgroundTab" => Ok(Self::NewBackgroundTab),
            other => Err(ParseDispositionError(other.to_string())),
        }
    }
}

/// Performs the actual navigation.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &str, disposition: Disposition) -> Result<()>;
}

/// Optional callbacks around navigation. Every hook defaults to a no-op.
#[async_trait]
pub trait NavigationHooks: Send + Sync {
    /// Rewrite the content about to be navigated to.
    async fn before_navigate(&self, _query: Option<&str>, content: String) -> Result<String> {
        Ok(content)
    }

    /// Called after a URL was opened, with the suggestion that led there.
    async fn after_navigated(&self, _query: Option<&str>, _item: Option<&Item>) -> Result<()> {
        Ok(())
    }

    /// Called when the chosen content is not a navigable URL.
    async fn on_empty_navigate(&self, _content: &str, _disposition: Disposition) -> Result<()> {
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl NavigationHooks for NoHooks {}
