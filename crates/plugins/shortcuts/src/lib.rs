//! Keyword shortcuts that expand a query into a URL template.
//!
//! A shortcut such as `gh:` with the template
//! `https://github.com/search?q={query}` turns `gh:tokio` into a single
//! navigable suggestion. Shortcuts can also take part in default search, in
//! which case the whole input is used as the keyword.

use anyhow::{Result, bail};
use async_trait::async_trait;
use omnibox_plugin_api::{Item, QueryHandler};
use serde::Deserialize;

/// Placeholder replaced by the encoded keyword inside a URL template.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Declarative shortcut definition as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub default_search: bool,
    #[serde(default)]
    pub priority: i32,
}

impl Shortcut {
    #[must_use]
    pub fn prefixed(prefix: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            prefix: Some(prefix.into()),
            regex: None,
            home: None,
            icon: None,
            default_search: false,
            priority: 0,
        }
    }

    /// Build the handler that serves this shortcut.
    pub fn handler(&self) -> Result<ShortcutHandler> {
        if !self.url.contains(QUERY_PLACEHOLDER) {
            bail!(
                "shortcut '{}' url must contain the {QUERY_PLACEHOLDER} placeholder",
                self.name
            );
        }
        Ok(ShortcutHandler {
            name: self.name.clone(),
            template: self.url.clone(),
            prefix: self.prefix.clone(),
            home: self.home.clone(),
        })
    }
}

/// Query handler expanding the keyword into the shortcut's URL template.
#[derive(Debug, Clone)]
pub struct ShortcutHandler {
    name: String,
    template: String,
    prefix: Option<String>,
    home: Option<String>,
}

impl ShortcutHandler {
    fn keyword<'a>(&self, query: &'a str) -> &'a str {
        let stripped = match &self.prefix {
            Some(prefix) => query.strip_prefix(prefix.as_str()).unwrap_or(query),
            None => query,
        };
        stripped.trim()
    }

    #[must_use]
    pub fn expand(&self, keyword: &str) -> String {
        self.template
            .replace(QUERY_PLACEHOLDER, &urlencoding::encode(keyword))
    }
}

#[async_trait]
impl QueryHandler for ShortcutHandler {
    async fn search(&self, query: &str) -> Result<Vec<Item>> {
        let keyword = self.keyword(query);
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Item::new(
            self.expand(keyword),
            format!(
                "Search {} for <match>{}</match>",
                self.name,
                escape_markup(keyword)
            ),
        )])
    }

    async fn append(&self, _query: &str) -> Result<Vec<Item>> {
        Ok(self
            .home
            .iter()
            .map(|home| Item::new(home.clone(), format!("Open {} <dim>{home}</dim>", self.name)))
            .collect())
    }
}

/// Neutralise markup characters so a keyword cannot open or close tags in
/// the description it is shown in.
fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
