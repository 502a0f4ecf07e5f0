//! Query events: a match rule paired with the handler callbacks.

mod matcher;

use std::fmt;
use std::sync::{Arc, Weak};

use omnibox_plugin_api::{Icon, Item, QueryHandler};
use parking_lot::Mutex;

use crate::error::{Hook, OmniboxError, Result};

pub use matcher::Matcher;

/// A registered handler descriptor.
///
/// Everything except the last served query is fixed at construction. Events
/// live for the whole lifetime of the engine that owns them.
pub struct QueryEvent {
    name: Option<String>,
    matcher: Option<Matcher>,
    handler: Arc<dyn QueryHandler>,
    default_search: bool,
    search_priority: i32,
    icon: Option<Icon>,
    searched_input: Mutex<String>,
}

impl fmt::Debug for QueryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEvent")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("default_search", &self.default_search)
            .field("search_priority", &self.search_priority)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// A handler item tagged with the event that produced it.
///
/// The back-reference is weak: it only exists so the page formatter can call
/// the producing event's `format` hook.
#[derive(Debug, Clone)]
pub(crate) struct TaggedItem {
    pub(crate) item: Item,
    pub(crate) event: Option<Weak<QueryEvent>>,
}

impl QueryEvent {
    #[must_use]
    pub fn builder() -> QueryEventBuilder {
        QueryEventBuilder::default()
    }

    /// Build the fallback event consulted when no matcher applies.
    pub fn global<H>(handler: H) -> Self
    where
        H: QueryHandler + 'static,
    {
        Self::from_parts(None, None, Arc::new(handler), false, 0, None)
    }

    fn from_parts(
        name: Option<String>,
        matcher: Option<Matcher>,
        handler: Arc<dyn QueryHandler>,
        default_search: bool,
        search_priority: i32,
        icon: Option<Icon>,
    ) -> Self {
        Self {
            name,
            matcher,
            handler,
            default_search,
            search_priority,
            icon,
            searched_input: Mutex::new(String::new()),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn matcher(&self) -> Option<&Matcher> {
        self.matcher.as_ref()
    }

    #[must_use]
    pub fn default_search(&self) -> bool {
        self.default_search
    }

    #[must_use]
    pub fn search_priority(&self) -> i32 {
        self.search_priority
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The query this event served most recently.
    #[must_use]
    pub fn searched_input(&self) -> String {
        self.searched_input.lock().clone()
    }

    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.matches(query))
    }

    /// Label used in logs and errors.
    pub(crate) fn label(&self) -> String {
        match (&self.name, &self.matcher) {
            (Some(name), _) => name.clone(),
            (None, Some(matcher)) => matcher.describe(),
            (None, None) => "global event".to_string(),
        }
    }

    /// Run the search hook and tag every returned item with this event.
    pub(crate) async fn perform_search(self: &Arc<Self>, query: &str) -> Result<Vec<TaggedItem>> {
        *self.searched_input.lock() = query.to_string();
        let items = self
            .handler
            .search(query)
            .await
            .map_err(|err| OmniboxError::handler(self.label(), Hook::Search, err))?;
        let back_ref = Arc::downgrade(self);
        Ok(items
            .into_iter()
            .map(|mut item| {
                item.icon = self.icon.clone();
                TaggedItem {
                    item,
                    event: Some(Weak::clone(&back_ref)),
                }
            })
            .collect())
    }

    pub(crate) async fn format(&self, item: Item, index: usize) -> Result<Item> {
        let searched_input = self.searched_input();
        self.handler
            .format(index, item, &searched_input)
            .await
            .map_err(|err| OmniboxError::handler(self.label(), Hook::Format, err))
    }

    pub(crate) async fn append(&self, query: &str) -> Result<Vec<Item>> {
        self.handler
            .append(query)
            .await
            .map_err(|err| OmniboxError::handler(self.label(), Hook::Append, err))
    }

    /// Whether this event joins the default search right now.
    ///
    /// A dynamic answer from the handler wins over the static flag.
    pub(crate) async fn is_default_search(&self) -> Result<bool> {
        let dynamic = self
            .handler
            .is_default_search()
            .await
            .map_err(|err| OmniboxError::handler(self.label(), Hook::IsDefaultSearch, err))?;
        Ok(dynamic.unwrap_or(self.default_search))
    }
}

/// Declarative construction of a [`QueryEvent`].
#[derive(Default)]
pub struct QueryEventBuilder {
    name: Option<String>,
    prefix: Option<String>,
    regex: Option<String>,
    handler: Option<Arc<dyn QueryHandler>>,
    default_search: bool,
    search_priority: i32,
    icon: Option<Icon>,
}

impl QueryEventBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: QueryHandler + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn shared_handler(mut self, handler: Arc<dyn QueryHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use]
    pub fn default_search(mut self, enabled: bool) -> Self {
        self.default_search = enabled;
        self
    }

    /// Lower priorities run first among default-search events.
    #[must_use]
    pub fn search_priority(mut self, priority: i32) -> Self {
        self.search_priority = priority;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.prefix.clone())
            .or_else(|| self.regex.clone())
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Validate the description and produce the event.
    pub fn build(self) -> Result<QueryEvent> {
        let Some(handler) = self.handler.clone() else {
            return Err(OmniboxError::MissingSearchHandler {
                name: self.display_name(),
            });
        };
        let matcher = match (&self.prefix, &self.regex) {
            (Some(_), Some(_)) => {
                return Err(OmniboxError::ConflictingMatcher {
                    name: self.display_name(),
                });
            }
            (Some(prefix), None) => Some(Matcher::prefix(prefix.clone())),
            (None, Some(pattern)) => Some(Matcher::regex(pattern)?),
            (None, None) => None,
        };
        Ok(QueryEvent::from_parts(
            self.name,
            matcher,
            handler,
            self.default_search,
            self.search_priority,
            self.icon,
        ))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use omnibox_plugin_api::search_fn;

    use super::*;

    fn echo() -> impl QueryHandler + 'static {
        search_fn(|query| Ok(vec![Item::new(query, "echo").with_icon("ignored")]))
    }

    #[test]
    fn builder_without_handler_fails_fast() {
        let err = QueryEvent::builder().name("Docs").build().unwrap_err();
        assert!(matches!(err, OmniboxError::MissingSearchHandler { ref name } if name == "Docs"));
    }

    #[test]
    fn builder_rejects_prefix_and_regex_together() {
        let err = QueryEvent::builder()
            .prefix("gh:")
            .regex("^gh")
            .handler(echo())
            .build()
            .unwrap_err();
        assert!(matches!(err, OmniboxError::ConflictingMatcher { .. }));
    }

    #[tokio::test]
    async fn search_tags_items_with_icon_and_back_reference() {
        let event = Arc::new(
            QueryEvent::builder()
                .prefix("crate:")
                .icon("crate-icon")
                .handler(echo())
                .build()
                .expect("event"),
        );

        let tagged = event.perform_search("crate:serde").await.expect("search");
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].item.icon, Some(Icon::new("crate-icon")));
        let back_ref = tagged[0].event.as_ref().and_then(Weak::upgrade).expect("event alive");
        assert!(Arc::ptr_eq(&back_ref, &event));
        assert_eq!(event.searched_input(), "crate:serde");
    }

    #[tokio::test]
    async fn search_failure_names_the_event_and_hook() {
        let event = Arc::new(
            QueryEvent::builder()
                .name("Broken")
                .handler(search_fn(|_| Err(anyhow!("backend offline"))))
                .build()
                .expect("event"),
        );

        let err = event.perform_search("x").await.unwrap_err();
        match err {
            OmniboxError::Handler { event, hook, source } => {
                assert_eq!(event, "Broken");
                assert_eq!(hook, Hook::Search);
                assert_eq!(source.to_string(), "backend offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn static_flag_applies_without_dynamic_hook() {
        let event = QueryEvent::builder()
            .handler(echo())
            .default_search(true)
            .build()
            .expect("event");
        assert!(event.is_default_search().await.expect("eligibility"));
    }
}
