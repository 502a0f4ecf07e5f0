//! The headless engine: registration, dispatch, caching and paging.
//!
//! [`HeadlessOmnibox`] owns every registered [`QueryEvent`] and the single
//! cache slot. It knows nothing about rendering; the UI facade in
//! [`crate::omnibox`] wraps it and forwards the results.

mod cache;
mod dispatch;
mod pagination;

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use omnibox_plugin_api::{Item, QueryHandler, strip_tags};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{OmniboxError, Result};
use crate::event::{QueryEvent, QueryEventBuilder, TaggedItem};
use crate::input::{PAGE_TURNER, ParsedInput, parse_input_with};

use cache::{CacheEntry, ResultCache};
use pagination::{ContentDeduper, carries_tip, page_slice, pagination_tip, total_pages};

/// Default number of suggestions per page.
pub const DEFAULT_MAX_SUGGESTION_SIZE: usize = 8;

/// Browser hosting an extension omnibox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chromium,
    Firefox,
}

/// Where suggestions end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// An in-page dropdown, or no UI at all.
    #[default]
    Webpage,
    /// A browser extension omnibox with a distinguished default suggestion.
    Extension(Browser),
}

impl Surface {
    #[must_use]
    pub fn is_extension(self) -> bool {
        matches!(self, Self::Extension(_))
    }

    /// Firefox cannot display markup tags in extension suggestions.
    #[must_use]
    pub fn supports_tags(self) -> bool {
        !matches!(self, Self::Extension(Browser::Firefox))
    }
}

/// Engine construction options.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub max_suggestion_size: usize,
    pub page_turner: char,
    pub default_suggestion: String,
    pub surface: Surface,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_suggestion_size: DEFAULT_MAX_SUGGESTION_SIZE,
            page_turner: PAGE_TURNER,
            default_suggestion: String::new(),
            surface: Surface::default(),
        }
    }
}

/// Hint change requested by a fresh dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintChange {
    /// A named event matched; show its name.
    Set(String),
    /// Nothing matched; default search ran.
    Remove,
}

/// One page of formatted suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<Item>,
    pub page: usize,
    pub total_page: usize,
    /// First item of the page, lifted out on extension surfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_suggestion: Option<Item>,
    #[serde(skip)]
    pub hint: Option<HintChange>,
}

/// Query dispatch, pagination and caching engine.
pub struct HeadlessOmnibox {
    options: EngineOptions,
    global_event: Arc<QueryEvent>,
    query_events: Vec<Arc<QueryEvent>>,
    cache: ResultCache,
    no_cache_queries: HashSet<String>,
    default_suggestion_description: String,
    default_suggestion_content: Option<String>,
}

impl HeadlessOmnibox {
    /// Create an engine whose global event is served by `global`.
    pub fn new<H>(global: H, options: EngineOptions) -> Result<Self>
    where
        H: QueryHandler + 'static,
    {
        Self::with_global_event(QueryEvent::global(global), options)
    }

    /// Create an engine around a prebuilt global event.
    pub fn with_global_event(global_event: QueryEvent, options: EngineOptions) -> Result<Self> {
        if options.max_suggestion_size == 0 {
            return Err(OmniboxError::InvalidPageSize);
        }
        let mut engine = Self {
            options,
            global_event: Arc::new(global_event),
            query_events: Vec::new(),
            cache: ResultCache::default(),
            no_cache_queries: HashSet::new(),
            default_suggestion_description: String::new(),
            default_suggestion_content: None,
        };
        engine.default_suggestion_description =
            engine.escape_description(&engine.options.default_suggestion);
        Ok(engine)
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.options.surface
    }

    /// Switch the surface suggestions are produced for.
    pub fn set_surface(&mut self, surface: Surface) {
        self.options.surface = surface;
        self.default_suggestion_description = self.escape_description(&self.options.default_suggestion);
    }

    /// Register a fully built event.
    pub fn add_query_event(&mut self, event: QueryEvent) {
        debug!(event = %event.label(), "registered query event");
        self.query_events.push(Arc::new(event));
    }

    /// Register an event selected by `prefix`.
    ///
    /// The prefix joins the no-cache set: a bare prefix is paged right after
    /// being typed and must not serve an older cached result.
    pub fn add_prefix_query_event(
        &mut self,
        prefix: impl Into<String>,
        event: QueryEventBuilder,
    ) -> Result<()> {
        let prefix = prefix.into();
        let event = event.prefix(prefix.clone()).build()?;
        self.add_query_event(event);
        self.no_cache_queries.insert(prefix);
        Ok(())
    }

    /// Register an event selected by a regular expression.
    pub fn add_regex_query_event(
        &mut self,
        pattern: impl Into<String>,
        event: QueryEventBuilder,
    ) -> Result<()> {
        let event = event.regex(pattern).build()?;
        self.add_query_event(event);
        Ok(())
    }

    /// Queries that always bypass the cache.
    pub fn add_no_cache_queries<I, S>(&mut self, queries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.no_cache_queries
            .extend(queries.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn is_no_cache_query(&self, query: &str) -> bool {
        self.no_cache_queries.contains(query)
    }

    /// Registered events in registration order.
    pub fn query_events(&self) -> impl Iterator<Item = &QueryEvent> {
        self.query_events.iter().map(Arc::as_ref)
    }

    #[must_use]
    pub fn global_event(&self) -> &QueryEvent {
        &self.global_event
    }

    /// The query whose results currently sit in the cache.
    #[must_use]
    pub fn cached_query(&self) -> Option<&str> {
        self.cache.query()
    }

    #[must_use]
    pub fn default_suggestion_description(&self) -> &str {
        &self.default_suggestion_description
    }

    #[must_use]
    pub fn default_suggestion_content(&self) -> Option<&str> {
        self.default_suggestion_content.as_deref()
    }

    pub fn set_default_suggestion_content(&mut self, content: impl Into<String>) {
        self.default_suggestion_content = Some(content.into());
    }

    #[must_use]
    pub fn parse(&self, input: &str) -> ParsedInput {
        parse_input_with(input, self.options.page_turner)
    }

    /// Adapt a description to what the current surface can display.
    #[must_use]
    pub fn escape_description(&self, description: &str) -> String {
        if self.options.surface.supports_tags() {
            description.to_string()
        } else {
            strip_tags(description)
        }
    }

    /// Search `input` and return the requested page of suggestions.
    ///
    /// Handler failures abort the search and leave the cache untouched. They
    /// surface as [`OmniboxError::Handler`], naming the event and hook; the
    /// handler's error itself is returned as is by
    /// [`OmniboxError::into_handler_error`].
    pub async fn search(&mut self, input: &str) -> Result<SearchOutcome> {
        let ParsedInput { query, page } = self.parse(input);

        let fresh = if self.no_cache_queries.contains(&query) || !self.cache.holds(&query) {
            Some(self.dispatch_for_cache(&query).await?)
        } else {
            debug!(query = %query, page, "serving page from cache");
            None
        };
        let hint = match fresh {
            Some((entry, hint)) => {
                self.cache.replace(entry);
                hint
            }
            None => None,
        };

        let page_size = self.options.max_suggestion_size;
        let (mut results, total_page, appendixes) = match self.cache.current() {
            Some(entry) => {
                let total_page = total_pages(entry.results.len(), page_size);
                let slice = page_slice(&entry.results, page, page_size);
                trace!(page, total_page, shown = slice.len(), "formatting page");
                let results = self.format_page(slice, page, total_page).await?;
                (results, total_page, entry.appendixes.clone())
            }
            None => (Vec::new(), 0, Vec::new()),
        };

        let mut default_suggestion = None;
        if self.options.surface.is_extension() && !results.is_empty() {
            let first = results.remove(0);
            self.default_suggestion_content = Some(first.content.clone());
            default_suggestion = Some(first);
        }
        results.extend(appendixes);

        Ok(SearchOutcome {
            results,
            page,
            total_page,
            default_suggestion,
            hint,
        })
    }

    async fn dispatch_for_cache(&self, query: &str) -> Result<(CacheEntry, Option<HintChange>)> {
        debug!(query, "dispatching query");
        let dispatch = self.perform_search(query).await?;
        let appendixes = dispatch
            .appendixes
            .into_iter()
            .map(|mut item| {
                item.description = self.escape_description(&item.description);
                item
            })
            .collect();
        let entry = CacheEntry {
            query: query.to_string(),
            results: dispatch.result,
            appendixes,
        };
        Ok((entry, dispatch.hint))
    }

    async fn format_page(
        &self,
        slice: &[TaggedItem],
        page: usize,
        total_page: usize,
    ) -> Result<Vec<Item>> {
        let tip = pagination_tip(page, total_page, self.options.page_turner);
        let mut deduper = ContentDeduper::default();
        let mut formatted = Vec::with_capacity(slice.len());

        for (index, tagged) in slice.iter().enumerate() {
            let mut item = match tagged.event.as_ref().and_then(Weak::upgrade) {
                Some(event) => event.format(tagged.item.clone(), index).await?,
                None => tagged.item.clone(),
            };
            item.content = deduper.unique(item.content);
            if carries_tip(index, slice.len(), total_page) {
                item.description.push_str(&tip);
            }
            item.description = self.escape_description(&item.description);
            formatted.push(item);
        }

        Ok(formatted)
    }
}
