use anyhow::Result;
use async_trait::async_trait;

use crate::item::Item;

/// The callbacks behind a query event.
///
/// Only [`search`](Self::search) is required. Every call may suspend; the
/// engine awaits each one before moving on and never runs two handlers at the
/// same time. Errors are not caught by the engine: they abort the search that
/// triggered them.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    /// Produce the raw results for `query`.
    async fn search(&self, query: &str) -> Result<Vec<Item>>;

    /// Post-process an item right before it is shown.
    ///
    /// `index` is the position within the current page and `searched_input`
    /// is the query this handler last served.
    async fn format(&self, _index: usize, item: Item, _searched_input: &str) -> Result<Item> {
        Ok(item)
    }

    /// Extra trailing items that are never paginated.
    async fn append(&self, _query: &str) -> Result<Vec<Item>> {
        Ok(Vec::new())
    }

    /// Dynamic default-search eligibility.
    ///
    /// `None` means the handler has no opinion and the event's static flag
    /// applies. The engine asks again on every unmatched query.
    async fn is_default_search(&self) -> Result<Option<bool>> {
        Ok(None)
    }
}

/// Adapter that exposes a synchronous closure as a [`QueryHandler`].
pub struct FnHandler<F> {
    search: F,
}

/// Wrap a closure as a search-only handler.
pub fn search_fn<F>(search: F) -> FnHandler<F>
where
    F: Fn(&str) -> Result<Vec<Item>> + Send + Sync,
{
    FnHandler { search }
}

#[async_trait]
impl<F> QueryHandler for FnHandler<F>
where
    F: Fn(&str) -> Result<Vec<Item>> + Send + Sync,
{
    async fn search(&self, query: &str) -> Result<Vec<Item>> {
        (self.search)(query)
    }
}
