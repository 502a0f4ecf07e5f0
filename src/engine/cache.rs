use omnibox_plugin_api::Item;

use crate::event::TaggedItem;

/// Raw results of one dispatched query.
pub(crate) struct CacheEntry {
    pub(crate) query: String,
    pub(crate) results: Vec<TaggedItem>,
    pub(crate) appendixes: Vec<Item>,
}

/// Single-slot memo of the last dispatched query.
///
/// Paging through the same query reuses the slot; any other query replaces
/// it. Nothing else ever invalidates it.
#[derive(Default)]
pub(crate) struct ResultCache {
    entry: Option<CacheEntry>,
}

impl ResultCache {
    pub(crate) fn holds(&self, query: &str) -> bool {
        self.query() == Some(query)
    }

    pub(crate) fn query(&self) -> Option<&str> {
        self.entry.as_ref().map(|entry| entry.query.as_str())
    }

    pub(crate) fn current(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    pub(crate) fn replace(&mut self, entry: CacheEntry) {
        self.entry = Some(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(query: &str) -> CacheEntry {
        CacheEntry {
            query: query.into(),
            results: vec![TaggedItem {
                item: Item::new("a", "A"),
                event: None,
            }],
            appendixes: Vec::new(),
        }
    }

    #[test]
    fn replacing_discards_previous_query() {
        let mut cache = ResultCache::default();
        assert!(!cache.holds("rust"));

        cache.replace(entry("rust"));
        assert!(cache.holds("rust"));

        cache.replace(entry("tokio"));
        assert!(!cache.holds("rust"));
        assert_eq!(cache.query(), Some("tokio"));
        assert_eq!(cache.current().map(|entry| entry.results.len()), Some(1));
    }
}
