use std::cmp::Reverse;
use std::sync::Arc;

use omnibox_plugin_api::Item;
use tracing::debug;

use crate::error::Result;
use crate::event::{QueryEvent, TaggedItem};

use super::{HeadlessOmnibox, HintChange};

/// Raw outcome of running the handlers for one query.
pub(crate) struct Dispatch {
    pub(crate) result: Vec<TaggedItem>,
    pub(crate) appendixes: Vec<Item>,
    pub(crate) hint: Option<HintChange>,
}

/// Events in the order they are tried against a query.
///
/// Prefix events are reordered among themselves so longer prefixes come
/// first; regex events keep their registration slots.
fn match_order(events: &[Arc<QueryEvent>]) -> Vec<&Arc<QueryEvent>> {
    let mut prefixed: Vec<&Arc<QueryEvent>> = events
        .iter()
        .filter(|event| prefix_len(event).is_some())
        .collect();
    prefixed.sort_by_key(|event| Reverse(prefix_len(event)));
    let mut prefixed = prefixed.into_iter();

    events
        .iter()
        .filter_map(|event| {
            if prefix_len(event).is_some() {
                prefixed.next()
            } else {
                Some(event)
            }
        })
        .collect()
}

fn prefix_len(event: &QueryEvent) -> Option<usize> {
    event.matcher().and_then(|matcher| matcher.prefix_len())
}

impl HeadlessOmnibox {
    /// The event whose matcher selects `query`, if any.
    pub(crate) fn matched_event(&self, query: &str) -> Option<&Arc<QueryEvent>> {
        match_order(&self.query_events)
            .into_iter()
            .find(|event| event.matches(query))
    }

    /// Run the handlers responsible for `query`.
    pub(crate) async fn perform_search(&self, query: &str) -> Result<Dispatch> {
        if let Some(event) = self.matched_event(query) {
            debug!(event = %event.label(), query, "dispatching to matched event");
            let result = event.perform_search(query).await?;
            let appendixes = event.append(query).await?;
            return Ok(Dispatch {
                result,
                appendixes,
                hint: event.name().map(|name| HintChange::Set(name.to_string())),
            });
        }

        let mut result = self.global_event.perform_search(query).await?;

        let mut eligible = Vec::new();
        for event in &self.query_events {
            if event.is_default_search().await? {
                eligible.push(event);
            }
        }
        eligible.sort_by_key(|event| event.search_priority());
        debug!(query, handlers = eligible.len(), "running default search");

        let mut default_appendixes = Vec::new();
        for event in eligible {
            result.extend(event.perform_search(query).await?);
            default_appendixes.extend(event.append(query).await?);
        }

        let mut appendixes = self.global_event.append(query).await?;
        appendixes.extend(default_appendixes);

        Ok(Dispatch {
            result,
            appendixes,
            hint: Some(HintChange::Remove),
        })
    }
}
