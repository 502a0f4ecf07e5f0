//! Fuzzy bookmark search for the omnibox global event.
//!
//! Bookmarks are matched with `frizbee` against their title and, separately,
//! against their URL and tags. Title hits rank ahead of location-only hits.
//! Empty queries list every bookmark alphabetically by title.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use frizbee::{Options, match_list};
use omnibox_plugin_api::{Item, QueryHandler};
use serde::Deserialize;

/// A single bookmark entry as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Bookmark {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn location_text(&self) -> String {
        let mut text = self.url.clone();
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text
    }

    fn to_item(&self) -> Item {
        Item::new(
            self.url.clone(),
            format!("{} - <dim>{}</dim>", self.title, self.url),
        )
    }
}

/// Which part of a bookmark a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchField {
    Location,
    Title,
}

/// Number of missing query characters tolerated when matching bookmarks.
///
/// Bookmark lists are short and hand written, so the budget stays small:
/// one typo per four query characters, at most two.
#[must_use]
pub fn typo_budget(query: &str) -> u16 {
    let quarters = query.chars().count() / 4;
    u16::try_from(quarters).map_or(2, |budget| budget.min(2))
}

fn match_options(query: &str) -> Options {
    Options {
        prefilter: false,
        min_score: 0,
        max_typos: Some(typo_budget(query)),
        sort: false,
    }
}

/// Query handler serving fuzzy matches over a fixed bookmark list.
pub struct BookmarkHandler {
    bookmarks: Vec<Bookmark>,
    titles: Vec<String>,
    locations: Vec<String>,
}

impl BookmarkHandler {
    #[must_use]
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        let titles = bookmarks.iter().map(|bookmark| bookmark.title.clone()).collect();
        let locations = bookmarks.iter().map(Bookmark::location_text).collect();
        Self {
            bookmarks,
            titles,
            locations,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn alphabetical(&self) -> Vec<Item> {
        let mut ordered: Vec<&Bookmark> = self.bookmarks.iter().collect();
        ordered.sort_by_cached_key(|bookmark| bookmark.title.to_lowercase());
        ordered.into_iter().map(Bookmark::to_item).collect()
    }

    fn ranked(&self, query: &str) -> Vec<Item> {
        let options = match_options(query);
        let mut best: HashMap<usize, (MatchField, u16)> = HashMap::new();
        for (field, haystacks) in [
            (MatchField::Title, &self.titles),
            (MatchField::Location, &self.locations),
        ] {
            for entry in match_list(query, haystacks.as_slice(), options) {
                if entry.score == 0 {
                    continue;
                }
                let rank = (field, entry.score);
                best.entry(entry.index_in_haystack as usize)
                    .and_modify(|current| *current = (*current).max(rank))
                    .or_insert(rank);
            }
        }

        let mut matches: Vec<(usize, (MatchField, u16))> = best.into_iter().collect();
        matches.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        matches
            .into_iter()
            .filter_map(|(index, _)| self.bookmarks.get(index))
            .map(Bookmark::to_item)
            .collect()
    }
}

#[async_trait]
impl QueryHandler for BookmarkHandler {
    async fn search(&self, query: &str) -> Result<Vec<Item>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(self.alphabetical());
        }
        Ok(self.ranked(trimmed))
    }

    async fn format(&self, _index: usize, mut item: Item, searched_input: &str) -> Result<Item> {
        item.description = highlight_title(&item.description, searched_input.trim());
        Ok(item)
    }
}

/// Wrap the first case-insensitive occurrence of `needle` in the title part
/// of a description with `<match>` tags.
fn highlight_title(description: &str, needle: &str) -> String {
    if needle.is_empty() {
        return description.to_string();
    }
    let title_end = description.find(" - <dim>").unwrap_or(description.len());
    let title = &description[..title_end];
    let lowered = title.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; only highlight when
    // the offsets still line up.
    if lowered.len() != title.len() {
        return description.to_string();
    }
    match lowered.find(&needle.to_lowercase()) {
        Some(start) if title.is_char_boundary(start + needle.len()) => {
            let end = start + needle.len();
            format!(
                "{}<match>{}</match>{}{}",
                &title[..start],
                &title[start..end],
                &title[end..],
                &description[title_end..]
            )
        }
        _ => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> BookmarkHandler {
        BookmarkHandler::new(vec![
            Bookmark::new("Tokio", "https://tokio.rs/"),
            Bookmark::new("crates.io", "https://crates.io/").with_tags(["registry"]),
            Bookmark::new("Rust Book", "https://doc.rust-lang.org/book/"),
        ])
    }

    #[tokio::test]
    async fn empty_query_lists_bookmarks_alphabetically() {
        let items = handler().search("  ").await.expect("search");
        let urls: Vec<_> = items.iter().map(|item| item.content.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://crates.io/",
                "https://doc.rust-lang.org/book/",
                "https://tokio.rs/",
            ]
        );
    }

    #[tokio::test]
    async fn query_matches_title_text() {
        let items = handler().search("tokio").await.expect("search");
        assert_eq!(
            items.first().map(|item| item.content.as_str()),
            Some("https://tokio.rs/")
        );
    }

    #[tokio::test]
    async fn title_hits_rank_ahead_of_location_hits() {
        let handler = BookmarkHandler::new(vec![
            Bookmark::new("Async runtime", "https://tokio.rs/"),
            Bookmark::new("Tokio tutorial", "https://tokio.rs/tokio/tutorial/"),
        ]);
        let items = handler.search("tokio").await.expect("search");
        let urls: Vec<_> = items.iter().map(|item| item.content.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://tokio.rs/tokio/tutorial/", "https://tokio.rs/"]
        );
    }

    #[tokio::test]
    async fn tags_are_searched_with_the_url() {
        let items = handler().search("registry").await.expect("search");
        assert_eq!(
            items.first().map(|item| item.content.as_str()),
            Some("https://crates.io/")
        );
    }

    #[tokio::test]
    async fn unrelated_query_matches_nothing() {
        assert!(handler().search("zzzz").await.expect("search").is_empty());
    }

    #[test]
    fn typo_budget_grows_with_query_length() {
        assert_eq!(typo_budget("g"), 0);
        assert_eq!(typo_budget("tokio"), 1);
        assert_eq!(typo_budget("crates registry"), 2);
    }

    #[test]
    fn highlight_wraps_first_title_occurrence() {
        let description = "Rust Book - <dim>https://doc.rust-lang.org/book/</dim>";
        assert_eq!(
            highlight_title(description, "book"),
            "Rust <match>Book</match> - <dim>https://doc.rust-lang.org/book/</dim>"
        );
    }

    #[test]
    fn highlight_ignores_url_part() {
        let description = "Tokio - <dim>https://tokio.rs/</dim>";
        assert_eq!(highlight_title(description, "https"), description);
    }
}
