use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use omnibox_plugin_api::{Item, search_fn};
use parking_lot::Mutex;

use super::*;
use crate::engine::{Browser, EngineOptions, Surface};
use crate::event::QueryEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Suggest(Vec<String>, Pagination),
    SetHint(String),
    RemoveHint,
    SetDefault(String),
    Clear,
    Reset,
}

struct RecordingRender {
    surface: Surface,
    calls: Vec<Call>,
}

impl RecordingRender {
    fn new(surface: Surface) -> Self {
        Self {
            surface,
            calls: Vec::new(),
        }
    }
}

impl Render for RecordingRender {
    fn surface(&self) -> Surface {
        self.surface
    }

    fn suggest(&mut self, items: &[Item], pagination: Pagination) {
        let contents = items.iter().map(|item| item.content.clone()).collect();
        self.calls.push(Call::Suggest(contents, pagination));
    }

    fn set_hint(&mut self, name: &str) {
        self.calls.push(Call::SetHint(name.to_string()));
    }

    fn remove_hint(&mut self) {
        self.calls.push(Call::RemoveHint);
    }

    fn set_default_suggestion(&mut self, description: &str) {
        self.calls.push(Call::SetDefault(description.to_string()));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn reset_search_keyword(&mut self) {
        self.calls.push(Call::Reset);
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<(String, Disposition)>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, url: &str, disposition: Disposition) -> AnyResult<()> {
        self.visited.lock().push((url.to_string(), disposition));
        Ok(())
    }
}

#[derive(Default, Clone)]
struct RecordingHooks {
    after: Arc<Mutex<Vec<(Option<String>, Option<Item>)>>>,
    empty: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl NavigationHooks for RecordingHooks {
    async fn after_navigated(&self, query: Option<&str>, item: Option<&Item>) -> AnyResult<()> {
        self.after
            .lock()
            .push((query.map(str::to_string), item.cloned()));
        Ok(())
    }

    async fn on_empty_navigate(&self, content: &str, _disposition: Disposition) -> AnyResult<()> {
        self.empty.lock().push(content.to_string());
        Ok(())
    }
}

fn bookmarks_engine(options: EngineOptions) -> HeadlessOmnibox {
    let global = search_fn(|query| {
        Ok(vec![
            Item::new("https://docs.rs/", format!("docs for {query}")),
            Item::new("https://docs.rs/", "docs mirror"),
            Item::new("note:plain", "not a url"),
        ])
    });
    let mut engine = HeadlessOmnibox::new(global, options).expect("engine");
    engine
        .add_prefix_query_event(
            "gh:",
            QueryEvent::builder()
                .name("GitHub")
                .handler(search_fn(|_| Ok(vec![Item::new("https://github.com/", "gh")]))),
        )
        .expect("register");
    engine
}

fn webpage() -> Omnibox<RecordingRender, RecordingNavigator> {
    Omnibox::new(
        bookmarks_engine(EngineOptions::default()),
        RecordingRender::new(Surface::Webpage),
        RecordingNavigator::default(),
    )
}

#[test]
fn disambiguation_suffix_is_stripped() {
    assert_eq!(strip_disambiguation("https://a/?7"), "https://a/");
    assert_eq!(strip_disambiguation("https://a/?q=1"), "https://a/?q=1");
    assert_eq!(strip_disambiguation("https://a/"), "https://a/");
}

#[test]
fn navigable_protocols_are_case_insensitive() {
    assert!(is_navigable("HTTPS://example.com"));
    assert!(is_navigable("moz-extension://abc/page.html"));
    assert!(!is_navigable("ftp://example.com"));
    assert!(!is_navigable("example.com"));
}

#[test]
fn disposition_round_trips_through_text() {
    for disposition in [
        Disposition::CurrentTab,
        Disposition::NewForegroundTab,
        Disposition::NewBackgroundTab,
    ] {
        assert_eq!(disposition.to_string().parse::<Disposition>().ok(), Some(disposition));
    }
    assert!("sideways".parse::<Disposition>().is_err());
}

#[tokio::test]
async fn typing_suggests_page_and_sets_hint() {
    let mut omnibox = webpage();

    omnibox.input_changed("gh:tokio").await.expect("search");
    omnibox.input_changed("rust").await.expect("search");

    let calls = &omnibox.render().calls;
    assert_eq!(calls[0], Call::SetHint("GitHub".into()));
    assert_eq!(
        calls[1],
        Call::Suggest(vec!["https://github.com/".into()], Pagination { curr: 1, total: 1 })
    );
    assert_eq!(calls[2], Call::RemoveHint);
    assert_eq!(
        calls[3],
        Call::Suggest(
            vec![
                "https://docs.rs/".into(),
                "https://docs.rs/?1".into(),
                "note:plain".into()
            ],
            Pagination { curr: 1, total: 1 }
        )
    );
}

#[tokio::test]
async fn empty_input_clears_webpage_dropdown() {
    let mut omnibox = webpage();
    omnibox.input_changed("rust").await.expect("search");
    omnibox.input_changed("").await.expect("clear");

    assert!(omnibox.results().is_empty());
    let calls = &omnibox.render().calls;
    assert_eq!(&calls[calls.len() - 2..], [Call::Clear, Call::RemoveHint]);
}

#[tokio::test]
async fn entering_duplicate_navigates_without_suffix() {
    let hooks = RecordingHooks::default();
    let mut omnibox = webpage().with_hooks(hooks.clone());
    omnibox.input_changed("rust").await.expect("search");

    let outcome = omnibox
        .input_entered("https://docs.rs/?1", Disposition::NewBackgroundTab)
        .await
        .expect("enter");

    assert_eq!(
        outcome,
        EnterOutcome::Navigated {
            url: "https://docs.rs/".into(),
            disposition: Disposition::NewBackgroundTab,
        }
    );
    assert_eq!(
        omnibox.navigator().visited.lock().as_slice(),
        [("https://docs.rs/".to_string(), Disposition::NewBackgroundTab)]
    );
    let after = hooks.after.lock();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].0.as_deref(), Some("rust"));
    assert_eq!(after[0].1.as_ref().map(|item| item.description.as_str()), Some("docs mirror"));
    assert_eq!(omnibox.render().calls.last(), Some(&Call::Reset));
}

#[tokio::test]
async fn non_url_content_goes_to_empty_navigate() {
    let hooks = RecordingHooks::default();
    let mut omnibox = webpage().with_hooks(hooks.clone());
    omnibox.input_changed("rust").await.expect("search");

    let outcome = omnibox
        .input_entered("note:plain", Disposition::CurrentTab)
        .await
        .expect("enter");

    assert_eq!(
        outcome,
        EnterOutcome::NotNavigable {
            content: "note:plain".into()
        }
    );
    assert!(omnibox.navigator().visited.lock().is_empty());
    assert_eq!(hooks.empty.lock().as_slice(), ["note:plain".to_string()]);
    assert!(hooks.after.lock().is_empty());
}

#[tokio::test]
async fn extension_enter_on_input_uses_default_suggestion() {
    let options = EngineOptions {
        default_suggestion: "Search docs".into(),
        ..EngineOptions::default()
    };
    let mut omnibox = Omnibox::new(
        bookmarks_engine(options),
        RecordingRender::new(Surface::Extension(Browser::Chromium)),
        RecordingNavigator::default(),
    );
    omnibox.bootstrap();
    omnibox.input_changed("rust").await.expect("search");

    let outcome = omnibox
        .input_entered("rust", Disposition::CurrentTab)
        .await
        .expect("enter");

    assert_eq!(
        outcome,
        EnterOutcome::Navigated {
            url: "https://docs.rs/".into(),
            disposition: Disposition::CurrentTab,
        }
    );
    let calls = &omnibox.render().calls;
    assert_eq!(calls[0], Call::SetDefault("Search docs".into()));
    assert!(matches!(&calls[1], Call::SetDefault(description) if description.starts_with("docs for rust")));
    assert!(!calls.iter().any(|call| matches!(call, Call::SetHint(_) | Call::RemoveHint)));
    assert_eq!(calls.last(), Some(&Call::SetDefault("Search docs".into())));
}
