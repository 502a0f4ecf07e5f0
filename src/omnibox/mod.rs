//! UI-bound facade around the headless engine.
//!
//! [`Omnibox`] owns a [`HeadlessOmnibox`] and forwards keystrokes to it, then
//! hands the resulting page to a [`Render`] implementation. Choosing a
//! suggestion goes through the [`Navigator`] and optional
//! [`NavigationHooks`].

mod navigation;
mod render;

use omnibox_plugin_api::Item;
use tracing::debug;

use crate::engine::{HeadlessOmnibox, HintChange};
use crate::error::{OmniboxError, Result};

pub use navigation::{
    Disposition, NavigationHooks, Navigator, NoHooks, ParseDispositionError, is_navigable,
    strip_disambiguation,
};
pub use render::{Pagination, Render};

/// What happened when a suggestion was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterOutcome {
    /// A URL was opened.
    Navigated { url: String, disposition: Disposition },
    /// The content was not navigable; `on_empty_navigate` ran instead.
    NotNavigable { content: String },
}

pub struct Omnibox<R, N> {
    engine: HeadlessOmnibox,
    render: R,
    navigator: N,
    hooks: Box<dyn NavigationHooks>,
    hint_enabled: bool,
    current_input: Option<String>,
    results: Vec<Item>,
    default_description: Option<String>,
}

impl<R, N> Omnibox<R, N>
where
    R: Render,
    N: Navigator,
{
    /// Bind `engine` to a renderer and a navigator.
    ///
    /// The engine adopts the renderer's surface. Hints are enabled for
    /// in-page surfaces only.
    pub fn new(mut engine: HeadlessOmnibox, render: R, navigator: N) -> Self {
        let surface = render.surface();
        engine.set_surface(surface);
        Self {
            engine,
            render,
            navigator,
            hooks: Box::new(NoHooks),
            hint_enabled: !surface.is_extension(),
            current_input: None,
            results: Vec::new(),
            default_description: None,
        }
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: impl NavigationHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Enable or disable handler-name hints. Extension surfaces never show them.
    #[must_use]
    pub fn with_hint(mut self, enabled: bool) -> Self {
        self.hint_enabled = enabled && !self.engine.surface().is_extension();
        self
    }

    #[must_use]
    pub fn engine(&self) -> &HeadlessOmnibox {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut HeadlessOmnibox {
        &mut self.engine
    }

    #[must_use]
    pub fn render(&self) -> &R {
        &self.render
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Suggestions shown for the last input.
    #[must_use]
    pub fn results(&self) -> &[Item] {
        &self.results
    }

    /// Show the configured default suggestion on extension surfaces.
    pub fn bootstrap(&mut self) {
        if self.engine.surface().is_extension() {
            self.restore_default_suggestion();
        }
    }

    /// React to the user editing the input.
    pub async fn input_changed(&mut self, input: &str) -> Result<()> {
        self.engine.set_default_suggestion_content(input);
        if input.is_empty() {
            if self.engine.surface().is_extension() {
                self.restore_default_suggestion();
            } else {
                self.results.clear();
                self.render.clear();
                if self.hint_enabled {
                    self.render.remove_hint();
                }
            }
            return Ok(());
        }

        self.current_input = Some(input.to_string());
        let outcome = self.engine.search(input).await?;

        if self.hint_enabled {
            match &outcome.hint {
                Some(HintChange::Set(name)) => self.render.set_hint(name),
                Some(HintChange::Remove) => self.render.remove_hint(),
                None => {}
            }
        }
        if let Some(default) = &outcome.default_suggestion {
            self.render.set_default_suggestion(&default.description);
            self.default_description = Some(default.description.clone());
        }

        self.results = outcome.results;
        let pagination = Pagination {
            curr: outcome.page,
            total: outcome.total_page,
        };
        self.render.suggest(&self.results, pagination);
        Ok(())
    }

    /// React to the user choosing `content`.
    ///
    /// Entering the raw input selects the default suggestion.
    pub async fn input_entered(
        &mut self,
        content: &str,
        disposition: Disposition,
    ) -> Result<EnterOutcome> {
        let query = self.engine.cached_query().map(str::to_string);
        let query = query.as_deref();

        let (content, chosen) = if self.current_input.as_deref() == Some(content) {
            let default_content = self
                .engine
                .default_suggestion_content()
                .unwrap_or(content)
                .to_string();
            let content = self
                .hooks
                .before_navigate(query, default_content)
                .await
                .map_err(|err| OmniboxError::navigation(content, err))?;
            let description = self.default_description.clone().unwrap_or_default();
            let chosen = Item::new(content.clone(), description);
            (content, Some(chosen))
        } else {
            let chosen = self.results.iter().find(|item| item.content == content).cloned();
            let content = self
                .hooks
                .before_navigate(query, content.to_string())
                .await
                .map_err(|err| OmniboxError::navigation(content, err))?;
            (content, chosen)
        };

        let outcome = if is_navigable(&content) {
            let url = strip_disambiguation(&content).to_string();
            debug!(url = %url, %disposition, "navigating");
            self.navigator
                .navigate(&url, disposition)
                .await
                .map_err(|err| OmniboxError::navigation(&url, err))?;
            let chosen = chosen.map(|mut item| {
                item.content = content.clone();
                item
            });
            self.hooks
                .after_navigated(query, chosen.as_ref())
                .await
                .map_err(|err| OmniboxError::navigation(&url, err))?;
            EnterOutcome::Navigated { url, disposition }
        } else {
            debug!(content = %content, "content is not navigable");
            self.hooks
                .on_empty_navigate(&content, disposition)
                .await
                .map_err(|err| OmniboxError::navigation(&content, err))?;
            EnterOutcome::NotNavigable { content }
        };

        if self.engine.surface().is_extension() {
            self.restore_default_suggestion();
        } else {
            self.render.reset_search_keyword();
        }
        Ok(outcome)
    }

    fn restore_default_suggestion(&mut self) {
        let description = self.engine.default_suggestion_description().to_string();
        self.render.set_default_suggestion(&description);
    }
}

#[cfg(test)]
mod tests;
