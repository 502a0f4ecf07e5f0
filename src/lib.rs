//! Address-bar style search suggestions.
//!
//! A [`HeadlessOmnibox`] parses raw input into a query and a page, dispatches
//! the query to the most specific registered [`QueryEvent`] (or fans it out to
//! every default-search event), caches the raw results of the last query and
//! serves formatted pages from them. [`Omnibox`] binds that engine to a
//! renderer and a navigator.

pub mod app_dirs;
pub mod engine;
pub mod error;
pub mod event;
pub mod input;
pub mod logging;
pub mod omnibox;

pub use engine::{
    Browser, DEFAULT_MAX_SUGGESTION_SIZE, EngineOptions, HeadlessOmnibox, HintChange,
    SearchOutcome, Surface,
};
pub use error::{Hook, OmniboxError, Result};
pub use event::{Matcher, QueryEvent, QueryEventBuilder};
pub use input::{PAGE_TURNER, ParsedInput, parse_input, parse_input_with};
pub use omnibox::{
    Disposition, EnterOutcome, NavigationHooks, Navigator, NoHooks, Omnibox, Pagination, Render,
};

pub use omnibox_plugin_api::{Icon, Item, QueryHandler, search_fn};
