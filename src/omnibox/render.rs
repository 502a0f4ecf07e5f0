use omnibox_plugin_api::Item;
use serde::Serialize;

use crate::engine::Surface;

/// Page position reported alongside suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    pub curr: usize,
    pub total: usize,
}

/// Presentation collaborator driven by [`super::Omnibox`].
///
/// Implementations only display what they are given; the engine has already
/// paged, formatted and escaped every item.
pub trait Render {
    /// Surface this renderer displays on.
    fn surface(&self) -> Surface;

    fn suggest(&mut self, items: &[Item], pagination: Pagination);

    fn set_hint(&mut self, name: &str);

    fn remove_hint(&mut self);

    /// Show the distinguished default suggestion of an extension omnibox.
    fn set_default_suggestion(&mut self, description: &str);

    /// Drop every visible suggestion.
    fn clear(&mut self);

    /// Reset the search box after a navigation.
    fn reset_search_keyword(&mut self);
}
