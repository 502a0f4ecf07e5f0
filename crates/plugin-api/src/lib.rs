//! Shared handler interfaces for omnibox query events.
//!
//! Plugins depend on this crate alone: it defines the [`Item`] values handlers
//! produce, the async [`QueryHandler`] contract the engine drives, and helpers
//! for the `<match>`/`<dim>` description markup.

pub mod handler;
pub mod item;
pub mod markup;

pub use handler::{FnHandler, QueryHandler, search_fn};
pub use item::{Icon, Item};
pub use markup::{MarkupSegment, MarkupStyle, parse_markup, strip_tags};
