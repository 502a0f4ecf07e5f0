use std::fmt;

use thiserror::Error;

/// Handler callback that failed during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Search,
    Format,
    Append,
    IsDefaultSearch,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Format => write!(f, "format"),
            Self::Append => write!(f, "append"),
            Self::IsDefaultSearch => write!(f, "is_default_search"),
        }
    }
}

/// Errors produced while configuring or driving an omnibox.
#[derive(Debug, Error)]
pub enum OmniboxError {
    /// A query event was built without the required search handler.
    #[error("query event {name} has no search handler")]
    MissingSearchHandler { name: String },

    /// A query event was given both a prefix and a regex.
    #[error("query event {name} cannot match on both a prefix and a regex")]
    ConflictingMatcher { name: String },

    /// A regex matcher failed to compile.
    #[error("invalid regex matcher '{pattern}'")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The page size must allow at least one suggestion.
    #[error("max suggestion size must be greater than zero")]
    InvalidPageSize,

    /// A handler callback failed. The handler's own error is kept as the source.
    #[error("{hook} hook of {event} failed")]
    Handler {
        event: String,
        hook: Hook,
        #[source]
        source: anyhow::Error,
    },

    /// A navigation collaborator or navigation hook failed.
    #[error("navigation to '{content}' failed")]
    Navigation {
        content: String,
        #[source]
        source: anyhow::Error,
    },
}

impl OmniboxError {
    pub(crate) fn handler(event: impl Into<String>, hook: Hook, source: anyhow::Error) -> Self {
        Self::Handler {
            event: event.into(),
            hook,
            source,
        }
    }

    /// Give back the handler's own error when this is a [`Self::Handler`]
    /// failure, or `self` unchanged otherwise.
    pub fn into_handler_error(self) -> std::result::Result<anyhow::Error, Self> {
        match self {
            Self::Handler { source, .. } => Ok(source),
            other => Err(other),
        }
    }

    pub(crate) fn navigation(content: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Navigation {
            content: content.into(),
            source,
        }
    }
}

pub type Result<T, E = OmniboxError> = std::result::Result<T, E>;
