use regex::Regex;

use crate::error::{OmniboxError, Result};

/// Rule deciding whether a query event serves a query.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Literal prefix, checked with `starts_with`.
    Prefix(String),
    /// Regular expression, matched anywhere in the query.
    Regex(Regex),
}

impl Matcher {
    #[must_use]
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Compile `pattern` into a regex matcher.
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| OmniboxError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        match self {
            Self::Prefix(prefix) => !prefix.is_empty() && query.starts_with(prefix.as_str()),
            Self::Regex(regex) => regex.is_match(query),
        }
    }

    /// Length of a prefix matcher; regex matchers have none.
    #[must_use]
    pub fn prefix_len(&self) -> Option<usize> {
        match self {
            Self::Prefix(prefix) => Some(prefix.len()),
            Self::Regex(_) => None,
        }
    }

    #[must_use]
    pub fn as_prefix(&self) -> Option<&str> {
        match self {
            Self::Prefix(prefix) => Some(prefix),
            Self::Regex(_) => None,
        }
    }

    /// Human readable form used in logs and error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Prefix(prefix) => format!("prefix '{prefix}'"),
            Self::Regex(regex) => format!("regex /{}/", regex.as_str()),
        }
    }
}
