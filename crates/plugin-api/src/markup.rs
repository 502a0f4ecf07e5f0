//! Helpers for the lightweight description markup.
//!
//! Descriptions may wrap fragments in `<match>`, `<dim>` or `<url>` tags.
//! Surfaces that cannot display tags get the text with every tag removed.

use std::sync::LazyLock;

use regex::Regex;

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("valid tag pattern"));

static KNOWN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)(match|dim|url)>").expect("valid markup pattern"));

/// Visual emphasis requested for a run of description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupStyle {
    Plain,
    Match,
    Dim,
    Url,
}

impl MarkupStyle {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "match" => Self::Match,
            "dim" => Self::Dim,
            "url" => Self::Url,
            _ => Self::Plain,
        }
    }
}

/// A run of description text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSegment {
    pub text: String,
    pub style: MarkupStyle,
}

/// Remove every tag from `description`, keeping the enclosed text.
#[must_use]
pub fn strip_tags(description: &str) -> String {
    ANY_TAG.replace_all(description, "").into_owned()
}

/// Split a description into styled segments.
///
/// Nested tags take the innermost style. Unbalanced closing tags are ignored
/// and unknown tags are kept as literal text.
#[must_use]
pub fn parse_markup(description: &str) -> Vec<MarkupSegment> {
    let mut segments = Vec::new();
    let mut stack: Vec<MarkupStyle> = Vec::new();
    let mut cursor = 0;

    for captures in KNOWN_TAG.captures_iter(description) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        push_segment(
            &mut segments,
            &description[cursor..whole.start()],
            stack.last().copied().unwrap_or(MarkupStyle::Plain),
        );
        let style = MarkupStyle::from_tag(&captures[2]);
        if captures[1].is_empty() {
            stack.push(style);
        } else if let Some(position) = stack.iter().rposition(|open| *open == style) {
            stack.truncate(position);
        }
        cursor = whole.end();
    }

    push_segment(
        &mut segments,
        &description[cursor..],
        stack.last().copied().unwrap_or(MarkupStyle::Plain),
    );
    segments
}

fn push_segment(segments: &mut Vec<MarkupSegment>, text: &str, style: MarkupStyle) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => segments.push(MarkupSegment {
            text: text.to_string(),
            style,
        }),
    }
}
