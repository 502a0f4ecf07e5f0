use std::env;
use std::io::IsTerminal;

use anyhow::Result;
use async_trait::async_trait;
use omnibox::{Disposition, EnterOutcome, Item, Navigator, Pagination, Render, Surface};
use omnibox_plugin_api::{MarkupStyle, parse_markup, strip_tags};
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::OutputFormat;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// Widest description printed on one line in plain output.
const DESCRIPTION_WIDTH: usize = 96;

/// Whether stdout should receive ANSI styling.
pub(crate) fn detect_color_support() -> bool {
	if env::var_os("NO_COLOR").is_some() {
		return false;
	}
	std::io::stdout().is_terminal()
}

/// Render description markup for a terminal.
pub(crate) fn render_markup(description: &str, ansi: bool) -> String {
	if !ansi {
		return strip_tags(description);
	}
	let mut rendered = String::new();
	for segment in parse_markup(description) {
		let style = match segment.style {
			MarkupStyle::Plain => None,
			MarkupStyle::Match => Some(BOLD),
			MarkupStyle::Dim => Some(DIM),
			MarkupStyle::Url => Some(UNDERLINE),
		};
		match style {
			Some(code) => {
				rendered.push_str(code);
				rendered.push_str(&segment.text);
				rendered.push_str(RESET);
			}
			None => rendered.push_str(&segment.text),
		}
	}
	rendered
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
pub(crate) fn truncate_to_width(text: &str, max: usize) -> String {
	if UnicodeWidthStr::width(text) <= max {
		return text.to_string();
	}
	let budget = max.saturating_sub(1);
	let mut width = 0;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
		if width + ch_width > budget {
			break;
		}
		width += ch_width;
		truncated.push(ch);
	}
	truncated.push('…');
	truncated
}

/// Prints every suggestion page to stdout.
pub(crate) struct TerminalRender {
	surface: Surface,
	format: OutputFormat,
	ansi: bool,
	hint: Option<String>,
	default_suggestion: Option<String>,
}

impl TerminalRender {
	pub(crate) fn new(surface: Surface, format: OutputFormat) -> Self {
		Self {
			surface,
			format,
			ansi: format == OutputFormat::Plain && detect_color_support(),
			hint: None,
			default_suggestion: None,
		}
	}

	fn describe(&self, description: &str) -> String {
		let plain = strip_tags(description);
		if UnicodeWidthStr::width(plain.as_str()) > DESCRIPTION_WIDTH {
			truncate_to_width(&plain, DESCRIPTION_WIDTH)
		} else {
			render_markup(description, self.ansi)
		}
	}
}

impl Render for TerminalRender {
	fn surface(&self) -> Surface {
		self.surface
	}

	fn suggest(&mut self, items: &[Item], pagination: Pagination) {
		match self.format {
			OutputFormat::Plain => {
				let hint = self
					.hint
					.as_deref()
					.map(|name| format!(" [{name}]"))
					.unwrap_or_default();
				println!("Page {}/{}{hint}", pagination.curr, pagination.total);
				if let Some(default) = &self.default_suggestion {
					println!("  * {}", self.describe(default));
				}
				for (index, item) in items.iter().enumerate() {
					println!("  {}. {}", index + 1, item.content);
					println!("     {}", self.describe(&item.description));
				}
			}
			OutputFormat::Json => {
				let payload = json!({
					"page": pagination.curr,
					"total_page": pagination.total,
					"hint": self.hint,
					"default_suggestion": self.default_suggestion,
					"suggestions": items,
				});
				println!("{payload}");
			}
		}
	}

	fn set_hint(&mut self, name: &str) {
		self.hint = Some(name.to_string());
	}

	fn remove_hint(&mut self) {
		self.hint = None;
	}

	fn set_default_suggestion(&mut self, description: &str) {
		self.default_suggestion = Some(description.to_string());
	}

	fn clear(&mut self) {
		self.default_suggestion = None;
	}

	fn reset_search_keyword(&mut self) {
		self.hint = None;
		self.default_suggestion = None;
	}
}

/// Reports navigations instead of opening a browser.
pub(crate) struct TerminalNavigator {
	format: OutputFormat,
}

impl TerminalNavigator {
	pub(crate) fn new(format: OutputFormat) -> Self {
		Self { format }
	}
}

#[async_trait]
impl Navigator for TerminalNavigator {
	async fn navigate(&self, url: &str, disposition: Disposition) -> Result<()> {
		if self.format == OutputFormat::Plain {
			println!("open ({disposition}): {url}");
		}
		Ok(())
	}
}

/// Format the result of entering a suggestion as JSON.
pub(crate) fn format_enter_json(outcome: &EnterOutcome) -> Result<String> {
	let payload = match outcome {
		EnterOutcome::Navigated { url, disposition } => json!({
			"navigated": true,
			"url": url,
			"disposition": disposition,
		}),
		EnterOutcome::NotNavigable { content } => json!({
			"navigated": false,
			"content": content,
		}),
	};
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the result of entering a suggestion.
pub(crate) fn print_enter_outcome(format: OutputFormat, outcome: &EnterOutcome) -> Result<()> {
	match (format, outcome) {
		(OutputFormat::Json, _) => println!("{}", format_enter_json(outcome)?),
		(OutputFormat::Plain, EnterOutcome::Navigated { .. }) => {}
		(OutputFormat::Plain, EnterOutcome::NotNavigable { content }) => {
			println!("not a url: {content}");
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn markup_is_stripped_without_ansi() {
		assert_eq!(
			render_markup("Search <match>rust</match> <dim>docs</dim>", false),
			"Search rust docs"
		);
	}

	#[test]
	fn markup_becomes_ansi_styles() {
		assert_eq!(
			render_markup("a <match>b</match>", true),
			format!("a {BOLD}b{RESET}")
		);
	}

	#[test]
	fn truncation_respects_display_width() {
		assert_eq!(truncate_to_width("short", 10), "short");
		assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
		assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
	}

	#[test]
	fn json_format_reports_navigation() {
		let outcome = EnterOutcome::Navigated {
			url: "https://docs.rs/".into(),
			disposition: Disposition::NewForegroundTab,
		};

		let json = format_enter_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["navigated"], true);
		assert_eq!(value["url"], "https://docs.rs/");
		assert_eq!(value["disposition"], "newForegroundTab");
	}
}
