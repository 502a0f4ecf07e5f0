//! Splits raw omnibox input into a query and a page number.
//!
//! A trailing token that starts with the page-turner sigil asks for a later
//! page: every sigil character in it advances one page. `rust --` therefore
//! means "page 3 of the results for `rust`".

/// Default page-turner sigil.
pub const PAGE_TURNER: char = '-';

/// Query text and requested page, as parsed from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub query: String,
    pub page: usize,
}

/// Parse `input` using the default [`PAGE_TURNER`].
#[must_use]
pub fn parse_input(input: &str) -> ParsedInput {
    parse_input_with(input, PAGE_TURNER)
}

/// Parse `input` using a custom page-turner sigil.
#[must_use]
pub fn parse_input_with(input: &str, page_turner: char) -> ParsedInput {
    let count_sigils = |token: &&str| token.chars().filter(|c| *c == page_turner).count();
    let is_turner = |token: &&str| token.starts_with(page_turner);

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (keywords, page): (&[&str], usize) = match tokens.as_slice() {
        [only] if is_turner(only) => (&tokens[..0], count_sigils(only)),
        [first, second] if is_turner(second) => {
            (std::slice::from_ref(first), count_sigils(second) + 1)
        }
        [rest @ .., last] if tokens.len() > 2 && is_turner(last) => {
            let page = count_sigils(last) + 1;
            if page > 1 { (rest, page) } else { (&tokens[..], page) }
        }
        _ => (&tokens[..], 1),
    };

    ParsedInput {
        query: keywords.join(" "),
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(query: &str, page: usize) -> ParsedInput {
        ParsedInput {
            query: query.into(),
            page,
        }
    }

    #[test]
    fn lone_sigils_page_through_empty_query() {
        assert_eq!(parse_input("-"), parsed("", 1));
        assert_eq!(parse_input("--"), parsed("", 2));
        assert_eq!(parse_input("  ---  "), parsed("", 3));
    }

    #[test]
    fn single_keyword_is_first_page() {
        assert_eq!(parse_input("foo"), parsed("foo", 1));
    }

    #[test]
    fn trailing_sigils_advance_pages() {
        assert_eq!(parse_input("foo -"), parsed("foo", 2));
        assert_eq!(parse_input("foo bar --"), parsed("foo bar", 3));
    }

    #[test]
    fn plain_last_token_stays_in_query() {
        assert_eq!(parse_input("foo bar"), parsed("foo bar", 1));
        assert_eq!(parse_input("foo   bar\tbaz"), parsed("foo bar baz", 1));
    }

    #[test]
    fn mixed_token_counts_only_sigil_characters() {
        assert_eq!(parse_input("foo -x-"), parsed("foo", 3));
        assert_eq!(parse_input("foo bar -x"), parsed("foo bar", 2));
    }

    #[test]
    fn empty_input_is_first_page_of_nothing() {
        assert_eq!(parse_input(""), parsed("", 1));
        assert_eq!(parse_input("   "), parsed("", 1));
    }

    #[test]
    fn custom_sigil_is_respected() {
        assert_eq!(parse_input_with("rust ++", '+'), parsed("rust", 3));
        assert_eq!(parse_input_with("rust --", '+'), parsed("rust --", 1));
    }
}
