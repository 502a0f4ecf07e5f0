use std::collections::HashSet;

/// Number of pages needed for `len` results.
pub(crate) fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The results shown on the 1-based `page`.
pub(crate) fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub(crate) fn pagination_tip(page: usize, total: usize, page_turner: char) -> String {
    format!(" | Page [{page}/{total}], append '{page_turner}' to page down")
}

/// Whether the item at `index` of a page carries the pagination tip.
///
/// The first item always does. The last one does too when there is more than
/// one page and the page is long enough that the two tips are not adjacent.
pub(crate) fn carries_tip(index: usize, page_len: usize, total: usize) -> bool {
    index == 0 || (total > 1 && page_len > 2 && index + 1 == page_len)
}

/// Keeps `content` values unique within one page.
///
/// A repeated value gets a `?N` suffix where N is the number of distinct
/// values seen so far.
#[derive(Default)]
pub(crate) struct ContentDeduper {
    seen: HashSet<String>,
}

impl ContentDeduper {
    pub(crate) fn unique(&mut self, content: String) -> String {
        let content = if self.seen.contains(&content) {
            format!("{content}?{}", self.seen.len())
        } else {
            content
        };
        self.seen.insert(content.clone());
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(0, 8), 0);
    }

    #[test]
    fn page_slice_handles_tail_and_overflow() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1, 2), &[1, 2]);
        assert_eq!(page_slice(&items, 3, 2), &[5]);
        assert!(page_slice(&items, 4, 2).is_empty());
    }

    #[test]
    fn tip_placement_follows_first_and_last_rule() {
        assert!(carries_tip(0, 1, 3));
        assert!(carries_tip(0, 2, 3));
        assert!(!carries_tip(1, 2, 3));
        assert!(carries_tip(2, 3, 3));
        assert!(!carries_tip(2, 3, 1));
    }

    #[test]
    fn duplicates_get_running_suffix() {
        let mut deduper = ContentDeduper::default();
        assert_eq!(deduper.unique("x".into()), "x");
        assert_eq!(deduper.unique("x".into()), "x?1");
        assert_eq!(deduper.unique("y".into()), "y");
        assert_eq!(deduper.unique("x".into()), "x?3");
    }

    #[test]
    fn tip_mentions_sigil() {
        assert_eq!(
            pagination_tip(2, 3, '-'),
            " | Page [2/3], append '-' to page down"
        );
    }
}
