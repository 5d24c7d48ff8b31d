//! Fixed-size pages over a filtered, sorted sequence.

use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;

/// One page of a sequence, plus enough context to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number; `1` for an empty sequence.
    pub number: usize,
    /// Zero when the sequence is empty.
    pub page_count: usize,
    pub total: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// 0-based half-open range of the items within the full sequence.
    pub fn range(&self) -> Range<usize> {
        let start = (self.number - 1) * self.page_size;
        start..start + self.items.len()
    }

    /// `"1-10 of 42 items"`, or `"0 items"` when empty.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "0 items".to_string();
        }
        let range = self.range();
        format!("{}-{} of {} items", range.start + 1, range.end, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            page_count: self.page_count,
            total: self.total,
            page_size: self.page_size,
        }
    }
}

pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get())
}

/// Cut page `page_index` (0-based) out of `items`. An index past the end
/// clamps to the last page.
pub fn paginate<T: Clone>(items: &[T], page_size: NonZeroUsize, page_index: usize) -> Page<T> {
    let pages = page_count(items.len(), page_size);
    let index = page_index.min(pages.saturating_sub(1));
    let start = index * page_size.get();
    let end = (start + page_size.get()).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        number: index + 1,
        page_count: pages,
        total: items.len(),
        page_size: page_size.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn splits_into_fixed_pages() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, size(10), 1);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.number, 2);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.summary(), "11-20 of 23 items");
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, size(10), 2);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.summary(), "21-23 of 23 items");
        assert!(!page.has_next());
    }

    #[test]
    fn index_past_end_clamps() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, size(2), 9);
        assert_eq!(page.number, 3);
        assert_eq!(page.items, vec![5]);
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, size(10), 0);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.summary(), "0 items");
        assert!(!page.has_next());
    }

    #[test]
    fn single_page_summary() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, size(10), 0).summary(), "1-5 of 5 items");
    }
}
