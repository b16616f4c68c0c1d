//! Next-use lookahead for the Optimal policy.
//!
//! [`NextUseTable`] answers "when is this page referenced again?" in O(1)
//! after a single backward pass over the stream. [`scan_next_use`] answers
//! the same question by searching forward, and serves as the reference the
//! table is checked against.

use std::collections::HashMap;

use crate::common::{Page, ReferenceStream};

/// Position of a page's next reference.
///
/// Ordered so that `Never` compares greater than any `At`, which makes
/// "furthest next use" a plain maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextUse {
    /// Referenced again at this stream index.
    At(usize),
    /// Never referenced again.
    Never,
}

/// For each stream position, the next position referencing the same page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextUseTable {
    next: Vec<Option<usize>>,
}

impl NextUseTable {
    /// Build the table with one backward pass over `stream`.
    pub fn build(stream: &ReferenceStream) -> Self {
        let mut next = vec![None; stream.len()];
        let mut seen: HashMap<Page, usize> = HashMap::new();

        for (i, &page) in stream.iter().enumerate().rev() {
            next[i] = seen.insert(page, i);
        }

        Self { next }
    }

    /// Next reference to the page at `position`, strictly after it.
    ///
    /// # Panics
    /// Panics if `position` is outside the stream.
    #[inline]
    pub fn after(&self, position: usize) -> NextUse {
        self.next[position].map_or(NextUse::Never, NextUse::At)
    }

    /// Number of positions covered (the stream length).
    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}

/// Next reference to `page` strictly after `index`, by forward search.
pub fn scan_next_use(stream: &ReferenceStream, page: Page, index: usize) -> NextUse {
    stream
        .after(index)
        .iter()
        .position(|&p| p == page)
        .map_or(NextUse::Never, |offset| NextUse::At(index + 1 + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_is_furthest() {
        assert!(NextUse::Never > NextUse::At(usize::MAX));
        assert!(NextUse::At(3) > NextUse::At(2));
    }

    #[test]
    fn test_table_entries() {
        let stream = ReferenceStream::from_ids([1, 2, 1, 3, 2]).unwrap();
        let table = NextUseTable::build(&stream);

        assert_eq!(table.len(), 5);
        assert_eq!(table.after(0), NextUse::At(2));
        assert_eq!(table.after(1), NextUse::At(4));
        assert_eq!(table.after(2), NextUse::Never);
        assert_eq!(table.after(3), NextUse::Never);
        assert_eq!(table.after(4), NextUse::Never);
    }

    #[test]
    fn test_scan_matches_table() {
        let stream = ReferenceStream::from_ids([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]).unwrap();
        let table = NextUseTable::build(&stream);

        for (i, &page) in stream.iter().enumerate() {
            assert_eq!(table.after(i), scan_next_use(&stream, page, i), "position {}", i);
        }
    }

    #[test]
    fn test_scan_past_end() {
        let stream = ReferenceStream::from_ids([1]).unwrap();
        assert_eq!(scan_next_use(&stream, Page::new(1), 0), NextUse::Never);
    }
}
