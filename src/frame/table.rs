//! FrameTable - the fixed-capacity container of resident pages.
//!
//! Each policy gives the table's order its own meaning:
//! - FIFO writes into it as a ring, overwriting at a moving pointer
//! - LRU keeps it ordered from least to most recently used
//! - Optimal overwrites the victim's slot in place
//!
//! Resident pages are always packed at the front; the remaining
//! `capacity - len` slots are reported as empty.

use crate::common::Page;
use crate::frame::{Slot, StepTrace};

/// A fixed number of frames holding at most one page each.
///
/// # Invariants
/// - `len() <= capacity()`
/// - A page is resident at most once
///
/// Operations that would break these panic: they indicate a policy bug,
/// not bad input.
///
/// # Example
/// ```
/// use pagesim::{FrameTable, Page};
///
/// let mut frames = FrameTable::new(2);
/// frames.push(Page::new(1));
/// assert_eq!(frames.snapshot().to_string(), "[1, -]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    pages: Vec<Page>,
    capacity: usize,
}

impl FrameTable {
    /// Create an empty table.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            pages: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() == self.capacity
    }

    #[inline]
    pub fn contains(&self, page: Page) -> bool {
        self.pages.contains(&page)
    }

    /// Slot index holding `page`, if resident.
    pub fn position(&self, page: Page) -> Option<usize> {
        self.pages.iter().position(|&p| p == page)
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Append a page after the last resident one.
    ///
    /// # Panics
    /// Panics if the table is full or the page is already resident.
    pub fn push(&mut self, page: Page) {
        assert!(!self.is_full(), "frame table overflow");
        debug_assert!(!self.contains(page), "page {} already resident", page);
        self.pages.push(page);
    }

    /// Place `page` in slot `index`, returning the page it replaced.
    ///
    /// Writing at `len()` fills the next empty slot.
    ///
    /// # Panics
    /// Panics if `index` is past the first empty slot.
    pub fn write_at(&mut self, index: usize, page: Page) -> Option<Page> {
        assert!(
            index <= self.pages.len() && index < self.capacity,
            "slot {} out of range",
            index
        );
        debug_assert!(!self.contains(page), "page {} already resident", page);

        if index == self.pages.len() {
            self.pages.push(page);
            None
        } else {
            Some(std::mem::replace(&mut self.pages[index], page))
        }
    }

    /// Remove the page in slot `index`, shifting later pages forward.
    pub fn remove_at(&mut self, index: usize) -> Page {
        self.pages.remove(index)
    }

    /// Remove the page in slot 0, if any.
    pub fn pop_front(&mut self) -> Option<Page> {
        if self.pages.is_empty() {
            None
        } else {
            Some(self.pages.remove(0))
        }
    }

    /// Move a resident page to the back, returning whether it was resident.
    pub fn move_to_back(&mut self, page: Page) -> bool {
        match self.position(page) {
            Some(index) => {
                let page = self.pages.remove(index);
                self.pages.push(page);
                true
            }
            None => false,
        }
    }

    /// Snapshot of all frames, padded with empty slots up to capacity.
    pub fn snapshot(&self) -> StepTrace {
        let mut slots: Vec<Slot> = self.pages.iter().copied().map(Slot::Occupied).collect();
        slots.resize(self.capacity, Slot::Empty);
        StepTrace::new(slots)
    }
}
