//! Optimal (Belady) replacement policy.
//!
//! Evicts the resident page whose next reference lies furthest in the
//! future, or that is never referenced again. This gives the lowest
//! possible fault count for a known stream and is used as the baseline
//! FIFO and LRU are measured against.

use std::collections::HashMap;

use crate::common::{Page, ReferenceStream};
use crate::frame::FrameTable;
use crate::policy::lookahead::{scan_next_use, NextUse, NextUseTable};
use crate::policy::{Access, PolicyKind, ReplacementPolicy};

/// How the policy finds a page's next use.
#[derive(Debug, Clone)]
enum Lookahead {
    /// Precomputed next-use table plus each page's latest position.
    Table {
        table: NextUseTable,
        last_seen: HashMap<Page, usize>,
    },
    /// Forward search over the rest of the stream on every eviction.
    Scan,
}

/// Clairvoyant policy that needs the whole reference stream up front.
///
/// A victim's slot is overwritten in place, so slot identity is stable.
/// When several resident pages share the furthest next use (typically
/// several pages that never recur), the one in the lowest slot is evicted.
#[derive(Debug, Clone)]
pub struct OptimalPolicy {
    frames: FrameTable,
    lookahead: Lookahead,
}

impl OptimalPolicy {
    /// Create an Optimal policy backed by a next-use table for `stream`.
    ///
    /// The policy must then be driven over this same stream.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize, stream: &ReferenceStream) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            lookahead: Lookahead::Table {
                table: NextUseTable::build(stream),
                last_seen: HashMap::new(),
            },
        }
    }

    /// Create an Optimal policy that searches the stream on each eviction.
    ///
    /// Same decisions as [`OptimalPolicy::new`], O(n) per eviction.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_scan(capacity: usize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            lookahead: Lookahead::Scan,
        }
    }

    fn next_use(&self, stream: &ReferenceStream, page: Page, index: usize) -> NextUse {
        match &self.lookahead {
            // No reference to `page` lies between its latest one and `index`,
            // so its next use after that latest position is also the next
            // use after `index`.
            Lookahead::Table { table, last_seen } => match last_seen.get(&page) {
                Some(&position) => table.after(position),
                None => scan_next_use(stream, page, index),
            },
            Lookahead::Scan => scan_next_use(stream, page, index),
        }
    }

    /// Slot of the resident page with the furthest next use.
    fn victim_slot(&self, stream: &ReferenceStream, index: usize) -> usize {
        let mut victim = 0;
        let mut furthest = None;

        for (slot, &page) in self.frames.pages().iter().enumerate() {
            let next = self.next_use(stream, page, index);
            // Strict comparison keeps the lowest slot on ties
            if furthest.map_or(true, |best| next > best) {
                victim = slot;
                furthest = Some(next);
            }
        }

        victim
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn access(&mut self, stream: &ReferenceStream, index: usize) -> Access {
        let page = stream[index];

        let access = if self.frames.contains(page) {
            Access::Hit
        } else if !self.frames.is_full() {
            self.frames.push(page);
            Access::Fault { evicted: None }
        } else {
            let slot = self.victim_slot(stream, index);
            let evicted = self.frames.write_at(slot, page);
            Access::Fault { evicted }
        };

        if let Lookahead::Table { last_seen, .. } = &mut self.lookahead {
            last_seen.insert(page, index);
        }

        access
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
