//! FIFO (First-In-First-Out) replacement policy.

use crate::common::ReferenceStream;
use crate::frame::FrameTable;
use crate::policy::{Access, PolicyKind, ReplacementPolicy};

/// Evicts pages in the order they were loaded.
///
/// The frame table is used as a ring buffer: every fault writes at the
/// current pointer and advances it, wrapping at capacity. Hits never move
/// the pointer, which is why FIFO can show Belady's anomaly.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    frames: FrameTable,

    /// Slot the next faulting page is written to.
    next: usize,
}

impl FifoPolicy {
    /// Create a FIFO policy with `capacity` empty frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            next: 0,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn access(&mut self, stream: &ReferenceStream, index: usize) -> Access {
        let page = stream[index];
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let evicted = self.frames.write_at(self.next, page);
        self.next = (self.next + 1) % self.frames.capacity();
        Access::Fault { evicted }
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
