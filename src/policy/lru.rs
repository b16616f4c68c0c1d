//! LRU (Least Recently Used) replacement policy.

use crate::common::ReferenceStream;
use crate::frame::FrameTable;
use crate::policy::{Access, PolicyKind, ReplacementPolicy};

/// Evicts the page whose last reference is oldest.
///
/// The frame table is kept ordered from least to most recently used.
/// Every reference, hit or fault, moves its page to the back, so the
/// victim is always slot 0.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    frames: FrameTable,
}

impl LruPolicy {
    /// Create an LRU policy with `capacity` empty frames.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn access(&mut self, stream: &ReferenceStream, index: usize) -> Access {
        let page = stream[index];
        if self.frames.move_to_back(page) {
            return Access::Hit;
        }

        let evicted = if self.frames.is_full() {
            self.frames.pop_front()
        } else {
            None
        };
        self.frames.push(page);
        Access::Fault { evicted }
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Page;

    fn drive(policy: &mut LruPolicy, ids: &[i64]) -> Vec<Access> {
        let stream = ReferenceStream::from_ids(ids.iter().copied()).unwrap();
        (0..stream.len()).map(|i| policy.access(&stream, i)).collect()
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut policy = LruPolicy::new(2);
        let accesses = drive(&mut policy, &[1, 2, 3]);

        assert_eq!(accesses[2].evicted(), Some(Page::new(1)));
        assert_eq!(policy.frames().pages(), &[Page::new(2), Page::new(3)]);
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut policy = LruPolicy::new(2);
        let accesses = drive(&mut policy, &[1, 2, 1, 3]);

        assert_eq!(accesses[2], Access::Hit);
        assert_eq!(accesses[3].evicted(), Some(Page::new(2)));
        assert_eq!(policy.frames().pages(), &[Page::new(1), Page::new(3)]);
    }

    #[test]
    fn test_lru_recency_order_while_filling() {
        let mut policy = LruPolicy::new(3);
        let _ = drive(&mut policy, &[1, 2, 1]);

        assert_eq!(policy.frames().pages(), &[Page::new(2), Page::new(1)]);
        assert_eq!(policy.frames().snapshot().to_string(), "[2, 1, -]");
    }
}
