//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::policy::FrameSet;

/// Resident pages ordered by recency of use.
///
/// The front of the queue is the least recently used page and the back is
/// the page touched by the latest reference, hit or miss.
#[derive(Debug, Clone)]
pub struct LruFrames {
    /// Recency order (front = least recent).
    order: VecDeque<PageId>,

    capacity: usize,
}

impl LruFrames {
    /// Create an empty LRU frame set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            order: VecDeque::new(),
            capacity,
        }
    }

    fn position(&self, page: PageId) -> Option<usize> {
        self.order.iter().position(|&p| p == page)
    }
}

impl FrameSet for LruFrames {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.position(page).is_some()
    }

    fn snapshot(&self) -> Vec<PageId> {
        self.order.iter().copied().collect()
    }

    /// Move the page to the most-recent end.
    fn record_hit(&mut self, page: PageId, _at: usize) {
        if let Some(idx) = self.position(page) {
            self.order.remove(idx);
            self.order.push_back(page);
        }
    }

    fn record_miss(&mut self, page: PageId, _at: usize) -> Option<PageId> {
        let evicted = if self.order.len() == self.capacity {
            self.order.pop_front()
        } else {
            None
        };

        self.order.push_back(page);
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_lru_hit_moves_to_most_recent() {
        let mut frames = LruFrames::new(3);

        frames.record_miss(PageId::new(1), 0);
        frames.record_miss(PageId::new(2), 1);
        frames.record_miss(PageId::new(3), 2);
        frames.record_hit(PageId::new(1), 3);

        assert_eq!(frames.snapshot(), pages(&[2, 3, 1]));
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut frames = LruFrames::new(2);

        frames.record_miss(PageId::new(0), 0);
        frames.record_miss(PageId::new(1), 1);
        frames.record_hit(PageId::new(0), 2);

        // Page 1 is now the least recently used
        assert_eq!(frames.record_miss(PageId::new(2), 3), Some(PageId::new(1)));
        assert_eq!(frames.snapshot(), pages(&[0, 2]));
    }

    #[test]
    fn test_lru_hit_on_most_recent_is_stable() {
        let mut frames = LruFrames::new(2);

        frames.record_miss(PageId::new(4), 0);
        frames.record_miss(PageId::new(5), 1);
        frames.record_hit(PageId::new(5), 2);

        assert_eq!(frames.snapshot(), pages(&[4, 5]));
        assert!(frames.contains(PageId::new(4)));
    }
}
