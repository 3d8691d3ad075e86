//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;
use crate::policy::FrameSet;

/// Resident pages kept in strict arrival order.
///
/// A hit never reorders the queue; that is the whole difference from
/// [`LruFrames`](crate::policy::LruFrames).
#[derive(Debug, Clone)]
pub struct FifoFrames {
    /// Pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    capacity: usize,
}

impl FifoFrames {
    /// Create an empty FIFO frame set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            queue: VecDeque::new(),
            resident: HashSet::new(),
            capacity,
        }
    }
}

impl FrameSet for FifoFrames {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn snapshot(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }

    fn record_hit(&mut self, _page: PageId, _at: usize) {}

    fn record_miss(&mut self, page: PageId, _at: usize) -> Option<PageId> {
        let evicted = if self.queue.len() == self.capacity {
            let oldest = self.queue.pop_front();
            if let Some(oldest) = oldest {
                self.resident.remove(&oldest);
            }
            oldest
        } else {
            None
        };

        self.queue.push_back(page);
        self.resident.insert(page);
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_fifo_fills_then_evicts_oldest() {
        let mut frames = FifoFrames::new(3);

        assert_eq!(frames.record_miss(PageId::new(1), 0), None);
        assert_eq!(frames.record_miss(PageId::new(2), 1), None);
        assert_eq!(frames.record_miss(PageId::new(3), 2), None);
        assert_eq!(frames.len(), 3);

        assert_eq!(frames.record_miss(PageId::new(4), 3), Some(PageId::new(1)));
        assert_eq!(frames.snapshot(), pages(&[2, 3, 4]));
        assert!(!frames.contains(PageId::new(1)));
    }

    #[test]
    fn test_fifo_hit_no_reorder() {
        let mut frames = FifoFrames::new(2);

        frames.record_miss(PageId::new(0), 0);
        frames.record_miss(PageId::new(1), 1);
        frames.record_hit(PageId::new(0), 2); // should NOT reorder

        // Page 0 arrived first, so it is evicted first
        assert_eq!(frames.record_miss(PageId::new(2), 3), Some(PageId::new(0)));
        assert_eq!(frames.snapshot(), pages(&[1, 2]));
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut frames = FifoFrames::new(1);

        frames.record_miss(PageId::new(5), 0);
        assert_eq!(frames.record_miss(PageId::new(6), 1), Some(PageId::new(5)));
        assert_eq!(frames.snapshot(), pages(&[6]));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_fifo_zero_capacity_panics() {
        let _ = FifoFrames::new(0);
    }
}
