//! Optimal (Belady's MIN) replacement policy.
//!
//! The policy is offline: picking a victim needs the rest of the reference
//! string, so [`OptimalFrames`] borrows the whole sequence up front. It is
//! only useful as a lower bound for the online policies.

use crate::common::{FrameId, PageId};
use crate::policy::FrameSet;

/// Distance to the next use of a resident page.
///
/// `Never` orders after every `At`, so a page that is not referenced again
/// is always the preferred victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NextUse {
    At(usize),
    Never,
}

/// Resident pages held in a slot array.
///
/// Eviction replaces the victim's slot in place, so the other residents
/// keep their positions in the snapshot.
#[derive(Debug, Clone)]
pub struct OptimalFrames<'a> {
    slots: Vec<PageId>,

    /// The full reference string the run is walking.
    reference: &'a [PageId],

    capacity: usize,
}

impl<'a> OptimalFrames<'a> {
    /// Create an empty frame set that looks ahead into `reference`.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize, reference: &'a [PageId]) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: Vec::with_capacity(capacity.min(reference.len())),
            reference,
            capacity,
        }
    }

    /// Next position strictly after `at` where `page` is referenced.
    fn next_use(&self, page: PageId, at: usize) -> NextUse {
        self.reference
            .iter()
            .enumerate()
            .skip(at + 1)
            .find(|&(_, &p)| p == page)
            .map_or(NextUse::Never, |(idx, _)| NextUse::At(idx))
    }

    /// Select the slot whose page is reused furthest in the future.
    ///
    /// Ties go to the lowest slot index: a later slot only wins with a
    /// strictly larger distance.
    fn victim(&self, at: usize) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut farthest = None;

        for (idx, &page) in self.slots.iter().enumerate() {
            let next = self.next_use(page, at);
            if farthest.map_or(true, |f| next > f) {
                farthest = Some(next);
                victim = FrameId::new(idx);
            }
        }
        victim
    }
}

impl FrameSet for OptimalFrames<'_> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }

    fn record_hit(&mut self, _page: PageId, _at: usize) {}

    fn record_miss(&mut self, page: PageId, at: usize) -> Option<PageId> {
        if self.slots.len() < self.capacity {
            self.slots.push(page);
            return None;
        }

        let victim = self.victim(at);
        Some(std::mem::replace(&mut self.slots[victim.0], page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_next_use_is_strictly_after() {
        let reference = pages(&[1, 2, 1, 3]);
        let frames = OptimalFrames::new(2, &reference);

        assert_eq!(frames.next_use(PageId::new(1), 0), NextUse::At(2));
        assert_eq!(frames.next_use(PageId::new(1), 2), NextUse::Never);
        assert_eq!(frames.next_use(PageId::new(3), 0), NextUse::At(3));
    }

    #[test]
    fn test_never_orders_after_any_position() {
        assert!(NextUse::Never > NextUse::At(usize::MAX));
        assert!(NextUse::At(3) > NextUse::At(2));
    }

    #[test]
    fn test_evicts_furthest_next_use_in_place() {
        // At index 3 (page 4): 1 is reused at 5, 2 at 4, 3 never.
        let reference = pages(&[1, 2, 3, 4, 2, 1]);
        let mut frames = OptimalFrames::new(3, &reference);

        frames.record_miss(PageId::new(1), 0);
        frames.record_miss(PageId::new(2), 1);
        frames.record_miss(PageId::new(3), 2);

        assert_eq!(frames.record_miss(PageId::new(4), 3), Some(PageId::new(3)));
        assert_eq!(frames.snapshot(), pages(&[1, 2, 4]));
    }

    #[test]
    fn test_tie_breaks_on_lowest_slot() {
        // None of 1, 2, 3 is referenced again: slot 0 loses.
        let reference = pages(&[1, 2, 3, 4]);
        let mut frames = OptimalFrames::new(3, &reference);

        frames.record_miss(PageId::new(1), 0);
        frames.record_miss(PageId::new(2), 1);
        frames.record_miss(PageId::new(3), 2);

        assert_eq!(frames.record_miss(PageId::new(4), 3), Some(PageId::new(1)));
        assert_eq!(frames.snapshot(), pages(&[4, 2, 3]));
    }

    #[test]
    fn test_single_frame_always_replaces() {
        let reference = pages(&[1, 2, 1]);
        let mut frames = OptimalFrames::new(1, &reference);

        frames.record_miss(PageId::new(1), 0);
        assert_eq!(frames.record_miss(PageId::new(2), 1), Some(PageId::new(1)));
        assert_eq!(frames.snapshot(), pages(&[2]));
    }
}
