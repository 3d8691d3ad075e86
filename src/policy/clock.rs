//! CLOCK (second-chance) replacement policy.

use crate::common::{FrameId, PageId};
use crate::policy::FrameSet;

/// One slot on the clock face.
#[derive(Debug, Clone, Copy, Default)]
struct ClockSlot {
    /// Page held by this slot, or None until the slot is first filled.
    page: Option<PageId>,

    /// Set on every reference; cleared when the hand spares the slot.
    use_bit: bool,
}

/// Fixed circular array of slots swept by a rotating hand.
///
/// # Sweep
/// ```text
///            hand
///             │
///    ┌────────▼────────┬─────────────────┬─────────────────┐
///    │ page 2 (use 1)  │ page 0 (use 0)  │ page 1 (use 1)  │
///    └─────────────────┴─────────────────┴─────────────────┘
///    use 1 → clear, advance; use 0 → victim
/// ```
///
/// Snapshots list occupied slots in slot order, not in arrival order.
///
/// Slots are filled in index order, so the face only holds the slots that
/// have been filled so far and grows up to `capacity`.
#[derive(Debug, Clone)]
pub struct ClockFrames {
    slots: Vec<ClockSlot>,

    /// Next slot the hand will inspect.
    hand: FrameId,

    capacity: usize,
}

impl ClockFrames {
    /// Create a clock with `capacity` empty slots and the hand at slot 0.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: Vec::new(),
            hand: FrameId::new(0),
            capacity,
        }
    }

    /// Current hand position.
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Use bits in slot order.
    pub fn use_bits(&self) -> Vec<bool> {
        self.slots.iter().map(|s| s.use_bit).collect()
    }

    fn advance(&mut self) {
        self.hand = self.hand.next(self.capacity);
    }

    /// Open the next empty slot and move the hand onto it.
    ///
    /// Until the face is full the hand only ever stops on fresh slots, so
    /// the first empty slot is the one after the last filled.
    fn open_slot(&mut self) -> FrameId {
        self.slots.push(ClockSlot::default());
        self.hand = FrameId::new(self.slots.len() - 1);
        self.hand
    }

    /// Sweep until a slot with a clear use bit comes under the hand,
    /// clearing every set bit passed on the way.
    ///
    /// Terminates within two revolutions: the first one clears every bit.
    fn sweep(&mut self) -> FrameId {
        loop {
            let slot = &mut self.slots[self.hand.0];
            if !slot.use_bit {
                return self.hand;
            }
            slot.use_bit = false;
            self.advance();
        }
    }
}

impl FrameSet for ClockFrames {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.slots.iter().any(|s| s.page == Some(page))
    }

    fn snapshot(&self) -> Vec<PageId> {
        self.slots.iter().filter_map(|s| s.page).collect()
    }

    /// Set the use bit; the hand does not move.
    fn record_hit(&mut self, page: PageId, _at: usize) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.page == Some(page)) {
            slot.use_bit = true;
        }
    }

    fn record_miss(&mut self, page: PageId, _at: usize) -> Option<PageId> {
        let target = if self.slots.len() < self.capacity {
            self.open_slot()
        } else {
            self.sweep()
        };

        let slot = &mut self.slots[target.0];
        let evicted = slot.page.replace(page);
        slot.use_bit = true;
        self.advance();
        evicted
    }
}
