//! Frame identifier type.

use std::fmt;

/// Identifies a slot in a fixed-size frame array.
///
/// Only the array-backed frame sets (Optimal and Clock) address frames by
/// slot; the queue-backed ones (FIFO and LRU) keep logical order instead.
///
/// Using `usize` so it indexes the slot vector directly: `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let hand = FrameId::new(2);
/// assert_eq!(hand.next(3), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The slot after this one in a circular array of `capacity` slots.
    #[inline]
    pub fn next(self, capacity: usize) -> Self {
        FrameId((self.0 + 1) % capacity)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
