//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a virtual page in a reference string.
///
/// Reference strings are made of small non-negative integers, so a `u32`
/// leaves plenty of headroom while keeping snapshots compact.
///
/// Serializes as a bare integer, so a trace snapshot encodes as `[7, 0, 1]`.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(7);
/// assert_eq!(page_id.0, 7);
/// assert_eq!(page_id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

/// Displays as the bare number, which is how reference strings are written.
impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a slice of raw integers into page identifiers.
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}
