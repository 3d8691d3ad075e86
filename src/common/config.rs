//! Configuration constants for pagesim.

use crate::common::PageId;

/// Demo reference string used by the console demo and whenever operator
/// input cannot be parsed.
///
/// This is the classic textbook string: with [`DEFAULT_FRAMES`] frames it
/// exercises hits, evictions and the Optimal lookahead within 13 steps.
pub const DEFAULT_REFERENCE: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

/// Frame count substituted when the operator's value is missing or invalid.
pub const DEFAULT_FRAMES: usize = 3;

/// Upper bound of the frame slider on the visual form.
///
/// The engine accepts any positive count; only the form adapter clamps.
pub const MAX_FORM_FRAMES: usize = 8;

/// Width of the `=` rule printed around each algorithm banner.
pub const BANNER_WIDTH: usize = 30;

/// [`DEFAULT_REFERENCE`] as page identifiers.
pub fn default_reference() -> Vec<PageId> {
    DEFAULT_REFERENCE.iter().copied().map(PageId::new).collect()
}
