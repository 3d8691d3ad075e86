//! Page replacement policies.
//!
//! Each policy owns its own [`FrameSet`] representation:
//! - [`FifoFrames`] - arrival-ordered queue
//! - [`LruFrames`] - recency-ordered queue
//! - [`OptimalFrames`] - slot array plus lookahead into the reference string
//! - [`ClockFrames`] - circular slot array with use bits and a sweep hand
//!
//! [`Policy`] is the tag that picks one of them for a run.

mod clock;
mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId};
use crate::sim::{self, Simulation};

pub use clock::ClockFrames;
pub use fifo::FifoFrames;
pub use lru::LruFrames;
pub use optimal::OptimalFrames;

/// The set of pages resident in physical frames during one run.
///
/// The driver in [`sim::simulate`] decides hit or miss with [`contains`]
/// and counts faults itself; implementations only maintain order and pick
/// victims.
///
/// `at` is the index of the reference being processed. Only the offline
/// policy looks at it.
///
/// [`contains`]: FrameSet::contains
pub trait FrameSet {
    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `page` is resident.
    fn contains(&self, page: PageId) -> bool;

    /// Resident pages in the policy's display order.
    fn snapshot(&self) -> Vec<PageId>;

    /// Update bookkeeping for a reference to a resident page.
    fn record_hit(&mut self, page: PageId, at: usize);

    /// Bring a non-resident page in, evicting a victim when full.
    ///
    /// Returns the evicted page, or None if a free frame was used.
    fn record_miss(&mut self, page: PageId, at: usize) -> Option<PageId>;
}

/// A page replacement algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
    Clock,
}

impl Policy {
    /// Every policy, in the order results are reported.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Lru, Policy::Optimal, Policy::Clock];

    /// Display name used in banners, totals and the summary card.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "OPTIMAL",
            Policy::Clock => "CLOCK",
        }
    }

    /// Run this policy over `reference` with `frames` physical frames.
    ///
    /// Every call builds fresh state, so repeated calls with the same
    /// input return identical results.
    ///
    /// # Panics
    /// Panics if `frames` is 0.
    ///
    /// # Example
    /// ```
    /// use pagesim::{pages, Policy};
    ///
    /// let run = Policy::Lru.simulate(&pages(&[1, 2, 1, 3]), 2);
    /// assert_eq!(run.faults(), 3);
    /// assert_eq!(run.trace().last().unwrap().frames, pages(&[1, 3]));
    /// ```
    pub fn simulate(self, reference: &[PageId], frames: usize) -> Simulation {
        match self {
            Policy::Fifo => sim::simulate(self, FifoFrames::new(frames), reference),
            Policy::Lru => sim::simulate(self, LruFrames::new(frames), reference),
            Policy::Optimal => sim::simulate(self, OptimalFrames::new(frames, reference), reference),
            Policy::Clock => sim::simulate(self, ClockFrames::new(frames), reference),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            "clock" => Ok(Policy::Clock),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Which policies a request runs: one, or all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PolicySelector {
    One(Policy),
    #[default]
    All,
}

impl PolicySelector {
    /// Policies to run, in report order.
    pub fn policies(self) -> Vec<Policy> {
        match self {
            PolicySelector::One(policy) => vec![policy],
            PolicySelector::All => Policy::ALL.to_vec(),
        }
    }
}

impl From<Policy> for PolicySelector {
    fn from(policy: Policy) -> Self {
        PolicySelector::One(policy)
    }
}

impl fmt::Display for PolicySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicySelector::One(policy) => f.write_str(policy.name()),
            PolicySelector::All => f.write_str("ALL"),
        }
    }
}

impl FromStr for PolicySelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PolicySelector::All)
        } else {
            s.parse().map(PolicySelector::One)
        }
    }
}

impl TryFrom<String> for PolicySelector {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PolicySelector> for String {
    fn from(selector: PolicySelector) -> Self {
        selector.to_string()
    }
}
