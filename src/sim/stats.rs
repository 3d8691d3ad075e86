//! Simulation statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::Step;

/// Counters for one simulation run.
///
/// Unlike a live cache, a run is finished before anyone reads the numbers,
/// so these are plain integers computed from the trace.
///
/// # Example
/// ```
/// use pagesim::{pages, Policy};
///
/// let run = Policy::Fifo.simulate(&pages(&[1, 1, 2, 3]), 2);
/// let stats = run.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.evictions, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of references processed.
    pub references: u64,

    /// References whose page was already resident.
    pub hits: u64,

    /// References whose page had to be brought in.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Tally a trace.
    pub fn from_trace(trace: &[Step]) -> Self {
        trace.iter().fold(Self::default(), |mut stats, step| {
            stats.references += 1;
            if step.fault {
                stats.faults += 1;
            } else {
                stats.hits += 1;
            }
            if step.evicted.is_some() {
                stats.evictions += 1;
            }
            stats
        })
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
