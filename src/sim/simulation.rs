//! The shared simulation loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::PageId;
use crate::policy::{FrameSet, Policy};
use crate::sim::SimulationStats;

/// State of the frames after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Zero-based position in the reference string.
    pub index: usize,

    /// The page referenced at this step.
    pub page: PageId,

    /// Whether the page was not resident before this step.
    pub fault: bool,

    /// Page evicted to make room, if any.
    pub evicted: Option<PageId>,

    /// Resident pages after the step, in the policy's display order.
    pub frames: Vec<PageId>,
}

/// Outcome of running one policy over one reference string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    policy: Policy,
    frames: usize,
    faults: usize,
    trace: Vec<Step>,
}

impl Simulation {
    /// Policy that produced this run.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Frame capacity of the run.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of references that missed the resident set.
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// One step per input reference.
    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    /// Frame snapshots only, one per input reference.
    pub fn snapshots(&self) -> impl Iterator<Item = &[PageId]> + '_ {
        self.trace.iter().map(|step| step.frames.as_slice())
    }

    /// Counters derived from the trace.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_trace(&self.trace)
    }
}

/// Process `reference` left to right against `frame_set`.
///
/// The fault counter lives here rather than in the policies: a reference
/// faults exactly when its page is not resident immediately before it is
/// processed, whatever the policy.
pub fn simulate<F: FrameSet>(policy: Policy, mut frame_set: F, reference: &[PageId]) -> Simulation {
    let mut faults = 0;
    let mut steps = Vec::with_capacity(reference.len());

    for (index, &page) in reference.iter().enumerate() {
        let fault = !frame_set.contains(page);
        let evicted = if fault {
            faults += 1;
            frame_set.record_miss(page, index)
        } else {
            frame_set.record_hit(page, index);
            None
        };

        if let Some(victim) = evicted {
            trace!(%policy, index, %page, %victim, "evicted page");
        }

        steps.push(Step {
            index,
            page,
            fault,
            evicted,
            frames: frame_set.snapshot(),
        });
    }

    debug!(
        %policy,
        frames = frame_set.capacity(),
        references = reference.len(),
        faults,
        "simulation complete"
    );

    Simulation {
        policy,
        frames: frame_set.capacity(),
        faults,
        trace: steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;
    use crate::policy::FifoFrames;

    #[test]
    fn test_empty_reference() {
        let run = simulate(Policy::Fifo, FifoFrames::new(3), &[]);
        assert_eq!(run.faults(), 0);
        assert!(run.trace().is_empty());
        assert_eq!(run.frames(), 3);
    }

    #[test]
    fn test_step_records_fault_and_eviction() {
        let reference = pages(&[1, 2, 1, 3]);
        let run = simulate(Policy::Fifo, FifoFrames::new(2), &reference);

        let steps = run.trace();
        assert_eq!(steps.len(), 4);
        assert!(steps[0].fault);
        assert!(!steps[2].fault);
        assert_eq!(steps[2].evicted, None);
        assert_eq!(steps[3].evicted, Some(PageId::new(1)));
        assert_eq!(steps[3].frames, pages(&[2, 3]));
        assert_eq!(run.faults(), 3);
    }

    #[test]
    fn test_snapshots_follow_trace() {
        let reference = pages(&[4, 5]);
        let run = simulate(Policy::Fifo, FifoFrames::new(1), &reference);

        let snapshots: Vec<&[PageId]> = run.snapshots().collect();
        assert_eq!(snapshots, vec![&pages(&[4])[..], &pages(&[5])[..]]);
    }

    #[test]
    fn test_simulation_round_trips_through_json() {
        let run = simulate(Policy::Fifo, FifoFrames::new(2), &pages(&[1, 2, 3]));
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"policy\":\"FIFO\""));

        let back: Simulation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
    }
}
