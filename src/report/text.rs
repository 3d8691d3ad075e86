//! Plain-text trace rendering.

use std::fmt;

use crate::common::config::BANNER_WIDTH;
use crate::common::PageId;
use crate::sim::Simulation;

/// Frame snapshot as a bracketed list: `[7, 0, 1]`.
pub fn format_frames(frames: &[PageId]) -> String {
    let inner: Vec<String> = frames.iter().map(PageId::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// One-line result: `LRU → Page faults: 9`.
pub fn summary_line(run: &Simulation) -> String {
    format!("{} → Page faults: {}", run.policy(), run.faults())
}

/// Full console report for one run.
///
/// ```text
/// ==============================
/// Algorithm: FIFO
/// ==============================
/// Step 1 | Ref 7 | Frames: [7]
/// ...
/// Total Page Faults (FIFO): 10
/// ```
pub struct TraceReport<'a> {
    run: &'a Simulation,
}

impl<'a> TraceReport<'a> {
    pub fn new(run: &'a Simulation) -> Self {
        Self { run }
    }
}

impl fmt::Display for TraceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(BANNER_WIDTH);
        let name = self.run.policy();

        writeln!(f, "{}", rule)?;
        writeln!(f, "Algorithm: {}", name)?;
        writeln!(f, "{}", rule)?;
        for step in self.run.trace() {
            writeln!(
                f,
                "Step {} | Ref {} | Frames: {}",
                step.index + 1,
                step.page,
                format_frames(&step.frames)
            )?;
        }
        write!(f, "Total Page Faults ({}): {}", name, self.run.faults())
    }
}
