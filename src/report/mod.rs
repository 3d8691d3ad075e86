//! Rendering of simulation results.
//!
//! - [`TraceReport`] - Console trace: banner, one line per step, total
//! - [`SummaryCard`] - Decorative HTML card with one policy's fault count
//!
//! Nothing here feeds back into a simulation.

mod card;
mod text;

pub use card::SummaryCard;
pub use text::{format_frames, summary_line, TraceReport};
