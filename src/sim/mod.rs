//! Simulation driver and results.
//!
//! # Components
//! - [`simulate`] - Walks a reference string through any [`FrameSet`](crate::policy::FrameSet)
//! - [`Simulation`] - Fault count plus the per-step trace of one run
//! - [`SimulationStats`] - Hit/fault/eviction counters derived from a run

mod simulation;
mod stats;

pub use simulation::{simulate, Simulation, Step};
pub use stats::SimulationStats;
