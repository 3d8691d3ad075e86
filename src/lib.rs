//! pagesim - A virtual memory page-replacement simulator.
//!
//! Given a reference string of page numbers and a fixed number of physical
//! frames, each policy decides which pages stay resident at every step and
//! counts page faults.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────┐   ┌───────────────────────────┐  │
//! │  │   Console (console/)      │   │   Service (service/)      │  │
//! │  │  menu, prompts, traces    │   │  request → response, card │  │
//! │  └───────────────────────────┘   └───────────────────────────┘  │
//! │          ↓  input/ (parse text, substitute defaults)  ↓         │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │              Simulation driver (sim/)                    │    │
//! │  │     fault counting, per-step trace, statistics           │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │              Frame sets (policy/)                        │    │
//! │  │        FIFO  |  LRU  |  OPTIMAL  |  CLOCK                │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │              Rendering (report/)                         │    │
//! │  │        step lines, totals, HTML summary card             │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`policy`] - Replacement policies and the [`FrameSet`] abstraction
//! - [`sim`] - The simulation loop, traces and statistics
//! - [`input`] - Parsing operator text with default substitution
//! - [`report`] - Text and HTML rendering of results
//! - [`service`] - Stateless request/response handling
//! - [`console`] - Interactive console session
//!
//! # Quick Start
//! ```
//! use pagesim::{default_reference, Policy};
//!
//! let reference = default_reference();
//! let run = Policy::Optimal.simulate(&reference, 3);
//!
//! assert_eq!(run.faults(), 7);
//! assert_eq!(run.trace().len(), reference.len());
//! ```

pub mod common;
pub mod console;
pub mod input;
pub mod policy;
pub mod report;
pub mod service;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{default_reference, DEFAULT_FRAMES, DEFAULT_REFERENCE};
pub use common::{pages, Error, FrameId, PageId, Result};

pub use policy::{FrameSet, Policy, PolicySelector};
pub use report::{SummaryCard, TraceReport};
pub use service::{SimulationRequest, SimulationResponse};
pub use sim::{simulate, Simulation, SimulationStats, Step};
