//! Interactive console front end.
//!
//! Offers the demo run or a custom reference string, then prints the full
//! trace of each selected policy. Reading and writing go through the
//! generic `input`/`output` handles so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use crate::common::config::{default_reference, DEFAULT_FRAMES};
use crate::common::{PageId, Result};
use crate::input::{frames_or_default, reference_or_default, EmptyReference};
use crate::policy::PolicySelector;
use crate::report::TraceReport;
use crate::service::SimulationResponse;
use crate::sim::Simulation;

/// A console session over arbitrary input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,

    /// Policies every run simulates and prints.
    selector: PolicySelector,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Session that runs every policy.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            selector: PolicySelector::All,
        }
    }

    /// Restrict runs to `selector`.
    pub fn with_selector(mut self, selector: PolicySelector) -> Self {
        self.selector = selector;
        self
    }

    /// Consume the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and run the chosen mode.
    ///
    /// Any choice other than `1` asks for a custom reference string.
    pub fn run(&mut self) -> Result<SimulationResponse> {
        writeln!(self.output, "\nVirtual Memory Simulation\n")?;
        writeln!(self.output, "1) Run Demo Example")?;
        writeln!(self.output, "2) Enter Your Own Reference String")?;

        let choice = self.prompt("\nEnter choice (1 or 2): ")?;
        if choice.trim() == "1" {
            self.demo(DEFAULT_FRAMES)
        } else {
            self.custom()
        }
    }

    /// Run the demo reference string with `frames` frames.
    pub fn demo(&mut self, frames: usize) -> Result<SimulationResponse> {
        writeln!(self.output, "\nRunning DEMO example...\n")?;
        self.run_all(default_reference(), frames, Vec::new())
    }

    fn custom(&mut self) -> Result<SimulationResponse> {
        let mut warnings = Vec::new();

        let raw = self.prompt("Enter reference string (space-separated numbers): ")?;
        let reference = reference_or_default(&raw, EmptyReference::Simulate);
        if let Some(warning) = reference.warning {
            writeln!(self.output, "Invalid input, using default demo reference.")?;
            warnings.push(warning);
        }

        let raw = self.prompt("Enter number of frames: ")?;
        let frames = frames_or_default(&raw);
        if let Some(warning) = frames.warning {
            writeln!(self.output, "Invalid input, using frames = {}", DEFAULT_FRAMES)?;
            warnings.push(warning);
        }

        writeln!(self.output, "\nRunning {} algorithms...\n", self.selector)?;
        self.run_all(reference.value, frames.value, warnings)
    }

    /// Simulate and print the selected policies.
    ///
    /// `warnings` are the defaults substituted while reading the input;
    /// they are carried into the response unchanged.
    pub fn run_all(
        &mut self,
        reference: Vec<PageId>,
        frames: usize,
        warnings: Vec<String>,
    ) -> Result<SimulationResponse> {
        let runs: Vec<Simulation> = self
            .selector
            .policies()
            .into_iter()
            .map(|policy| policy.simulate(&reference, frames))
            .collect();

        for run in &runs {
            writeln!(self.output)?;
            writeln!(self.output, "{}", TraceReport::new(run))?;
        }
        Ok(SimulationResponse::new(reference, frames, runs, warnings))
    }

    /// Print `message` and read one line. End of input reads as empty.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;
    use crate::policy::Policy;
    use std::io::Cursor;

    fn session(script: &str, selector: PolicySelector) -> (SimulationResponse, String) {
        let mut console =
            Console::new(Cursor::new(script.to_string()), Vec::new()).with_selector(selector);
        let response = console.run().unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (response, output)
    }

    #[test]
    fn test_demo_choice_runs_all_policies() {
        let (response, output) = session("1\n", PolicySelector::All);

        assert_eq!(response.results.len(), 4);
        assert_eq!(response.reference, default_reference());
        assert!(output.contains("Running DEMO example..."));
        for policy in Policy::ALL {
            assert!(output.contains(&format!("Algorithm: {}", policy)));
            assert!(output.contains(&format!("Total Page Faults ({}):", policy)));
        }
    }

    #[test]
    fn test_selector_limits_printed_policies() {
        let (response, output) = session("1\n", PolicySelector::One(Policy::Lru));

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].policy(), Policy::Lru);
        assert!(output.contains("Total Page Faults (LRU): 9"));
        assert!(!output.contains("Algorithm: FIFO"));
    }

    #[test]
    fn test_demo_with_frames() {
        let mut console = Console::new(Cursor::new(String::new()), Vec::new());
        let response = console.demo(4).unwrap();

        assert_eq!(response.frames, 4);
        assert!(response.results.iter().all(|r| r.frames() == 4));
    }

    #[test]
    fn test_custom_reference() {
        let (response, output) = session("2\n1 2 1 3\n2\n", PolicySelector::All);

        assert_eq!(response.reference, pages(&[1, 2, 1, 3]));
        assert_eq!(response.frames, 2);
        assert!(response.results.iter().all(|r| r.trace().len() == 4));
        assert!(response.warnings.is_empty());
        assert!(output.contains("Running ALL algorithms..."));
        assert!(output.contains("Step 4 | Ref 3 | Frames:"));
        assert!(!output.contains("Invalid input"));
    }

    #[test]
    fn test_custom_bad_input_falls_back() {
        let (response, output) = session("2\n1 two\nmany\n", PolicySelector::All);

        assert!(output.contains("Invalid input, using default demo reference."));
        assert!(output.contains("Invalid input, using frames = 3"));
        assert_eq!(response.frames, DEFAULT_FRAMES);
        assert_eq!(response.reference, default_reference());
        assert_eq!(response.warnings.len(), 2);
    }

    #[test]
    fn test_custom_empty_reference_is_simulated() {
        let (response, output) = session("2\n\n3\n", PolicySelector::All);

        assert!(response.results.iter().all(|r| r.faults() == 0 && r.trace().is_empty()));
        assert!(output.contains("Total Page Faults (LRU): 0"));
    }

    #[test]
    fn test_custom_huge_frame_count() {
        let (response, _) = session("2\n1 2 1\n100000000000\n", PolicySelector::All);

        assert!(response.warnings.is_empty());
        assert!(response.results.iter().all(|r| r.faults() == 2));
    }

    #[test]
    fn test_end_of_input_reads_empty() {
        let (response, _) = session("", PolicySelector::All);
        assert!(response.results.iter().all(|r| r.trace().is_empty()));
    }
}
