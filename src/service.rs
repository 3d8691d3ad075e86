//! Stateless request/response front end.
//!
//! This is the visual form's adapter: it takes the form fields as a
//! [`SimulationRequest`], runs the selected policies and returns every
//! result plus the summary card in a [`SimulationResponse`]. Both types are
//! serde-encodable so the same shape works over JSON.
//!
//! [`handle`] touches no shared state; any number of requests may be
//! handled concurrently.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::config::{DEFAULT_FRAMES, MAX_FORM_FRAMES};
use crate::common::{PageId, Result};
use crate::input::{reference_or_default, EmptyReference};
use crate::policy::{Policy, PolicySelector};
use crate::report::SummaryCard;
use crate::sim::Simulation;

/// The reference string as the form sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReferenceInput {
    /// Already parsed page numbers.
    Pages(Vec<PageId>),
    /// Operator text: space-separated integers.
    Text(String),
}

impl Default for ReferenceInput {
    fn default() -> Self {
        ReferenceInput::Text(String::new())
    }
}

/// One simulation request.
///
/// # Example
/// ```
/// use pagesim::service::SimulationRequest;
///
/// let request: SimulationRequest =
///     serde_json::from_str(r#"{"reference": "1 2 3 1", "frames": 2, "policy": "lru"}"#).unwrap();
/// assert_eq!(request.frames, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub reference: ReferenceInput,

    /// Requested frame count. Missing or out of range values fall back to
    /// the default.
    pub frames: Option<i64>,

    pub policy: PolicySelector,

    /// Whether to render the summary card.
    pub card: bool,
}

/// Results for every policy the request selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// The reference string actually simulated.
    pub reference: Vec<PageId>,

    /// The frame count actually used.
    pub frames: usize,

    /// One entry per selected policy, in report order.
    pub results: Vec<Simulation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SummaryCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_html: Option<String>,

    /// Defaults substituted while reading the request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl SimulationResponse {
    /// Response without a summary card.
    pub fn new(
        reference: Vec<PageId>,
        frames: usize,
        results: Vec<Simulation>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            reference,
            frames,
            results,
            card: None,
            card_html: None,
            warnings,
        }
    }

    /// Attach the card featuring `selector`'s run.
    pub fn with_card(mut self, selector: PolicySelector) -> Self {
        self.card = SummaryCard::select(selector, &self.results);
        self.card_html = self.card.as_ref().map(SummaryCard::to_html);
        self
    }

    /// Result for one policy, if it was selected.
    pub fn result(&self, policy: Policy) -> Option<&Simulation> {
        self.results.iter().find(|r| r.policy() == policy)
    }
}

/// Run a request.
///
/// An empty reference string is replaced with the demo default, like the
/// form does. Frame counts outside `1..=MAX_FORM_FRAMES` are replaced with
/// the default count.
pub fn handle(request: &SimulationRequest) -> SimulationResponse {
    let mut warnings = Vec::new();

    let reference = match &request.reference {
        ReferenceInput::Pages(pages) if !pages.is_empty() => pages.clone(),
        ReferenceInput::Pages(_) => {
            let recovered = reference_or_default("", EmptyReference::UseDefault);
            warnings.extend(recovered.warning);
            recovered.value
        }
        ReferenceInput::Text(text) => {
            let recovered = reference_or_default(text, EmptyReference::UseDefault);
            warnings.extend(recovered.warning);
            recovered.value
        }
    };

    let frames = match request.frames {
        Some(n) if (1..=MAX_FORM_FRAMES as i64).contains(&n) => n as usize,
        other => {
            let warning = match other {
                Some(n) => format!(
                    "Frame count {} outside 1..={}; using frames = {}.",
                    n, MAX_FORM_FRAMES, DEFAULT_FRAMES
                ),
                None => format!("Frame count missing; using frames = {}.", DEFAULT_FRAMES),
            };
            warn!("{}", warning);
            warnings.push(warning);
            DEFAULT_FRAMES
        }
    };

    let results: Vec<Simulation> = request
        .policy
        .policies()
        .into_iter()
        .map(|policy| policy.simulate(&reference, frames))
        .collect();

    info!(
        policy = %request.policy,
        frames,
        references = reference.len(),
        "handled simulation request"
    );

    let response = SimulationResponse::new(reference, frames, results, warnings);
    if request.card {
        response.with_card(request.policy)
    } else {
        response
    }
}

/// Decode a JSON request, run it, and encode the response.
///
/// # Errors
/// `Error::Json` if the request is not valid JSON for [`SimulationRequest`].
pub fn handle_json(request: &str) -> Result<String> {
    let request: SimulationRequest = serde_json::from_str(request)?;
    let response = handle(&request);
    Ok(serde_json::to_string_pretty(&response)?)
}
