//! Read-only content behind the diagrams: the graph descriptions and the
//! label-keyed detail store.
//!
//! The store is built once at startup and handed to the controller and the
//! detail dialog explicitly. Nothing here is mutated after construction.

use std::collections::HashMap;

use serde::Deserialize;

mod details;
pub mod graphs;
mod steps;

pub use graphs::{DIAGRAMS, DiagramSource, ERROR_HANDLING, MAIN_FLOW, MITIGATION};
pub use steps::{STEP_CATALOG, StepSeed};

/// Headline shown when a clicked node has no entry in the store.
pub const NO_DETAILS: &str = "No details available.";

/// One entry of the step catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StepRecord {
	/// Step name.
	pub title: String,
	/// What the step does.
	pub description: String,
	/// Illustrative code text. Defaults to empty when omitted.
	#[serde(default)]
	pub sample: String,
	/// Why the step exists.
	pub rationale: String,
}

/// Label-keyed detail content.
///
/// `short` maps a node label to its dialog headline. `steps` is the ordered
/// catalog listed in full under every headline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DetailStore {
	/// Node label to one-sentence headline.
	#[serde(default)]
	pub short: HashMap<String, String>,
	/// Ordered step catalog.
	#[serde(default)]
	pub steps: Vec<StepRecord>,
}

impl DetailStore {
	/// The authored store compiled into the crate.
	pub fn builtin() -> Self {
		Self {
			short: details::SHORT_DETAILS
				.iter()
				.map(|(label, text)| (label.to_string(), text.to_string()))
				.collect(),
			steps: STEP_CATALOG.iter().map(StepRecord::from).collect(),
		}
	}

	/// Parse a store from JSON shaped like `{ "short": {..}, "steps": [..] }`.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Exact-match lookup of a node label.
	pub fn lookup(&self, label: &str) -> Option<&str> {
		self.short.get(label).map(String::as_str)
	}

	/// Like [`lookup`](Self::lookup), substituting [`NO_DETAILS`] on a miss.
	pub fn describe(&self, label: &str) -> &str {
		self.lookup(label).unwrap_or(NO_DETAILS)
	}
}
