//! The step catalog listed inside the detail dialog.

use std::sync::Arc;

use leptos::prelude::*;

use super::actions::StepActions;
use super::highlight::CodeSample;
use crate::data::StepRecord;

/// Heading above the catalog.
pub const CATALOG_HEADING: &str = "Detailed Process Block Explanations for a RAG System Framework";

const CATALOG_INTRO: &str = "In our RAG system design, we maintain a mapping of process details \
	that outlines each block’s functionality. In this article, we explain each process step, \
	provide example code where appropriate, and discuss the rationale behind these components.";

const SAMPLE_NOTE: &str = "Note: The sample code examples are illustrative. In production \
	systems, you may need to adapt them to your specific technology stack and security \
	requirements.";

/// Every step, in catalog order. Not filtered by the selected node.
#[component]
pub fn StepCatalog(steps: Arc<Vec<StepRecord>>) -> impl IntoView {
	let cards = steps
		.iter()
		.cloned()
		.map(|step| view! { <StepCard step=step /> })
		.collect_view();

	view! {
		<div class="step-catalog">
			<h3>{CATALOG_HEADING}</h3>
			<p>{CATALOG_INTRO}</p>
			<p class="step-note">
				<strong>{SAMPLE_NOTE}</strong>
			</p>
			{cards}
		</div>
	}
}

/// One step: description, highlighted sample, rationale and actions.
#[component]
pub fn StepCard(step: StepRecord) -> impl IntoView {
	let actions: StepActions = StepActions::default();
	let sample = step.sample.clone();
	let edit_target = step.clone();
	let StepRecord {
		title,
		description,
		sample: code,
		rationale,
	} = step;

	view! {
		<article class="step-card">
			<h4 class="step-title">{title}</h4>
			<p>
				<strong>"Details: "</strong>
				{description}
			</p>
			<CodeSample code=code />
			<p>
				<strong>"Rationale: "</strong>
				{rationale}
			</p>
			<div class="step-actions">
				<button type="button" class="btn btn-edit" on:click=move |_| actions.edit(&edit_target)>
					"Edit"
				</button>
				<button type="button" class="btn btn-copy" on:click=move |_| actions.copy(&sample)>
					"Copy"
				</button>
			</div>
		</article>
	}
}
