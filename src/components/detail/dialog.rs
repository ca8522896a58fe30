//! Modal dialog showing the clicked node's headline and the step catalog.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::steps::StepCatalog;
use crate::data::StepRecord;
use crate::state::UiState;

/// Dialog title.
pub const DIALOG_TITLE: &str = "Process Details";

/// Visible while `state.dialog_open` holds.
///
/// The close button, the footer button, a click on the backdrop and the
/// Escape key all call `on_dismiss`.
#[component]
pub fn DetailDialog(
	#[prop(into)] state: Signal<UiState>,
	steps: Arc<Vec<StepRecord>>,
	#[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
	let escape = window_event_listener(ev::keydown, move |event| {
		if event.key() == "Escape" && state.with_untracked(|s| s.dialog_open) {
			on_dismiss.run(());
		}
	});
	on_cleanup(move || escape.remove());

	let open = move || state.with(|s| s.dialog_open);
	let headline = move || state.with(|s| s.selected_detail_text.clone());

	view! {
		<Show when=open>
			<div class="modal-backdrop" on:click=move |_| on_dismiss.run(())>
				<div
					class="modal-dialog"
					role="dialog"
					aria-modal="true"
					aria-labelledby="detail-dialog-title"
					on:click=|event: MouseEvent| event.stop_propagation()
				>
					<header class="modal-header">
						<h2 id="detail-dialog-title" class="modal-title">{DIALOG_TITLE}</h2>
						<button
							type="button"
							class="btn-close"
							aria-label="Close"
							on:click=move |_| on_dismiss.run(())
						>
							"×"
						</button>
					</header>
					<div class="modal-body">
						<p class="detail-headline">{headline}</p>
						<StepCatalog steps=steps.clone() />
					</div>
					<footer class="modal-footer">
						<button
							type="button"
							class="btn btn-secondary"
							on:click=move |_| on_dismiss.run(())
						>
							"Close"
						</button>
					</footer>
				</div>
			</div>
		</Show>
	}
}
