//! rag-arch-viewer: Interactive RAG system architecture diagrams.
//!
//! This crate renders three DOT graph descriptions into clickable SVG
//! regions. Clicking a node opens a dialog with that node's headline and the
//! full catalog of process steps, each with an illustrative code sample.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod data;
pub mod state;

pub use components::detail::DetailDialog;
pub use components::diagram::{DiagramView, LayeredRenderer, RenderError, Renderer, VisualTree};
pub use components::legend::Legend;
pub use data::{DIAGRAMS, DetailStore, NO_DETAILS, StepRecord};
pub use state::{UiState, ViewerEvent};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("rag-arch-viewer: logging initialized");
}

/// Read the optional detail override from a script element with
/// id="detail-data".
fn read_detail_override() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("detail-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// The detail store for this page: the override if present and valid,
/// otherwise the built-in content.
fn load_detail_store() -> DetailStore {
	let store = match read_detail_override() {
		Some(json) => match DetailStore::from_json(&json) {
			Ok(store) => store,
			Err(e) => {
				warn!("rag-arch-viewer: failed to parse detail data: {}", e);
				DetailStore::builtin()
			}
		},
		None => DetailStore::builtin(),
	};
	info!(
		"rag-arch-viewer: loaded {} details, {} steps",
		store.short.len(),
		store.steps.len()
	);
	store
}

/// Main application component.
/// Owns the UI state, renders the diagrams in display order and the dialog.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let store = Arc::new(load_detail_store());
	let ui = RwSignal::new(UiState::default());
	let dispatch = {
		let store = store.clone();
		Callback::new(move |event: ViewerEvent| {
			ui.update(|state| state.apply(event, &store));
		})
	};

	let renderer: Arc<dyn Renderer> = Arc::new(LayeredRenderer::default());
	let diagrams = DIAGRAMS
		.into_iter()
		.map(|source| {
			view! {
				<DiagramView
					source=source
					renderer=renderer.clone()
					on_node_click=move |label: String| dispatch.run(ViewerEvent::NodeClicked(label))
				/>
			}
		})
		.collect_view();
	let steps = Arc::new(store.steps.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="RAG System Architecture" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="architecture-page">
			<header class="page-header">
				<h1>"🧠 Retrieval-Augmented Generation (RAG) System Architecture"</h1>
				<small>"Flowchart illustrating the system architecture and data flow"</small>
				<br />
				<small>
					"Developed by " <a href="https://github.com/Priom7">"Md Sharif Alam"</a>
				</small>
			</header>
			<Legend />
			<div class="diagrams">{diagrams}</div>
			<DetailDialog
				state=ui
				steps=steps
				on_dismiss=move |_: ()| dispatch.run(ViewerEvent::DialogDismissed)
			/>
		</main>
	}
}
