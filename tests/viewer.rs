//! End-to-end checks of the render, click and dialog flow without a browser.
//!
//! Clicks are simulated the way the node binder performs them: the label is
//! read back from the `<title>` of each `<g class="node">` in the SVG.

#![allow(unused_crate_dependencies)]

use std::collections::BTreeSet;

use rag_arch_viewer::components::detail::{Clipboard, ClipboardError, Notifier, StepActions};
use rag_arch_viewer::data::{ERROR_HANDLING, MAIN_FLOW, MITIGATION};
use rag_arch_viewer::{
	DIAGRAMS, DetailStore, LayeredRenderer, NO_DETAILS, RenderError, Renderer, UiState,
	ViewerEvent,
};

/// Canonical labels as the binder sees them in the serialized SVG.
fn clickable_labels(svg: &str) -> Vec<String> {
	svg.split(r#"<g class="node""#)
		.skip(1)
		.filter_map(|group| {
			let start = group.find("<title>")? + "<title>".len();
			let end = group.find("</title>")?;
			Some(unescape(&group[start..end]))
		})
		.collect()
}

fn unescape(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}

#[test]
fn every_diagram_renders_all_of_its_nodes() {
	let renderer = LayeredRenderer::default();
	for (source, expected) in [(MAIN_FLOW, 50), (ERROR_HANDLING, 16), (MITIGATION, 20)] {
		let tree = renderer.render(source).unwrap();
		assert_eq!(tree.nodes.len(), expected);
		assert_eq!(tree.node_labels().len(), expected);
		assert_eq!(clickable_labels(&tree.to_svg()).len(), expected);
	}
}

#[test]
fn repeated_renders_keep_node_identity() {
	let renderer = LayeredRenderer::default();
	for source in DIAGRAMS {
		let first: BTreeSet<String> = clickable_labels(&renderer.render(source.description).unwrap().to_svg())
			.into_iter()
			.collect();
		let second: BTreeSet<String> = clickable_labels(&renderer.render(source.description).unwrap().to_svg())
			.into_iter()
			.collect();
		assert_eq!(first, second, "{}", source.title);
	}
}

#[test]
fn clicking_user_inputs_query_opens_its_headline() {
	let store = DetailStore::builtin();
	let tree = LayeredRenderer::default().render(MAIN_FLOW).unwrap();
	let label = clickable_labels(&tree.to_svg())
		.into_iter()
		.find(|label| label == "User Inputs Query")
		.unwrap();

	let mut ui = UiState::default();
	ui.apply(ViewerEvent::NodeClicked(label), &store);
	assert!(ui.dialog_open);
	assert_eq!(ui.selected_detail_text, "Details about User Inputs Query...");
}

#[test]
fn every_stored_label_is_clickable_and_shows_its_text() {
	let store = DetailStore::builtin();
	let renderer = LayeredRenderer::default();
	let rendered: BTreeSet<String> = DIAGRAMS
		.iter()
		.flat_map(|source| clickable_labels(&renderer.render(source.description).unwrap().to_svg()))
		.collect();

	for (label, text) in &store.short {
		assert!(rendered.contains(label), "{label} is not drawn");
		let mut ui = UiState::default();
		ui.apply(ViewerEvent::NodeClicked(label.clone()), &store);
		assert_eq!(&ui.selected_detail_text, text);
	}
}

#[test]
fn rendered_nodes_without_details_fall_back() {
	let store = DetailStore::builtin();
	let tree = LayeredRenderer::default().render(ERROR_HANDLING).unwrap();
	let mut ui = UiState::default();
	ui.apply(ViewerEvent::NodeClicked("Timeout Error".into()), &store);
	assert!(tree.node("Timeout Error").is_some());
	assert_eq!(ui.selected_detail_text, NO_DETAILS);
	assert_eq!(NO_DETAILS, "No details available.");
}

#[test]
fn dialog_lifecycle() {
	let store = DetailStore::builtin();
	let mut ui = UiState::default();
	assert!(!ui.dialog_open);

	ui.apply(ViewerEvent::NodeClicked("Format JSON Response".into()), &store);
	assert!(ui.dialog_open);
	let headline = ui.selected_detail_text.clone();

	ui.apply(ViewerEvent::DialogDismissed, &store);
	assert!(!ui.dialog_open);
	assert_eq!(ui.selected_detail_text, headline);
}

#[test]
fn broken_description_fails_alone() {
	let renderer = LayeredRenderer::default();
	let sources = [MAIN_FLOW, "digraph { a -> }", MITIGATION];
	let results: Vec<_> = sources.iter().map(|s| renderer.render(s)).collect();
	assert!(results[0].is_ok());
	assert!(matches!(results[1], Err(RenderError::Parse { .. })));
	assert!(results[2].is_ok());
}

#[test]
fn fixture_store_replaces_builtin_content() {
	let store = DetailStore::from_json(
		r#"{
			"short": { "a": "Alpha step" },
			"steps": [{ "title": "Alpha", "description": "d", "rationale": "r" }]
		}"#,
	)
	.unwrap();
	let tree = LayeredRenderer::default().render("digraph { a -> b }").unwrap();
	let labels = clickable_labels(&tree.to_svg());

	let mut ui = UiState::default();
	ui.apply(ViewerEvent::NodeClicked(labels[0].clone()), &store);
	assert_eq!(ui.selected_detail_text, "Alpha step");
	ui.apply(ViewerEvent::NodeClicked(labels[1].clone()), &store);
	assert_eq!(ui.selected_detail_text, NO_DETAILS);
	assert_eq!(store.steps[0].sample, "");
}

struct LastWrite(std::cell::RefCell<Option<String>>);

impl Clipboard for &LastWrite {
	fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
		*self.0.borrow_mut() = Some(text.to_string());
		Ok(())
	}
}

struct Unavailable;

impl Clipboard for Unavailable {
	fn write_text(&self, _: &str) -> Result<(), ClipboardError> {
		Err(ClipboardError::NotAvailable)
	}
}

struct CountingNotifier(std::cell::Cell<usize>);

impl Notifier for &CountingNotifier {
	fn notify(&self, _: &str) {
		self.0.set(self.0.get() + 1);
	}
}

#[test]
fn copy_and_edit_actions() {
	let clipboard = LastWrite(Default::default());
	let notifier = CountingNotifier(Default::default());
	let actions = StepActions::new(&clipboard, &notifier);

	actions.copy("const x = 1;");
	assert_eq!(clipboard.0.borrow().as_deref(), Some("const x = 1;"));

	let store = DetailStore::builtin();
	let before = store.steps.clone();
	actions.edit(&store.steps[3]);
	actions.edit(&store.steps[3]);
	assert_eq!(notifier.0.get(), 2);
	assert_eq!(store.steps, before);

	StepActions::new(Unavailable, &notifier).copy("const x = 1;");
}
