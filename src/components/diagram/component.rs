//! Leptos component hosting one rendered diagram.
//!
//! The region starts empty. Once mounted, an effect renders the description,
//! swaps the SVG into the container and binds every node group to the click
//! callback. The effect keeps the [`NodeBindings`] as its value, so the
//! listeners are dropped together with the component.

use std::sync::Arc;

use leptos::prelude::*;
use log::{error, info};
use web_sys::Element;

use super::binder::NodeBindings;
use super::render::Renderer;
use crate::data::DiagramSource;

/// Renders `source` into its own region and reports node clicks by label.
#[component]
pub fn DiagramView(
	source: DiagramSource,
	renderer: Arc<dyn Renderer>,
	#[prop(into)] on_node_click: Callback<String>,
) -> impl IntoView {
	let container = NodeRef::<leptos::html::Div>::new();

	Effect::new(move |previous: Option<NodeBindings>| {
		let mut bindings = previous.unwrap_or_default();
		let Some(region) = container.get() else {
			return bindings;
		};

		match renderer.render(source.description) {
			Ok(tree) => {
				bindings.clear();
				region.set_inner_html("");
				region.set_inner_html(&tree.to_svg());
				let element: &Element = &region;
				let bound = bindings.bind(element, move |label| on_node_click.run(label));
				info!(
					"rag-arch-viewer: rendered {} ({} nodes, {} edges, {} bound)",
					source.title,
					tree.nodes.len(),
					tree.edges.len(),
					bound
				);
			}
			Err(err) => {
				error!("rag-arch-viewer: failed to render {}: {}", source.title, err);
			}
		}
		bindings
	});

	view! {
		<section class="diagram">
			<div
				node_ref=container
				class="graph-container"
				id=source.id
				aria-label=source.title
			></div>
		</section>
	}
}
