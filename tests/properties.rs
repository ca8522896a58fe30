//! Property tests for the highlighter and the renderer.

#![cfg(not(target_arch = "wasm32"))]
#![allow(unused_crate_dependencies)]

use proptest::prelude::*;
use rag_arch_viewer::components::detail::highlight::tokenize;
use rag_arch_viewer::{LayeredRenderer, Renderer};

/// DOT text for a random graph over `n` nodes named `n0..n{n-1}`.
fn graph_source(n: usize, edges: &[(usize, usize)], clustered: usize) -> String {
	let mut out = String::from("digraph G {\n");
	out.push_str("  subgraph cluster_a {\n    label = \"A\";\n");
	for i in 0..clustered.min(n) {
		out.push_str(&format!("    n{i} [shape=box];\n"));
	}
	out.push_str("  }\n");
	for i in clustered.min(n)..n {
		out.push_str(&format!("  n{i};\n"));
	}
	for (a, b) in edges {
		out.push_str(&format!("  n{} -> n{};\n", a % n, b % n));
	}
	out.push('}');
	out
}

proptest! {
	#[test]
	fn tokens_tile_any_input(source in any::<String>()) {
		let mut end = 0;
		for token in tokenize(&source) {
			prop_assert_eq!(token.range.start, end);
			prop_assert!(token.range.end > token.range.start);
			end = token.range.end;
		}
		prop_assert_eq!(end, source.len());
	}

	#[test]
	fn tokens_tile_code_like_input(source in "[a-z0-9 =;(){}'\"`/*\\\\\n.+-]{0,120}") {
		let text: String = tokenize(&source)
			.into_iter()
			.map(|token| &source[token.range])
			.collect();
		prop_assert_eq!(text, source);
	}

	#[test]
	fn render_is_deterministic_and_keeps_every_node(
		n in 1usize..24,
		edges in prop::collection::vec((0usize..64, 0usize..64), 0..40),
		clustered in 0usize..8,
	) {
		let source = graph_source(n, &edges, clustered);
		let renderer = LayeredRenderer::default();
		let first = renderer.render(&source).unwrap();
		let second = renderer.render(&source).unwrap();
		prop_assert_eq!(first.nodes.len(), n);
		prop_assert_eq!(first.edges.len(), edges.len());
		prop_assert_eq!(first.to_svg(), second.to_svg());
		for node in &first.nodes {
			prop_assert!(node.bounds.x >= 0.0 && node.bounds.right() <= first.width + 1e-9);
			prop_assert!(node.bounds.y >= 0.0 && node.bounds.bottom() <= first.height + 1e-9);
		}
	}
}
