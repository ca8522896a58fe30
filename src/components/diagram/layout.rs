//! Layered layout for parsed graphs.
//!
//! A compact Sugiyama-style pipeline:
//! 1. Break cycles by reversing DFS back edges
//! 2. Assign ranks by longest path from the sources
//! 3. Order each rank with barycenter sweeps, keeping top-level clusters contiguous
//! 4. Pack each rank left to right, centered on the widest rank
//! 5. Grow cluster boxes around their members, innermost first
//!
//! Coordinates are top-left based and normalized so every box sits at least
//! `margin` away from the origin. Edge routing is left to the renderer, which
//! knows each node's outline.

use std::collections::VecDeque;

use super::types::GraphModel;

/// Spacing and text metrics used by the layout.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
	/// Horizontal padding between label text and node outline.
	pub node_padding_x: f64,
	/// Vertical padding between label text and node outline.
	pub node_padding_y: f64,
	/// Minimum node width (Graphviz: 0.75in).
	pub min_node_width: f64,
	/// Minimum node height (Graphviz: 0.5in).
	pub min_node_height: f64,
	/// Horizontal gap between neighbours in a rank.
	pub node_sep: f64,
	/// Vertical gap between ranks.
	pub rank_sep: f64,
	/// Padding between a cluster outline and its contents.
	pub cluster_padding: f64,
	/// Extra space above cluster contents for the cluster label.
	pub cluster_label_height: f64,
	/// Empty border around the whole drawing.
	pub margin: f64,
	/// Average glyph advance as a fraction of the font size.
	pub char_width: f64,
	/// Line height as a fraction of the font size.
	pub line_height: f64,
	/// Number of down/up barycenter sweeps.
	pub ordering_sweeps: usize,
	/// Arrowhead length.
	pub arrow_size: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_padding_x: 10.0,
			node_padding_y: 6.0,
			min_node_width: 54.0,
			min_node_height: 36.0,
			node_sep: 18.0,
			rank_sep: 36.0,
			cluster_padding: 10.0,
			cluster_label_height: 22.0,
			margin: 8.0,
			char_width: 0.6,
			line_height: 1.2,
			ordering_sweeps: 4,
			arrow_size: 9.0,
		}
	}
}

impl LayoutConfig {
	/// Estimated size of a node whose label has the given lines.
	pub fn node_size(&self, lines: &[String], font_size: f64) -> (f64, f64) {
		let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
		let text_width = longest as f64 * font_size * self.char_width;
		let text_height = lines.len().max(1) as f64 * font_size * self.line_height;
		(
			(text_width + 2.0 * self.node_padding_x).max(self.min_node_width),
			(text_height + 2.0 * self.node_padding_y).max(self.min_node_height),
		)
	}
}

/// Axis-aligned box, top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn center(&self) -> (f64, f64) {
		(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	/// Smallest box containing both.
	pub fn union(&self, other: &Rect) -> Rect {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		Rect {
			x,
			y,
			width: self.right().max(other.right()) - x,
			height: self.bottom().max(other.bottom()) - y,
		}
	}

	fn expand(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
		Rect {
			x: self.x - left,
			y: self.y - top,
			width: self.width + left + right,
			height: self.height + top + bottom,
		}
	}

	fn translate(&mut self, dx: f64, dy: f64) {
		self.x += dx;
		self.y += dy;
	}

	/// Whether two boxes overlap with positive area.
	pub fn overlaps(&self, other: &Rect) -> bool {
		self.x < other.right()
			&& other.x < self.right()
			&& self.y < other.bottom()
			&& other.y < self.bottom()
	}
}

/// Positions computed for one graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	/// Box per node, indexed like [`GraphModel::nodes`].
	pub nodes: Vec<Rect>,
	/// Rank per node.
	pub ranks: Vec<usize>,
	/// Box per cluster; `None` for clusters without members.
	pub clusters: Vec<Option<Rect>>,
	pub width: f64,
	pub height: f64,
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
	New,
	Active,
	Done,
}

/// Lay out `model` given each node's `(width, height)`.
pub fn layout(model: &GraphModel, sizes: &[(f64, f64)], config: &LayoutConfig) -> Layout {
	let n = model.nodes.len();
	if n == 0 {
		return Layout {
			clusters: vec![None; model.clusters.len()],
			width: 2.0 * config.margin,
			height: 2.0 * config.margin,
			..Layout::default()
		};
	}

	let dag = acyclic_edges(model);
	let ranks = assign_ranks(n, &dag);
	let layers = order_layers(model, &ranks, &dag, config.ordering_sweeps);

	let mut nodes = vec![Rect::default(); n];
	let mut layer_widths = Vec::with_capacity(layers.len());
	for layer in &layers {
		let mut width = 0.0;
		for (i, &v) in layer.iter().enumerate() {
			if i > 0 {
				width += gap(model, layer[i - 1], v, config);
			}
			width += sizes[v].0;
		}
		layer_widths.push(width);
	}
	let max_width = layer_widths.iter().copied().fold(0.0, f64::max);

	let mut top = 0.0;
	for (layer, width) in layers.iter().zip(&layer_widths) {
		let layer_height = layer.iter().map(|&v| sizes[v].1).fold(0.0, f64::max);
		let mut x = (max_width - width) / 2.0;
		for (i, &v) in layer.iter().enumerate() {
			if i > 0 {
				x += gap(model, layer[i - 1], v, config);
			}
			let (w, h) = sizes[v];
			nodes[v] = Rect {
				x,
				y: top + (layer_height - h) / 2.0,
				width: w,
				height: h,
			};
			x += w;
		}
		top += layer_height + config.rank_sep;
	}

	let mut clusters = cluster_boxes(model, &nodes, config);

	let mut min_x = f64::INFINITY;
	let mut min_y = f64::INFINITY;
	let mut max_x = f64::NEG_INFINITY;
	let mut max_y = f64::NEG_INFINITY;
	for rect in nodes.iter().chain(clusters.iter().flatten()) {
		min_x = min_x.min(rect.x);
		min_y = min_y.min(rect.y);
		max_x = max_x.max(rect.right());
		max_y = max_y.max(rect.bottom());
	}
	let (dx, dy) = (config.margin - min_x, config.margin - min_y);
	for rect in nodes.iter_mut().chain(clusters.iter_mut().flatten()) {
		rect.translate(dx, dy);
	}

	Layout {
		nodes,
		ranks,
		clusters,
		width: max_x - min_x + 2.0 * config.margin,
		height: max_y - min_y + 2.0 * config.margin,
	}
}

/// Horizontal gap between two rank neighbours: wider across cluster borders
/// so the boxes have room for their padding.
fn gap(model: &GraphModel, left: usize, right: usize, config: &LayoutConfig) -> f64 {
	if model.nodes[left].cluster == model.nodes[right].cluster {
		config.node_sep
	} else {
		config.node_sep + 2.0 * config.cluster_padding
	}
}

/// Edges as `(from, to)` pairs with DFS back edges reversed and self loops
/// dropped, so the result is acyclic.
fn acyclic_edges(model: &GraphModel) -> Vec<(usize, usize)> {
	let n = model.nodes.len();
	let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
	for (i, edge) in model.edges.iter().enumerate() {
		if edge.source != edge.target {
			out[edge.source].push(i);
		}
	}

	let mut state = vec![Visit::New; n];
	let mut reversed = vec![false; model.edges.len()];
	for root in 0..n {
		if state[root] != Visit::New {
			continue;
		}
		state[root] = Visit::Active;
		let mut stack = vec![(root, 0usize)];
		while let Some(top) = stack.last_mut() {
			let (u, next) = *top;
			if next < out[u].len() {
				top.1 += 1;
				let e = out[u][next];
				let v = model.edges[e].target;
				match state[v] {
					Visit::New => {
						state[v] = Visit::Active;
						stack.push((v, 0));
					}
					Visit::Active => reversed[e] = true,
					Visit::Done => {}
				}
			} else {
				state[u] = Visit::Done;
				stack.pop();
			}
		}
	}

	model
		.edges
		.iter()
		.zip(reversed)
		.filter(|(edge, _)| edge.source != edge.target)
		.map(|(edge, rev)| {
			if rev {
				(edge.target, edge.source)
			} else {
				(edge.source, edge.target)
			}
		})
		.collect()
}

/// Longest-path ranking over an acyclic edge list (Kahn's algorithm).
fn assign_ranks(n: usize, dag: &[(usize, usize)]) -> Vec<usize> {
	let mut indegree = vec![0usize; n];
	let mut succ: Vec<Vec<usize>> = vec![Vec::new(); n];
	for &(u, v) in dag {
		succ[u].push(v);
		indegree[v] += 1;
	}
	let mut ranks = vec![0usize; n];
	let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
	while let Some(u) = queue.pop_front() {
		for &v in &succ[u] {
			ranks[v] = ranks[v].max(ranks[u] + 1);
			indegree[v] -= 1;
			if indegree[v] == 0 {
				queue.push_back(v);
			}
		}
	}
	ranks
}

fn order_layers(
	model: &GraphModel,
	ranks: &[usize],
	dag: &[(usize, usize)],
	sweeps: usize,
) -> Vec<Vec<usize>> {
	let n = ranks.len();
	let depth = ranks.iter().copied().max().unwrap_or(0) + 1;
	let mut layers: Vec<Vec<usize>> = vec![Vec::new(); depth];
	for v in 0..n {
		layers[ranks[v]].push(v);
	}

	let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
	let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
	for &(u, v) in dag {
		succs[u].push(v);
		preds[v].push(u);
	}

	let mut pos = vec![0.0; n];
	for layer in &layers {
		reindex(layer, &mut pos);
	}

	for _ in 0..sweeps {
		for r in 1..depth {
			sort_by_barycenter(&mut layers[r], &preds, &pos);
			reindex(&layers[r], &mut pos);
		}
		for r in (0..depth.saturating_sub(1)).rev() {
			sort_by_barycenter(&mut layers[r], &succs, &pos);
			reindex(&layers[r], &mut pos);
		}
	}

	for layer in &mut layers {
		group_clusters(model, layer);
	}
	layers
}

fn reindex(layer: &[usize], pos: &mut [f64]) {
	for (i, &v) in layer.iter().enumerate() {
		pos[v] = i as f64;
	}
}

fn sort_by_barycenter(layer: &mut [usize], neighbours: &[Vec<usize>], pos: &[f64]) {
	let key = |v: usize| -> f64 {
		let adjacent = &neighbours[v];
		if adjacent.is_empty() {
			pos[v]
		} else {
			adjacent.iter().map(|&u| pos[u]).sum::<f64>() / adjacent.len() as f64
		}
	};
	let mut keyed: Vec<(f64, usize)> = layer.iter().map(|&v| (key(v), v)).collect();
	keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
	for (slot, (_, v)) in layer.iter_mut().zip(keyed) {
		*slot = v;
	}
}

/// Pull members of the same top-level cluster together within a rank,
/// placing each group at its members' mean position.
fn group_clusters(model: &GraphModel, layer: &mut [usize]) {
	let group_of = |v: usize| model.top_cluster(v).map(|c| cluster_group(c, model)).unwrap_or(v);
	let mut sums: Vec<(usize, f64, usize)> = Vec::new();
	for (i, &v) in layer.iter().enumerate() {
		let group = group_of(v);
		match sums.iter_mut().find(|(g, _, _)| *g == group) {
			Some(entry) => {
				entry.1 += i as f64;
				entry.2 += 1;
			}
			None => sums.push((group, i as f64, 1)),
		}
	}
	let mean = |group: usize| -> f64 {
		sums.iter()
			.find(|(g, _, _)| *g == group)
			.map(|(_, sum, count)| sum / *count as f64)
			.unwrap_or(0.0)
	};
	let mut keyed: Vec<(f64, usize, usize)> = layer
		.iter()
		.enumerate()
		.map(|(i, &v)| (mean(group_of(v)), i, v))
		.collect();
	keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
	for (slot, (_, _, v)) in layer.iter_mut().zip(keyed) {
		*slot = v;
	}
}

/// Group ids for clusters live after the node ids so the two never collide.
fn cluster_group(cluster: usize, model: &GraphModel) -> usize {
	model.nodes.len() + cluster
}

fn cluster_boxes(model: &GraphModel, nodes: &[Rect], config: &LayoutConfig) -> Vec<Option<Rect>> {
	let mut boxes: Vec<Option<Rect>> = vec![None; model.clusters.len()];
	let mut order: Vec<usize> = (0..model.clusters.len()).collect();
	order.sort_by_key(|&c| std::cmp::Reverse(model.cluster_depth(c)));

	for c in order {
		let mut bounds: Option<Rect> = None;
		let mut grow = |rect: &Rect| {
			bounds = Some(match bounds {
				Some(b) => b.union(rect),
				None => *rect,
			});
		};
		for (v, node) in model.nodes.iter().enumerate() {
			if node.cluster == Some(c) {
				grow(&nodes[v]);
			}
		}
		for (child, cluster) in model.clusters.iter().enumerate() {
			if cluster.parent == Some(c) {
				if let Some(rect) = boxes[child] {
					grow(&rect);
				}
			}
		}
		let label_space = match model.clusters[c].attr("label") {
			Some(label) if !label.is_empty() => config.cluster_label_height,
			_ => 0.0,
		};
		let pad = config.cluster_padding;
		boxes[c] = bounds.map(|b| b.expand(pad, pad + label_space, pad, pad));
	}
	boxes
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::diagram::dot::parse;
	use crate::data::MAIN_FLOW;

	fn lay_out(source: &str) -> (GraphModel, Layout) {
		let model = parse(source).unwrap();
		let config = LayoutConfig::default();
		let sizes: Vec<_> = model
			.nodes
			.iter()
			.map(|n| config.node_size(&n.display_lines(), 14.0))
			.collect();
		let layout = layout(&model, &sizes, &config);
		(model, layout)
	}

	#[test]
	fn chain_ranks_top_to_bottom() {
		let (_, layout) = lay_out("digraph { a -> b -> c; a -> c; }");
		assert_eq!(layout.ranks, vec![0, 1, 2]);
		assert!(layout.nodes[0].bottom() < layout.nodes[1].y);
		assert!(layout.nodes[1].bottom() < layout.nodes[2].y);
	}

	#[test]
	fn cycles_still_rank() {
		let (_, layout) = lay_out("digraph { a -> b; b -> c; c -> a; c -> c; }");
		assert_eq!(layout.ranks, vec![0, 1, 2]);
	}

	#[test]
	fn nodes_in_a_rank_do_not_overlap() {
		let (model, layout) = lay_out(MAIN_FLOW);
		for a in 0..model.nodes.len() {
			for b in a + 1..model.nodes.len() {
				assert!(
					!layout.nodes[a].overlaps(&layout.nodes[b]),
					"{} overlaps {}",
					model.nodes[a].id,
					model.nodes[b].id
				);
			}
		}
	}

	#[test]
	fn everything_is_inside_the_canvas() {
		let (_, layout) = lay_out(MAIN_FLOW);
		let config = LayoutConfig::default();
		for rect in layout.nodes.iter().chain(layout.clusters.iter().flatten()) {
			assert!(rect.x >= config.margin - 1e-9);
			assert!(rect.y >= config.margin - 1e-9);
			assert!(rect.right() <= layout.width - config.margin + 1e-9);
			assert!(rect.bottom() <= layout.height - config.margin + 1e-9);
		}
	}

	#[test]
	fn clusters_contain_their_members() {
		let (model, layout) = lay_out(MAIN_FLOW);
		for (v, node) in model.nodes.iter().enumerate() {
			let mut cluster = node.cluster;
			while let Some(c) = cluster {
				let bounds = layout.clusters[c].unwrap();
				let rect = layout.nodes[v];
				assert!(rect.x >= bounds.x - 1e-9, "{} left of {}", node.id, model.clusters[c].name);
				assert!(rect.y >= bounds.y - 1e-9);
				assert!(rect.right() <= bounds.right() + 1e-9);
				assert!(rect.bottom() <= bounds.bottom() + 1e-9);
				cluster = model.clusters[c].parent;
			}
		}
	}

	#[test]
	fn empty_clusters_have_no_box() {
		let (_, layout) = lay_out("digraph { subgraph cluster_empty { label = \"x\"; } a; }");
		assert_eq!(layout.clusters, vec![None]);
	}

	#[test]
	fn empty_graph_is_just_margins() {
		let (_, layout) = lay_out("digraph {}");
		assert!(layout.nodes.is_empty());
		assert_eq!(layout.width, 16.0);
	}

	#[test]
	fn node_size_grows_with_label() {
		let config = LayoutConfig::default();
		let short = config.node_size(&["a".into()], 14.0);
		let long = config.node_size(&["Execute Optimized Query on MySQL".into()], 14.0);
		assert_eq!(short, (54.0, 36.0));
		assert!(long.0 > short.0);
		let two_lines = config.node_size(&["a".into(), "b".into(), "c".into()], 14.0);
		assert!(two_lines.1 > short.1);
	}

	#[test]
	fn layout_is_deterministic() {
		let (_, first) = lay_out(MAIN_FLOW);
		let (_, second) = lay_out(MAIN_FLOW);
		assert_eq!(first, second);
	}
}
