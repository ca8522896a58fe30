//! Parsed graph structures produced from a DOT description.

use std::collections::HashMap;

/// Attribute map as written in the description (`name -> value`).
pub type Attrs = HashMap<String, String>;

/// A node in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Identifier from the description. This is the node's canonical label and
	/// the key used for detail lookups.
	pub id: String,
	/// Attributes after applying the defaults in scope at first mention.
	pub attrs: Attrs,
	/// Index into [`GraphModel::clusters`] of the cluster that first
	/// mentioned this node.
	pub cluster: Option<usize>,
}

impl GraphNode {
	/// Text drawn inside the node: the `label` attribute if set, otherwise
	/// the ID. `\N` expands to the ID and `\n`, `\l`, `\r` break lines.
	pub fn display_lines(&self) -> Vec<String> {
		let raw = self.attrs.get("label").map(String::as_str).unwrap_or(&self.id);
		split_label(&raw.replace("\\N", &self.id))
	}

	/// Attribute value, if set.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}
}

/// A directed (or undirected) edge between two nodes, by index.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Index of the tail node.
	pub source: usize,
	/// Index of the head node.
	pub target: usize,
	/// Edge attributes with defaults applied.
	pub attrs: Attrs,
}

impl GraphEdge {
	/// Attribute value, if set.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}
}

/// A `subgraph cluster…` block, drawn as a labeled box around its members.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
	/// Subgraph name, e.g. `cluster_0`.
	pub name: String,
	/// Graph attributes assigned inside the block (`label`, `color`, ...).
	pub attrs: Attrs,
	/// Enclosing cluster, if nested.
	pub parent: Option<usize>,
}

impl Cluster {
	/// Attribute value, if set.
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}
}

/// Complete parsed graph: nodes in first-mention order, edges in statement
/// order, clusters in first-open order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	/// Graph name after `digraph`, if any.
	pub name: Option<String>,
	/// `digraph` rather than `graph`.
	pub directed: bool,
	/// `strict` graphs drop duplicate edges.
	pub strict: bool,
	/// Root graph attributes.
	pub attrs: Attrs,
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub clusters: Vec<Cluster>,
}

impl GraphModel {
	/// Index of the node with the given ID.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	/// Nesting depth of a cluster (top-level clusters are depth 0).
	pub fn cluster_depth(&self, mut idx: usize) -> usize {
		let mut depth = 0;
		while let Some(parent) = self.clusters[idx].parent {
			depth += 1;
			idx = parent;
		}
		depth
	}

	/// Outermost cluster containing the node, if any.
	pub fn top_cluster(&self, node: usize) -> Option<usize> {
		let mut current = self.nodes[node].cluster?;
		while let Some(parent) = self.clusters[current].parent {
			current = parent;
		}
		Some(current)
	}
}

fn split_label(label: &str) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	let mut chars = label.chars().peekable();
	while let Some(c) = chars.next() {
		if c == '\\' {
			match chars.peek() {
				Some('n') | Some('l') | Some('r') => {
					chars.next();
					lines.push(std::mem::take(&mut current));
					continue;
				}
				Some('\\') => {
					chars.next();
					current.push('\\');
					continue;
				}
				_ => {}
			}
		}
		current.push(c);
	}
	if !current.is_empty() || lines.is_empty() {
		lines.push(current);
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, label: Option<&str>) -> GraphNode {
		let mut attrs = Attrs::new();
		if let Some(label) = label {
			attrs.insert("label".into(), label.into());
		}
		GraphNode {
			id: id.into(),
			attrs,
			cluster: None,
		}
	}

	#[test]
	fn display_label_defaults_to_id() {
		assert_eq!(node("Cache Miss", None).display_lines(), vec!["Cache Miss"]);
	}

	#[test]
	fn display_label_expands_escapes() {
		let n = node("a", Some("first\\nsecond \\N\\l"));
		assert_eq!(n.display_lines(), vec!["first", "second a"]);
	}

	#[test]
	fn empty_label_is_one_empty_line() {
		assert_eq!(node("a", Some("")).display_lines(), vec![""]);
	}
}
