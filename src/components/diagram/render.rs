//! Turns a graph description into a styled visual tree and serializes it to SVG.
//!
//! Drawing order in the SVG gives correct z-ordering:
//! 1. Cluster boxes, outermost first
//! 2. Edges with their arrowheads
//! 3. Nodes on top
//!
//! Each node is emitted as a `<g class="node">` whose `<title>` holds the
//! node ID. The interaction binder reads that title back on click, so it must
//! stay the canonical label even when a `label` attribute changes the drawn
//! text.

use std::collections::BTreeSet;
use std::fmt::Write;

use super::dot;
use super::error::RenderError;
use super::layout::{self, LayoutConfig, Rect};
use super::theme::{Color, Theme};
use super::types::{GraphEdge, GraphModel, GraphNode};

/// CSS selector matching every rendered node group.
pub const NODE_SELECTOR: &str = "g.node";

/// The rendering-engine boundary: description text in, visual tree out.
pub trait Renderer: Send + Sync {
	/// Parse and lay out `description`.
	fn render(&self, description: &str) -> Result<VisualTree, RenderError>;
}

/// Outline drawn for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeShapeKind {
	Rect,
	Ellipse,
	Circle,
	/// Text only, no outline.
	Plain,
}

impl NodeShapeKind {
	fn from_attr(shape: Option<&str>) -> Self {
		match shape.map(str::to_ascii_lowercase).as_deref() {
			Some("box") | Some("rect") | Some("rectangle") | Some("square") => Self::Rect,
			Some("circle") | Some("doublecircle") => Self::Circle,
			Some("plaintext") | Some("plain") | Some("none") => Self::Plain,
			_ => Self::Ellipse,
		}
	}
}

/// Stroke pattern from the `style` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokePattern {
	#[default]
	Solid,
	Dashed,
	Dotted,
}

impl StrokePattern {
	fn dash_array(self) -> Option<&'static str> {
		match self {
			Self::Solid => None,
			Self::Dashed => Some("5,2"),
			Self::Dotted => Some("1,5"),
		}
	}
}

/// Parsed `style` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct StyleFlags {
	filled: bool,
	rounded: bool,
	bold: bool,
	invisible: bool,
	pattern: StrokePattern,
}

impl StyleFlags {
	fn parse(style: Option<&str>) -> Self {
		let mut flags = Self::default();
		for part in style.unwrap_or("").split(',').map(str::trim) {
			match part.to_ascii_lowercase().as_str() {
				"filled" => flags.filled = true,
				"rounded" => flags.rounded = true,
				"bold" => flags.bold = true,
				"invis" => flags.invisible = true,
				"dashed" => flags.pattern = StrokePattern::Dashed,
				"dotted" => flags.pattern = StrokePattern::Dotted,
				_ => {}
			}
		}
		flags
	}
}

/// Text styling for a label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
	pub color: Color,
	pub family: String,
	pub size: f64,
}

/// One rendered node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	/// Canonical label: the node ID from the description.
	pub id: String,
	/// Lines drawn inside the outline.
	pub lines: Vec<String>,
	pub kind: NodeShapeKind,
	pub bounds: Rect,
	pub stroke: Color,
	pub stroke_width: f64,
	pub pattern: StrokePattern,
	/// `None` when the node is not filled.
	pub fill: Option<Color>,
	pub corner_radius: f64,
	pub text: TextStyle,
	pub invisible: bool,
}

/// One rendered edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	pub source: String,
	pub target: String,
	/// SVG path data for the edge line.
	pub path: String,
	/// Arrowhead triangle, empty for undirected edges.
	pub arrow: Vec<(f64, f64)>,
	pub color: Color,
	pub stroke_width: f64,
	pub pattern: StrokePattern,
	pub label: Option<(String, f64, f64, TextStyle)>,
}

/// One rendered cluster box.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterShape {
	pub name: String,
	pub label: Option<String>,
	pub bounds: Rect,
	pub stroke: Color,
	pub stroke_width: f64,
	pub pattern: StrokePattern,
	pub fill: Option<Color>,
	pub text: TextStyle,
	/// Nesting depth, 0 for top-level clusters.
	pub depth: usize,
}

/// Self-contained drawing of one graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualTree {
	pub width: f64,
	pub height: f64,
	pub background: Option<Color>,
	pub clusters: Vec<ClusterShape>,
	pub edges: Vec<EdgeShape>,
	pub nodes: Vec<NodeShape>,
}

impl VisualTree {
	/// Canonical labels of all nodes.
	pub fn node_labels(&self) -> BTreeSet<&str> {
		self.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	/// Node with the given canonical label.
	pub fn node(&self, id: &str) -> Option<&NodeShape> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Serialize to a standalone SVG document.
	pub fn to_svg(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(
			out,
			r#"<svg xmlns="http://www.w3.org/2000/svg" class="diagram-svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
			w = num(self.width),
			h = num(self.height),
		);
		out.push_str(r#"<g class="graph">"#);
		out.push('\n');
		if let Some(bg) = self.background {
			let _ = writeln!(
				out,
				r#"<rect class="background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
				num(self.width),
				num(self.height),
				bg.to_css()
			);
		}
		for cluster in &self.clusters {
			write_cluster(&mut out, cluster);
		}
		for edge in &self.edges {
			write_edge(&mut out, edge);
		}
		for node in &self.nodes {
			write_node(&mut out, node);
		}
		out.push_str("</g>\n</svg>\n");
		out
	}
}

/// The built-in engine: DOT parser, layered layout, theme.
#[derive(Clone, Debug, Default)]
pub struct LayeredRenderer {
	pub layout: LayoutConfig,
	pub theme: Theme,
}

impl Renderer for LayeredRenderer {
	fn render(&self, description: &str) -> Result<VisualTree, RenderError> {
		let model = dot::parse(description)?;
		Ok(self.build(&model))
	}
}

impl LayeredRenderer {
	/// Style and position an already-parsed graph.
	pub fn build(&self, model: &GraphModel) -> VisualTree {
		let texts: Vec<TextStyle> = model.nodes.iter().map(|n| self.node_text(n)).collect();
		let lines: Vec<Vec<String>> = model.nodes.iter().map(GraphNode::display_lines).collect();
		let sizes: Vec<(f64, f64)> = model
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let (w, h) = self.layout.node_size(&lines[i], texts[i].size);
				match NodeShapeKind::from_attr(node.attr("shape")) {
					NodeShapeKind::Circle => (w.max(h), w.max(h)),
					NodeShapeKind::Ellipse => (w * 1.2, h),
					_ => (w, h),
				}
			})
			.collect();
		let placed = layout::layout(model, &sizes, &self.layout);

		let nodes: Vec<NodeShape> = model
			.nodes
			.iter()
			.zip(lines)
			.zip(texts)
			.enumerate()
			.map(|(i, ((node, lines), text))| self.node_shape(node, lines, text, placed.nodes[i]))
			.collect();

		let edges = model
			.edges
			.iter()
			.map(|edge| self.edge_shape(model, edge, &nodes))
			.collect();

		let mut clusters: Vec<ClusterShape> = model
			.clusters
			.iter()
			.enumerate()
			.filter_map(|(c, cluster)| {
				let bounds = placed.clusters[c]?;
				let style = StyleFlags::parse(cluster.attr("style"));
				let stroke = self
					.theme
					.resolve(cluster.attr("pencolor").or(cluster.attr("color")), self.theme.cluster.stroke);
				let fill = if style.filled {
					Some(
						self.theme
							.resolve(
								cluster.attr("fillcolor").or(cluster.attr("color")),
								self.theme.node.fill,
							)
							.lighten(0.85),
					)
				} else {
					None
				};
				Some(ClusterShape {
					name: cluster.name.clone(),
					label: cluster.attr("label").filter(|l| !l.is_empty()).map(str::to_string),
					bounds,
					stroke,
					stroke_width: self.theme.cluster.stroke_width * if style.bold { 2.0 } else { 1.0 },
					pattern: style.pattern,
					fill,
					text: TextStyle {
						color: self.theme.resolve(cluster.attr("fontcolor"), self.theme.cluster.font_color),
						family: cluster
							.attr("fontname")
							.unwrap_or(self.theme.font_family)
							.to_string(),
						size: font_size(cluster.attr("fontsize"), self.theme.font_size),
					},
					depth: model.cluster_depth(c),
				})
			})
			.collect();
		clusters.sort_by_key(|c| c.depth);

		VisualTree {
			width: placed.width,
			height: placed.height,
			background: Some(self.theme.background),
			clusters,
			edges,
			nodes,
		}
	}

	fn node_text(&self, node: &GraphNode) -> TextStyle {
		TextStyle {
			color: self.theme.resolve(node.attr("fontcolor"), self.theme.node.font_color),
			family: node.attr("fontname").unwrap_or(self.theme.font_family).to_string(),
			size: font_size(node.attr("fontsize"), self.theme.font_size),
		}
	}

	fn node_shape(&self, node: &GraphNode, lines: Vec<String>, text: TextStyle, bounds: Rect) -> NodeShape {
		let style = StyleFlags::parse(node.attr("style"));
		let stroke = self.theme.resolve(node.attr("color"), self.theme.node.stroke);
		let fill = if style.filled {
			Some(self.theme.resolve(
				node.attr("fillcolor").or(node.attr("color")),
				self.theme.node.fill,
			))
		} else {
			None
		};
		NodeShape {
			id: node.id.clone(),
			lines,
			kind: NodeShapeKind::from_attr(node.attr("shape")),
			bounds,
			stroke,
			stroke_width: self.theme.node.stroke_width * if style.bold { 2.0 } else { 1.0 },
			pattern: style.pattern,
			fill,
			corner_radius: if style.rounded {
				self.theme.node.corner_radius
			} else {
				0.0
			},
			text,
			invisible: style.invisible,
		}
	}

	fn edge_shape(&self, model: &GraphModel, edge: &GraphEdge, nodes: &[NodeShape]) -> EdgeShape {
		let (from, to) = (&nodes[edge.source], &nodes[edge.target]);
		let style = StyleFlags::parse(edge.attr("style"));
		let arrow_size = self.layout.arrow_size;
		let (path, arrow, label_at) = if edge.source == edge.target {
			self_loop(from, arrow_size, model.directed)
		} else {
			straight(from, to, arrow_size, model.directed)
		};
		let label = edge.attr("label").filter(|l| !l.is_empty()).map(|l| {
			(
				l.to_string(),
				label_at.0,
				label_at.1,
				TextStyle {
					color: self.theme.resolve(edge.attr("fontcolor"), self.theme.edge.font_color),
					family: edge.attr("fontname").unwrap_or(self.theme.font_family).to_string(),
					size: font_size(edge.attr("fontsize"), self.theme.font_size),
				},
			)
		});
		EdgeShape {
			source: from.id.clone(),
			target: to.id.clone(),
			path,
			arrow,
			color: self.theme.resolve(edge.attr("color"), self.theme.edge.color),
			stroke_width: self.theme.edge.stroke_width * if style.bold { 2.0 } else { 1.0 },
			pattern: style.pattern,
			label,
		}
	}
}

fn font_size(value: Option<&str>, default: f64) -> f64 {
	value
		.and_then(|v| v.trim().parse::<f64>().ok())
		.filter(|size| size.is_finite() && *size > 0.0)
		.unwrap_or(default)
}

/// Distance from a node's center to its outline along the unit direction
/// `(ux, uy)`.
fn boundary_distance(node: &NodeShape, ux: f64, uy: f64) -> f64 {
	let (hw, hh) = (node.bounds.width / 2.0, node.bounds.height / 2.0);
	match node.kind {
		NodeShapeKind::Rect | NodeShapeKind::Plain => {
			let tx = if ux.abs() > 1e-9 { hw / ux.abs() } else { f64::INFINITY };
			let ty = if uy.abs() > 1e-9 { hh / uy.abs() } else { f64::INFINITY };
			tx.min(ty)
		}
		NodeShapeKind::Ellipse | NodeShapeKind::Circle => {
			1.0 / ((ux / hw).powi(2) + (uy / hh).powi(2)).sqrt()
		}
	}
}

type Route = (String, Vec<(f64, f64)>, (f64, f64));

fn straight(from: &NodeShape, to: &NodeShape, arrow_size: f64, directed: bool) -> Route {
	let (x1, y1) = from.bounds.center();
	let (x2, y2) = to.bounds.center();
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return (format!("M{},{}", num(x1), num(y1)), Vec::new(), (x1, y1));
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let (sx, sy) = (
		x1 + ux * boundary_distance(from, ux, uy),
		y1 + uy * boundary_distance(from, ux, uy),
	);
	let (tip_x, tip_y) = (
		x2 - ux * boundary_distance(to, -ux, -uy),
		y2 - uy * boundary_distance(to, -ux, -uy),
	);
	let mid = ((sx + tip_x) / 2.0 + 4.0, (sy + tip_y) / 2.0);
	if !directed {
		let path = format!("M{},{}L{},{}", num(sx), num(sy), num(tip_x), num(tip_y));
		return (path, Vec::new(), mid);
	}
	let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
	let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
	let path = format!("M{},{}L{},{}", num(sx), num(sy), num(back_x), num(back_y));
	let arrow = vec![
		(tip_x, tip_y),
		(back_x + px, back_y + py),
		(back_x - px, back_y - py),
	];
	(path, arrow, mid)
}

/// A loop hanging off the node's right side.
fn self_loop(node: &NodeShape, arrow_size: f64, directed: bool) -> Route {
	let b = node.bounds;
	let (_, cy) = b.center();
	let reach = (b.height / 2.0).max(18.0);
	let (start_x, start_y) = (b.right() - b.width * 0.1, cy - b.height / 4.0);
	let (end_x, end_y) = (b.right() - b.width * 0.1, cy + b.height / 4.0);
	let path = format!(
		"M{},{}C{},{} {},{} {},{}",
		num(start_x),
		num(start_y),
		num(b.right() + reach),
		num(start_y - reach / 2.0),
		num(b.right() + reach),
		num(end_y + reach / 2.0),
		num(end_x + arrow_size * 0.7),
		num(end_y + arrow_size * 0.3),
	);
	let arrow = if directed {
		let (bx, by) = (end_x + arrow_size * 0.7, end_y + arrow_size * 0.3);
		vec![(end_x, end_y), (bx + 2.0, by - 3.5), (bx - 1.5, by + 3.0)]
	} else {
		Vec::new()
	};
	(path, arrow, (b.right() + reach + 4.0, cy))
}

/// Compact number formatting for SVG attributes.
fn num(value: f64) -> String {
	let rounded = (value * 100.0).round() / 100.0;
	if rounded == rounded.trunc() {
		format!("{}", rounded as i64)
	} else {
		format!("{rounded}")
	}
}

/// Escape text for use in SVG element content and attribute values.
pub fn escape_xml(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}

fn stroke_attrs(color: Color, width: f64, pattern: StrokePattern) -> String {
	let mut attrs = format!(r#"stroke="{}" stroke-width="{}""#, color.to_css(), num(width));
	if let Some(dash) = pattern.dash_array() {
		let _ = write!(attrs, r#" stroke-dasharray="{dash}""#);
	}
	attrs
}

fn write_text_lines(out: &mut String, lines: &[String], cx: f64, cy: f64, style: &TextStyle) {
	let line_height = style.size * 1.2;
	let first = cy - line_height * (lines.len() as f64 - 1.0) / 2.0;
	for (i, line) in lines.iter().enumerate() {
		let _ = writeln!(
			out,
			r#"<text text-anchor="middle" dominant-baseline="central" x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
			num(cx),
			num(first + i as f64 * line_height),
			escape_xml(&style.family),
			num(style.size),
			style.color.to_css(),
			escape_xml(line)
		);
	}
}

fn write_cluster(out: &mut String, cluster: &ClusterShape) {
	let b = cluster.bounds;
	let _ = writeln!(
		out,
		r#"<g class="cluster"><title>{}</title>"#,
		escape_xml(&cluster.name)
	);
	let fill = cluster.fill.map(Color::to_css).unwrap_or_else(|| "none".into());
	let _ = writeln!(
		out,
		r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" {}/>"#,
		num(b.x),
		num(b.y),
		num(b.width),
		num(b.height),
		fill,
		stroke_attrs(cluster.stroke, cluster.stroke_width, cluster.pattern)
	);
	if let Some(label) = &cluster.label {
		let line_y = b.y + cluster.text.size;
		write_text_lines(out, &[label.clone()], b.x + b.width / 2.0, line_y, &cluster.text);
	}
	out.push_str("</g>\n");
}

fn write_edge(out: &mut String, edge: &EdgeShape) {
	let _ = writeln!(
		out,
		r#"<g class="edge"><title>{}&#45;&gt;{}</title>"#,
		escape_xml(&edge.source),
		escape_xml(&edge.target)
	);
	let _ = writeln!(
		out,
		r#"<path d="{}" fill="none" {}/>"#,
		edge.path,
		stroke_attrs(edge.color, edge.stroke_width, edge.pattern)
	);
	if !edge.arrow.is_empty() {
		let points: Vec<String> = edge
			.arrow
			.iter()
			.map(|(x, y)| format!("{},{}", num(*x), num(*y)))
			.collect();
		let _ = writeln!(
			out,
			r#"<polygon points="{}" fill="{}" {}/>"#,
			points.join(" "),
			edge.color.to_css(),
			stroke_attrs(edge.color, edge.stroke_width, StrokePattern::Solid)
		);
	}
	if let Some((text, x, y, style)) = &edge.label {
		write_text_lines(out, &[text.clone()], *x, *y, style);
	}
	out.push_str("</g>\n");
}

fn write_node(out: &mut String, node: &NodeShape) {
	let visibility = if node.invisible { r#" visibility="hidden""# } else { "" };
	let _ = writeln!(
		out,
		r#"<g class="node"{} style="cursor: pointer"><title>{}</title>"#,
		visibility,
		escape_xml(&node.id)
	);
	let b = node.bounds;
	let (cx, cy) = b.center();
	let fill = node.fill.map(Color::to_css).unwrap_or_else(|| "none".into());
	let stroke = stroke_attrs(node.stroke, node.stroke_width, node.pattern);
	match node.kind {
		NodeShapeKind::Rect => {
			let _ = writeln!(
				out,
				r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" {}/>"#,
				num(b.x),
				num(b.y),
				num(b.width),
				num(b.height),
				num(node.corner_radius),
				fill,
				stroke
			);
		}
		NodeShapeKind::Ellipse | NodeShapeKind::Circle => {
			let _ = writeln!(
				out,
				r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" {}/>"#,
				num(cx),
				num(cy),
				num(b.width / 2.0),
				num(b.height / 2.0),
				fill,
				stroke
			);
		}
		NodeShapeKind::Plain => {}
	}
	write_text_lines(out, &node.lines, cx, cy, &node.text);
	out.push_str("</g>\n");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{ERROR_HANDLING, MAIN_FLOW, MITIGATION};

	fn render(source: &str) -> VisualTree {
		LayeredRenderer::default().render(source).unwrap()
	}

	#[test]
	fn renders_every_node_once() {
		assert_eq!(render(MAIN_FLOW).nodes.len(), 50);
		assert_eq!(render(ERROR_HANDLING).nodes.len(), 16);
		assert_eq!(render(MITIGATION).nodes.len(), 20);
	}

	#[test]
	fn svg_has_one_titled_group_per_node() {
		let tree = render(MITIGATION);
		let svg = tree.to_svg();
		assert_eq!(svg.matches(r#"<g class="node""#).count(), 20);
		assert!(svg.contains("<title>Data Encryption/Decryption</title>"));
		assert!(svg.contains("<title>Centralized Logging &amp; Monitoring</title>"));
		assert_eq!(svg.matches(r#"<g class="edge">"#).count(), 8);
		assert_eq!(svg.matches(r#"<g class="cluster">"#).count(), 1);
	}

	#[test]
	fn title_keeps_id_when_label_differs() {
		let tree = render(r#"digraph { "step-1" [label="First step"]; }"#);
		let node = tree.node("step-1").unwrap();
		assert_eq!(node.lines, vec!["First step"]);
		let svg = tree.to_svg();
		assert!(svg.contains("<title>step-1</title>"));
		assert!(svg.contains(">First step</text>"));
	}

	#[test]
	fn applies_node_styling() {
		let tree = render(MAIN_FLOW);
		let query = tree.node("User Inputs Query").unwrap();
		assert_eq!(query.kind, NodeShapeKind::Rect);
		assert_eq!(query.stroke, Color::rgb(0, 0, 255));
		assert_eq!(query.fill, Some(Color::rgb(0, 0, 255)));
		assert_eq!(query.text.color, Color::rgb(255, 255, 255));
		assert_eq!(query.text.family, "Helvetica");
		assert_eq!(query.text.size, 12.0);

		let undefined = tree.node("Implement Caching on Frontend").unwrap();
		assert_eq!(undefined.kind, NodeShapeKind::Ellipse);
		assert_eq!(undefined.fill, Some(Color::rgb(192, 192, 192)));

		let dotted = tree.node("Pre-Processing: Data Cleaning").unwrap();
		assert_eq!(dotted.pattern, StrokePattern::Dotted);
		assert_eq!(dotted.fill, None);
		assert_eq!(dotted.stroke, Theme::default().fallback);
	}

	#[test]
	fn unstyled_description_uses_theme_defaults() {
		let tree = render(MITIGATION);
		let external = tree.node("Express Receives Request").unwrap();
		assert_eq!(external.kind, NodeShapeKind::Ellipse);
		assert_eq!(external.fill, None);
		assert_eq!(external.text.size, 14.0);
	}

	#[test]
	fn non_finite_font_size_falls_back() {
		let tree = render(r#"digraph { a [fontsize="inf"]; b [fontsize=NaN]; a -> b; }"#);
		assert_eq!(tree.node("a").unwrap().text.size, 14.0);
		assert_eq!(tree.node("b").unwrap().text.size, 14.0);
		assert!(tree.width.is_finite() && tree.width > 0.0);
		assert!(tree.height.is_finite() && tree.height > 0.0);
		assert_eq!(font_size(Some("-inf"), 9.0), 9.0);
		assert_eq!(font_size(Some(" 11 "), 9.0), 11.0);
	}

	#[test]
	fn clusters_are_drawn_outermost_first() {
		let tree = render(MAIN_FLOW);
		let depths: Vec<_> = tree.clusters.iter().map(|c| c.depth).collect();
		let mut sorted = depths.clone();
		sorted.sort();
		assert_eq!(depths, sorted);
		assert!(tree
			.clusters
			.iter()
			.any(|c| c.label.as_deref() == Some("Pre-Processing 🛠️") && c.depth == 1));
	}

	#[test]
	fn directed_edges_get_arrowheads() {
		let tree = render("digraph { a -> b; b -> b; }");
		assert_eq!(tree.edges.len(), 2);
		assert!(tree.edges.iter().all(|e| e.arrow.len() == 3));
		let tree = render("graph { a -- b }");
		assert!(tree.edges[0].arrow.is_empty());
	}

	#[test]
	fn arrow_tip_touches_target_outline() {
		let tree = render("digraph { a [shape=box]; b [shape=box]; a -> b; }");
		let b = tree.node("b").unwrap().bounds;
		let (tip_x, tip_y) = tree.edges[0].arrow[0];
		assert!((tip_y - b.y).abs() < 1e-6);
		assert!(tip_x >= b.x && tip_x <= b.right());
	}

	#[test]
	fn edge_labels_are_drawn() {
		let tree = render(r#"digraph { a -> b [label="hit"]; }"#);
		assert!(tree.to_svg().contains(">hit</text>"));
	}

	#[test]
	fn rendering_is_deterministic() {
		let first = render(MAIN_FLOW);
		let second = render(MAIN_FLOW);
		assert_eq!(first.node_labels(), second.node_labels());
		assert_eq!(first.to_svg(), second.to_svg());
	}

	#[test]
	fn invalid_description_is_a_render_error() {
		let err = LayeredRenderer::default().render("digraph {").unwrap_err();
		assert!(matches!(err, RenderError::Parse { .. }));
	}

	#[test]
	fn escapes_markup() {
		assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
	}

	#[test]
	fn formats_numbers_compactly() {
		assert_eq!(num(12.0), "12");
		assert_eq!(num(12.345), "12.35");
		assert_eq!(num(-0.5), "-0.5");
	}
}
