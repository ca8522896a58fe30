//! Lexer and recursive-descent parser for the DOT graph description language.
//!
//! Covers the statement forms the architecture diagrams use plus the rest of
//! the everyday grammar: `strict`, `graph`/`digraph`, default attribute
//! statements, `ID = ID` graph attributes, node statements, edge chains,
//! named and anonymous subgraphs, and the three comment styles. Ports and
//! subgraphs as edge operands are rejected.

use std::collections::{HashMap, HashSet};

use super::error::RenderError;
use super::types::{Attrs, Cluster, GraphEdge, GraphModel, GraphNode};

/// Parse a DOT description into a [`GraphModel`].
pub fn parse(source: &str) -> Result<GraphModel, RenderError> {
	let tokens = Lexer::new(source).tokenize()?;
	Parser::new(tokens).graph()
}

#[derive(Clone, Debug, PartialEq)]
enum Tok {
	/// Unquoted identifier or numeral. Keywords are recognized from these.
	Ident(String),
	/// Double-quoted or HTML string.
	Quoted(String),
	LBrace,
	RBrace,
	LBracket,
	RBracket,
	Equals,
	Semi,
	Comma,
	Arrow,
	DashDash,
	Eof,
}

#[derive(Clone, Debug)]
struct Token {
	tok: Tok,
	line: usize,
	column: usize,
}

struct Lexer {
	chars: Vec<char>,
	pos: usize,
	line: usize,
	column: usize,
	at_line_start: bool,
}

fn is_id_start(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_id_continue(c: char) -> bool {
	is_id_start(c) || c.is_ascii_digit()
}

impl Lexer {
	fn new(source: &str) -> Self {
		Self {
			chars: source.chars().collect(),
			pos: 0,
			line: 1,
			column: 1,
			at_line_start: true,
		}
	}

	fn peek(&self) -> Option<char> {
		self.chars.get(self.pos).copied()
	}

	fn peek_at(&self, offset: usize) -> Option<char> {
		self.chars.get(self.pos + offset).copied()
	}

	fn bump(&mut self) -> Option<char> {
		let c = self.peek()?;
		self.pos += 1;
		if c == '\n' {
			self.line += 1;
			self.column = 1;
			self.at_line_start = true;
		} else {
			self.column += 1;
			if !c.is_whitespace() {
				self.at_line_start = false;
			}
		}
		Some(c)
	}

	fn skip_line(&mut self) {
		while let Some(c) = self.peek() {
			if c == '\n' {
				break;
			}
			self.bump();
		}
	}

	fn skip_trivia(&mut self) -> Result<(), RenderError> {
		loop {
			match (self.peek(), self.peek_at(1)) {
				(Some(c), _) if c.is_whitespace() => {
					self.bump();
				}
				(Some('/'), Some('/')) => self.skip_line(),
				(Some('#'), _) if self.at_line_start => self.skip_line(),
				(Some('/'), Some('*')) => {
					let (line, column) = (self.line, self.column);
					self.bump();
					self.bump();
					loop {
						match self.bump() {
							None => {
								return Err(RenderError::parse(line, column, "unterminated comment"));
							}
							Some('*') if self.peek() == Some('/') => {
								self.bump();
								break;
							}
							Some(_) => {}
						}
					}
				}
				_ => return Ok(()),
			}
		}
	}

	fn tokenize(mut self) -> Result<Vec<Token>, RenderError> {
		let mut tokens = Vec::new();
		loop {
			self.skip_trivia()?;
			let (line, column) = (self.line, self.column);
			let Some(c) = self.peek() else {
				tokens.push(Token {
					tok: Tok::Eof,
					line,
					column,
				});
				return Ok(tokens);
			};
			let tok = match c {
				'{' | '}' | '[' | ']' | '=' | ';' | ',' => {
					self.bump();
					match c {
						'{' => Tok::LBrace,
						'}' => Tok::RBrace,
						'[' => Tok::LBracket,
						']' => Tok::RBracket,
						'=' => Tok::Equals,
						';' => Tok::Semi,
						_ => Tok::Comma,
					}
				}
				'-' => match self.peek_at(1) {
					Some('>') => {
						self.bump();
						self.bump();
						Tok::Arrow
					}
					Some('-') => {
						self.bump();
						self.bump();
						Tok::DashDash
					}
					Some(d) if d.is_ascii_digit() || d == '.' => Tok::Ident(self.numeral()),
					_ => return Err(RenderError::parse(line, column, "unexpected `-`")),
				},
				'"' => Tok::Quoted(self.quoted_concat(line, column)?),
				'<' => Tok::Quoted(self.html(line, column)?),
				c if c.is_ascii_digit() || c == '.' => Tok::Ident(self.numeral()),
				c if is_id_start(c) => Tok::Ident(self.identifier()),
				other => {
					return Err(RenderError::parse(
						line,
						column,
						format!("unexpected character {other:?}"),
					));
				}
			};
			tokens.push(Token { tok, line, column });
		}
	}

	fn identifier(&mut self) -> String {
		let mut out = String::new();
		while let Some(c) = self.peek() {
			if !is_id_continue(c) {
				break;
			}
			out.push(c);
			self.bump();
		}
		out
	}

	fn numeral(&mut self) -> String {
		let mut out = String::new();
		if self.peek() == Some('-') {
			out.push('-');
			self.bump();
		}
		let mut seen_dot = false;
		while let Some(c) = self.peek() {
			if c.is_ascii_digit() || (c == '.' && !seen_dot) {
				seen_dot |= c == '.';
				out.push(c);
				self.bump();
			} else {
				break;
			}
		}
		out
	}

	fn quoted(&mut self, line: usize, column: usize) -> Result<String, RenderError> {
		self.bump();
		let mut out = String::new();
		loop {
			match self.bump() {
				None => return Err(RenderError::parse(line, column, "unterminated string")),
				Some('"') => return Ok(out),
				Some('\\') => match self.peek() {
					Some('"') => {
						self.bump();
						out.push('"');
					}
					Some('\\') => {
						self.bump();
						out.push_str("\\\\");
					}
					Some('\n') => {
						self.bump();
					}
					_ => out.push('\\'),
				},
				Some(c) => out.push(c),
			}
		}
	}

	/// A quoted string followed by any number of `+ "..."` continuations.
	fn quoted_concat(&mut self, line: usize, column: usize) -> Result<String, RenderError> {
		let mut out = self.quoted(line, column)?;
		loop {
			self.skip_trivia()?;
			if self.peek() != Some('+') {
				return Ok(out);
			}
			let (plus_line, plus_column) = (self.line, self.column);
			self.bump();
			self.skip_trivia()?;
			if self.peek() != Some('"') {
				return Err(RenderError::parse(
					plus_line,
					plus_column,
					"expected a quoted string after `+`",
				));
			}
			let (next_line, next_column) = (self.line, self.column);
			out.push_str(&self.quoted(next_line, next_column)?);
		}
	}

	fn html(&mut self, line: usize, column: usize) -> Result<String, RenderError> {
		self.bump();
		let mut depth = 1usize;
		let mut out = String::new();
		loop {
			match self.bump() {
				None => return Err(RenderError::parse(line, column, "unterminated HTML string")),
				Some('<') => {
					depth += 1;
					out.push('<');
				}
				Some('>') => {
					depth -= 1;
					if depth == 0 {
						return Ok(out);
					}
					out.push('>');
				}
				Some(c) => out.push(c),
			}
		}
	}
}

/// Which attribute set a bare `ID = ID` or `graph [..]` statement targets.
#[derive(Clone, Copy, Debug)]
enum Block {
	Root,
	Cluster(usize),
	Plain,
}

/// Defaults and cluster membership in effect inside one `{ }` block.
#[derive(Clone, Debug)]
struct Scope {
	node_defaults: Attrs,
	edge_defaults: Attrs,
	cluster: Option<usize>,
	block: Block,
}

struct Parser {
	tokens: Vec<Token>,
	pos: usize,
	model: GraphModel,
	node_index: HashMap<String, usize>,
	/// Clusters keyed by (enclosing cluster, name).
	cluster_index: HashMap<(Option<usize>, String), usize>,
	edge_set: HashSet<(usize, usize)>,
}

impl Parser {
	fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			pos: 0,
			model: GraphModel::default(),
			node_index: HashMap::new(),
			cluster_index: HashMap::new(),
			edge_set: HashSet::new(),
		}
	}

	fn token(&self) -> &Token {
		// The lexer always terminates the stream with Eof and the parser never
		// advances past it.
		&self.tokens[self.pos.min(self.tokens.len() - 1)]
	}

	fn peek(&self) -> &Tok {
		&self.token().tok
	}

	fn advance(&mut self) {
		if self.pos < self.tokens.len() - 1 {
			self.pos += 1;
		}
	}

	fn keyword(&self, word: &str) -> bool {
		matches!(self.peek(), Tok::Ident(s) if s.eq_ignore_ascii_case(word))
	}

	fn error_here(&self, message: impl Into<String>) -> RenderError {
		let token = self.token();
		RenderError::parse(token.line, token.column, message)
	}

	fn describe(tok: &Tok) -> String {
		match tok {
			Tok::Ident(s) => format!("`{s}`"),
			Tok::Quoted(s) => format!("\"{s}\""),
			Tok::LBrace => "`{`".into(),
			Tok::RBrace => "`}`".into(),
			Tok::LBracket => "`[`".into(),
			Tok::RBracket => "`]`".into(),
			Tok::Equals => "`=`".into(),
			Tok::Semi => "`;`".into(),
			Tok::Comma => "`,`".into(),
			Tok::Arrow => "`->`".into(),
			Tok::DashDash => "`--`".into(),
			Tok::Eof => "end of input".into(),
		}
	}

	fn expect(&mut self, tok: Tok) -> Result<(), RenderError> {
		if *self.peek() == tok {
			self.advance();
			Ok(())
		} else {
			Err(self.error_here(format!(
				"expected {}, found {}",
				Self::describe(&tok),
				Self::describe(self.peek())
			)))
		}
	}

	fn id(&mut self) -> Result<String, RenderError> {
		match self.peek().clone() {
			Tok::Ident(s) | Tok::Quoted(s) => {
				self.advance();
				Ok(s)
			}
			other => Err(self.error_here(format!(
				"expected an identifier, found {}",
				Self::describe(&other)
			))),
		}
	}

	fn at_id(&self) -> bool {
		matches!(self.peek(), Tok::Ident(_) | Tok::Quoted(_))
	}

	fn at_subgraph(&self) -> bool {
		self.keyword("subgraph") || *self.peek() == Tok::LBrace
	}

	/// Whether the next token is an edge operator, rejecting the one that does
	/// not match the graph kind.
	fn at_edge_op(&self) -> Result<bool, RenderError> {
		match (self.peek(), self.model.directed) {
			(Tok::Arrow, true) | (Tok::DashDash, false) => Ok(true),
			(Tok::Arrow, false) => Err(self.error_here("`->` in an undirected graph")),
			(Tok::DashDash, true) => Err(self.error_here("`--` in a directed graph")),
			_ => Ok(false),
		}
	}

	fn graph(mut self) -> Result<GraphModel, RenderError> {
		if self.keyword("strict") {
			self.advance();
			self.model.strict = true;
		}
		if self.keyword("digraph") {
			self.model.directed = true;
		} else if !self.keyword("graph") {
			return Err(self.error_here("expected `graph` or `digraph`"));
		}
		self.advance();
		if self.at_id() {
			self.model.name = Some(self.id()?);
		}
		self.expect(Tok::LBrace)?;
		let mut scope = Scope {
			node_defaults: Attrs::new(),
			edge_defaults: Attrs::new(),
			cluster: None,
			block: Block::Root,
		};
		self.stmt_list(&mut scope)?;
		self.expect(Tok::RBrace)?;
		if *self.peek() != Tok::Eof {
			return Err(self.error_here("unexpected content after the graph body"));
		}
		Ok(self.model)
	}

	fn stmt_list(&mut self, scope: &mut Scope) -> Result<(), RenderError> {
		loop {
			match self.peek() {
				Tok::RBrace | Tok::Eof => return Ok(()),
				Tok::Semi | Tok::Comma => self.advance(),
				_ => self.stmt(scope)?,
			}
		}
	}

	fn stmt(&mut self, scope: &mut Scope) -> Result<(), RenderError> {
		let keyword = match self.peek() {
			Tok::Ident(word) => Some(word.to_ascii_lowercase()),
			_ => None,
		};
		match keyword.as_deref() {
			Some("node") | Some("edge") | Some("graph") => {
				self.advance();
				let attrs = self.attr_lists()?;
				match keyword.as_deref() {
					Some("node") => scope.node_defaults.extend(attrs),
					Some("edge") => scope.edge_defaults.extend(attrs),
					_ => self.graph_attrs(scope.block, attrs),
				}
				return Ok(());
			}
			_ => {}
		}

		if self.at_subgraph() {
			let line = self.token().line;
			self.subgraph(scope)?;
			if self.at_edge_op()? {
				return Err(RenderError::Unsupported {
					construct: "subgraph as edge operand".into(),
					line,
				});
			}
			return Ok(());
		}

		let id = self.id()?;
		if *self.peek() == Tok::Equals {
			self.advance();
			let value = self.id()?;
			self.graph_attrs(scope.block, Attrs::from([(id, value)]));
			return Ok(());
		}
		if self.at_edge_op()? {
			return self.edge_chain(scope, id);
		}
		let attrs = if *self.peek() == Tok::LBracket {
			self.attr_lists()?
		} else {
			Attrs::new()
		};
		self.touch_node(&id, scope, attrs);
		Ok(())
	}

	fn attr_lists(&mut self) -> Result<Attrs, RenderError> {
		if *self.peek() != Tok::LBracket {
			return Err(self.error_here(format!(
				"expected `[`, found {}",
				Self::describe(self.peek())
			)));
		}
		let mut attrs = Attrs::new();
		while *self.peek() == Tok::LBracket {
			self.advance();
			loop {
				match self.peek() {
					Tok::RBracket => {
						self.advance();
						break;
					}
					Tok::Semi | Tok::Comma => self.advance(),
					_ => {
						let key = self.id()?;
						self.expect(Tok::Equals)?;
						let value = self.id()?;
						attrs.insert(key, value);
					}
				}
			}
		}
		Ok(attrs)
	}

	fn graph_attrs(&mut self, block: Block, attrs: Attrs) {
		match block {
			Block::Root => self.model.attrs.extend(attrs),
			Block::Cluster(idx) => self.model.clusters[idx].attrs.extend(attrs),
			Block::Plain => {}
		}
	}

	fn subgraph(&mut self, scope: &Scope) -> Result<(), RenderError> {
		let mut name = None;
		if self.keyword("subgraph") {
			self.advance();
			if self.at_id() {
				name = Some(self.id()?);
			}
		}
		self.expect(Tok::LBrace)?;

		let mut inner = Scope {
			block: Block::Plain,
			..scope.clone()
		};
		let cluster_name = name.filter(|n| {
			n.get(..7)
				.is_some_and(|prefix| prefix.eq_ignore_ascii_case("cluster"))
		});
		if let Some(name) = cluster_name {
			let key = (scope.cluster, name);
			let idx = match self.cluster_index.get(&key) {
				Some(&idx) => idx,
				None => {
					let idx = self.model.clusters.len();
					self.model.clusters.push(Cluster {
						name: key.1.clone(),
						attrs: Attrs::new(),
						parent: scope.cluster,
					});
					self.cluster_index.insert(key, idx);
					idx
				}
			};
			inner.cluster = Some(idx);
			inner.block = Block::Cluster(idx);
		}

		self.stmt_list(&mut inner)?;
		self.expect(Tok::RBrace)
	}

	fn edge_chain(&mut self, scope: &Scope, first: String) -> Result<(), RenderError> {
		let mut chain = vec![first];
		while self.at_edge_op()? {
			self.advance();
			if self.at_subgraph() {
				return Err(RenderError::Unsupported {
					construct: "subgraph as edge operand".into(),
					line: self.token().line,
				});
			}
			chain.push(self.id()?);
		}
		let mut attrs = scope.edge_defaults.clone();
		if *self.peek() == Tok::LBracket {
			attrs.extend(self.attr_lists()?);
		}
		let indices: Vec<usize> = chain
			.iter()
			.map(|id| self.touch_node(id, scope, Attrs::new()))
			.collect();
		for pair in indices.windows(2) {
			self.add_edge(pair[0], pair[1], attrs.clone());
		}
		Ok(())
	}

	fn touch_node(&mut self, id: &str, scope: &Scope, attrs: Attrs) -> usize {
		if let Some(&idx) = self.node_index.get(id) {
			let node = &mut self.model.nodes[idx];
			node.attrs.extend(attrs);
			if node.cluster.is_none() {
				node.cluster = scope.cluster;
			}
			return idx;
		}
		let mut merged = scope.node_defaults.clone();
		merged.extend(attrs);
		let idx = self.model.nodes.len();
		self.model.nodes.push(GraphNode {
			id: id.to_string(),
			attrs: merged,
			cluster: scope.cluster,
		});
		self.node_index.insert(id.to_string(), idx);
		idx
	}

	fn add_edge(&mut self, source: usize, target: usize, attrs: Attrs) {
		if self.model.strict {
			let key = if self.model.directed {
				(source, target)
			} else {
				(source.min(target), source.max(target))
			};
			if !self.edge_set.insert(key) {
				return;
			}
		}
		self.model.edges.push(GraphEdge {
			source,
			target,
			attrs,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{ERROR_HANDLING, MAIN_FLOW, MITIGATION};

	fn cluster_of<'a>(model: &'a GraphModel, id: &str) -> Option<&'a Cluster> {
		let idx = model.node_index(id)?;
		model.nodes[idx].cluster.map(|c| &model.clusters[c])
	}

	#[test]
	fn parses_authored_descriptions() {
		let main = parse(MAIN_FLOW).unwrap();
		assert!(main.directed);
		assert_eq!(main.name.as_deref(), Some("G"));
		assert_eq!(main.nodes.len(), 50);
		assert_eq!(main.edges.len(), 45);

		let errors = parse(ERROR_HANDLING).unwrap();
		assert_eq!(errors.nodes.len(), 16);
		assert_eq!(errors.edges.len(), 9);

		let mitigation = parse(MITIGATION).unwrap();
		assert_eq!(mitigation.nodes.len(), 20);
		assert_eq!(mitigation.edges.len(), 8);
	}

	#[test]
	fn node_definitions_merge_over_defaults() {
		let model = parse(MAIN_FLOW).unwrap();
		let node = &model.nodes[model.node_index("User Inputs Query").unwrap()];
		assert_eq!(node.attr("shape"), Some("box"));
		assert_eq!(node.attr("color"), Some("blue"));
		assert_eq!(node.attr("style"), Some("filled"));
		assert_eq!(node.attr("fontcolor"), Some("white"));

		let dotted = &model.nodes[model.node_index("Pre-Processing: Data Cleaning").unwrap()];
		assert_eq!(dotted.attr("style"), Some("dotted"));
		assert_eq!(dotted.attr("fontcolor"), Some("black"));
	}

	#[test]
	fn nodes_stay_in_first_cluster() {
		let model = parse(MAIN_FLOW).unwrap();
		let cluster = cluster_of(&model, "Send Data to React Frontend").unwrap();
		assert_eq!(cluster.attr("label"), Some("Data Formatting & Response 📊"));

		let nested = cluster_of(&model, "Pre-Processing: Data Cleaning").unwrap();
		assert_eq!(nested.name, "cluster_8");
		let parent = &model.clusters[nested.parent.unwrap()];
		assert_eq!(parent.name, "cluster_1");
	}

	#[test]
	fn cluster_names_are_scoped_to_their_parent() {
		let model = parse(MAIN_FLOW).unwrap();
		assert_eq!(model.clusters.len(), 9);
		let fours: Vec<_> = model
			.clusters
			.iter()
			.filter(|c| c.name == "cluster_4")
			.collect();
		assert_eq!(fours.len(), 2);
		assert_eq!(fours[0].attr("label"), Some("Post-Processing 📊"));
		assert_eq!(fours[1].parent, None);
	}

	#[test]
	fn reopened_cluster_in_same_parent_is_shared() {
		let model = parse(
			r#"digraph {
				subgraph cluster_a { label = "first"; a; }
				subgraph cluster_a { label = "second"; b; }
			}"#,
		)
		.unwrap();
		assert_eq!(model.clusters.len(), 1);
		assert_eq!(model.clusters[0].attr("label"), Some("second"));
		assert_eq!(model.nodes[0].cluster, Some(0));
		assert_eq!(model.nodes[1].cluster, Some(0));
	}

	#[test]
	fn defaults_are_block_scoped() {
		let model = parse(
			r#"digraph {
				node [shape=box];
				{ node [color=red]; a; }
				b;
			}"#,
		)
		.unwrap();
		assert_eq!(model.nodes[0].attr("color"), Some("red"));
		assert_eq!(model.nodes[0].attr("shape"), Some("box"));
		assert_eq!(model.nodes[1].attr("color"), None);
		assert_eq!(model.nodes[1].attr("shape"), Some("box"));
	}

	#[test]
	fn edge_chains_and_attributes() {
		let model = parse("digraph { edge [color=gray]; a -> b -> c [style=dashed]; }").unwrap();
		assert_eq!(model.nodes.len(), 3);
		assert_eq!(model.edges.len(), 2);
		assert_eq!((model.edges[1].source, model.edges[1].target), (1, 2));
		assert_eq!(model.edges[1].attr("color"), Some("gray"));
		assert_eq!(model.edges[1].attr("style"), Some("dashed"));
	}

	#[test]
	fn lexes_strings_comments_and_numerals() {
		let model = parse(
			"/* header */\n# preprocessor-style line\ngraph g {\n  \"multi\" + \"part\" -- -1.5 // trailing\n  \"say \\\"hi\\\"\" [label=<<b>bold</b>>];\n}",
		)
		.unwrap();
		assert!(!model.directed);
		let ids: Vec<_> = model.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["multipart", "-1.5", "say \"hi\""]);
		assert_eq!(model.nodes[2].attr("label"), Some("<b>bold</b>"));
	}

	#[test]
	fn escaped_backslash_does_not_escape_the_closing_quote() {
		let model = parse(r#"digraph { "a\\" -> b; "C:\\" }"#).unwrap();
		let ids: Vec<_> = model.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec![r"a\\", "b", r"C:\\"]);
		assert_eq!(model.edges.len(), 1);
	}

	#[test]
	fn strict_graphs_drop_duplicate_edges() {
		let model = parse("strict digraph { a -> b; a -> b; b -> a; }").unwrap();
		assert_eq!(model.edges.len(), 2);
		let model = parse("digraph { a -> b; a -> b; }").unwrap();
		assert_eq!(model.edges.len(), 2);
	}

	#[test]
	fn graph_attributes_land_on_their_block() {
		let model = parse(
			"digraph { label = \"root\"; graph [rankdir=TB]; subgraph cluster_x { color = red; a } }",
		)
		.unwrap();
		assert_eq!(model.attrs.get("label").map(String::as_str), Some("root"));
		assert_eq!(model.attrs.get("rankdir").map(String::as_str), Some("TB"));
		assert_eq!(model.clusters[0].attr("color"), Some("red"));
	}

	#[test]
	fn rejects_malformed_descriptions() {
		assert!(matches!(
			parse("digraph { a -> b;"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("digraph { a -- b }"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("graph { a -> b }"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("digraph { \"open }"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("digraph { a [color] }"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("flowchart TD; A --> B"),
			Err(RenderError::Parse { .. })
		));
		assert!(matches!(
			parse("digraph { a } trailing"),
			Err(RenderError::Parse { .. })
		));
	}

	#[test]
	fn reports_error_position() {
		let err = parse("digraph {\n  a -> ;\n}").unwrap_err();
		assert_eq!(
			err,
			RenderError::Parse {
				line: 2,
				column: 8,
				message: "expected an identifier, found `;`".into(),
			}
		);
	}

	#[test]
	fn subgraph_edge_operands_are_unsupported() {
		assert!(matches!(
			parse("digraph {\n a -> { b c }\n}"),
			Err(RenderError::Unsupported { line: 2, .. })
		));
		assert!(matches!(
			parse("digraph { subgraph s { a } -> b }"),
			Err(RenderError::Unsupported { .. })
		));
	}
}
