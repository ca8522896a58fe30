//! Lightweight syntax highlighting for the JavaScript-flavored step samples.
//!
//! Tokens cover the input exactly: concatenating every token's text gives the
//! input back, so the rendered `<code>` never drops or repeats a character.

use std::ops::Range;

use leptos::prelude::*;

/// Token categories, one CSS class each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Keyword,
	/// `true`, `false`, `null`, `undefined`.
	Constant,
	String,
	Number,
	Comment,
	/// Identifier directly followed by `(`.
	Function,
	/// Capitalized identifier.
	Type,
	Identifier,
	Operator,
	Punctuation,
	Whitespace,
	/// Anything else, one character at a time.
	Text,
}

impl TokenKind {
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Keyword => "tok-keyword",
			Self::Constant => "tok-constant",
			Self::String => "tok-string",
			Self::Number => "tok-number",
			Self::Comment => "tok-comment",
			Self::Function => "tok-function",
			Self::Type => "tok-type",
			Self::Identifier => "tok-ident",
			Self::Operator => "tok-operator",
			Self::Punctuation => "tok-punct",
			Self::Whitespace => "tok-ws",
			Self::Text => "tok-text",
		}
	}
}

/// A classified byte range of the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub range: Range<usize>,
}

const KEYWORDS: &[&str] = &[
	"async", "await", "break", "case", "catch", "class", "const", "continue", "default",
	"delete", "do", "else", "export", "extends", "finally", "for", "from", "function", "if",
	"import", "in", "instanceof", "let", "new", "of", "return", "static", "switch", "this",
	"throw", "try", "typeof", "var", "void", "while", "yield",
];

const CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const OPERATORS: &str = "+-*/%=<>!&|^~?:";
const PUNCTUATION: &str = "{}()[];,.";

/// Split `source` into tokens that tile it from start to end.
pub fn tokenize(source: &str) -> Vec<Token> {
	let mut tokens = Vec::new();
	let mut pos = 0;
	while let Some(c) = source[pos..].chars().next() {
		let rest = &source[pos..];
		let (kind, len) = if c.is_whitespace() {
			(TokenKind::Whitespace, take_while(rest, char::is_whitespace))
		} else if rest.starts_with("//") {
			(TokenKind::Comment, rest.find('\n').unwrap_or(rest.len()))
		} else if rest.starts_with("/*") {
			let len = rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
			(TokenKind::Comment, len)
		} else if matches!(c, '"' | '\'' | '`') {
			(TokenKind::String, string_len(rest, c))
		} else if c.is_ascii_digit() {
			let len = take_while(rest, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
			(TokenKind::Number, len)
		} else if c.is_alphabetic() || c == '_' || c == '$' {
			let len = take_while(rest, |c| c.is_alphanumeric() || c == '_' || c == '$');
			(classify(&rest[..len], &rest[len..]), len)
		} else if PUNCTUATION.contains(c) {
			(TokenKind::Punctuation, 1)
		} else if OPERATORS.contains(c) {
			(TokenKind::Operator, 1)
		} else {
			(TokenKind::Text, c.len_utf8())
		};
		debug_assert!(len > 0, "tokenizer must advance");
		tokens.push(Token {
			kind,
			range: pos..pos + len,
		});
		pos += len;
	}
	tokens
}

/// Byte length of the leading run of chars matching `pred`.
fn take_while(text: &str, pred: impl Fn(char) -> bool) -> usize {
	text.char_indices()
		.find(|(_, c)| !pred(*c))
		.map_or(text.len(), |(i, _)| i)
}

/// Byte length of a string literal opened by `quote`, closing quote included.
/// Plain quotes stop before an unescaped newline; template literals may span
/// lines. Unterminated literals run to the end of the input.
fn string_len(text: &str, quote: char) -> usize {
	let mut escaped = false;
	for (i, c) in text.char_indices().skip(1) {
		if escaped {
			escaped = false;
		} else if c == '\\' {
			escaped = true;
		} else if c == quote {
			return i + c.len_utf8();
		} else if c == '\n' && quote != '`' {
			return i;
		}
	}
	text.len()
}

fn classify(word: &str, after: &str) -> TokenKind {
	if KEYWORDS.contains(&word) {
		TokenKind::Keyword
	} else if CONSTANTS.contains(&word) {
		TokenKind::Constant
	} else if after.trim_start_matches([' ', '\t']).starts_with('(') {
		TokenKind::Function
	} else if word.starts_with(|c: char| c.is_uppercase()) {
		TokenKind::Type
	} else {
		TokenKind::Identifier
	}
}

/// Read-only highlighted code block.
#[component]
pub fn CodeSample(#[prop(into)] code: String) -> impl IntoView {
	let spans = tokenize(&code)
		.into_iter()
		.map(|token| {
			let class = token.kind.css_class();
			let text = code[token.range].to_string();
			view! { <span class=class>{text}</span> }
		})
		.collect_view();

	view! {
		<pre class="code-sample">
			<code class="language-javascript">{spans}</code>
		</pre>
	}
}
