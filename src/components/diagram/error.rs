//! Errors raised while turning a description into a visual tree.

use thiserror::Error;

/// A graph description could not be parsed or laid out.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
	/// The text is not valid DOT.
	#[error("parse error at {line}:{column}: {message}")]
	Parse {
		/// 1-based line of the offending token.
		line: usize,
		/// 1-based column of the offending token.
		column: usize,
		/// What was expected or found.
		message: String,
	},
	/// Valid DOT that this renderer does not draw.
	#[error("unsupported construct at line {line}: {construct}")]
	Unsupported {
		/// Short name of the construct, e.g. "subgraph as edge operand".
		construct: String,
		/// 1-based line where it appears.
		line: usize,
	},
}

impl RenderError {
	pub(crate) fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
		Self::Parse {
			line,
			column,
			message: message.into(),
		}
	}
}
