use crate::value::EvalError;

/// Per-operation execution context threaded through recursive value calls.
///
/// A span is a borrowed chain of labels; it carries no state besides the
/// location it names and is only consulted when an error is built.
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
	parent: Option<&'a Span<'a>>,
	label: &'a str,
}

impl Span<'static> {
	/// Create the outermost span.
	pub const fn root() -> Self {
		Self { parent: None, label: "" }
	}
}

impl Default for Span<'static> {
	fn default() -> Self {
		Self::root()
	}
}

impl<'a> Span<'a> {
	/// Derive a child span naming one more step of the current operation.
	pub fn refine<'b>(&'b self, label: &'b str) -> Span<'b> {
		Span { parent: Some(self), label }
	}

	/// Render the span chain as a `/`-separated location path.
	pub fn path(&self) -> String {
		let mut labels = Vec::new();
		let mut cursor = Some(self);
		while let Some(span) = cursor {
			if !span.label.is_empty() {
				labels.push(span.label);
			}
			cursor = span.parent;
		}
		labels.reverse();
		format!("/{}", labels.join("/"))
	}

	/// Build an unsupported-operation error for a terminal value.
	pub fn unsupported(&self, op: &'static str, kind: &'static str, subject: String) -> EvalError {
		EvalError::Unsupported {
			at: self.path(),
			op,
			kind,
			subject,
		}
	}

	/// Build an error for a value that has no external representation.
	pub fn not_disassemblable(&self, subject: String) -> EvalError {
		EvalError::NotDisassemblable { at: self.path(), subject }
	}
}
