/// Bracket pair used around a tree's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
	/// `( ... )`
	Paren,
	/// `[ ... ]`
	Square,
	/// `{ ... }`
	Curly,
}

impl Bracket {
	fn open(self) -> char {
		match self {
			Self::Paren => '(',
			Self::Square => '[',
			Self::Curly => '{',
		}
	}

	fn close(self) -> char {
		match self {
			Self::Paren => ')',
			Self::Square => ']',
			Self::Curly => '}',
		}
	}
}

/// Diagnostic rendering of a value or type.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
	/// Pre-rendered scalar text.
	Leaf(String),
	/// Named children, e.g. struct fields.
	Parallel {
		/// Optional prefix printed before the bracket.
		label: String,
		/// Bracket pair around the children.
		bracket: Bracket,
		/// Children in display order.
		elems: Vec<NameTree>,
	},
	/// Positional children, e.g. sequence elements.
	Series {
		/// Bracket pair around the children.
		bracket: Bracket,
		/// Children in display order.
		elems: Vec<Tree>,
	},
}

impl Tree {
	/// Build a leaf from displayable text.
	pub fn leaf(text: impl Into<String>) -> Self {
		Self::Leaf(text.into())
	}
}

/// Named child of a [`Tree::Parallel`].
#[derive(Debug, Clone, PartialEq)]
pub struct NameTree {
	/// Display name of the child.
	pub name: String,
	/// Whether the child is the primary positional argument.
	pub monadic: bool,
	/// Child subtree.
	pub tree: Tree,
}

/// Truncation limits for rendered trees.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Maximum nesting depth before children are elided.
	pub max_depth: u32,
	/// Maximum named children printed per parallel node.
	pub max_fields: usize,
	/// Maximum positional children printed per series node.
	pub max_items: usize,
	/// Maximum number of Unicode scalar values printed for leaves.
	pub max_string_len: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: 16,
			max_fields: 80,
			max_items: 16,
			max_string_len: 200,
		}
	}
}

impl RenderOptions {
	/// Preset for one-line error messages.
	pub fn compact() -> Self {
		Self {
			max_depth: 4,
			max_fields: 8,
			max_items: 8,
			max_string_len: 40,
		}
	}
}

/// Print a tree on one line.
///
/// Named children print as `name: value`; a monadic child is prefixed with `*`.
pub fn sprint(tree: &Tree, options: &RenderOptions) -> String {
	let mut out = String::new();
	write_tree(&mut out, tree, options, 0);
	out
}

fn write_tree(out: &mut String, tree: &Tree, options: &RenderOptions, depth: u32) {
	match tree {
		Tree::Leaf(text) => out.push_str(&truncate(text, options.max_string_len)),
		Tree::Parallel { label, bracket, elems } => {
			out.push_str(label);
			out.push(bracket.open());
			if depth >= options.max_depth && !elems.is_empty() {
				out.push_str("...");
			} else {
				for (idx, elem) in elems.iter().take(options.max_fields).enumerate() {
					if idx > 0 {
						out.push_str(", ");
					}
					if elem.monadic {
						out.push('*');
					}
					out.push_str(&elem.name);
					out.push_str(": ");
					write_tree(out, &elem.tree, options, depth + 1);
				}
				write_more(out, elems.len(), options.max_fields);
			}
			out.push(bracket.close());
		}
		Tree::Series { bracket, elems } => {
			out.push(bracket.open());
			if depth >= options.max_depth && !elems.is_empty() {
				out.push_str("...");
			} else {
				for (idx, elem) in elems.iter().take(options.max_items).enumerate() {
					if idx > 0 {
						out.push_str(", ");
					}
					write_tree(out, elem, options, depth + 1);
				}
				write_more(out, elems.len(), options.max_items);
			}
			out.push(bracket.close());
		}
	}
}

fn write_more(out: &mut String, total: usize, shown: usize) {
	if total > shown {
		if shown > 0 {
			out.push_str(", ");
		}
		out.push_str(&format!("... {} more", total - shown));
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(max_chars).collect();
	out.push_str("...");
	out
}
