use std::fmt;

use crate::value::{
	BasicValue, ContentId, Field, NativeValue, RenderOptions, Result, SeriesValue, Span, StructValue, Tree, Type, WireValue,
	blend, sprint,
};

/// Evaluated runtime datum.
///
/// The variant set is closed; every shared operation matches it exhaustively.
#[derive(Debug, Clone)]
pub enum Value {
	/// Absent value; invisible to struct equality, hashing, and disassembly.
	Empty,
	/// Scalar.
	Basic(BasicValue),
	/// Ordered sequence.
	Series(SeriesValue),
	/// Aggregate of named fields.
	Struct(StructValue),
	/// Host-held handle with no external representation.
	Opaque(OpaqueValue),
}

/// Host-held handle identified by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueValue {
	/// Stable identifying label.
	pub label: Box<str>,
}

/// Whether a value is semantically absent: the empty value or a zero-length series.
pub fn is_empty(value: &Value) -> bool {
	match value {
		Value::Empty => true,
		Value::Series(series) => series.is_empty(),
		Value::Basic(_) | Value::Struct(_) | Value::Opaque(_) => false,
	}
}

impl Value {
	/// Schema of this value.
	pub fn ty(&self) -> Type {
		match self {
			Self::Empty => Type::Empty,
			Self::Basic(basic) => Type::Basic(basic.ty()),
			Self::Series(series) => Type::Series(series.ty().clone()),
			Self::Struct(item) => Type::Struct(item.ty().clone()),
			Self::Opaque(_) => Type::Opaque,
		}
	}

	/// Recursive structural equality.
	pub fn equal(&self, span: &Span<'_>, other: &Self) -> bool {
		match (self, other) {
			(Self::Empty, Self::Empty) => true,
			(Self::Basic(a), Self::Basic(b)) => a.equal(b),
			(Self::Series(a), Self::Series(b)) => a.equal(span, b),
			(Self::Struct(a), Self::Struct(b)) => a.equal(span, b),
			(Self::Opaque(a), Self::Opaque(b)) => a == b,
			_ => false,
		}
	}

	/// Content hash. Struct hashes depend on stored field order.
	pub fn hash(&self, span: &Span<'_>) -> ContentId {
		match self {
			Self::Empty => ContentId::of_str("empty"),
			Self::Basic(basic) => basic.hash(),
			Self::Series(series) => series.hash(span),
			Self::Struct(item) => item.hash(span),
			Self::Opaque(opaque) => blend(&[ContentId::of_str("opaque"), ContentId::of_str(&opaque.label)]),
		}
	}

	/// Content hash with struct fields blended in name order at every level.
	///
	/// Values that compare [`equal`](Self::equal) always share this hash.
	pub fn canonical_hash(&self, span: &Span<'_>) -> ContentId {
		match self {
			Self::Series(series) => series.canonical_hash(span),
			Self::Struct(item) => item.canonical_hash(span),
			Self::Empty | Self::Basic(_) | Self::Opaque(_) => self.hash(span),
		}
	}

	/// Convert into a host-visible value.
	pub fn disassemble_to_native(&self, span: &Span<'_>) -> Result<NativeValue> {
		match self {
			Self::Empty => Ok(NativeValue::Absent),
			Self::Basic(basic) => Ok(basic.to_native()),
			Self::Series(series) => series.to_native(span),
			Self::Struct(item) => item.disassemble_to_native(span),
			Self::Opaque(_) => Err(span.not_disassemblable(self.to_compact_string())),
		}
	}

	/// Convert into a wire message; `None` for empty values.
	pub fn disassemble_to_wire(&self, span: &Span<'_>) -> Result<Option<WireValue>> {
		match self {
			Self::Empty => Ok(None),
			Self::Series(series) if series.is_empty() => Ok(None),
			Self::Basic(basic) => Ok(Some(basic.to_wire())),
			Self::Series(series) => series.to_wire(span).map(Some),
			Self::Struct(item) => item.disassemble_to_wire(span).map(|wire| Some(WireValue::Struct(wire))),
			Self::Opaque(_) => Err(span.not_disassemblable(self.to_compact_string())),
		}
	}

	/// Diagnostic tree.
	pub fn render(&self) -> Tree {
		match self {
			Self::Empty => Tree::leaf("empty"),
			Self::Basic(basic) => Tree::leaf(basic.to_text()),
			Self::Series(series) => series.render(),
			Self::Struct(item) => item.render(),
			Self::Opaque(opaque) => Tree::leaf(format!("<{}>", opaque.label)),
		}
	}

	/// View this value as a sequence: series as-is, empty as zero elements, anything else as one.
	pub fn lift_to_series(&self, span: &Span<'_>) -> SeriesValue {
		match self {
			Self::Series(series) => series.clone(),
			Self::Struct(item) => item.lift_to_series(span),
			Self::Empty => SeriesValue::new(Vec::new()),
			Self::Basic(_) | Self::Opaque(_) => SeriesValue::new(vec![self.clone()]),
		}
	}

	/// Bind additional fields. No variant in this set is extensible.
	pub fn augment(&self, span: &Span<'_>, fields: &[Field]) -> Result<Value> {
		match self {
			Self::Struct(item) => item.augment(span, fields),
			_ => Err(span.unsupported("augmented", "value", self.to_compact_string())),
		}
	}

	/// Call the value. No variant in this set is callable.
	pub fn invoke(&self, span: &Span<'_>) -> Result<Value> {
		match self {
			Self::Struct(item) => item.invoke(span),
			_ => Err(span.unsupported("invoked", "value", self.to_compact_string())),
		}
	}

	pub(crate) fn to_compact_string(&self) -> String {
		sprint(&self.render(), &RenderOptions::compact())
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&sprint(&self.render(), &RenderOptions::default()))
	}
}

impl From<BasicValue> for Value {
	fn from(value: BasicValue) -> Self {
		Self::Basic(value)
	}
}

impl From<SeriesValue> for Value {
	fn from(value: SeriesValue) -> Self {
		Self::Series(value)
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Self::Struct(value)
	}
}

impl From<OpaqueValue> for Value {
	fn from(value: OpaqueValue) -> Self {
		Self::Opaque(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Basic(value.into())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Basic(value.into())
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Basic(value.into())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Basic(value.into())
	}
}
