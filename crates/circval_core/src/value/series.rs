use crate::value::{Bracket, ContentId, NativeValue, Result, SeriesType, Span, Tree, Type, Value, WireValue, blend};

/// Ordered sequence of values.
#[derive(Debug, Clone)]
pub struct SeriesValue {
	ty: SeriesType,
	elems: Vec<Value>,
}

impl SeriesValue {
	/// Build a series; the element type is taken from the first element.
	pub fn new(elems: Vec<Value>) -> Self {
		let elem = elems.first().map(Value::ty).unwrap_or(Type::Empty);
		Self {
			ty: SeriesType { elem: Box::new(elem) },
			elems,
		}
	}

	/// Series schema.
	pub fn ty(&self) -> &SeriesType {
		&self.ty
	}

	/// Elements in order.
	pub fn elems(&self) -> &[Value] {
		&self.elems
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elems.len()
	}

	/// Whether the series has no elements.
	pub fn is_empty(&self) -> bool {
		self.elems.is_empty()
	}

	/// Element-wise, order-sensitive equality.
	pub fn equal(&self, span: &Span<'_>, other: &Self) -> bool {
		self.elems.len() == other.elems.len() && self.elems.iter().zip(&other.elems).all(|(a, b)| a.equal(span, b))
	}

	/// Tagged blend of element hashes in order.
	pub fn hash(&self, span: &Span<'_>) -> ContentId {
		let ids: Vec<ContentId> = self.elems.iter().map(|elem| elem.hash(span)).collect();
		tagged(&ids)
	}

	pub(crate) fn canonical_hash(&self, span: &Span<'_>) -> ContentId {
		let ids: Vec<ContentId> = self.elems.iter().map(|elem| elem.canonical_hash(span)).collect();
		tagged(&ids)
	}

	pub(crate) fn to_native(&self, span: &Span<'_>) -> Result<NativeValue> {
		let mut out = Vec::with_capacity(self.elems.len());
		for (idx, elem) in self.elems.iter().enumerate() {
			let label = idx.to_string();
			out.push(elem.disassemble_to_native(&span.refine(&label))?);
		}
		Ok(NativeValue::Seq(out))
	}

	pub(crate) fn to_wire(&self, span: &Span<'_>) -> Result<WireValue> {
		let mut elems = Vec::with_capacity(self.elems.len());
		for (idx, elem) in self.elems.iter().enumerate() {
			let label = idx.to_string();
			if let Some(wire) = elem.disassemble_to_wire(&span.refine(&label))? {
				elems.push(wire);
			}
		}
		Ok(WireValue::Series { elems })
	}

	/// Diagnostic tree: `[elem, ...]`.
	pub fn render(&self) -> Tree {
		Tree::Series {
			bracket: Bracket::Square,
			elems: self.elems.iter().map(Value::render).collect(),
		}
	}
}

// Struct hashes are untagged name/value blends; the tag keeps series out of that space.
fn tagged(ids: &[ContentId]) -> ContentId {
	blend(&[ContentId::of_str("series"), blend(ids)])
}
