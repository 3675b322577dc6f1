use std::fmt;

use crate::value::{
	Bracket, ContentId, Field, NameTree, NativeRecord, NativeValue, RenderOptions, Result, SeriesValue, Span, StructType, Tree, Value,
	WireField, WireStruct, blend, display_name, field_types, filter_empty, sort_by_name, sprint,
};

/// Aggregate runtime value keyed by field name.
///
/// The schema is derived from the fields once, at construction, and neither
/// changes afterwards. Fields holding empty values stay in the stored list
/// (and in the schema) but are skipped by equality, hashing, and disassembly.
#[derive(Debug, Clone)]
pub struct StructValue {
	ty: StructType,
	fields: Vec<Field>,
}

impl StructValue {
	/// Build a struct value and derive its schema from the fields.
	pub fn new(fields: Vec<Field>) -> Self {
		Self {
			ty: StructType {
				fields: field_types(&fields),
			},
			fields,
		}
	}

	/// Copy of this struct without empty-valued fields, with a freshly derived schema.
	pub fn without_empty_fields(&self) -> Self {
		Self::new(filter_empty(&self.fields).into_iter().cloned().collect())
	}

	/// Schema fixed at construction.
	pub fn ty(&self) -> &StructType {
		&self.ty
	}

	/// Stored fields, unfiltered, in construction order.
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Field-order-independent equality over non-empty fields.
	pub fn equal(&self, span: &Span<'_>, other: &Self) -> bool {
		let mut x = filter_empty(&self.fields);
		let mut y = filter_empty(&other.fields);
		if x.len() != y.len() {
			return false;
		}
		sort_by_name(&mut x);
		sort_by_name(&mut y);
		x.iter()
			.zip(&y)
			.all(|(a, b)| a.name == b.name && a.value.equal(&span.refine(&a.name), &b.value))
	}

	/// Blend of `(name, value)` hashes over non-empty fields in stored order.
	///
	/// Unlike [`equal`](Self::equal), this depends on field order: two structs
	/// whose fields are permutations of each other compare equal but usually
	/// hash differently. Use [`canonical_hash`](Self::canonical_hash) where a
	/// hash must agree with equality.
	pub fn hash(&self, span: &Span<'_>) -> ContentId {
		let fields = filter_empty(&self.fields);
		let mut ids = Vec::with_capacity(2 * fields.len());
		for field in fields {
			ids.push(ContentId::of_str(&field.name));
			ids.push(field.value.hash(&span.refine(&field.name)));
		}
		blend(&ids)
	}

	/// Order-independent hash: non-empty fields blended in name order, recursively.
	pub fn canonical_hash(&self, span: &Span<'_>) -> ContentId {
		let mut fields = filter_empty(&self.fields);
		sort_by_name(&mut fields);
		let mut ids = Vec::with_capacity(2 * fields.len());
		for field in fields {
			ids.push(ContentId::of_str(&field.name));
			ids.push(field.value.canonical_hash(&span.refine(&field.name)));
		}
		blend(&ids)
	}

	/// Convert into a record of a freshly synthesized native type.
	///
	/// Slots of empty fields, and of fields whose value converts to the absent
	/// marker, keep their zero value. Assignment goes through the name map, so
	/// when a source name repeats, the last occurrence wins.
	pub fn disassemble_to_native(&self, span: &Span<'_>) -> Result<NativeValue> {
		let filtered = filter_empty(&self.fields);
		let (record_type, names) = self.ty.synthesize_native_type();
		log::trace!("{}: native disassembly of {} of {} fields", span.path(), filtered.len(), self.fields.len());

		let mut record = NativeRecord::zeroed(record_type);
		for field in filtered {
			let value = field.value.disassemble_to_native(&span.refine(&field.name))?;
			if value.is_absent() {
				continue;
			}
			// The schema, and so the name map, was built from these same fields.
			let native_name = names.get(&*field.name);
			debug_assert!(native_name.is_some(), "field {:?} missing from name map", field.name);
			if let Some(native_name) = native_name {
				let assigned = record.set(native_name, value);
				debug_assert!(assigned, "native name {native_name:?} has no slot");
			}
		}
		Ok(NativeValue::Record(record))
	}

	/// Convert into a wire struct listing non-empty fields in stored order.
	pub fn disassemble_to_wire(&self, span: &Span<'_>) -> Result<WireStruct> {
		let filtered = filter_empty(&self.fields);
		log::trace!("{}: wire disassembly of {} of {} fields", span.path(), filtered.len(), self.fields.len());

		let mut fields = Vec::with_capacity(filtered.len());
		for field in filtered {
			if let Some(value) = field.value.disassemble_to_wire(&span.refine(&field.name))? {
				fields.push(WireField {
					name: field.name.to_string(),
					monadic: field.monadic,
					value,
				});
			}
		}
		Ok(WireStruct { fields })
	}

	/// Structs are terminal data; augmenting always fails.
	pub fn augment(&self, span: &Span<'_>, _fields: &[Field]) -> Result<Value> {
		Err(span.unsupported("augmented", "structure", self.to_compact_string()))
	}

	/// Structs are not callable; invoking always fails.
	pub fn invoke(&self, span: &Span<'_>) -> Result<Value> {
		Err(span.unsupported("invoked", "structure", self.to_compact_string()))
	}

	/// Wrap this struct as a one-element series.
	pub fn lift_to_series(&self, _span: &Span<'_>) -> SeriesValue {
		SeriesValue::new(vec![Value::Struct(self.clone())])
	}

	/// First field flagged monadic or carrying an empty name.
	pub fn find_monadic(&self) -> Option<&Field> {
		self.fields.iter().find(|field| field.monadic || field.name.is_empty())
	}

	/// First field with exactly this name.
	pub fn find_by_name(&self, name: &str) -> Option<&Field> {
		self.fields.iter().find(|field| &*field.name == name)
	}

	/// Whether the stored field list is empty. Empty-valued fields still count.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Diagnostic tree over stored fields, unfiltered and in stored order.
	pub fn render(&self) -> Tree {
		Tree::Parallel {
			label: String::new(),
			bracket: Bracket::Paren,
			elems: self
				.fields
				.iter()
				.map(|field| NameTree {
					name: display_name(&field.name).to_owned(),
					monadic: field.monadic,
					tree: field.value.render(),
				})
				.collect(),
		}
	}

	fn to_compact_string(&self) -> String {
		sprint(&self.render(), &RenderOptions::compact())
	}
}

impl fmt::Display for StructValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&sprint(&self.render(), &RenderOptions::default()))
	}
}

impl FromIterator<Field> for StructValue {
	fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests;
