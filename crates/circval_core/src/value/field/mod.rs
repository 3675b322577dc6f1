use crate::value::{FieldType, Value, is_empty};

/// Named field binding inside a struct value.
#[derive(Debug, Clone)]
pub struct Field {
	/// Field name; an empty name marks a positional field.
	pub name: Box<str>,
	/// Whether the field is the struct's primary positional argument.
	pub monadic: bool,
	/// Field payload.
	pub value: Value,
}

impl Field {
	/// Build a non-monadic field.
	pub fn new(name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			monadic: false,
			value: value.into(),
		}
	}

	/// Build a field flagged as the primary positional argument.
	pub fn monadic(name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			monadic: true,
			value: value.into(),
		}
	}
}

/// Keep only fields whose value is not empty, preserving order.
pub fn filter_empty<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Vec<&'a Field> {
	fields.into_iter().filter(|field| !is_empty(&field.value)).collect()
}

/// Stable ascending sort by field name bytes.
pub fn sort_by_name(fields: &mut [&Field]) {
	fields.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
}

/// Project fields onto their `(name, type)` schema, in order.
pub fn field_types(fields: &[Field]) -> Vec<FieldType> {
	fields
		.iter()
		.map(|field| FieldType {
			name: field.name.clone(),
			ty: field.value.ty(),
		})
		.collect()
}
