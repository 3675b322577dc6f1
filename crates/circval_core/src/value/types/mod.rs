use std::fmt;

use crate::value::{
	Bracket, NameMap, NameTree, NativeField, NativeRecordType, NativeType, RenderOptions, Tree, display_name, native_field_name,
	sprint,
};

/// Schema of a runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
	/// Type of the empty (absent) value.
	Empty,
	/// Scalar type.
	Basic(BasicType),
	/// Ordered sequence type.
	Series(SeriesType),
	/// Struct schema.
	Struct(StructType),
	/// Host-held handle with no external representation.
	Opaque,
}

impl Type {
	/// Native type used when values of this type are disassembled for the host.
	pub fn native_type(&self) -> NativeType {
		match self {
			Self::Empty | Self::Opaque => NativeType::Unit,
			Self::Basic(basic) => basic.native_type(),
			Self::Series(series) => NativeType::Seq(Box::new(series.elem.native_type())),
			Self::Struct(item) => NativeType::Record(item.native_type()),
		}
	}

	/// Diagnostic tree for this type.
	pub fn render(&self) -> Tree {
		match self {
			Self::Empty => Tree::leaf("empty"),
			Self::Basic(basic) => Tree::leaf(basic.as_str()),
			Self::Series(series) => Tree::Series {
				bracket: Bracket::Square,
				elems: vec![series.elem.render()],
			},
			Self::Struct(item) => item.render(),
			Self::Opaque => Tree::leaf("opaque"),
		}
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&sprint(&self.render(), &RenderOptions::default()))
	}
}

/// Scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicType {
	/// Boolean.
	Bool,
	/// Signed 64-bit integer.
	Int64,
	/// 64-bit float.
	Float64,
	/// UTF-8 string.
	String,
}

impl BasicType {
	/// Render scalar type as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int64 => "int64",
			Self::Float64 => "float64",
			Self::String => "string",
		}
	}

	fn native_type(self) -> NativeType {
		match self {
			Self::Bool => NativeType::Bool,
			Self::Int64 => NativeType::Int64,
			Self::Float64 => NativeType::Float64,
			Self::String => NativeType::String,
		}
	}
}

/// Sequence type with a single element type.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesType {
	/// Element type.
	pub elem: Box<Type>,
}

/// Ordered list of named field types.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructType {
	/// Field schemas in declaration order.
	pub fields: Vec<FieldType>,
}

/// Named field schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldType {
	/// Source field name.
	pub name: Box<str>,
	/// Field value type.
	pub ty: Type,
}

impl StructType {
	/// Synthesize a fresh native record type and the source-to-native name map.
	///
	/// Native names upper-case the first character of the source name. A name
	/// already assigned to an earlier slot gets the slot's zero-based index
	/// appended. When a duplicated source name occurs, the map keeps the
	/// native name of its last occurrence.
	pub fn synthesize_native_type(&self) -> (NativeRecordType, NameMap) {
		let mut fields: Vec<NativeField> = Vec::with_capacity(self.fields.len());
		let mut names = NameMap::with_capacity(self.fields.len());

		for (idx, field) in self.fields.iter().enumerate() {
			let base = native_field_name(&field.name);
			let mut native_name = base.clone();
			if is_taken(&fields, &native_name) {
				native_name = format!("{base}{idx}");
				while is_taken(&fields, &native_name) {
					native_name = format!("{native_name}_{idx}");
				}
				log::debug!("native field name {base:?} already taken; field {:?} becomes {native_name:?}", field.name);
			}

			let native_name = native_name.into_boxed_str();
			names.insert(field.name.clone(), native_name.clone());
			fields.push(NativeField {
				name: native_name,
				source_name: field.name.clone(),
				ty: field.ty.native_type(),
			});
		}

		(NativeRecordType { fields }, names)
	}

	/// Synthesize a fresh native record type, discarding the name map.
	pub fn native_type(&self) -> NativeRecordType {
		self.synthesize_native_type().0
	}

	/// Diagnostic tree: `(name: type, ...)` in declaration order.
	pub fn render(&self) -> Tree {
		Tree::Parallel {
			label: String::new(),
			bracket: Bracket::Paren,
			elems: self
				.fields
				.iter()
				.map(|field| NameTree {
					name: display_name(&field.name).to_owned(),
					monadic: false,
					tree: field.ty.render(),
				})
				.collect(),
		}
	}
}

impl fmt::Display for StructType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&sprint(&self.render(), &RenderOptions::default()))
	}
}

fn is_taken(fields: &[NativeField], name: &str) -> bool {
	fields.iter().any(|field| &*field.name == name)
}
