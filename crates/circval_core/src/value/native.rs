use std::collections::HashMap;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Map from source (schema) field name to synthesized native field name.
pub type NameMap = HashMap<Box<str>, Box<str>>;

/// Host-visible type of a disassembled value.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeType {
	/// Type with no host payload; its only value is [`NativeValue::Absent`].
	Unit,
	/// Boolean.
	Bool,
	/// Signed 64-bit integer.
	Int64,
	/// 64-bit float.
	Float64,
	/// Owned string.
	String,
	/// Ordered sequence of one element type.
	Seq(Box<NativeType>),
	/// Record synthesized from a struct schema.
	Record(NativeRecordType),
}

impl NativeType {
	/// Zero value left in record slots that are never assigned.
	pub fn zero(&self) -> NativeValue {
		match self {
			Self::Unit => NativeValue::Absent,
			Self::Bool => NativeValue::Bool(false),
			Self::Int64 => NativeValue::Int64(0),
			Self::Float64 => NativeValue::Float64(0.0),
			Self::String => NativeValue::String(String::new()),
			Self::Seq(_) => NativeValue::Seq(Vec::new()),
			Self::Record(ty) => NativeValue::Record(NativeRecord::zeroed(ty.clone())),
		}
	}
}

/// Record type synthesized on demand from a struct schema.
///
/// Two synthesized types are interchangeable when their fields match; no
/// identity is shared between synthesis calls.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeRecordType {
	/// Fields in schema order.
	pub fields: Vec<NativeField>,
}

impl NativeRecordType {
	/// Slot index of a native field name.
	pub fn slot(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|field| &*field.name == name)
	}

	/// Look up a field by native name.
	pub fn field(&self, name: &str) -> Option<&NativeField> {
		self.fields.iter().find(|field| &*field.name == name)
	}
}

/// One slot of a synthesized record type.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeField {
	/// Host-visible (title-cased, disambiguated) name.
	pub name: Box<str>,
	/// Schema name the slot was derived from.
	pub source_name: Box<str>,
	/// Slot type.
	pub ty: NativeType,
}

/// Host-visible value produced by native disassembly.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
	/// Marker for "no value"; never assigned into a record.
	Absent,
	/// Boolean.
	Bool(bool),
	/// Signed 64-bit integer.
	Int64(i64),
	/// 64-bit float.
	Float64(f64),
	/// Owned string.
	String(String),
	/// Ordered sequence.
	Seq(Vec<NativeValue>),
	/// Synthesized record.
	Record(NativeRecord),
}

impl NativeValue {
	/// Whether this is the absent marker.
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Borrow the record payload, if any.
	pub fn as_record(&self) -> Option<&NativeRecord> {
		match self {
			Self::Record(record) => Some(record),
			_ => None,
		}
	}
}

/// Record instance: one value slot per field of its synthesized type.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeRecord {
	ty: NativeRecordType,
	slots: Vec<NativeValue>,
}

impl NativeRecord {
	/// Allocate a record with every slot at its type's zero value.
	pub fn zeroed(ty: NativeRecordType) -> Self {
		let slots = ty.fields.iter().map(|field| field.ty.zero()).collect();
		Self { ty, slots }
	}

	/// Type this record was allocated from.
	pub fn record_type(&self) -> &NativeRecordType {
		&self.ty
	}

	/// Read a slot by native field name.
	pub fn get(&self, name: &str) -> Option<&NativeValue> {
		self.ty.slot(name).and_then(|idx| self.slots.get(idx))
	}

	/// Overwrite a slot by native field name. Returns `false` when no such field exists.
	pub fn set(&mut self, name: &str, value: NativeValue) -> bool {
		match self.ty.slot(name) {
			Some(idx) => {
				self.slots[idx] = value;
				true
			}
			None => false,
		}
	}

	/// Iterate `(native name, value)` pairs in slot order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeValue)> {
		self.ty.fields.iter().map(|field| &*field.name).zip(self.slots.iter())
	}
}

impl Serialize for NativeValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Absent => serializer.serialize_none(),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Int64(v) => serializer.serialize_i64(*v),
			Self::Float64(v) => serializer.serialize_f64(*v),
			Self::String(v) => serializer.serialize_str(v),
			Self::Seq(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Record(record) => record.serialize(serializer),
		}
	}
}

impl Serialize for NativeRecord {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.slots.len()))?;
		for (name, value) in self.iter() {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}
