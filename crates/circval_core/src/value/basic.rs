use crate::value::{BasicType, ContentId, NativeValue, WireValue, blend};

/// Scalar runtime value.
#[derive(Debug, Clone)]
pub enum BasicValue {
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int64(i64),
	/// 64-bit float scalar.
	Float64(f64),
	/// UTF-8 string scalar.
	String(Box<str>),
}

impl BasicValue {
	/// Scalar type of this value.
	pub fn ty(&self) -> BasicType {
		match self {
			Self::Bool(_) => BasicType::Bool,
			Self::Int64(_) => BasicType::Int64,
			Self::Float64(_) => BasicType::Float64,
			Self::String(_) => BasicType::String,
		}
	}

	/// Scalar equality; values of different scalar types are never equal.
	///
	/// Floats compare with IEEE `==`: `0.0` equals `-0.0`, and `NaN` equals nothing, itself included.
	pub fn equal(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Int64(a), Self::Int64(b)) => a == b,
			(Self::Float64(a), Self::Float64(b)) => a == b,
			(Self::String(a), Self::String(b)) => a == b,
			_ => false,
		}
	}

	/// Type-tagged content hash.
	pub fn hash(&self) -> ContentId {
		let payload = match self {
			Self::Bool(v) => ContentId::of_bytes(&[u8::from(*v)]),
			Self::Int64(v) => ContentId::of_bytes(&v.to_le_bytes()),
			Self::Float64(v) => {
				// -0.0 == 0.0, so both zeros share one encoding.
				let v = if *v == 0.0 { 0.0_f64 } else { *v };
				ContentId::of_bytes(&v.to_bits().to_le_bytes())
			}
			Self::String(v) => ContentId::of_str(v),
		};
		blend(&[ContentId::of_str(self.ty().as_str()), payload])
	}

	pub(crate) fn to_native(&self) -> NativeValue {
		match self {
			Self::Bool(v) => NativeValue::Bool(*v),
			Self::Int64(v) => NativeValue::Int64(*v),
			Self::Float64(v) => NativeValue::Float64(*v),
			Self::String(v) => NativeValue::String(v.to_string()),
		}
	}

	pub(crate) fn to_wire(&self) -> WireValue {
		match self {
			Self::Bool(value) => WireValue::Bool { value: *value },
			Self::Int64(value) => WireValue::Int64 { value: *value },
			Self::Float64(value) => WireValue::Float64 { value: *value },
			Self::String(value) => WireValue::String { value: value.to_string() },
		}
	}

	pub(crate) fn to_text(&self) -> String {
		match self {
			Self::Bool(v) => v.to_string(),
			Self::Int64(v) => v.to_string(),
			Self::Float64(v) => format!("{v:?}"),
			Self::String(v) => format!("{v:?}"),
		}
	}
}

impl From<bool> for BasicValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for BasicValue {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<f64> for BasicValue {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<&str> for BasicValue {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}
