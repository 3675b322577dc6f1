use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::value::{BasicValue, EvalError, Field, Result, SeriesValue, StructValue, Value};

const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
const ZSTD_LEVEL: i32 = 3;
/// zstd frame magic marking a compressed envelope.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Cross-process representation of a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireValue {
	/// Boolean scalar.
	Bool {
		/// Payload.
		value: bool,
	},
	/// Signed integer scalar.
	Int64 {
		/// Payload.
		value: i64,
	},
	/// Float scalar.
	Float64 {
		/// Payload.
		value: f64,
	},
	/// String scalar.
	String {
		/// Payload.
		value: String,
	},
	/// Ordered sequence.
	Series {
		/// Elements in order.
		elems: Vec<WireValue>,
	},
	/// Struct message.
	Struct(WireStruct),
}

/// Wire form of a struct: present fields in stored order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireStruct {
	/// Emitted fields; empty-valued fields never appear.
	#[serde(default)]
	pub fields: Vec<WireField>,
}

/// One emitted struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireField {
	/// Source field name.
	pub name: String,
	/// Monadic flag.
	#[serde(default)]
	pub monadic: bool,
	/// Field payload.
	pub value: WireValue,
}

impl WireValue {
	/// Rebuild a runtime value from its wire form.
	pub fn assemble(&self) -> Value {
		match self {
			Self::Bool { value } => Value::Basic(BasicValue::Bool(*value)),
			Self::Int64 { value } => Value::Basic(BasicValue::Int64(*value)),
			Self::Float64 { value } => Value::Basic(BasicValue::Float64(*value)),
			Self::String { value } => Value::Basic(BasicValue::String(value.as_str().into())),
			Self::Series { elems } => Value::Series(SeriesValue::new(elems.iter().map(Self::assemble).collect())),
			Self::Struct(item) => Value::Struct(item.assemble()),
		}
	}
}

impl WireStruct {
	/// Rebuild a struct value from its wire form.
	pub fn assemble(&self) -> StructValue {
		self.fields
			.iter()
			.map(|field| Field {
				name: field.name.as_str().into(),
				monadic: field.monadic,
				value: field.value.assemble(),
			})
			.collect()
	}
}

/// Encoding applied to a persisted wire envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON bytes.
	None,
	/// zstd-compressed JSON bytes.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Serialize a wire message into envelope bytes.
pub fn encode_envelope(value: &WireValue, compression: Compression) -> Result<Vec<u8>> {
	let json = serde_json::to_vec(value)?;
	match compression {
		Compression::None => Ok(json),
		Compression::Zstd => Ok(zstd::stream::encode_all(json.as_slice(), ZSTD_LEVEL)?),
	}
}

/// Detect envelope encoding and parse the wire message, returning `(mode, message)`.
pub fn decode_envelope(raw: &[u8]) -> Result<(Compression, WireValue)> {
	let (compression, json) = if raw.starts_with(&ZSTD_MAGIC) {
		let json = inflate(raw)?;
		if !opens_json_object(&json) {
			return Err(EvalError::NotJsonAfterDecompress { magic: leading_magic(&json) });
		}
		(Compression::Zstd, json)
	} else if opens_json_object(raw) {
		(Compression::None, raw.to_vec())
	} else {
		return Err(EvalError::UnknownMagic { magic: leading_magic(raw) });
	};

	log::trace!("envelope: {} bytes of {} json", json.len(), compression.as_str());
	Ok((compression, serde_json::from_slice(&json)?))
}

/// Stream-decode a zstd frame, reading one byte past the ceiling to detect overflow.
fn inflate(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut json = Vec::new();
	decoder.take(MAX_DECOMPRESSED_BYTES as u64 + 1).read_to_end(&mut json)?;
	if json.len() > MAX_DECOMPRESSED_BYTES {
		return Err(EvalError::PayloadTooLarge {
			limit: MAX_DECOMPRESSED_BYTES,
		});
	}
	Ok(json)
}

fn opens_json_object(bytes: &[u8]) -> bool {
	bytes.iter().find(|byte| !byte.is_ascii_whitespace()) == Some(&b'{')
}

fn leading_magic(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	for (slot, byte) in magic.iter_mut().zip(bytes) {
		*slot = *byte;
	}
	magic
}
