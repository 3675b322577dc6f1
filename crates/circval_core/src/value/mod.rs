mod basic;
mod error;
mod field;
mod id;
mod naming;
mod native;
mod series;
mod span;
mod structure;
mod tree;
mod types;
mod variant;
mod wire;

/// Scalar value payloads.
pub use basic::BasicValue;
/// Error and result aliases.
pub use error::{EvalError, Result};
/// Field records and field-list canonicalization.
pub use field::{Field, field_types, filter_empty, sort_by_name};
/// Content identifiers and hash blending.
pub use id::{ContentId, blend};
/// Display and native name translation.
pub use naming::{display_name, native_field_name};
/// Synthesized native records.
pub use native::{NameMap, NativeField, NativeRecord, NativeRecordType, NativeType, NativeValue};
/// Ordered sequence values.
pub use series::SeriesValue;
/// Diagnostic execution context.
pub use span::Span;
/// Struct values.
pub use structure::StructValue;
/// Diagnostic rendering trees and options.
pub use tree::{Bracket, NameTree, RenderOptions, Tree, sprint};
/// Value schemas.
pub use types::{BasicType, FieldType, SeriesType, StructType, Type};
/// Closed value variant set and shared contract.
pub use variant::{OpaqueValue, Value, is_empty};
/// Wire messages and persistence envelopes.
pub use wire::{Compression, WireField, WireStruct, WireValue, decode_envelope, encode_envelope};
