use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors produced while operating on runtime values.
#[derive(Debug, Error)]
pub enum EvalError {
	/// Terminal value was asked to augment or invoke.
	#[error("{at}: {kind} {subject} cannot be {op}")]
	Unsupported {
		/// Span path where the operation was attempted.
		at: String,
		/// Past-tense operation label (`augmented`, `invoked`).
		op: &'static str,
		/// Value kind label (`structure`, `value`, ...).
		kind: &'static str,
		/// Rendered value for diagnosis.
		subject: String,
	},
	/// Value has no native or wire representation.
	#[error("{at}: {subject} cannot be disassembled")]
	NotDisassemblable {
		/// Span path of the offending value.
		at: String,
		/// Rendered value for diagnosis.
		subject: String,
	},
	/// Envelope JSON encode/decode failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Envelope compression or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Envelope did not start with JSON or a zstd frame.
	#[error("unknown envelope encoding (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the payload.
		magic: [u8; 4],
	},
	/// zstd frame decoded to something other than a JSON object.
	#[error("decompressed envelope is not json (magic={magic:?})")]
	NotJsonAfterDecompress {
		/// First up-to-4 bytes of the decompressed payload.
		magic: [u8; 4],
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed envelope exceeded limit {limit} bytes")]
	PayloadTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
