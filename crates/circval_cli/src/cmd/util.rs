use std::path::Path;

use circval::value::{Compression, Result, Value, WireValue, decode_envelope};
use serde::Serialize;

/// Read a wire message (plain JSON or zstd envelope) from disk.
pub(crate) fn load_wire(path: &Path) -> Result<(Compression, WireValue)> {
	let raw = std::fs::read(path)?;
	let (compression, wire) = decode_envelope(&raw)?;
	log::debug!("loaded {} ({})", path.display(), compression.as_str());
	Ok((compression, wire))
}

/// Read and assemble a runtime value from disk.
pub(crate) fn load_value(path: &Path) -> Result<Value> {
	let (_, wire) = load_wire(path)?;
	Ok(wire.assemble())
}

/// Print a JSON payload to stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
