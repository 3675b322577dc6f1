use std::path::PathBuf;

use circval::value::{Compression, Result, Span, encode_envelope};

use crate::cmd::util::load_value;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub out: PathBuf,
	/// Write plain JSON instead of a zstd frame.
	#[arg(long)]
	pub raw: bool,
}

/// Re-disassemble a value and persist it as an envelope.
pub fn run(args: Args) -> Result<()> {
	let Args { file, out, raw } = args;

	let value = load_value(&file)?;
	let Some(wire) = value.disassemble_to_wire(&Span::root())? else {
		println!("skipped: {} is empty", file.display());
		return Ok(());
	};

	let compression = if raw { Compression::None } else { Compression::Zstd };
	let bytes = encode_envelope(&wire, compression)?;
	std::fs::write(&out, &bytes)?;

	println!("wrote: {}", out.display());
	println!("compression: {}", compression.as_str());
	println!("bytes: {}", bytes.len());
	Ok(())
}
