use std::path::PathBuf;

use circval::value::{Result, Span};

use crate::cmd::util::{emit_json, load_value};

#[derive(clap::Args)]
pub struct NativeArgs {
	pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct WireArgs {
	pub file: PathBuf,
}

/// Print the native record synthesized for a value.
pub fn run_native(args: NativeArgs) -> Result<()> {
	let value = load_value(&args.file)?;
	let native = value.disassemble_to_native(&Span::root())?;
	emit_json(&native)
}

/// Print the wire message of a value after empty-field filtering.
pub fn run_wire(args: WireArgs) -> Result<()> {
	let value = load_value(&args.file)?;
	let wire = value.disassemble_to_wire(&Span::root())?;
	emit_json(&wire)
}
