use std::path::PathBuf;

use circval::value::{Result, WireValue};
use serde::Serialize;

use crate::cmd::util::{emit_json, load_wire};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
}

#[derive(Serialize)]
struct UnpackJson {
	compression: &'static str,
	message: WireValue,
}

/// Decode an envelope and print the message it carries.
pub fn run(args: Args) -> Result<()> {
	let (compression, message) = load_wire(&args.file)?;
	emit_json(&UnpackJson {
		compression: compression.as_str(),
		message,
	})
}
