use std::path::PathBuf;

use circval::value::{Result, Span};
use serde::Serialize;

use crate::cmd::util::{emit_json, load_value};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub canonical: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct HashJson {
	path: String,
	hash: String,
	canonical: bool,
}

/// Print the stored-order (or canonical) content hash of a value.
pub fn run(args: Args) -> Result<()> {
	let Args { file, canonical, json } = args;

	let value = load_value(&file)?;
	let span = Span::root();
	let hash = if canonical { value.canonical_hash(&span) } else { value.hash(&span) };

	if json {
		return emit_json(&HashJson {
			path: file.display().to_string(),
			hash: hash.to_hex(),
			canonical,
		});
	}

	println!("{hash}");
	Ok(())
}
