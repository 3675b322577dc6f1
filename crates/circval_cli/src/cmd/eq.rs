use std::path::PathBuf;

use circval::value::{Result, Span};
use serde::Serialize;

use crate::cmd::util::{emit_json, load_value};

#[derive(clap::Args)]
pub struct Args {
	pub left: PathBuf,
	pub right: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct EqJson {
	equal: bool,
	hash_equal: bool,
	canonical_hash_equal: bool,
	left_hash: String,
	right_hash: String,
}

/// Compare two values and report whether their hashes agree with equality.
pub fn run(args: Args) -> Result<()> {
	let Args { left, right, json } = args;

	let left = load_value(&left)?;
	let right = load_value(&right)?;
	let span = Span::root();

	let equal = left.equal(&span, &right);
	let left_hash = left.hash(&span);
	let right_hash = right.hash(&span);
	let canonical_hash_equal = left.canonical_hash(&span) == right.canonical_hash(&span);

	if equal && left_hash != right_hash {
		log::info!("values compare equal but stored-order hashes differ");
	}

	if json {
		return emit_json(&EqJson {
			equal,
			hash_equal: left_hash == right_hash,
			canonical_hash_equal,
			left_hash: left_hash.to_hex(),
			right_hash: right_hash.to_hex(),
		});
	}

	println!("equal: {equal}");
	println!("hash_equal: {}", left_hash == right_hash);
	println!("canonical_hash_equal: {canonical_hash_equal}");
	println!("left_hash: {left_hash}");
	println!("right_hash: {right_hash}");
	Ok(())
}
