use std::path::PathBuf;

use circval::value::{RenderOptions, Result, sprint};

use crate::cmd::util::load_value;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub compact: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-fields")]
	pub max_fields: Option<usize>,
}

#[derive(clap::Args)]
pub struct TypeArgs {
	pub file: PathBuf,
}

/// Print the one-line rendering of a value.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		compact,
		max_depth,
		max_fields,
	} = args;

	let mut options = if compact { RenderOptions::compact() } else { RenderOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	if let Some(max_fields) = max_fields {
		options.max_fields = max_fields;
	}

	let value = load_value(&file)?;
	println!("{}", sprint(&value.render(), &options));
	Ok(())
}

/// Print the schema derived for a value.
pub fn run_type(args: TypeArgs) -> Result<()> {
	let value = load_value(&args.file)?;
	println!("{}", value.ty());
	Ok(())
}
