#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "circval", about = "Circuit struct value inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the diagnostic rendering of a value.
	Render(cmd::render::Args),
	/// Print the schema of a value.
	Type(cmd::render::TypeArgs),
	/// Print the content hash of a value.
	Hash(cmd::hash::Args),
	/// Compare two values structurally.
	Eq(cmd::eq::Args),
	/// Disassemble a value into a native record and print it as JSON.
	Native(cmd::disassemble::NativeArgs),
	/// Re-disassemble a value into its wire message and print it as JSON.
	Wire(cmd::disassemble::WireArgs),
	/// Write a value as a persisted envelope.
	Pack(cmd::pack::Args),
	/// Decode an envelope and print its wire message.
	Unpack(cmd::unpack::Args),
}

fn main() {
	pretty_env_logger::init();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> circval::value::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Render(args) => cmd::render::run(args),
		Commands::Type(args) => cmd::render::run_type(args),
		Commands::Hash(args) => cmd::hash::run(args),
		Commands::Eq(args) => cmd::eq::run(args),
		Commands::Native(args) => cmd::disassemble::run_native(args),
		Commands::Wire(args) => cmd::disassemble::run_wire(args),
		Commands::Pack(args) => cmd::pack::run(args),
		Commands::Unpack(args) => cmd::unpack::run(args),
	}
}
