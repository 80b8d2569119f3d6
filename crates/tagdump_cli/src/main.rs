#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "tagdump", about = "Dump and load type-tagged values in tagdump store files")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON array of values into a new store file.
	Dump {
		out: PathBuf,
		values: PathBuf,
		/// zstd level for array payloads.
		#[arg(long)]
		compress: Option<i32>,
	},
	/// Decode every node of a store file.
	Load {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	/// List node tags, payload shapes, and compression.
	Info {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Dump { out, values, compress } => cmd::dump::run(out, values, compress),
		Commands::Load { path, json } => cmd::load::run(path, json),
		Commands::Info { path, json } => cmd::info::run(path, json),
	}
}
