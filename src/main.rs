//! `bitmath` entry point.
//!
//! Loads an optional `.env` file, parses the command line, sets up logging and
//! prints the size that was given. Invalid sizes are reported by clap, which
//! prints usage and exits with a non-zero status.

use anyhow::Context;
use bitmath::{
	bootstrap::{describe, Cli},
	utils::logging::setup_logging,
};
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
	if let Err(e) = dotenvy::dotenv() {
		if !e.not_found() {
			return Err(e).context("failed to load .env file");
		}
	}

	let cli = Cli::parse();
	setup_logging(cli.verbose);

	info!(
		value = cli.file_size.value(),
		unit = %cli.file_size.unit(),
		bytes = cli.file_size.bytes(),
		"parsed file size"
	);

	println!("{}", describe(&cli.file_size));
	Ok(())
}
