//! Command line definition of the `bitmath` binary.
//!
//! The binary reads one size argument, either from `--file-size` or from the
//! `BITMATH_FILE_SIZE` environment variable, and reports what it resolved to.

use clap::{ArgAction, Parser};

use crate::{models::Size, utils::bitmath_type};

/// Parse a human-readable size and print its byte count
#[derive(Debug, Parser)]
#[command(name = "bitmath", version, about)]
pub struct Cli {
	/// Size with a unit, e.g. 1337MiB or "1.5 GB" (quote sizes containing spaces)
	#[arg(long, value_name = "SIZE", env = "BITMATH_FILE_SIZE", value_parser = bitmath_type)]
	pub file_size: Size,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

/// Renders the report printed for a parsed size, e.g.
/// `1337 MiB (1401946112 bytes)`.
pub fn describe(size: &Size) -> String {
	format!("{} ({} bytes)", size, size.bytes())
}
