//! Parsing utilities
//!
//! This module provides value parsers for command line arguments.

use thiserror::Error;
use tracing::debug;

use crate::models::{parse_string, Size, SizeParseError};

/// Error returned by [`bitmath_type`] when an argument is not a valid size.
///
/// The message only names the rejected input. The parser's own reason is
/// available through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("'{input}' can not be parsed into a valid bitmath object")]
pub struct SizeArgumentError {
	input: String,
	#[source]
	source: SizeParseError,
}

impl SizeArgumentError {
	/// The argument exactly as it was received
	pub fn input(&self) -> &str {
		&self.input
	}
}

/// Parses a command line argument into a [`Size`].
///
/// Meant to be handed to clap as a value parser:
///
/// ```
/// use bitmath::{utils::bitmath_type, Size};
/// use clap::Parser;
///
/// #[derive(Parser)]
/// struct Args {
/// 	#[arg(long, value_parser = bitmath_type)]
/// 	file_size: Size,
/// }
///
/// let args = Args::parse_from(["app", "--file-size", "1337MiB"]);
/// assert_eq!(args.file_size.bytes(), 1337 * 1024 * 1024);
/// ```
///
/// Sizes containing a space must reach the parser as a single token, so
/// `--file-size '1337 MiB'` has to be quoted on the shell. Unquoted, the
/// tokenizer hands over `1337` alone and it is rejected for lacking a unit.
pub fn bitmath_type(text: &str) -> Result<Size, SizeArgumentError> {
	parse_string(text).map_err(|source| {
		debug!(input = text, error = %source, "rejected size argument");
		SizeArgumentError {
			input: text.to_string(),
			source,
		}
	})
}
