use bitmath::{bitmath_type, Size, SizeArgumentError, SizeParseError};
use clap::{error::ErrorKind, Parser};
use std::error::Error;

#[derive(Debug, Parser)]
struct Args {
	#[arg(long, value_parser = bitmath_type)]
	limit: Option<Size>,

	#[arg(long = "chunk", value_parser = bitmath_type)]
	chunks: Vec<Size>,
}

#[test]
fn test_optional_size_absent() {
	let args = Args::try_parse_from(["app"]).unwrap();
	assert!(args.limit.is_none());
	assert!(args.chunks.is_empty());
}

#[test]
fn test_repeated_sizes_keep_their_units() {
	let args =
		Args::try_parse_from(["app", "--chunk", "4KiB", "--chunk", "1 MB", "--limit", "2GiB"])
			.unwrap();

	let units: Vec<String> = args.chunks.iter().map(|c| c.unit().to_string()).collect();
	assert_eq!(units, ["KiB", "MB"]);
	assert_eq!(args.chunks[0].bytes(), 4096);
	assert_eq!(args.chunks[1].bytes(), 1_000_000);
	assert_eq!(args.limit.unwrap().bytes(), 2 * 1024 * 1024 * 1024);
}

#[test]
fn test_converter_error_reaches_clap_error() {
	let err = Args::try_parse_from(["app", "--chunk", "4KiB", "--chunk", "12"]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ValueValidation);

	let source = err
		.source()
		.and_then(|e| e.downcast_ref::<SizeArgumentError>())
		.unwrap();
	assert_eq!(source.input(), "12");
	assert!(matches!(
		source.source().and_then(|e| e.downcast_ref::<SizeParseError>()),
		Some(SizeParseError::MissingUnit(_))
	));
}
