#![no_main]

use bitmath::{bitmath_type, parse_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(text) = std::str::from_utf8(data) {
		match (bitmath_type(text), parse_string(text)) {
			(Ok(converted), Ok(parsed)) => assert_eq!(converted, parsed),
			(Err(err), Err(_)) => assert_eq!(
				err.to_string(),
				format!("'{}' can not be parsed into a valid bitmath object", text)
			),
			_ => panic!("converter and parser disagree on {:?}", text),
		}
	}
});
