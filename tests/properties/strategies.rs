use proptest::prelude::*;

const UNITS: &[&str] = &[
	"B", "KB", "KiB", "MB", "MiB", "GB", "GiB", "TB", "TiB",
];
const SEPARATORS: &[&str] = &["", " "];

/// Sizes with an explicit unit, with or without a space before it
pub fn valid_size_strategy() -> impl Strategy<Value = String> {
	(
		0u32..100_000,
		prop::sample::select(SEPARATORS),
		prop::sample::select(UNITS),
	)
		.prop_map(|(value, separator, unit)| format!("{}{}{}", value, separator, unit))
}

/// Strings without any letter, which can never carry a unit
pub fn unitless_strategy() -> impl Strategy<Value = String> {
	"[0-9 .+-]{0,16}".prop_map(|s| s.to_string())
}

/// Anything, including valid sizes
pub fn any_input_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		valid_size_strategy(),
		unitless_strategy(),
		miscased_unit_strategy(),
		"\\PC{0,24}".prop_map(|s| s.to_string()),
	]
}

/// Unit spellings that only differ from accepted ones by case
const MISCASED_UNITS: &[&str] = &[
	"mib", "MIB", "mIB", "miB", "kib", "KIB", "gib", "GIB", "tib", "TIB", "mB", "gB", "K", "M",
];

/// Sizes whose unit is written in the wrong case
pub fn miscased_unit_strategy() -> impl Strategy<Value = String> {
	(
		0u32..100_000,
		prop::sample::select(SEPARATORS),
		prop::sample::select(MISCASED_UNITS),
	)
		.prop_map(|(value, separator, unit)| format!("{}{}{}", value, separator, unit))
}
