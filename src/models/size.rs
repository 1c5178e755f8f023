//! Size quantity model.
//!
//! A [`Size`] is the value produced when a human-readable size string such as
//! `"1337 MiB"` is parsed. It keeps the magnitude and unit exactly as written
//! alongside the resolved byte count. Resolution of unit prefixes and the
//! arithmetic behind it is left to the `byte_unit` crate.

use std::{fmt, num::ParseFloatError, str::FromStr};

use byte_unit::{Byte, ParseError, Unit};
use thiserror::Error;

/// Accepted unit spellings, the spelling handed to `byte_unit` and the unit
/// they resolve to. Matching is exact.
const UNITS: &[(&str, &str, Unit)] = &[
	("B", "B", Unit::B),
	("kB", "KB", Unit::KB),
	("KB", "KB", Unit::KB),
	("KiB", "KiB", Unit::KiB),
	("MB", "MB", Unit::MB),
	("MiB", "MiB", Unit::MiB),
	("GB", "GB", Unit::GB),
	("GiB", "GiB", Unit::GiB),
	("TB", "TB", Unit::TB),
	("TiB", "TiB", Unit::TiB),
	("PB", "PB", Unit::PB),
	("PiB", "PiB", Unit::PiB),
	("EB", "EB", Unit::EB),
	("EiB", "EiB", Unit::EiB),
	("b", "b", Unit::Bit),
	("bit", "b", Unit::Bit),
	("kb", "Kb", Unit::Kbit),
	("Kb", "Kb", Unit::Kbit),
	("Kib", "Kib", Unit::Kibit),
	("Mb", "Mb", Unit::Mbit),
	("Mib", "Mib", Unit::Mibit),
	("Gb", "Gb", Unit::Gbit),
	("Gib", "Gib", Unit::Gibit),
	("Tb", "Tb", Unit::Tbit),
	("Tib", "Tib", Unit::Tibit),
	("Pb", "Pb", Unit::Pbit),
	("Pib", "Pib", Unit::Pibit),
	("Eb", "Eb", Unit::Ebit),
	("Eib", "Eib", Unit::Eibit),
];

/// Errors returned when a string cannot be interpreted as a size
#[derive(Debug, Error)]
pub enum SizeParseError {
	/// The input carries no unit at all (this includes the empty string)
	#[error("no unit found in {0:?}")]
	MissingUnit(String),

	/// The magnitude in front of the unit is not a finite number
	#[error("invalid magnitude {value:?}")]
	InvalidValue {
		value: String,
		#[source]
		source: Option<ParseFloatError>,
	},

	/// The magnitude is below zero
	#[error("negative magnitude {0}")]
	Negative(f64),

	/// The unit is not one of the accepted spellings
	#[error("invalid unit {0:?}")]
	InvalidUnit(String),

	/// The size does not fit in a byte count
	#[error("size out of range: {0}")]
	OutOfRange(#[from] ParseError),
}

/// A quantity of bytes together with the unit it was expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
	value: f64,
	unit: Unit,
	bytes: Byte,
}

impl Size {
	/// Parses a size string such as `"1337MiB"` or `"1.5 GB"`.
	///
	/// A unit is mandatory and unit names are case-sensitive, so `"MB"` is
	/// megabytes, `"Mb"` is megabits and `"mb"` is rejected. Surrounding
	/// whitespace and whitespace between the magnitude and the unit are
	/// ignored.
	pub fn parse_string(text: &str) -> Result<Self, SizeParseError> {
		let text = text.trim();
		let split = text
			.find(|c: char| c.is_ascii_alphabetic())
			.ok_or_else(|| SizeParseError::MissingUnit(text.to_string()))?;
		let (value, unit) = text.split_at(split);

		let value = parse_magnitude(value.trim())?;
		let (canonical, unit) = lookup_unit(unit.trim())?;
		let bytes = Byte::parse_str(format!("{} {}", value, canonical), false)?;

		Ok(Self { value, unit, bytes })
	}

	/// The magnitude as written, in [`Size::unit`]s
	pub fn value(&self) -> f64 {
		self.value
	}

	/// The unit the size was written in
	pub fn unit(&self) -> Unit {
		self.unit
	}

	/// Total number of bytes, saturating at `u64::MAX`.
	///
	/// A size that is not a whole number of bytes, such as `3 b`, is rounded
	/// up to the next byte.
	pub fn bytes(&self) -> u64 {
		self.bytes.as_u64()
	}
}

fn lookup_unit(unit: &str) -> Result<(&'static str, Unit), SizeParseError> {
	UNITS
		.iter()
		.find(|(name, _, _)| *name == unit)
		.map(|(_, canonical, unit)| (*canonical, *unit))
		.ok_or_else(|| SizeParseError::InvalidUnit(unit.to_string()))
}

fn parse_magnitude(value: &str) -> Result<f64, SizeParseError> {
	let parsed = value
		.parse::<f64>()
		.map_err(|e| SizeParseError::InvalidValue {
			value: value.to_string(),
			source: Some(e),
		})?;

	if !parsed.is_finite() {
		return Err(SizeParseError::InvalidValue {
			value: value.to_string(),
			source: None,
		});
	}
	if parsed < 0.0 {
		return Err(SizeParseError::Negative(parsed));
	}

	Ok(parsed)
}

/// Parses a size string. See [`Size::parse_string`].
pub fn parse_string(text: &str) -> Result<Size, SizeParseError> {
	Size::parse_string(text)
}

impl FromStr for Size {
	type Err = SizeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse_string(s)
	}
}

impl fmt::Display for Size {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.value, self.unit)
	}
}
