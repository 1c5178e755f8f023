//! Domain models.
//!
//! - `size`: the byte quantity produced by parsing a size string

mod size;

pub use size::{parse_string, Size, SizeParseError};
