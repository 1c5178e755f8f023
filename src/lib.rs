//! Human-readable size arguments for clap.
//!
//! Sizes such as `1337MiB` or `"1.5 GB"` are parsed into a [`Size`] by
//! [`parse_string`], which leaves unit resolution to the `byte_unit` crate.
//! [`utils::bitmath_type`] wraps it as a clap value parser whose errors name
//! the rejected argument.
//!
//! The `bootstrap` module holds the argument definitions of the `bitmath`
//! binary.

pub mod bootstrap;
pub mod models;
pub mod utils;

pub use models::{parse_string, Size, SizeParseError};
pub use utils::{bitmath_type, SizeArgumentError};
