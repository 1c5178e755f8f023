//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - logging: tracing subscriber setup for the binary
//! - parsing: value parsers for command line arguments

pub mod logging;
mod parsing;

pub use parsing::*;
