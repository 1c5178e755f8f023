//! Logging utilities for the application
//!
//! Events go to stderr so stdout only carries the binary's report. The level
//! comes from the `-v` count on the command line unless `RUST_LOG` is set.
use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Maps the number of `-v` flags to a level: warnings by default, then
/// info, debug and trace.
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Setup logging for the application
///
/// `RUST_LOG` directives take precedence over `verbosity`. Only the first call
/// installs a subscriber.
pub fn setup_logging(verbosity: u8) {
	let filter = EnvFilter::builder()
		.with_default_directive(verbosity_level(verbosity).into())
		.from_env_lossy();

	let subscriber = tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(std::io::stderr)
			.with_ansi(std::io::stderr().is_terminal())
			.with_target(verbosity > 1)
			.compact(),
	);

	// A global subscriber may already be set (e.g. by a test harness)
	let _ = subscriber.try_init();
}
