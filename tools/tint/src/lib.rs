//! `tint`: run a colorizer over text from files or standard input.
//!
//! A thin host around [`tint_core`]: argument parsing ([`Config`]), a
//! line-oriented driver ([`run`]), and error reporting ([`CliError`]).
//! Tags never span a newline (no grammar character is a line terminator),
//! so colorizing line by line gives the same output as colorizing the
//! whole input at once.

mod config;
mod error;
mod run;

use std::sync::Once;

pub use config::{Config, Input, Invocation, USAGE};
pub use error::CliError;
pub use run::{colorize_stream, run, Summary};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tint=debug` for per-input summaries or
/// `RUST_LOG=tint_core=trace` to see every rejected tag.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
