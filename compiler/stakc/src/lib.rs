//! The stak driver.
//!
//! ```text
//! source text
//!     │
//!     ▼
//! stak_parse::compile() ──► Program
//!     │
//!     ▼
//! stak_eval::execute() ──► final stack
//! ```
//!
//! [`cli`] turns command-line arguments into an [`cli::Invocation`];
//! [`commands`] runs it and renders failures through
//! `stak_diagnostic`'s terminal emitter.

use std::sync::Once;

pub mod cli;
pub mod commands;
mod source;

pub use source::{Input, Source};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=stak_eval=trace` to log every executed instruction.
/// Output goes to stderr.
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
