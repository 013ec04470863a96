//! Tracing setup for the CLI.
//!
//! Commands carry `#[instrument]`; with `--timing` their spans log a
//! duration when they close. `log` records from the business crate are
//! forwarded into the same subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Installs the stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Span close events are logged at INFO, so timing needs at least INFO.
fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}
