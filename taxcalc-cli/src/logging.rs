use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Keeps normal runs quiet so stdout
/// carries only prompts and the result.
const DEFAULT_FILTER: &str = "warn";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(DEFAULT_FILTER))
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set (e.g. `RUST_LOG=taxcalc_core=trace` shows
///   every bracket contribution).
/// * Falls back to `warn`.
/// * Strips timestamps and target names to keep CLI output clean.
/// * Writes to stderr.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
