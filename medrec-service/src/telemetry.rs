//! Tracing subscriber setup with structured JSON output.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber with structured JSON output.
///
/// Respects the `MEDREC_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_env("MEDREC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initializes tracing with a fixed filter string (for testing or
/// embedding, e.g. the `log_filter` value from [`MedrecConfig`]).
///
/// [`MedrecConfig`]: medrec_core::MedrecConfig
pub fn init_telemetry_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}
