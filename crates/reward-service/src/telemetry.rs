//! Tracing subscriber setup for the service binaries.

use tracing_subscriber::EnvFilter;

/// Builds the log filter.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=reward_db=trace` - Show trace for the database crate only
/// - Default: the configured level, with sqlx quieted to `warn`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", default_level)))
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for report output. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
