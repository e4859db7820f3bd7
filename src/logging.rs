//! Tracing subscriber setup for the command-line tool.
//!
//! Library code only emits `tracing` events; the binary decides whether and
//! how they are shown. Set `STYLEMIRROR_LOG=debug` to see every visited
//! entry.

use tracing::Level;

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "STYLEMIRROR_LOG";

/// Parse a log level string (case-insensitive).
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// [`LOG_ENV`] if set to a recognized level, else `default`.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

/// Install a stderr subscriber at `level`. A second call is a no-op.
pub fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
