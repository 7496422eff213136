//! Telemetry & Observability
//!
//! Provides structured logging for queue sessions.
//! Features:
//! - Per-command spans
//! - Recoverable failure recording
//! - Configurable log levels via RUST_LOG
//! - Log-injection safe rendering of user input

use std::sync::Once;

use tracing::{debug, info_span, Span};
use tracing_subscriber::EnvFilter;

/// Render user-typed text on a single log line.
///
/// Control characters come out in Rust escape form (`\n`, `\u{1b}`), so a
/// token cannot start a fake log record.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// Install the stderr subscriber when `RUST_LOG` is set; stay silent otherwise.
pub fn init_tracing() {
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init_tracing_with_filter(&filter);
    }
}

/// Initialize tracing for `--verbose`
pub fn init_tracing_verbose() {
    init_tracing_with_filter("debug")
}

/// Install a compact stderr subscriber for `filter`. Later calls are no-ops.
///
/// An unparsable filter falls back to `warn`.
pub fn init_tracing_with_filter(filter: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}

/// Span wrapping one dispatched menu command
pub fn command_span(command: &str, step: usize) -> Span {
    let safe = sanitize_for_log(command);
    info_span!("session.command", command = safe.as_str(), step = step)
}

/// Record a failure the session reported to the user and recovered from
pub fn record_recovered(error: &str) {
    let safe_err = sanitize_for_log(error);
    debug!(error = safe_err.as_str(), "Recovered from command failure");
}

/// Initialize tracing for tests with a simple subscriber
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
