//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging.
///
/// Respects the `RUST_LOG` environment variable and falls back to `default_level`
/// (e.g. `"info"`). With `json` set, log lines are emitted as JSON objects.
/// Logs go to stderr so command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns error if the filter is invalid or a global subscriber is already set.
pub fn init_telemetry(default_level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
