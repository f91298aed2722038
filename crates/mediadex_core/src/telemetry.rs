//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when
/// `verbose` is set and `info` when not. `json` switches to structured
/// JSON lines.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
