//! Logger bootstrap built on `tracing`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The default filter enables `default_level` for the given application only,
/// so chatter from dependencies stays out of the terminal. `RUST_LOG` takes
/// precedence when set.
pub fn setup_logger(app_name: &str, default_level: &str) {
    // Filter directives use module paths, so the crate name needs underscores.
    let target = app_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{target}={default_level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("logger initialized for {}", app_name);
}
