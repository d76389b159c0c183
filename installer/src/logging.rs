//! Diagnostic tracing for debugging the installer.
//!
//! The interactive transcript (command echoes, gates, the checklist) goes to
//! stdout and is not affected by this module. Tracing output goes to stderr
//! and is silent unless `RUST_LOG` asks for more than warnings.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`.
///
/// # Example
/// ```bash
/// RUST_LOG=installer=debug orfeo-install
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
