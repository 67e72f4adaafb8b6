//! Diagnostic tracing for the migration runtime.
//!
//! Reads `RUST_LOG`; defaults to `warn`. Output goes to stderr so that
//! command output on stdout stays machine-readable.
//!
//! ```bash
//! RUST_LOG=vanilla_ids=trace vanilla-ids migrate world/registry.json
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
