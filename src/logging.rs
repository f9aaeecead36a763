//! Diagnostic tracing for the CLI.
//!
//! Machine output goes to stdout and progress lines to stderr regardless of
//! this module. Tracing events (per-step FOUND / NOT FOUND, transport
//! faults) are opt-in through `RUST_LOG` and also written to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. Defaults to `warn` if `RUST_LOG` is unset.
///
/// ```bash
/// RUST_LOG=wikirace=debug wikirace verify --start 東京 --goal 京都 日本
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
