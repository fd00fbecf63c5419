//! overmonitor: a live host-metrics dashboard for the terminal.
//!
//! Run with:  `RUST_LOG=info overmonitor 2>overmonitor.log`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the dashboard.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("overmonitor v{} starting", env!("CARGO_PKG_VERSION"));

    om_terminal::run().map_err(Into::into)
}
