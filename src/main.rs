//! acpi-tray — battery tray icons and low/full notifications driven by `acpi`.
//!
//! Run with:  `RUST_LOG=info acpi-tray`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("acpi-tray v{} starting", env!("CARGO_PKG_VERSION"));

    // No SIGINT handler is installed: Ctrl-C kills the process with the
    // default disposition and the timers die with it.
    tray_dbus::run().await.map_err(Into::into)
}
