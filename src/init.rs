//! Tracing setup for the stdio server
//!
//! All logging goes to stderr; stdout carries the MCP protocol and must stay
//! clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize stderr logging with `RUST_LOG`-based filtering.
///
/// The given crate defaults to `info` so the startup diagnostic is visible
/// without any environment setup.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    Ok(())
}
