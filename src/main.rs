//! Hostname MCP Server
//!
//! Run directly: `hostname-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "hostname": { "command": "./hostname-mcp" } } }
//! ```

use rmcp::ServiceExt;

use hostname_mcp::init::init_tracing;
use hostname_mcp::HostnameMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("hostname_mcp")?;

    tracing::info!("Starting hostname-mcp");

    let server = HostnameMcpServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Hostname MCP Server running on stdio");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
