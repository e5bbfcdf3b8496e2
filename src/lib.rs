//! Hostname MCP Server
//!
//! A lightweight MCP server focused on hostname detection with basic system
//! information. Only reads system facts; never executes commands or accesses
//! sensitive data.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use hostname_mcp::HostnameMcpServer;
//!
//! let server = HostnameMcpServer::new();
//! // Serve via stdio or call the tool handlers directly
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `hostname-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "hostname": { "command": "./hostname-mcp" } } }
//! ```

pub mod error;
pub mod info;
pub mod init;
pub mod result;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::HostnameMcpServer;
