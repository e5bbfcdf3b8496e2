//! MCP server exposing the hostname and system information tools

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use sysinfo::System;
use tokio::sync::Mutex;

use crate::error::McpResult;
use crate::info;
use crate::result::{json_success, text_success};

/// The Hostname MCP Server
///
/// Holds the shared `sysinfo::System`, refreshed on every `get_system_info`
/// call so each response reflects live OS state.
#[derive(Clone)]
pub struct HostnameMcpServer {
    system: Arc<Mutex<System>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HostnameMcpServer {
    pub fn new() -> Self {
        Self {
            system: Arc::new(Mutex::new(System::new_all())),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get the hostname/computer name of the current system")]
    async fn get_hostname(&self) -> McpResult<CallToolResult> {
        let hostname = info::hostname()?;
        Ok(text_success(hostname))
    }

    #[tool(
        description = "Get detailed system information including OS, architecture, and platform details"
    )]
    async fn get_system_info(&self) -> McpResult<CallToolResult> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_all();
        sys.refresh_memory();
        json_success(&info::system_info(&sys)?)
    }
}

#[tool_handler]
impl rmcp::ServerHandler for HostnameMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Hostname MCP Server - reads the machine's host name and a snapshot of \
                 OS, CPU, memory, uptime, and current-user facts. Read-only: never \
                 executes commands or accesses sensitive data."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for HostnameMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_router_lists_both_tools() {
        let server = HostnameMcpServer::new();
        let tools = server.tool_router.list_all();

        assert_eq!(tools.len(), 2);
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_hostname"));
        assert!(names.contains(&"get_system_info"));
    }

    #[tokio::test]
    async fn test_get_hostname_matches_os() {
        let server = HostnameMcpServer::new();
        let result = server.get_hostname().await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), System::host_name().unwrap());
    }

    #[tokio::test]
    async fn test_get_system_info_shape() {
        let server = HostnameMcpServer::new();
        let result = server.get_system_info().await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let text = text_of(&result);
        // to_string_pretty output, 2-space indented
        assert!(text.starts_with("{\n  \""));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert!(obj["userInfo"].is_object());
        assert!(obj["totalMemory"].as_str().unwrap().ends_with(" GB"));
        assert!(obj["freeMemory"].as_str().unwrap().ends_with(" GB"));
        assert!(obj["uptime"].as_str().unwrap().ends_with(" hours"));
        assert!(obj["cpus"].as_u64().unwrap() >= 1);
        assert_eq!(
            obj["hostname"].as_str().unwrap(),
            System::host_name().unwrap()
        );
    }
}
