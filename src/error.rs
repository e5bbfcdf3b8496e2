//! Error types for system fact collection

use rmcp::ErrorData as McpError;

/// Errors raised while reading system facts.
///
/// Tool handlers convert these into protocol-level errors, so a failed OS
/// accessor becomes a well-formed error response rather than a crash.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    /// The OS did not report a host name
    #[error("host name is not available")]
    HostnameUnavailable,

    /// The current user could not be resolved
    #[error("current user could not be resolved: {0}")]
    UserUnavailable(String),
}

impl From<InfoError> for McpError {
    fn from(err: InfoError) -> Self {
        McpError::internal_error(err.to_string(), None)
    }
}

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_error_message() {
        let err: McpError = InfoError::HostnameUnavailable.into();
        assert!(err.message.contains("host name"));
    }

    #[test]
    fn test_user_error_preserves_cause() {
        let err: McpError = InfoError::UserUnavailable("no passwd entry".into()).into();
        assert!(err.message.contains("no passwd entry"));
    }
}
