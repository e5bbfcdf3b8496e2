//! System snapshot type

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Full snapshot returned by `get_system_info`.
///
/// Field names and order are the wire format of the original hostname server;
/// callers parse this output, so renames are breaking changes. Facts the OS
/// does not report serialize as `null` with the key still present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// Configured network host name
    pub hostname: String,
    /// Platform identifier (e.g. "linux", "macos", "windows")
    pub platform: String,
    /// CPU architecture (e.g. "x86_64", "aarch64")
    pub arch: String,
    /// OS kind (e.g. "Ubuntu", "Darwin")
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Kernel release
    pub release: Option<String>,
    /// OS build/version string
    pub version: Option<String>,
    /// Logical CPU count
    pub cpus: usize,
    /// Total physical memory, e.g. "16 GB"
    pub total_memory: String,
    /// Free physical memory, same units
    pub free_memory: String,
    /// System uptime, e.g. "5 hours"
    pub uptime: String,
    /// Current OS user identity
    pub user_info: UserInfo,
}
