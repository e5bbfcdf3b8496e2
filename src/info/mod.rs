//! System fact collection

pub mod user;

use sysinfo::System;

use crate::error::InfoError;
use crate::types::SystemInfo;

/// Read the OS-reported host name.
pub fn hostname() -> Result<String, InfoError> {
    System::host_name().ok_or(InfoError::HostnameUnavailable)
}

/// Compose the full system snapshot.
///
/// The caller refreshes CPU and memory on `sys` beforehand; host name, uptime,
/// and OS identification are static accessors re-read here, so every call
/// reflects live OS state.
pub fn system_info(sys: &System) -> Result<SystemInfo, InfoError> {
    Ok(SystemInfo {
        hostname: hostname()?,
        platform: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        kind: System::name(),
        release: System::kernel_version(),
        version: System::long_os_version(),
        cpus: sys.cpus().len(),
        total_memory: format_gb(sys.total_memory()),
        free_memory: format_gb(sys.free_memory()),
        uptime: format_hours(System::uptime()),
        user_info: user::current_user()?,
    })
}

/// Format a byte count as whole gigabytes, e.g. `"16 GB"`.
fn format_gb(bytes: u64) -> String {
    let gb = bytes as f64 / 1024.0 / 1024.0 / 1024.0;
    format!("{} GB", gb.round() as u64)
}

/// Format an uptime in seconds as whole hours, e.g. `"2 hours"`.
fn format_hours(seconds: u64) -> String {
    let hours = seconds as f64 / 3600.0;
    format!("{} hours", hours.round() as u64)
}
