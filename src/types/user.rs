//! Current-user identity type

use serde::{Deserialize, Serialize};

/// Identity of the user owning the server process.
///
/// `uid` and `gid` are unix concepts and serialize as `null` on other
/// platforms, as do `homedir` and `shell` when the OS does not report them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Login name
    pub username: String,
    /// Numeric user id
    pub uid: Option<u32>,
    /// Numeric group id
    pub gid: Option<u32>,
    /// Home directory path
    pub homedir: Option<String>,
    /// Login shell path
    pub shell: Option<String>,
}
