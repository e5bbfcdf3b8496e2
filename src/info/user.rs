//! Current-user identity collection
//!
//! On unix the passwd database is the authority; the environment and `dirs`
//! fill the gaps when no passwd entry exists (e.g. minimal containers).

use crate::error::InfoError;
use crate::types::UserInfo;

/// Resolve the identity of the user owning this process.
#[cfg(unix)]
pub fn current_user() -> Result<UserInfo, InfoError> {
    let uid = unsafe { libc::getuid() };
    let gid = unsafe { libc::getgid() };

    let entry = passwd_entry(uid);

    let username = entry
        .as_ref()
        .map(|e| e.name.clone())
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("LOGNAME").ok())
        .ok_or_else(|| InfoError::UserUnavailable(format!("no passwd entry for uid {}", uid)))?;

    let homedir = entry
        .as_ref()
        .and_then(|e| e.dir.clone())
        .or_else(|| dirs::home_dir().map(|p| p.display().to_string()));

    let shell = entry
        .as_ref()
        .and_then(|e| e.shell.clone())
        .or_else(|| std::env::var("SHELL").ok());

    Ok(UserInfo {
        username,
        uid: Some(uid),
        gid: Some(gid),
        homedir,
        shell,
    })
}

/// Resolve the identity of the user owning this process.
#[cfg(not(unix))]
pub fn current_user() -> Result<UserInfo, InfoError> {
    let username = std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .map_err(|_| InfoError::UserUnavailable("no user set in environment".to_string()))?;

    Ok(UserInfo {
        username,
        uid: None,
        gid: None,
        homedir: dirs::home_dir().map(|p| p.display().to_string()),
        shell: None,
    })
}

#[cfg(unix)]
struct PasswdEntry {
    name: String,
    dir: Option<String>,
    shell: Option<String>,
}

/// Look up the passwd entry for `uid` via `getpwuid_r`.
///
/// Returns `None` when there is no entry or the lookup fails; callers fall
/// back to the environment.
#[cfg(unix)]
fn passwd_entry(uid: libc::uid_t) -> Option<PasswdEntry> {
    use std::ffi::CStr;

    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = vec![0u8; 4096];
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(
            uid,
            &mut pwd,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() {
        return None;
    }

    // pwd fields point into buf, which outlives the copies made here
    let field = |ptr: *const libc::c_char| -> Option<String> {
        if ptr.is_null() {
            return None;
        }
        let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    };

    Some(PasswdEntry {
        name: field(pwd.pw_name)?,
        dir: field(pwd.pw_dir),
        shell: field(pwd.pw_shell),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_resolves() {
        let user = current_user().unwrap();
        assert!(!user.username.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_ids_match_process_owner() {
        let user = current_user().unwrap();
        assert_eq!(user.uid, Some(unsafe { libc::getuid() }));
        assert_eq!(user.gid, Some(unsafe { libc::getgid() }));
    }
}
