//! Live host provider.
//!
//! Runs the `sw_vers` utility and reads `uname(3)` directly. Both are only
//! meaningful on macOS; elsewhere `sw_vers` is normally absent and the
//! resulting spawn error is returned to the caller.

use crate::host::{HostInfoProvider, Uname};
use crate::runtime::sw_vers_command;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Provider backed by the running machine.
#[derive(Clone, Debug, Default)]
pub struct SystemHost {
    sw_vers: Option<PathBuf>,
}

impl SystemHost {
    /// Resolve `sw_vers` from `MACOS_RELEASES_SW_VERS` or PATH at call time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run this executable instead of the resolved `sw_vers`.
    pub fn with_sw_vers_command(path: impl Into<PathBuf>) -> Self {
        Self {
            sw_vers: Some(path.into()),
        }
    }

    fn sw_vers_program(&self) -> PathBuf {
        self.sw_vers.clone().unwrap_or_else(sw_vers_command)
    }
}

impl HostInfoProvider for SystemHost {
    fn sw_vers(&self) -> Result<String> {
        let program = self.sw_vers_program();
        debug!(program = %program.display(), "running sw_vers");
        let output = Command::new(&program)
            .output()
            .with_context(|| format!("failed to run {}", program.display()))?;
        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        String::from_utf8(output.stdout)
            .with_context(|| format!("{} printed non-UTF-8 output", program.display()))
    }

    fn uname(&self) -> Result<Uname> {
        read_uname()
    }
}

#[cfg(unix)]
fn read_uname() -> Result<Uname> {
    use std::ffi::CStr;

    // SAFETY: utsname is plain old data; uname fills it with NUL-terminated
    // strings on success.
    let mut raw: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut raw) } != 0 {
        return Err(std::io::Error::last_os_error()).context("uname(3) failed");
    }
    let field = |chars: &[libc::c_char]| {
        // SAFETY: the buffer is zero-initialized and NUL-terminated by uname.
        unsafe { CStr::from_ptr(chars.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    };
    Ok(Uname {
        release: field(&raw.release),
        version: field(&raw.version),
    })
}

#[cfg(not(unix))]
fn read_uname() -> Result<Uname> {
    bail!("uname(3) is not available on {}", std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_command_overrides_resolution() {
        let host = SystemHost::with_sw_vers_command("/opt/fake/sw_vers");
        assert_eq!(host.sw_vers_program(), PathBuf::from("/opt/fake/sw_vers"));
    }

    #[test]
    fn missing_command_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("sw_vers");
        let err = SystemHost::with_sw_vers_command(&missing)
            .sw_vers()
            .unwrap_err();
        assert!(
            format!("{err:#}").contains(&missing.display().to_string()),
            "{err:#}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn uname_reports_release() {
        let uname = SystemHost::new().uname().unwrap();
        assert!(!uname.release.is_empty());
        assert!(!uname.version.is_empty());
    }
}
