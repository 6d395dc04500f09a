#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const VENTURA_13_6_4_SW_VERS: &str =
    "ProductName:\t\tmacOS\nProductVersion:\t\t13.6.4\nBuildVersion:\t\t22G513\n";
pub const VENTURA_13_6_4_UNAME: &str = "Darwin Kernel Version 22.6.0: Sun Dec 17 22:18:09 PST 2023; root:xnu-8796.141.3.703.2~2/RELEASE_ARM64_T6000";

/// `sw_vers` text in the tab-aligned layout macOS prints.
pub fn sw_vers_report(product: &str, version: &str, build: &str) -> String {
    format!("ProductName:\t\t{product}\nProductVersion:\t\t{version}\nBuildVersion:\t\t{build}\n")
}

/// `uname -v` text for a kernel built on `date`.
pub fn uname_version(darwin: &str, date: &str, kernel: &str) -> String {
    format!("Darwin Kernel Version {darwin}: {date}; root:{kernel}/RELEASE_ARM64_T6000")
}

/// Write an executable shell script named `sw_vers` that prints `report`.
pub fn fake_sw_vers(dir: &Path, report: &str) -> Result<PathBuf> {
    write_script(dir, &format!("#!/bin/sh\ncat <<'REPORT'\n{}REPORT\n", report))
}

/// Write an executable `sw_vers` that fails with `status`.
pub fn failing_sw_vers(dir: &Path, status: i32) -> Result<PathBuf> {
    write_script(dir, &format!("#!/bin/sh\necho 'sw_vers: broken' >&2\nexit {status}\n"))
}

fn write_script(dir: &Path, body: &str) -> Result<PathBuf> {
    let path = dir.join("sw_vers");
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    make_executable(&path)?;
    Ok(path)
}

pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}
