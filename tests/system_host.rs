#![cfg(unix)]

// Drives the live provider against stand-in `sw_vers` executables.
mod support;

use anyhow::Result;
use macos_releases::{Catalog, Error, HostInfoProvider, SwVers, SystemHost};
use support::{failing_sw_vers, fake_sw_vers, sw_vers_report};
use tempfile::TempDir;

#[test]
fn reads_report_from_configured_command() -> Result<()> {
    let dir = TempDir::new()?;
    let report = sw_vers_report("macOS", "14.3.1", "23D60");
    let script = fake_sw_vers(dir.path(), &report)?;

    let host = SystemHost::with_sw_vers_command(&script);
    assert_eq!(host.sw_vers()?, report);

    let parsed = SwVers::read(&host)?;
    assert_eq!(parsed.build_version()?, "23D60");
    Ok(())
}

#[test]
fn failing_command_reports_status() -> Result<()> {
    let dir = TempDir::new()?;
    let script = failing_sw_vers(dir.path(), 3)?;

    let err = SystemHost::with_sw_vers_command(&script)
        .sw_vers()
        .unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("exited with"), "{rendered}");
    assert!(rendered.contains("sw_vers: broken"), "{rendered}");
    Ok(())
}

#[test]
fn provider_failures_surface_as_host_errors() -> Result<()> {
    let dir = TempDir::new()?;
    let script = failing_sw_vers(dir.path(), 1)?;
    let host = SystemHost::with_sw_vers_command(&script);

    assert!(matches!(
        Catalog::builtin().host_release(&host),
        Err(Error::Host(_))
    ));
    Ok(())
}

#[test]
fn uname_reports_a_release() -> Result<()> {
    let uname = SystemHost::new().uname()?;
    assert!(!uname.release.is_empty());
    Ok(())
}
