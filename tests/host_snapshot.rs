// The host snapshot is process-wide, so this binary holds a single test that
// walks the whole capture lifecycle in order.
mod support;

use anyhow::Result;
use macos_releases::{
    Error, StaticHost, full_name_for_build, host_build, host_product_name, host_version,
    init_host_snapshot,
};
use support::{VENTURA_13_6_4_SW_VERS, VENTURA_13_6_4_UNAME, sw_vers_report};

#[test]
fn snapshot_is_captured_once() -> Result<()> {
    let broken = StaticHost::new("ProductName\n", "22.6.0", VENTURA_13_6_4_UNAME);
    assert!(matches!(
        init_host_snapshot(&broken),
        Err(Error::MalformedHostMetadata { .. })
    ));

    let ventura = StaticHost::new(VENTURA_13_6_4_SW_VERS, "22.6.0", VENTURA_13_6_4_UNAME);
    let snapshot = init_host_snapshot(&ventura)?;
    assert_eq!(snapshot.build_version()?, "22G513");
    assert_eq!(host_product_name()?, "macOS");
    assert_eq!(host_version()?, "13.6.4");
    assert_eq!(host_build()?, "22G513");

    let upgraded = StaticHost::new(sw_vers_report("macOS", "14.3.1", "23D60"), "23.3.0", "");
    assert_eq!(init_host_snapshot(&upgraded)?.build_version()?, "22G513");
    assert_eq!(host_version()?, "13.6.4");

    assert_eq!(
        full_name_for_build(None)?,
        "macOS 13.6.4 Ventura (darwin 22.6.0, build 22G513)"
    );
    assert_eq!(
        full_name_for_build(Some("23D60"))?,
        "macOS 14.3.1 Sonoma (darwin 23.3.0, build 23D60)"
    );
    Ok(())
}
