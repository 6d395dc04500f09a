// Integration suite over the builtin datasets; exercises catalog queries,
// build index lookups, and host matching through fixed host reports.
mod support;

use anyhow::Result;
use macos_releases::{
    Attribute, BuildIndex, Catalog, Error, Query, Release, StaticHost, SwVers,
    get_release_name_and_version, lookup, lookup_by_build,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use support::{VENTURA_13_6_4_SW_VERS, VENTURA_13_6_4_UNAME, sw_vers_report, uname_version};

#[test]
fn every_record_is_found_by_its_build() -> Result<()> {
    for release in Catalog::builtin().releases() {
        let found = lookup([("build", release.build())])?;
        assert!(
            found.iter().any(|candidate| std::ptr::eq(*candidate, release)),
            "lookup(build={}) missed {release}",
            release.build()
        );
    }
    Ok(())
}

#[test]
fn empty_lookup_is_the_whole_catalog() -> Result<()> {
    let catalog = Catalog::builtin();
    let all = lookup(Vec::<(&str, &str)>::new())?;
    assert_eq!(all.len(), catalog.len());
    assert!(
        all.iter()
            .zip(catalog.releases())
            .all(|(found, expected)| std::ptr::eq(*found, expected))
    );
    Ok(())
}

#[test]
fn product_and_name_filter_together() -> Result<()> {
    let ventura = lookup([("product", "macOS"), ("name", "Ventura")])?;
    assert!(!ventura.is_empty());
    for release in &ventura {
        assert_eq!(release.product(), "macOS");
        assert_eq!(release.name(), "Ventura");
        assert!(release.version().starts_with("13."), "{release}");
    }

    let typed = Catalog::builtin().select(&Query::new().product("macOS").name("Ventura"));
    assert_eq!(typed, ventura);
    Ok(())
}

#[test]
fn lookup_is_case_sensitive() -> Result<()> {
    assert!(lookup([("name", "ventura")])?.is_empty());
    assert!(lookup([("product", "MacOS")])?.is_empty());
    Ok(())
}

#[test]
fn unknown_attribute_is_rejected() {
    let err = lookup([("foo", "bar")]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedAttribute(ref name) if name == "foo"));

    let err = lookup([("build", "22G74"), ("codename", "Ventura")]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedAttribute(ref name) if name == "codename"));
}

#[test]
fn every_attribute_name_is_accepted() -> Result<()> {
    let sample = lookup_by_build("22G513")?;
    for attribute in Attribute::ALL {
        let value = attribute.value_of(sample).expect("22G513 carries every field");
        let found = lookup([(attribute.as_str(), value)])?;
        assert!(found.iter().any(|r| r.build() == "22G513"), "{attribute}");
    }
    Ok(())
}

#[test]
fn darwin_22_6_0_starts_at_ventura_13_5() -> Result<()> {
    let matches = lookup([("darwin", "22.6.0")])?;
    let earliest = matches
        .iter()
        .min_by_key(|release| release.build_datetime())
        .expect("22.6.0 has releases");
    assert_eq!(earliest.build(), "22G74");
    assert_eq!((earliest.name(), earliest.version()), ("Ventura", "13.5"));

    assert_eq!(get_release_name_and_version(Some("22.6.0"))?, ("Ventura", "13.5"));
    Ok(())
}

#[test]
fn darwin_20_6_0_starts_at_big_sur_11_5() -> Result<()> {
    assert_eq!(get_release_name_and_version(Some("20.6.0"))?, ("Big Sur", "11.5"));
    assert_eq!(
        Catalog::builtin().earliest_for_darwin("20.6.0")?.build(),
        "20G71"
    );
    Ok(())
}

#[test]
fn unknown_darwin_has_no_release() {
    let err = get_release_name_and_version(Some("42.0.0")).unwrap_err();
    assert!(matches!(err, Error::NoMatchingRelease { ref darwin } if darwin == "42.0.0"));
    assert_eq!(
        err.to_string(),
        "Unable to match Darwin version 42.0.0 to a release"
    );
}

#[test]
fn catalog_records_are_well_formed() {
    let products: BTreeSet<&str> = ["Mac OS X", "OS X", "macOS"].into_iter().collect();
    for release in Catalog::builtin().releases() {
        assert!(products.contains(release.product()), "{release}");
        assert!(!release.name().is_empty(), "{release}");
        assert!(!release.version().is_empty(), "{release}");
        assert!(!release.build().is_empty(), "{release}");
        assert_eq!(release.kernel().is_some(), release.date().is_some(), "{release}");
        assert_eq!(
            release.build_datetime().is_some(),
            release.date().is_some(),
            "{release}"
        );
    }
}

#[test]
fn conflicting_catalog_entries_are_preserved() -> Result<()> {
    assert_eq!(lookup([("build", "20G1413")])?.len(), 2);

    let sonoma = lookup([("build", "23A344")])?;
    let versions: Vec<&str> = sonoma.iter().map(|r| r.version()).collect();
    assert_eq!(versions, ["14.0 RC2", "14.0"]);
    Ok(())
}

#[test]
fn index_lookup_by_build() -> Result<()> {
    let release = lookup_by_build("22G513")?;
    assert_eq!(release.product(), "macOS");
    assert_eq!(release.version(), "13.6.4");
    assert_eq!(release.darwin(), Some("22.6.0"));

    let err = lookup_by_build("21G74").unwrap_err();
    assert!(matches!(err, Error::UnknownBuild(ref build) if build == "21G74"));
    Ok(())
}

#[test]
fn index_keeps_last_duplicate() -> Result<()> {
    let release = lookup_by_build("23A344")?;
    assert_eq!(release.version(), "14.0");
    assert_eq!(release.kernel(), Some("xnu-10002.1.13~1"));
    Ok(())
}

#[test]
fn index_is_independent_of_catalog() -> Result<()> {
    assert!(!lookup([("build", "Beaker1N5")])?.is_empty());
    assert!(matches!(
        BuildIndex::builtin().full_name("Beaker1N5"),
        Err(Error::UnknownBuild(_))
    ));
    assert!(BuildIndex::builtin().len() < Catalog::builtin().len());
    Ok(())
}

#[test]
fn index_full_name_format() -> Result<()> {
    assert_eq!(
        macos_releases::full_name_for_build(Some("22G513"))?,
        "macOS 13.6.4 Ventura (darwin 22.6.0, build 22G513)"
    );
    assert_eq!(
        BuildIndex::builtin().full_name("4K78")?,
        "Mac OS X 10.0 Cheetah (darwin 1.3, build 4K78)"
    );
    Ok(())
}

#[test]
fn index_builds_are_unique_and_sorted() {
    let builds: Vec<&str> = BuildIndex::builtin().builds().collect();
    let mut sorted = builds.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(builds, sorted);
    assert_eq!(builds.len(), BuildIndex::builtin().len());
}

#[test]
fn host_release_matches_fixed_reports() -> Result<()> {
    let host = StaticHost::new(VENTURA_13_6_4_SW_VERS, "22.6.0", VENTURA_13_6_4_UNAME);
    let release = Catalog::builtin().host_release(&host)?;
    assert_eq!(release.build(), "22G513");
    assert_eq!(release.full_name(), "macOS Ventura 13.6.4");

    let (name, version) = Catalog::builtin().release_name_and_version(None, &host)?;
    assert_eq!((name, version), ("Ventura", "13.6.4"));
    Ok(())
}

#[test]
fn host_release_skips_undated_duplicates() -> Result<()> {
    let host = StaticHost::new(
        sw_vers_report("macOS", "14.0", "23A344"),
        "23.0.0",
        uname_version("23.0.0", "Fri Sep 15 14:41:34 PDT 2023", "xnu-10002.1.13~1"),
    );
    assert_eq!(Catalog::builtin().host_release(&host)?.version(), "14.0");
    Ok(())
}

#[test]
fn host_release_compares_dates_verbatim() -> Result<()> {
    let padded = StaticHost::new(
        sw_vers_report("macOS", "11.7.9", "20G1426"),
        "20.6.0",
        uname_version("20.6.0", "Thu Jul  6 22:12:47 PDT 2023", "xnu-7195.141.49.702.12~1"),
    );
    assert_eq!(Catalog::builtin().host_release(&padded)?.version(), "11.7.9");

    let collapsed = StaticHost::new(
        sw_vers_report("macOS", "11.7.9", "20G1426"),
        "20.6.0",
        uname_version("20.6.0", "Thu Jul 6 22:12:47 PDT 2023", "xnu-7195.141.49.702.12~1"),
    );
    assert!(matches!(
        Catalog::builtin().host_release(&collapsed),
        Err(Error::HostReleaseNotFound { .. })
    ));
    Ok(())
}

#[test]
fn host_release_without_kernel_metadata_is_not_found() {
    let host = StaticHost::new(
        sw_vers_report("macOS", "12.5", "21G72"),
        "21.6.0",
        uname_version("21.6.0", "Wed Jun 22 20:29:53 PDT 2022", "xnu-8020.140.41~1"),
    );
    match Catalog::builtin().host_release(&host) {
        Err(Error::HostReleaseNotFound { criteria }) => {
            assert_eq!(
                criteria,
                "build 21G72, darwin 21.6.0, kernel xnu-8020.140.41~1, date Wed Jun 22 20:29:53 PDT 2022"
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn host_release_rejects_malformed_uname() {
    let host = StaticHost::new(VENTURA_13_6_4_SW_VERS, "22.6.0", "Darwin Kernel Version 22.6.0");
    match Catalog::builtin().host_release(&host) {
        Err(Error::MalformedHostMetadata { value, .. }) => {
            assert_eq!(value, "Darwin Kernel Version 22.6.0");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn host_release_rejects_malformed_sw_vers() {
    let host = StaticHost::new("ProductName macOS\nBuildVersion\n", "22.6.0", VENTURA_13_6_4_UNAME);
    assert!(matches!(
        Catalog::builtin().host_release(&host),
        Err(Error::MalformedHostMetadata { .. })
    ));
}

#[test]
fn sw_vers_report_fixture_parses() -> Result<()> {
    let parsed = SwVers::parse(&sw_vers_report("macOS", "14.3.1", "23D60"))?;
    assert_eq!(parsed.product_name()?, "macOS");
    assert_eq!(parsed.product_version()?, "14.3.1");
    assert_eq!(parsed.build_version()?, "23D60");
    Ok(())
}

#[test]
fn release_serializes_present_fields_only() -> Result<()> {
    let value = serde_json::to_value(lookup_by_build("4K78")?)?;
    assert_eq!(
        value,
        serde_json::json!({
            "product": "Mac OS X",
            "name": "Cheetah",
            "version": "10.0",
            "build": "4K78",
            "darwin": "1.3"
        })
    );

    let round_trip: Release = serde_json::from_value(serde_json::to_value(lookup_by_build("22G513")?)?)?;
    assert_eq!(&round_trip, lookup_by_build("22G513")?);
    Ok(())
}
