//! Build-keyed release index.
//!
//! A second dataset curated independently of the catalog and keyed directly
//! by build identifier. It is not cross-referenced with the catalog: a build
//! the catalog knows can still be unknown here, and the two may disagree on
//! metadata for the same build.

pub mod snapshot;
mod table;

pub use snapshot::{host_snapshot, init_host_snapshot};

use crate::error::{Error, Result};
use crate::host::{HostInfoProvider, SystemHost};
use crate::release::Release;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<BuildIndex> = LazyLock::new(|| {
    let index = BuildIndex::from_releases(table::ENTRIES.iter().cloned());
    debug!(builds = index.len(), "built release index");
    index
});

#[derive(Clone, Debug, Default)]
/// Releases keyed by build identifier.
pub struct BuildIndex {
    by_build: BTreeMap<String, Release>,
}

impl BuildIndex {
    /// The index compiled into this crate.
    pub fn builtin() -> &'static BuildIndex {
        &BUILTIN
    }

    /// Key `releases` by build. A build seen twice keeps its last record.
    pub fn from_releases(releases: impl IntoIterator<Item = Release>) -> Self {
        let mut by_build = BTreeMap::new();
        for release in releases {
            by_build.insert(release.build().to_string(), release);
        }
        Self { by_build }
    }

    pub fn get(&self, build: &str) -> Option<&Release> {
        self.by_build.get(build)
    }

    pub fn lookup_by_build(&self, build: &str) -> Result<&Release> {
        self.get(build)
            .ok_or_else(|| Error::UnknownBuild(build.to_string()))
    }

    /// `"<product> <version> <name> (darwin <darwin>, build <build>)"`.
    pub fn full_name(&self, build: &str) -> Result<String> {
        let release = self.lookup_by_build(build)?;
        Ok(format!(
            "{} {} {} (darwin {}, build {})",
            release.product(),
            release.version(),
            release.name(),
            release.darwin().unwrap_or_default(),
            build
        ))
    }

    /// Indexed builds in sorted order.
    pub fn builds(&self) -> impl Iterator<Item = &str> {
        self.by_build.keys().map(String::as_str)
    }

    pub fn releases(&self) -> impl Iterator<Item = &Release> {
        self.by_build.values()
    }

    pub fn len(&self) -> usize {
        self.by_build.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_build.is_empty()
    }
}

/// Look up a build in the builtin index.
pub fn lookup_by_build(build: &str) -> Result<&'static Release> {
    BuildIndex::builtin().lookup_by_build(build)
}

/// `ProductName` from the cached host snapshot.
pub fn host_product_name() -> Result<&'static str> {
    host_snapshot()?.product_name()
}

/// `ProductVersion` from the cached host snapshot.
pub fn host_version() -> Result<&'static str> {
    host_snapshot()?.product_version()
}

/// `BuildVersion` from the cached host snapshot.
pub fn host_build() -> Result<&'static str> {
    host_snapshot()?.build_version()
}

/// Live Darwin version of the running kernel; read on every call.
pub fn host_darwin_version() -> Result<String> {
    darwin_version_of(&SystemHost::new())
}

fn darwin_version_of(host: &dyn HostInfoProvider) -> Result<String> {
    Ok(host.uname()?.release)
}

/// Full name for `build` from the builtin index, defaulting to the cached
/// host build.
pub fn full_name_for_build(build: Option<&str>) -> Result<String> {
    let build = match build {
        Some(build) => build,
        None => host_build()?,
    };
    BuildIndex::builtin().full_name(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[test]
    fn later_duplicates_overwrite_earlier() {
        let index = BuildIndex::from_releases([
            Release::new("macOS", "Sonoma", "14.0 RC2", "23A344").with_darwin("23.0.0"),
            Release::new("macOS", "Sonoma", "14.0", "23A344").with_darwin("23.0.0"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup_by_build("23A344").unwrap().version(), "14.0");
    }

    #[test]
    fn unknown_build_is_an_error() {
        let index = BuildIndex::default();
        assert!(index.is_empty());
        let err = index.lookup_by_build("21G74").unwrap_err();
        assert!(matches!(err, Error::UnknownBuild(ref build) if build == "21G74"));
        assert_eq!(err.to_string(), "Unknown build '21G74'");
    }

    #[test]
    fn full_name_formats_darwin_and_build() {
        let index = BuildIndex::from_releases([
            Release::new("macOS", "Ventura", "13.6.4", "22G513").with_darwin("22.6.0"),
            Release::new("Mac OS X", "Cheetah", "10.0", "4K78"),
        ]);
        assert_eq!(
            index.full_name("22G513").unwrap(),
            "macOS 13.6.4 Ventura (darwin 22.6.0, build 22G513)"
        );
        assert_eq!(
            index.full_name("4K78").unwrap(),
            "Mac OS X 10.0 Cheetah (darwin , build 4K78)"
        );
    }

    #[test]
    fn builds_iterate_sorted() {
        let index = BuildIndex::from_releases([
            Release::new("macOS", "Sonoma", "14.1", "23B74"),
            Release::new("macOS", "Sonoma", "14.0", "23A344"),
        ]);
        assert_eq!(index.builds().collect::<Vec<_>>(), ["23A344", "23B74"]);
    }

    #[test]
    fn darwin_version_reads_uname_release() {
        let host = StaticHost::new("", "23.3.0", "");
        assert_eq!(darwin_version_of(&host).unwrap(), "23.3.0");
    }
}
