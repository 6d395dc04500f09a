//! Release catalog.
//!
//! Ordered collection of every known release, pre-release and beta builds
//! included, answering exact-match attribute queries. The builtin catalog is
//! static data; `Catalog::new` wraps caller-supplied records with the same
//! query surface.

pub mod query;
mod table;

pub use query::{Attribute, Query};

use crate::error::{Error, Result};
use crate::host::{HostInfoProvider, HostMetadata, SystemHost};
use crate::release::Release;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    releases: Cow::Borrowed(table::RELEASES),
});

#[derive(Clone, Debug)]
/// Releases in curation order.
pub struct Catalog {
    releases: Cow<'static, [Release]>,
}

impl Catalog {
    /// The catalog compiled into this crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            releases: Cow::Owned(releases),
        }
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Look up releases by `(attribute name, value)` pairs.
    ///
    /// Every pair must match exactly. No pairs returns the whole catalog.
    /// Unknown attribute names fail before anything is filtered.
    pub fn lookup<I, K, V>(&self, criteria: I) -> Result<Vec<&Release>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let query = Query::from_pairs(criteria)?;
        Ok(self.select(&query))
    }

    /// Typed form of [`Catalog::lookup`]; results keep catalog order.
    pub fn select(&self, query: &Query) -> Vec<&Release> {
        self.releases
            .iter()
            .filter(|release| query.matches(release))
            .collect()
    }

    /// Identify the release `host` is running.
    ///
    /// Build, Darwin version, kernel build string and kernel date must all
    /// match, and exactly one record may match them.
    pub fn host_release(&self, host: &dyn HostInfoProvider) -> Result<&Release> {
        let metadata = HostMetadata::read(host)?;
        let query = Query::new()
            .build(metadata.build)
            .darwin(metadata.darwin)
            .kernel(metadata.kernel)
            .date(metadata.date);

        let mut matches = self.select(&query);
        debug!(criteria = %query, matches = matches.len(), "matched host release");
        match matches.len() {
            0 => Err(Error::HostReleaseNotFound {
                criteria: query.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(Error::HostReleaseAmbiguous {
                criteria: query.to_string(),
                matches: count,
            }),
        }
    }

    /// Earliest-built release carrying `darwin`.
    ///
    /// A Darwin version usually spans several point releases; the first build
    /// is taken as the one that introduced it. Undated records count as
    /// earliest, and ties keep catalog order.
    pub fn earliest_for_darwin(&self, darwin: &str) -> Result<&Release> {
        self.select(&Query::new().darwin(darwin))
            .into_iter()
            .min_by_key(|release| release.build_datetime())
            .ok_or_else(|| Error::NoMatchingRelease {
                darwin: darwin.to_string(),
            })
    }

    /// `(name, version)` for `darwin`, or for the running host when no
    /// Darwin version (or an empty one) is given.
    pub fn release_name_and_version(
        &self,
        darwin: Option<&str>,
        host: &dyn HostInfoProvider,
    ) -> Result<(&str, &str)> {
        let release = match darwin.filter(|d| !d.is_empty()) {
            Some(darwin) => self.earliest_for_darwin(darwin)?,
            None => self.host_release(host)?,
        };
        Ok((release.name(), release.version()))
    }
}

/// Look up releases in the builtin catalog. See [`Catalog::lookup`].
pub fn lookup<I, K, V>(criteria: I) -> Result<Vec<&'static Release>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    Catalog::builtin().lookup(criteria)
}

/// Identify the running machine's release, querying it afresh.
pub fn get_host_release() -> Result<&'static Release> {
    Catalog::builtin().host_release(&SystemHost::new())
}

/// `(name, version)` of the earliest release with `darwin`, or of the
/// running machine when `darwin` is `None`.
pub fn get_release_name_and_version(
    darwin: Option<&str>,
) -> Result<(&'static str, &'static str)> {
    Catalog::builtin().release_name_and_version(darwin, &SystemHost::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    const VENTURA_SW_VERS: &str = "ProductName:\tmacOS\nProductVersion:\t13.6.4\nBuildVersion:\t22G513\n";
    const VENTURA_UNAME: &str = "Darwin Kernel Version 22.6.0: Sun Dec 17 22:18:09 PST 2023; root:xnu-8796.141.3.703.2~2/RELEASE_ARM64_T6000";

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            Release::new("macOS", "Ventura", "13.5", "22G74")
                .with_darwin("22.6.0")
                .with_kernel("xnu-8796.141.3~6")
                .with_date("Wed Jul 5 22:21:56 PDT 2023"),
            Release::new("macOS", "Ventura", "13.6", "22G120")
                .with_darwin("22.6.0")
                .with_kernel("xnu-8796.141.3.700.8~1")
                .with_date("Fri Sep 15 13:39:52 PDT 2023"),
            Release::new("macOS", "Ventura", "13.6 RC", "22G120").with_darwin("22.6.0"),
            Release::new("macOS", "Ventura", "13.6 RC", "22G120").with_darwin("22.6.0"),
        ])
    }

    #[test]
    fn empty_lookup_returns_everything_in_order() {
        let catalog = small_catalog();
        let all = catalog.lookup(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(all.len(), catalog.len());
        for (found, expected) in all.iter().zip(catalog.releases()) {
            assert!(std::ptr::eq(*found, expected));
        }
    }

    #[test]
    fn lookup_keeps_duplicates() {
        let catalog = small_catalog();
        let found = catalog.lookup([("build", "22G120"), ("version", "13.6 RC")]).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn undated_records_sort_first() {
        let catalog = small_catalog();
        assert_eq!(catalog.earliest_for_darwin("22.6.0").unwrap().version(), "13.6 RC");
    }

    #[test]
    fn earliest_uses_chronology_not_text_order() {
        let catalog = Catalog::new(small_catalog().releases()[..2].to_vec());
        // "Fri Sep 15" sorts before "Wed Jul 5" as text.
        assert_eq!(catalog.earliest_for_darwin("22.6.0").unwrap().version(), "13.5");
    }

    #[test]
    fn earliest_for_unknown_darwin_fails() {
        let err = small_catalog().earliest_for_darwin("99.0.0").unwrap_err();
        assert!(matches!(err, Error::NoMatchingRelease { ref darwin } if darwin == "99.0.0"));
    }

    #[test]
    fn host_release_requires_a_match() {
        let host = StaticHost::new(VENTURA_SW_VERS, "22.6.0", VENTURA_UNAME);
        let err = small_catalog().host_release(&host).unwrap_err();
        match err {
            Error::HostReleaseNotFound { criteria } => {
                assert!(criteria.contains("build 22G513"), "{criteria}");
                assert!(criteria.contains("kernel xnu-8796.141.3.703.2~2"), "{criteria}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn host_release_rejects_ambiguity() {
        let entry = Release::new("macOS", "Ventura", "13.6.4", "22G513")
            .with_darwin("22.6.0")
            .with_kernel("xnu-8796.141.3.703.2~2")
            .with_date("Sun Dec 17 22:18:09 PST 2023");
        let catalog = Catalog::new(vec![entry.clone(), entry]);
        let host = StaticHost::new(VENTURA_SW_VERS, "22.6.0", VENTURA_UNAME);
        assert!(matches!(
            catalog.host_release(&host),
            Err(Error::HostReleaseAmbiguous { matches: 2, .. })
        ));
    }

    #[test]
    fn empty_darwin_means_host() {
        let catalog = Catalog::new(vec![
            Release::new("macOS", "Ventura", "13.6.4", "22G513")
                .with_darwin("22.6.0")
                .with_kernel("xnu-8796.141.3.703.2~2")
                .with_date("Sun Dec 17 22:18:09 PST 2023"),
        ]);
        let host = StaticHost::new(VENTURA_SW_VERS, "22.6.0", VENTURA_UNAME);
        assert_eq!(
            catalog.release_name_and_version(Some(""), &host).unwrap(),
            ("Ventura", "13.6.4")
        );
    }
}
