//! Release records shared by the catalog and the build index.
//!
//! A record is immutable once constructed. The builtin tables borrow their
//! strings from static data; records built by callers own theirs. Optional
//! kernel metadata is only known for a minority of builds, mostly recent
//! ones, and is never synthesized.

use crate::kernel_date::parse_kernel_date;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

type Text = Cow<'static, str>;

/// One OS build and its release metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    product: Text,
    name: Text,
    version: Text,
    build: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    darwin: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kernel: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<Text>,
}

impl Release {
    /// Create a record with only the required fields set.
    pub fn new(
        product: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        version: impl Into<Cow<'static, str>>,
        build: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            product: product.into(),
            name: name.into(),
            version: version.into(),
            build: build.into(),
            darwin: None,
            kernel: None,
            date: None,
        }
    }

    pub fn with_darwin(mut self, darwin: impl Into<Cow<'static, str>>) -> Self {
        self.darwin = Some(darwin.into());
        self
    }

    pub fn with_kernel(mut self, kernel: impl Into<Cow<'static, str>>) -> Self {
        self.kernel = Some(kernel.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<Cow<'static, str>>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Static-table constructor; borrows every field.
    pub(crate) const fn from_static(
        product: &'static str,
        name: &'static str,
        version: &'static str,
        build: &'static str,
        darwin: &'static str,
        kernel: Option<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            product: Cow::Borrowed(product),
            name: Cow::Borrowed(name),
            version: Cow::Borrowed(version),
            build: Cow::Borrowed(build),
            darwin: Some(Cow::Borrowed(darwin)),
            kernel: match kernel {
                Some((kernel, _)) => Some(Cow::Borrowed(kernel)),
                None => None,
            },
            date: match kernel {
                Some((_, date)) => Some(Cow::Borrowed(date)),
                None => None,
            },
        }
    }

    /// Product line, e.g. "Mac OS X", "OS X" or "macOS".
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Marketing name, e.g. "Ventura".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product version; opaque, may carry suffixes such as "RC2" or "(a)".
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build(&self) -> &str {
        &self.build
    }

    /// Darwin kernel version, e.g. "22.6.0".
    pub fn darwin(&self) -> Option<&str> {
        self.darwin.as_deref()
    }

    /// Kernel build string, e.g. "xnu-8796.141.3~6".
    pub fn kernel(&self) -> Option<&str> {
        self.kernel.as_deref()
    }

    /// Kernel build date as reported by `uname -v`.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// `"<product> <name> <version>"`, e.g. "macOS Ventura 13.5".
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.product, self.name, self.version)
    }

    /// Kernel build date as a timestamp.
    ///
    /// Returns `None` when the date is absent or cannot be parsed; the date
    /// is advisory and never an error.
    pub fn build_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.date().and_then(parse_kernel_date)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_round_trips_fields() {
        let release = Release::new("macOS", "Ventura", "13.6.4", "22G513")
            .with_darwin("22.6.0")
            .with_kernel("xnu-8796.141.3.703.2~2")
            .with_date("Sun Dec 17 22:18:09 PST 2023");
        assert_eq!(release.product(), "macOS");
        assert_eq!(release.name(), "Ventura");
        assert_eq!(release.version(), "13.6.4");
        assert_eq!(release.build(), "22G513");
        assert_eq!(release.darwin(), Some("22.6.0"));
        assert_eq!(release.kernel(), Some("xnu-8796.141.3.703.2~2"));
        assert_eq!(release.date(), Some("Sun Dec 17 22:18:09 PST 2023"));
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let release = Release::new("Mac OS X", "Cheetah", "10.0", "4K78".to_string());
        assert_eq!(release.darwin(), None);
        assert_eq!(release.kernel(), None);
        assert_eq!(release.date(), None);
        assert_eq!(release.build_datetime(), None);
    }

    #[test]
    fn static_constructor_matches_builder() {
        let from_static = Release::from_static(
            "macOS",
            "Ventura",
            "13.5",
            "22G74",
            "22.6.0",
            Some(("xnu-8796.141.3~6", "Wed Jul 5 22:21:56 PDT 2023")),
        );
        let built = Release::new("macOS", "Ventura", "13.5", "22G74")
            .with_darwin("22.6.0".to_string())
            .with_kernel("xnu-8796.141.3~6")
            .with_date("Wed Jul 5 22:21:56 PDT 2023");
        assert_eq!(from_static, built);
    }

    #[test]
    fn full_name_and_display() {
        let release = Release::new("macOS", "Sonoma", "14.3.1", "23D60");
        assert_eq!(release.full_name(), "macOS Sonoma 14.3.1");
        assert_eq!(release.to_string(), "macOS Sonoma 14.3.1 (23D60)");
    }

    #[test]
    fn build_datetime_degrades_to_none() {
        let dated = Release::new("macOS", "Ventura", "13.5", "22G74")
            .with_date("Wed Jul 5 22:21:56 PDT 2023");
        let parsed = dated.build_datetime().expect("date parses");
        assert_eq!(parsed.to_rfc3339(), "2023-07-05T22:21:56-07:00");

        let garbled = Release::new("macOS", "Ventura", "13.5", "22G74").with_date("sometime");
        assert_eq!(garbled.build_datetime(), None);
    }
}
