//! Host introspection.
//!
//! The lookup code never talks to the operating system directly; it asks a
//! [`HostInfoProvider`] for the raw `sw_vers` report and the `uname(3)`
//! strings, then parses them here. [`SystemHost`] reads the live machine and
//! [`StaticHost`] replays fixed strings.

pub mod fixed;
pub mod system;

pub use fixed::StaticHost;
pub use system::SystemHost;

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

const PRODUCT_NAME: &str = "ProductName";
const PRODUCT_VERSION: &str = "ProductVersion";
const BUILD_VERSION: &str = "BuildVersion";

/// Source of raw host version metadata.
pub trait HostInfoProvider {
    /// Full text printed by the `sw_vers` utility.
    fn sw_vers(&self) -> anyhow::Result<String>;

    /// Kernel release and version strings as reported by `uname(3)`.
    fn uname(&self) -> anyhow::Result<Uname>;
}

/// The two `uname(3)` fields the lookups need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uname {
    /// Darwin version, e.g. `22.6.0`.
    pub release: String,
    /// Free-text kernel version, e.g.
    /// `Darwin Kernel Version 22.6.0: Wed Jul  5 22:21:56 PDT 2023; root:xnu-8796.141.3~6/RELEASE_X86_64`.
    pub version: String,
}

/// Parsed `sw_vers` report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwVers {
    entries: BTreeMap<String, String>,
}

impl SwVers {
    /// Parse `Key: value` lines.
    ///
    /// Each line is split on whitespace; the first token minus its trailing
    /// colon is the key and the second token is the value, so values
    /// containing spaces keep only their first word. Any line with fewer than
    /// two tokens is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for line in text.lines() {
            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                return Err(Error::malformed("Unrecognized sw_vers line", line));
            };
            let key = key.strip_suffix(':').unwrap_or(key);
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Self { entries })
    }

    /// Read and parse the report from `host`.
    pub fn read(host: &dyn HostInfoProvider) -> Result<Self> {
        let text = host.sw_vers()?;
        let parsed = Self::parse(&text)?;
        debug!(keys = parsed.entries.len(), "parsed sw_vers report");
        Ok(parsed)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn product_name(&self) -> Result<&str> {
        self.require(PRODUCT_NAME)
    }

    pub fn product_version(&self) -> Result<&str> {
        self.require(PRODUCT_VERSION)
    }

    pub fn build_version(&self) -> Result<&str> {
        self.require(BUILD_VERSION)
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| Error::malformed("sw_vers report is missing", key))
    }
}

/// Kernel build date and build string carried in the `uname` version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelIdentity {
    pub date: String,
    pub kernel: String,
}

impl KernelIdentity {
    /// Split `<banner>: <date>; <owner>:<kernel>/<config>`.
    ///
    /// Each delimiter must be present, in order; the date keeps its original
    /// spacing.
    pub fn parse(version: &str) -> Result<Self> {
        let malformed = || Error::malformed("Unrecognized uname version", version);

        let (_, rest) = version.split_once(": ").ok_or_else(malformed)?;
        let (date, rest) = rest.split_once("; ").ok_or_else(malformed)?;
        let (_, rest) = rest.split_once(':').ok_or_else(malformed)?;
        let (kernel, _) = rest.split_once('/').ok_or_else(malformed)?;

        Ok(Self {
            date: date.to_string(),
            kernel: kernel.to_string(),
        })
    }
}

/// Everything used to pin the running host to a catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostMetadata {
    pub build: String,
    pub darwin: String,
    pub kernel: String,
    pub date: String,
}

impl HostMetadata {
    /// Query `host` afresh and parse its reports.
    pub fn read(host: &dyn HostInfoProvider) -> Result<Self> {
        let sw_vers = SwVers::read(host)?;
        let uname = host.uname()?;
        let identity = KernelIdentity::parse(&uname.version)?;
        let metadata = Self {
            build: sw_vers.build_version()?.to_string(),
            darwin: uname.release,
            kernel: identity.kernel,
            date: identity.date,
        };
        debug!(
            build = %metadata.build,
            darwin = %metadata.darwin,
            kernel = %metadata.kernel,
            "read host metadata"
        );
        Ok(metadata)
    }
}
