//! Apple OS releases keyed by build identifier.
//!
//! The crate carries two independently curated datasets and the queries
//! over them:
//!
//! - [`Catalog`]: every known release in curation order, queried by any
//!   combination of product, name, version, build, Darwin version, kernel
//!   build string and kernel build date ([`lookup`], [`get_host_release`],
//!   [`get_release_name_and_version`]).
//! - [`BuildIndex`]: releases keyed by build ([`lookup_by_build`],
//!   [`full_name_for_build`]) plus accessors for the running host's
//!   `sw_vers` report, captured once per process.
//!
//! The datasets overlap but are not reconciled; each answers from its own
//! table. Host access goes through [`HostInfoProvider`], so every query can
//! be exercised off-host with [`StaticHost`].

pub mod catalog;
pub mod error;
pub mod host;
pub mod index;
pub mod kernel_date;
pub mod release;
pub mod runtime;

pub use catalog::{
    Attribute, Catalog, Query, get_host_release, get_release_name_and_version, lookup,
};
pub use error::{Error, Result};
pub use host::{
    HostInfoProvider, HostMetadata, KernelIdentity, StaticHost, SwVers, SystemHost, Uname,
};
pub use index::{
    BuildIndex, full_name_for_build, host_build, host_darwin_version, host_product_name,
    host_snapshot, host_version, init_host_snapshot, lookup_by_build,
};
pub use kernel_date::parse_kernel_date;
pub use release::Release;
