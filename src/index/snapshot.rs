//! Process-wide `sw_vers` snapshot behind the build index host accessors.
//!
//! The snapshot is captured once, by [`init_host_snapshot`] or by the first
//! accessor that needs it, and is never refreshed. A process that outlives an
//! OS update keeps reporting the version it started on.

use crate::error::Result;
use crate::host::{HostInfoProvider, SwVers, SystemHost};
use std::sync::OnceLock;
use tracing::debug;

static SNAPSHOT: OnceLock<SwVers> = OnceLock::new();

/// Capture the snapshot from `host` unless one already exists.
///
/// Returns the snapshot in effect; once captured, later calls ignore `host`.
/// A failed capture leaves nothing cached, so the next call tries again.
pub fn init_host_snapshot(host: &dyn HostInfoProvider) -> Result<&'static SwVers> {
    if let Some(existing) = SNAPSHOT.get() {
        return Ok(existing);
    }
    let captured = SwVers::read(host)?;
    debug!("captured host sw_vers snapshot");
    Ok(SNAPSHOT.get_or_init(|| captured))
}

/// The cached snapshot, capturing it from the live system on first use.
pub fn host_snapshot() -> Result<&'static SwVers> {
    init_host_snapshot(&SystemHost::new())
}
