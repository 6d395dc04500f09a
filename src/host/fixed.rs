use crate::host::{HostInfoProvider, Uname};

/// Provider that replays fixed `sw_vers` and `uname` strings.
///
/// Useful off-host: tests, and callers that collected the reports from
/// another machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticHost {
    sw_vers: String,
    uname: Uname,
}

impl StaticHost {
    pub fn new(
        sw_vers: impl Into<String>,
        release: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            sw_vers: sw_vers.into(),
            uname: Uname {
                release: release.into(),
                version: version.into(),
            },
        }
    }
}

impl HostInfoProvider for StaticHost {
    fn sw_vers(&self) -> anyhow::Result<String> {
        Ok(self.sw_vers.clone())
    }

    fn uname(&self) -> anyhow::Result<Uname> {
        Ok(self.uname.clone())
    }
}
