use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported release attribute: [{0}]")]
    UnsupportedAttribute(String),

    #[error("{detail}: [{value}]")]
    MalformedHostMetadata { detail: &'static str, value: String },

    #[error("Unable to match host release: {criteria}")]
    HostReleaseNotFound { criteria: String },

    #[error("Host release is ambiguous ({matches} matches): {criteria}")]
    HostReleaseAmbiguous { criteria: String, matches: usize },

    #[error("Unable to match Darwin version {darwin} to a release")]
    NoMatchingRelease { darwin: String },

    #[error("Unknown build '{0}'")]
    UnknownBuild(String),

    #[error(transparent)]
    Host(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(detail: &'static str, value: impl Into<String>) -> Self {
        Error::MalformedHostMetadata {
            detail,
            value: value.into(),
        }
    }
}
