//! Attribute criteria for catalog lookups.
//!
//! Names follow the record fields exactly. Parsing is strict: unknown names
//! are an error rather than a silently ignored filter.

use crate::error::{Error, Result};
use crate::release::Release;
use std::fmt;

/// Release attribute usable as a lookup criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Product,
    Name,
    Version,
    Build,
    Darwin,
    Kernel,
    Date,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Attribute::Product,
        Attribute::Name,
        Attribute::Version,
        Attribute::Build,
        Attribute::Darwin,
        Attribute::Kernel,
        Attribute::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Product => "product",
            Attribute::Name => "name",
            Attribute::Version => "version",
            Attribute::Build => "build",
            Attribute::Darwin => "darwin",
            Attribute::Kernel => "kernel",
            Attribute::Date => "date",
        }
    }

    /// The record's value for this attribute, if it has one.
    pub fn value_of<'r>(&self, release: &'r Release) -> Option<&'r str> {
        match self {
            Attribute::Product => Some(release.product()),
            Attribute::Name => Some(release.name()),
            Attribute::Version => Some(release.version()),
            Attribute::Build => Some(release.build()),
            Attribute::Darwin => release.darwin(),
            Attribute::Kernel => release.kernel(),
            Attribute::Date => release.date(),
        }
    }
}

impl TryFrom<&str> for Attribute {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == value)
            .ok_or_else(|| Error::UnsupportedAttribute(value.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunction of exact-match criteria.
///
/// An empty query matches every record. Adding the same attribute twice
/// requires both values to match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    criteria: Vec<(Attribute, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from `(name, value)` pairs, rejecting unknown names
    /// before any criterion is kept.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let criteria = pairs
            .into_iter()
            .map(|(key, value)| -> Result<(Attribute, String)> {
                Ok((Attribute::try_from(key.as_ref())?, value.into()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { criteria })
    }

    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.criteria.push((attribute, value.into()));
        self
    }

    pub fn product(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Product, value)
    }

    pub fn name(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Name, value)
    }

    pub fn version(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Version, value)
    }

    pub fn build(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Build, value)
    }

    pub fn darwin(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Darwin, value)
    }

    pub fn kernel(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Kernel, value)
    }

    pub fn date(self, value: impl Into<String>) -> Self {
        self.with(Attribute::Date, value)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn criteria(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.criteria
            .iter()
            .map(|(attribute, value)| (*attribute, value.as_str()))
    }

    /// True when every criterion equals the record's field exactly.
    /// Absent optional fields never match.
    pub fn matches(&self, release: &Release) -> bool {
        self.criteria
            .iter()
            .all(|(attribute, value)| attribute.value_of(release) == Some(value.as_str()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (attribute, value)) in self.criteria.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute} {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::try_from(attribute.as_str()).unwrap(), attribute);
        }
    }

    #[test]
    fn attribute_parsing_is_case_sensitive() {
        assert!(matches!(
            Attribute::try_from("Build"),
            Err(Error::UnsupportedAttribute(name)) if name == "Build"
        ));
    }

    #[test]
    fn from_pairs_rejects_unknown_names() {
        let err = Query::from_pairs([("build", "22G74"), ("foo", "bar")]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedAttribute(ref name) if name == "foo"));
        assert_eq!(err.to_string(), "Unsupported release attribute: [foo]");
    }

    #[test]
    fn matches_requires_every_criterion() {
        let release = Release::new("macOS", "Ventura", "13.5", "22G74").with_darwin("22.6.0");
        assert!(Query::new().matches(&release));
        assert!(Query::new().name("Ventura").darwin("22.6.0").matches(&release));
        assert!(!Query::new().name("Ventura").darwin("22.5.0").matches(&release));
        assert!(!Query::new().name("ventura").matches(&release));
    }

    #[test]
    fn absent_fields_never_match() {
        let release = Release::new("macOS", "Ventura", "13.5", "22G74");
        assert!(!Query::new().kernel("").matches(&release));
        assert!(!Query::new().date("").matches(&release));
    }

    #[test]
    fn repeated_attribute_is_a_conjunction() {
        let release = Release::new("macOS", "Ventura", "13.5", "22G74");
        assert!(!Query::new().build("22G74").build("22G90").matches(&release));
    }

    #[test]
    fn display_lists_criteria_in_order() {
        let query = Query::new().build("22G74").darwin("22.6.0");
        assert_eq!(query.to_string(), "build 22G74, darwin 22.6.0");
    }
}
