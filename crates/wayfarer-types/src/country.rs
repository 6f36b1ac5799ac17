use crate::visit::VisitRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Country identifier (ISO 3166-1 alpha-2 by convention, not enforced).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CountryCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Static display metadata for a country, supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    pub flag: String,
    pub region: String,
}

/// Tracking status of a country.
///
/// Independent of visit records: a country can be visited with zero
/// recorded visits, or keep stale visits after being demoted. Status
/// changes never touch visit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryStatus {
    None,
    Visited,
    Wishlist,
}

impl CountryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryStatus::None => "none",
            CountryStatus::Visited => "visited",
            CountryStatus::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for CountryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CountryStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" => Ok(CountryStatus::None),
            "visited" => Ok(CountryStatus::Visited),
            "wishlist" => Ok(CountryStatus::Wishlist),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A catalog country joined with its tracking state, as consumed by the
/// history and statistics aggregators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryWithStatus {
    #[serde(flatten)]
    pub country: Country,
    pub status: CountryStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visits: Vec<VisitRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [CountryStatus::None, CountryStatus::Visited, CountryStatus::Wishlist] {
            assert_eq!(status.as_str().parse::<CountryStatus>().unwrap(), status);
        }
        assert!("foo".parse::<CountryStatus>().is_err());
    }
}
