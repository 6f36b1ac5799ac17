use crate::date::{format_visit_range, Granularity, PartialDate};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique identifier of a visit record. Never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(String);

impl VisitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id for a newly created visit.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VisitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How the traveler got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transportation {
    Plane,
    Train,
    Car,
    Bus,
}

impl Transportation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transportation::Plane => "plane",
            Transportation::Train => "train",
            Transportation::Car => "car",
            Transportation::Bus => "bus",
        }
    }

    pub const ALL: [Transportation; 4] = [
        Transportation::Plane,
        Transportation::Train,
        Transportation::Car,
        Transportation::Bus,
    ];
}

impl fmt::Display for Transportation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Transportation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "plane" => Ok(Transportation::Plane),
            "train" => Ok(Transportation::Train),
            "car" => Ok(Transportation::Car),
            "bus" => Ok(Transportation::Bus),
            _ => Err(format!("Unknown transportation: {}", s)),
        }
    }
}

/// One recorded stay in a country.
///
/// Immutable once created; the store only supports add and delete. The
/// granularity applies to both the arrival and the departure date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub id: VisitId,
    pub arrival_date: PartialDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<PartialDate>,
    pub granularity: Granularity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation: Option<Transportation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VisitRecord {
    /// Create a validated visit record. The arrival must agree with the
    /// granularity, and the departure (when present) must be same-or-later
    /// than the arrival under the defaulted sort key.
    ///
    /// The CSV decoder bypasses this and builds records field-by-field;
    /// tolerance there is deliberate.
    pub fn new(
        id: VisitId,
        arrival_date: PartialDate,
        departure_date: Option<PartialDate>,
        granularity: Granularity,
        transportation: Option<Transportation>,
        note: Option<String>,
    ) -> Result<Self> {
        if !arrival_date.matches(granularity) {
            return Err(Error::GranularityMismatch {
                granularity,
                detail: "arrival date".to_string(),
            });
        }
        if let Some(departure) = &departure_date {
            if departure.sort_key() < arrival_date.sort_key() {
                return Err(Error::DepartureBeforeArrival);
            }
        }
        Ok(Self {
            id,
            arrival_date,
            departure_date,
            granularity,
            transportation,
            note,
        })
    }

    /// Display label for the visit's date or date range.
    pub fn date_label(&self) -> String {
        format_visit_range(&self.arrival_date, self.departure_date.as_ref(), self.granularity)
    }
}
