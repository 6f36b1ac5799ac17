use crate::country::CountryCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque unique identifier of a visa record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisaId(String);

impl VisaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visa category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    Tourist,
    Business,
    Work,
    Student,
    Other,
}

impl VisaType {
    pub fn label(&self) -> &'static str {
        match self {
            VisaType::Tourist => "Tourist",
            VisaType::Business => "Business",
            VisaType::Work => "Work",
            VisaType::Student => "Student",
            VisaType::Other => "Other",
        }
    }
}

impl FromStr for VisaType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tourist" => Ok(VisaType::Tourist),
            "business" => Ok(VisaType::Business),
            "work" => Ok(VisaType::Work),
            "student" => Ok(VisaType::Student),
            "other" => Ok(VisaType::Other),
            _ => Err(format!("Unknown visa type: {}", s)),
        }
    }
}

/// Full day-precision date; all three fields are mandatory for visas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// `None` for combinations that do not name a real calendar day.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A visa with its stay budget.
///
/// `total_days_used` is cumulative; for Schengen visas it is the
/// cross-country total, not a per-country figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRecord {
    pub id: VisaId,
    pub country_code: CountryCode,
    #[serde(rename = "type")]
    pub visa_type: VisaType,
    pub is_schengen: bool,
    pub issue_date: CalendarDate,
    pub expiry_date: CalendarDate,
    pub max_stay_days: i64,
    pub total_days_used: i64,
    pub multiple_entry: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VisaRecord {
    /// Days of stay budget left. Negative means overstay; callers rank
    /// negative values as most urgent rather than treating them as errors.
    pub fn remaining_days(&self) -> i64 {
        self.max_stay_days - self.total_days_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_days_may_go_negative() {
        let visa = VisaRecord {
            id: VisaId::new("v1"),
            country_code: CountryCode::from("FR"),
            visa_type: VisaType::Tourist,
            is_schengen: true,
            issue_date: CalendarDate::new(2025, 1, 1),
            expiry_date: CalendarDate::new(2026, 1, 1),
            max_stay_days: 90,
            total_days_used: 95,
            multiple_entry: true,
            note: None,
        };
        assert_eq!(visa.remaining_days(), -5);
    }

    #[test]
    fn test_calendar_date_rejects_impossible_days() {
        assert!(CalendarDate::new(2025, 2, 30).to_naive().is_none());
        assert!(CalendarDate::new(2024, 2, 29).to_naive().is_some());
    }

    #[test]
    fn test_visa_type_column_name() {
        let json = serde_json::json!({
            "id": "v1",
            "countryCode": "DE",
            "type": "work",
            "isSchengen": true,
            "issueDate": { "year": 2025, "month": 3, "day": 1 },
            "expiryDate": { "year": 2027, "month": 3, "day": 1 },
            "maxStayDays": 365,
            "totalDaysUsed": 10,
            "multipleEntry": true
        });
        let visa: VisaRecord = serde_json::from_value(json).unwrap();
        assert_eq!(visa.visa_type, VisaType::Work);
    }
}
