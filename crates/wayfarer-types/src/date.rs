use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Precision of a recorded travel date.
///
/// The granularity is the authoritative precision; the optional fields of a
/// [`PartialDate`] are expected to agree with it, and formatting falls back
/// to the bare year when they do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Year,
    Month,
    Day,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "year" => Ok(Granularity::Year),
            "month" => Ok(Granularity::Month),
            "day" => Ok(Granularity::Day),
            _ => Err(format!("Unknown granularity: {}", s)),
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A travel date whose month and day may be omitted per its granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl PartialDate {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
        }
    }

    pub fn day(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }

    /// Whether field presence agrees with the stated granularity.
    pub fn matches(&self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Year => self.month.is_none() && self.day.is_none(),
            Granularity::Month => self.month.is_some() && self.day.is_none(),
            Granularity::Day => self.month.is_some() && self.day.is_some(),
        }
    }

    /// Sortable instant for timeline ordering. Missing components default to
    /// 1, so a year-only date sorts as January 1 of that year (documented
    /// approximation). Out-of-range components clamp to January 1.
    pub fn sort_key(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
            .or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1))
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Format a date at the given precision for display.
///
/// Year granularity yields the bare year, month yields `"March 2020"`, day
/// yields `"March 5, 2020"`. When a required field is missing for the
/// stated granularity the bare year is returned (defensive default).
pub fn format_date(date: &PartialDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Month => {
            if let Some(name) = date.month.and_then(month_name) {
                return format!("{} {}", name, date.year);
            }
        }
        Granularity::Day => {
            if let (Some(name), Some(day)) = (date.month.and_then(month_name), date.day) {
                return format!("{} {}, {}", name, day, date.year);
            }
        }
        Granularity::Year => {}
    }
    date.year.to_string()
}

/// Format an arrival/departure pair for display.
///
/// Returns the arrival alone when there is no departure, collapses the pair
/// to a single string when both format identically, and otherwise joins
/// them as `"<arrival> - <departure>"`.
pub fn format_visit_range(
    arrival: &PartialDate,
    departure: Option<&PartialDate>,
    granularity: Granularity,
) -> String {
    let arrival_text = format_date(arrival, granularity);

    let Some(departure) = departure else {
        return arrival_text;
    };

    let departure_text = format_date(departure, granularity);
    if arrival_text == departure_text {
        return arrival_text;
    }

    format!("{} - {}", arrival_text, departure_text)
}

fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}
