use crate::catalog::CountryCatalog;
use chrono::NaiveDate;
use serde::Serialize;
use wayfarer_types::{Country, VisaRecord};

/// An unexpired visa with both of its countdowns computed.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveVisa {
    #[serde(flatten)]
    pub visa: VisaRecord,
    pub country: Country,
    /// Whole days from today to the expiry date (0 when it expires today).
    pub days_until_expiry: i64,
    /// Stay budget left; negative means overstay and ranks most urgent.
    pub remaining_days: i64,
}

impl ActiveVisa {
    /// A visa is as urgent as its most constraining limit.
    pub fn urgency_days(&self) -> i64 {
        self.days_until_expiry.min(self.remaining_days)
    }
}

/// Visas partitioned by expiry, active ones ranked most-urgent first.
#[derive(Debug, Clone, Serialize)]
pub struct VisaReport {
    pub active: Vec<ActiveVisa>,
    pub expired: Vec<VisaRecord>,
    pub total: usize,
}

/// Severity band for a countdown, consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Critical,
    Warning,
    Normal,
}

impl Urgency {
    /// Band a day count: 7 or fewer days is critical, 30 or fewer is a
    /// warning. Applies to either of a visa's two countdowns.
    pub fn for_days(days: i64) -> Self {
        if days <= 7 {
            Urgency::Critical
        } else if days <= 30 {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// Partition visas by expiry against `today` (day-precision comparison)
/// and rank the active ones ascending by `min(days_until_expiry,
/// remaining_days)`. The sort is stable; an expiry date that names no real
/// calendar day counts as expired.
pub fn rank_visas(
    visas: &[VisaRecord],
    today: NaiveDate,
    catalog: &CountryCatalog,
) -> VisaReport {
    let mut active = Vec::new();
    let mut expired = Vec::new();

    for visa in visas {
        match visa.expiry_date.to_naive() {
            Some(expiry) if expiry >= today => {
                active.push(ActiveVisa {
                    country: catalog.resolve(&visa.country_code),
                    days_until_expiry: (expiry - today).num_days(),
                    remaining_days: visa.remaining_days(),
                    visa: visa.clone(),
                });
            }
            _ => expired.push(visa.clone()),
        }
    }

    active.sort_by_key(|v| v.urgency_days());

    VisaReport {
        active,
        expired,
        total: visas.len(),
    }
}
