use crate::country::{CountryCode, CountryStatus};
use crate::visit::{VisitId, VisitRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The unit of CSV round-trip: per-country statuses and per-country visit
/// lists, kept as two independent maps.
///
/// The external storage collaborator persists each map under its own key,
/// and the decoupling is deliberate: demoting a country's status must not
/// delete its recorded visits. BTreeMap keeps iteration deterministic so
/// repeated encodes are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDataset {
    #[serde(default)]
    pub country_statuses: BTreeMap<CountryCode, CountryStatus>,
    #[serde(default)]
    pub visit_dates: BTreeMap<CountryCode, Vec<VisitRecord>>,
}

impl ExportDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a country's status. Never touches the visit history: demoting a
    /// country back to `none` leaves its recorded visits in place.
    pub fn set_status(&mut self, code: CountryCode, status: CountryStatus) {
        self.country_statuses.insert(code, status);
    }

    pub fn status(&self, code: &CountryCode) -> CountryStatus {
        self.country_statuses
            .get(code)
            .copied()
            .unwrap_or(CountryStatus::None)
    }

    /// Append a visit, preserving insertion order within the country.
    pub fn add_visit(&mut self, code: CountryCode, visit: VisitRecord) {
        self.visit_dates.entry(code).or_default().push(visit);
    }

    /// Delete a visit by id. Returns whether anything was removed. The
    /// per-country key is dropped when its last visit goes, keeping the map
    /// canonical for encoding.
    pub fn remove_visit(&mut self, code: &CountryCode, id: &VisitId) -> bool {
        let Some(visits) = self.visit_dates.get_mut(code) else {
            return false;
        };
        let before = visits.len();
        visits.retain(|v| &v.id != id);
        let removed = visits.len() < before;
        if visits.is_empty() {
            self.visit_dates.remove(code);
        }
        removed
    }

    pub fn visits(&self, code: &CountryCode) -> &[VisitRecord] {
        self.visit_dates.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.country_statuses.is_empty() && self.visit_dates.is_empty()
    }
}
