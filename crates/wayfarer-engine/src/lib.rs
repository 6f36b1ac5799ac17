// Engine module - pure derivations over the travel dataset
// This layer sits between the stored dataset (types) and CLI presentation

pub mod catalog;
pub mod csv;
pub mod history;
pub mod stats;
pub mod visa;

pub use catalog::{join_catalog, CountryCatalog};
pub use csv::{from_csv, to_csv, CsvImport, RowDiagnostic, RowSkipReason, CSV_HEADER};
pub use history::{HistoryEntry, HistoryReport};
pub use stats::{CountryVisitCount, RegionStats, TravelStats};
pub use visa::{ActiveVisa, Urgency, VisaReport};

use chrono::NaiveDate;
use wayfarer_types::{CountryWithStatus, VisaRecord};

// Façade API - stable entry points for the CLI layer

/// Flatten visited countries into a chronological timeline, newest first.
pub fn build_history(countries: &[CountryWithStatus]) -> HistoryReport {
    history::build_history(countries)
}

/// Compute overview, region, transportation, and most-visited statistics.
pub fn compute_stats(countries: &[CountryWithStatus]) -> TravelStats {
    stats::compute_stats(countries)
}

/// Partition visas into active/expired and rank the active ones by urgency.
pub fn rank_visas(visas: &[VisaRecord], today: NaiveDate, catalog: &CountryCatalog) -> VisaReport {
    visa::rank_visas(visas, today, catalog)
}
