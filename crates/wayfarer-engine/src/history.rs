use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use wayfarer_types::{Country, CountryStatus, CountryWithStatus, VisitRecord};

/// One timeline entry: a single visit to a visited country.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub country: Country,
    pub visit: VisitRecord,
    /// Defaulted instant used for ordering (year-only dates sort as Jan 1).
    pub sort_date: NaiveDate,
}

/// Chronological travel history, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub entries: Vec<HistoryEntry>,
    pub total_visits: usize,
    pub unique_countries: usize,
}

/// Flatten visited countries into a single timeline.
///
/// Only countries with status `visited` contribute. The sort is stable and
/// descending by arrival instant, so same-day entries keep their input
/// order.
pub fn build_history(countries: &[CountryWithStatus]) -> HistoryReport {
    let mut entries = Vec::new();

    for country in countries {
        if country.status != CountryStatus::Visited {
            continue;
        }
        for visit in &country.visits {
            entries.push(HistoryEntry {
                country: country.country.clone(),
                visit: visit.clone(),
                sort_date: visit.arrival_date.sort_key(),
            });
        }
    }

    entries.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));

    let total_visits = entries.len();
    let unique_countries = entries
        .iter()
        .map(|e| &e.country.code)
        .collect::<BTreeSet<_>>()
        .len();

    HistoryReport {
        entries,
        total_visits,
        unique_countries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_types::{
        CountryCode, Granularity, PartialDate, VisitId,
    };

    fn row(code: &str, status: CountryStatus, years: &[i32]) -> CountryWithStatus {
        CountryWithStatus {
            country: Country {
                code: CountryCode::from(code),
                name: code.to_string(),
                flag: String::new(),
                region: "Europe".to_string(),
            },
            status,
            visits: years
                .iter()
                .enumerate()
                .map(|(i, year)| VisitRecord {
                    id: VisitId::new(format!("{}-{}", code, i)),
                    arrival_date: PartialDate::year(*year),
                    departure_date: None,
                    granularity: Granularity::Year,
                    transportation: None,
                    note: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_newest_first_ordering() {
        let countries = vec![row("FR", CountryStatus::Visited, &[2019, 2022, 2018])];

        let report = build_history(&countries);
        let years: Vec<i32> = report
            .entries
            .iter()
            .map(|e| e.visit.arrival_date.year)
            .collect();
        assert_eq!(years, [2022, 2019, 2018]);
    }

    #[test]
    fn test_only_visited_countries_contribute() {
        let countries = vec![
            row("FR", CountryStatus::Visited, &[2020]),
            row("GB", CountryStatus::Wishlist, &[2021]),
            row("JP", CountryStatus::None, &[2019]),
        ];

        let report = build_history(&countries);
        assert_eq!(report.total_visits, 1);
        assert_eq!(report.entries[0].country.code.as_str(), "FR");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let countries = vec![
            row("AA", CountryStatus::Visited, &[2020]),
            row("BB", CountryStatus::Visited, &[2020]),
        ];

        let report = build_history(&countries);
        let codes: Vec<&str> = report
            .entries
            .iter()
            .map(|e| e.country.code.as_str())
            .collect();
        assert_eq!(codes, ["AA", "BB"]);
    }

    #[test]
    fn test_counts() {
        let countries = vec![
            row("FR", CountryStatus::Visited, &[2018, 2020]),
            row("JP", CountryStatus::Visited, &[2019]),
        ];

        let report = build_history(&countries);
        assert_eq!(report.total_visits, 3);
        assert_eq!(report.unique_countries, 2);
    }
}
