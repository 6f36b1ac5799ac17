use std::collections::BTreeMap;
use std::collections::BTreeSet;
use wayfarer_types::{Country, CountryCode, CountryWithStatus, ExportDataset};

/// Lookup table of static country metadata (name, flag, region).
///
/// The catalog is an external collaborator; codes missing from it resolve
/// to a display placeholder rather than failing the aggregation.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: BTreeMap<CountryCode, Country>,
}

impl CountryCatalog {
    pub fn new(countries: impl IntoIterator<Item = Country>) -> Self {
        Self {
            countries: countries
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }

    pub fn get(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.get(code)
    }

    /// Resolve a code to display metadata, falling back to a placeholder
    /// (the code as name, a white flag, region "Unknown") for codes the
    /// catalog does not know.
    pub fn resolve(&self, code: &CountryCode) -> Country {
        self.countries.get(code).cloned().unwrap_or_else(|| Country {
            code: code.clone(),
            name: code.to_string(),
            flag: "🏳️".to_string(),
            region: "Unknown".to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }
}

/// Join the dataset with catalog metadata into aggregator input rows.
///
/// The union of both map key sets is taken: a country marked without
/// visits appears, and so does one holding stale visits after a status
/// demotion. Rows come out in deterministic code order.
pub fn join_catalog(dataset: &ExportDataset, catalog: &CountryCatalog) -> Vec<CountryWithStatus> {
    let codes: BTreeSet<&CountryCode> = dataset
        .country_statuses
        .keys()
        .chain(dataset.visit_dates.keys())
        .collect();

    codes
        .into_iter()
        .map(|code| CountryWithStatus {
            country: catalog.resolve(code),
            status: dataset.status(code),
            visits: dataset.visits(code).to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_types::CountryStatus;

    fn country(code: &str, name: &str, region: &str) -> Country {
        Country {
            code: CountryCode::from(code),
            name: name.to_string(),
            flag: "🏴".to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_resolve_falls_back_to_placeholder() {
        let catalog = CountryCatalog::new([country("FR", "France", "Europe")]);

        let resolved = catalog.resolve(&CountryCode::from("ZZ"));
        assert_eq!(resolved.name, "ZZ");
        assert_eq!(resolved.region, "Unknown");
    }

    #[test]
    fn test_join_unions_status_and_visit_keys() {
        let catalog = CountryCatalog::new([country("FR", "France", "Europe")]);

        let mut dataset = ExportDataset::new();
        dataset.set_status(CountryCode::from("FR"), CountryStatus::Visited);
        // Stale visits for a country with no current status entry
        dataset.add_visit(
            CountryCode::from("JP"),
            wayfarer_types::VisitRecord {
                id: wayfarer_types::VisitId::new("v1"),
                arrival_date: wayfarer_types::PartialDate::year(2017),
                departure_date: None,
                granularity: wayfarer_types::Granularity::Year,
                transportation: None,
                note: None,
            },
        );

        let rows = join_catalog(&dataset, &catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country.name, "France");
        assert_eq!(rows[1].status, CountryStatus::None);
        assert_eq!(rows[1].visits.len(), 1);
    }
}
