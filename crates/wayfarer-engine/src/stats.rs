use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use wayfarer_types::{Country, CountryStatus, CountryWithStatus, Transportation};

/// Aggregated travel statistics over the full country list.
#[derive(Debug, Clone, Serialize)]
pub struct TravelStats {
    pub total_countries: usize,
    pub visited_count: usize,
    pub wishlist_count: usize,
    pub not_visited_count: usize,
    /// Share of the world visited, rounded to one decimal.
    pub visited_percentage: f64,
    pub total_visits: usize,
    pub regions: Vec<RegionStats>,
    /// All four modes are present; renderers omit the zero entries.
    pub transportation: BTreeMap<Transportation, usize>,
    pub most_visited: Vec<CountryVisitCount>,
}

/// Per-region breakdown, sorted descending by visited count.
#[derive(Debug, Clone, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub visited: usize,
    pub wishlist: usize,
    pub total: usize,
    pub percentage: f64,
}

/// One entry of the most-visited ranking.
#[derive(Debug, Clone, Serialize)]
pub struct CountryVisitCount {
    pub country: Country,
    pub visit_count: usize,
}

const MOST_VISITED_LIMIT: usize = 5;

/// Compute the full statistics block.
///
/// Region rows accumulate in first-seen order before the stable sort, so
/// regions tied on visited count come out in their original order. The
/// most-visited ranking truncates to the top five with the same stability
/// guarantee.
pub fn compute_stats(countries: &[CountryWithStatus]) -> TravelStats {
    let mut visited_count = 0;
    let mut wishlist_count = 0;
    let mut total_visits = 0;

    // Region rows accumulate in first-seen order (the tie-break order).
    let mut region_index: HashMap<String, usize> = HashMap::new();
    let mut region_rows: Vec<RegionStats> = Vec::new();

    let mut transportation: BTreeMap<Transportation, usize> =
        Transportation::ALL.iter().map(|t| (*t, 0)).collect();

    let mut visit_counts: Vec<CountryVisitCount> = Vec::new();

    for country in countries {
        let index = *region_index
            .entry(country.country.region.clone())
            .or_insert_with(|| {
                region_rows.push(RegionStats {
                    region: country.country.region.clone(),
                    visited: 0,
                    wishlist: 0,
                    total: 0,
                    percentage: 0.0,
                });
                region_rows.len() - 1
            });
        region_rows[index].total += 1;

        match country.status {
            CountryStatus::Visited => {
                visited_count += 1;
                region_rows[index].visited += 1;
                total_visits += country.visits.len();

                for visit in &country.visits {
                    if let Some(mode) = visit.transportation {
                        *transportation.entry(mode).or_insert(0) += 1;
                    }
                }

                visit_counts.push(CountryVisitCount {
                    country: country.country.clone(),
                    visit_count: country.visits.len(),
                });
            }
            CountryStatus::Wishlist => {
                wishlist_count += 1;
                region_rows[index].wishlist += 1;
            }
            CountryStatus::None => {}
        }
    }

    for row in &mut region_rows {
        row.percentage = percentage(row.visited, row.total);
    }
    region_rows.sort_by(|a, b| b.visited.cmp(&a.visited));

    visit_counts.sort_by(|a, b| b.visit_count.cmp(&a.visit_count));
    visit_counts.truncate(MOST_VISITED_LIMIT);

    let total_countries = countries.len();

    TravelStats {
        total_countries,
        visited_count,
        wishlist_count,
        not_visited_count: total_countries - visited_count,
        visited_percentage: percentage(visited_count, total_countries),
        total_visits,
        regions: region_rows,
        transportation,
        most_visited: visit_counts,
    }
}

/// `part/whole * 100` rounded to one decimal; 0.0 for an empty whole.
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_types::{CountryCode, Granularity, PartialDate, VisitId, VisitRecord};

    fn row(
        code: &str,
        region: &str,
        status: CountryStatus,
        visits: usize,
        mode: Option<Transportation>,
    ) -> CountryWithStatus {
        CountryWithStatus {
            country: Country {
                code: CountryCode::from(code),
                name: code.to_string(),
                flag: String::new(),
                region: region.to_string(),
            },
            status,
            visits: (0..visits)
                .map(|i| VisitRecord {
                    id: VisitId::new(format!("{}-{}", code, i)),
                    arrival_date: PartialDate::year(2020),
                    departure_date: None,
                    granularity: Granularity::Year,
                    transportation: mode,
                    note: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_overview_counts_and_percentage() {
        let countries = vec![
            row("FR", "Europe", CountryStatus::Visited, 2, None),
            row("GB", "Europe", CountryStatus::Wishlist, 0, None),
            row("JP", "Asia", CountryStatus::None, 0, None),
            row("TH", "Asia", CountryStatus::Visited, 1, None),
        ];

        let stats = compute_stats(&countries);
        assert_eq!(stats.total_countries, 4);
        assert_eq!(stats.visited_count, 2);
        assert_eq!(stats.wishlist_count, 1);
        assert_eq!(stats.not_visited_count, 2);
        assert_eq!(stats.visited_percentage, 50.0);
        assert_eq!(stats.total_visits, 3);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let mut countries = vec![row("FR", "Europe", CountryStatus::Visited, 0, None)];
        for i in 0..7 {
            countries.push(row(&format!("X{}", i), "Europe", CountryStatus::None, 0, None));
        }

        // 1 of 8 = 12.5%
        let stats = compute_stats(&countries);
        assert_eq!(stats.visited_percentage, 12.5);

        // 1 of 3 = 33.333... rounds to 33.3
        let stats = compute_stats(&countries[..3.min(countries.len())]);
        assert_eq!(stats.visited_percentage, 33.3);
    }

    #[test]
    fn test_empty_input_does_not_divide_by_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.visited_percentage, 0.0);
        assert!(stats.regions.is_empty());
        assert!(stats.most_visited.is_empty());
    }

    #[test]
    fn test_regions_sorted_by_visited_with_stable_ties() {
        let countries = vec![
            row("DE", "Europe", CountryStatus::Visited, 0, None),
            row("JP", "Asia", CountryStatus::Visited, 0, None),
            row("TH", "Asia", CountryStatus::Visited, 0, None),
            row("US", "Americas", CountryStatus::Visited, 0, None),
        ];

        let stats = compute_stats(&countries);
        let order: Vec<&str> = stats.regions.iter().map(|r| r.region.as_str()).collect();
        // Asia leads with two; Europe and Americas tie at one and keep
        // first-seen order.
        assert_eq!(order, ["Asia", "Europe", "Americas"]);
        assert_eq!(stats.regions[0].percentage, 100.0);
    }

    #[test]
    fn test_transportation_counts_only_visited_countries() {
        let countries = vec![
            row("FR", "Europe", CountryStatus::Visited, 2, Some(Transportation::Train)),
            row("GB", "Europe", CountryStatus::Wishlist, 1, Some(Transportation::Plane)),
        ];

        let stats = compute_stats(&countries);
        assert_eq!(stats.transportation[&Transportation::Train], 2);
        assert_eq!(stats.transportation[&Transportation::Plane], 0);
        assert_eq!(stats.transportation.len(), 4);
    }

    #[test]
    fn test_most_visited_truncates_to_five_stable() {
        let mut countries: Vec<CountryWithStatus> = (0..7)
            .map(|i| row(&format!("C{}", i), "Europe", CountryStatus::Visited, 1, None))
            .collect();
        let extra_visit = countries[3].visits[0].clone();
        countries[3].visits.push(extra_visit);

        let stats = compute_stats(&countries);
        assert_eq!(stats.most_visited.len(), 5);
        assert_eq!(stats.most_visited[0].country.code.as_str(), "C3");
        assert_eq!(stats.most_visited[0].visit_count, 2);
        // Remaining slots keep input order among the tied single-visit rows
        assert_eq!(stats.most_visited[1].country.code.as_str(), "C0");
    }
}
