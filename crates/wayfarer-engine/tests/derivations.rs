//! End-to-end: decode a CSV blob, join the catalog, and derive the
//! history and statistics reports from it.

use wayfarer_engine::{build_history, compute_stats, from_csv, join_catalog, CountryCatalog, CSV_HEADER};
use wayfarer_types::{Country, CountryCode, Transportation};

fn catalog() -> CountryCatalog {
    let country = |code: &str, name: &str, region: &str| Country {
        code: CountryCode::from(code),
        name: name.to_string(),
        flag: "🏴".to_string(),
        region: region.to_string(),
    };
    CountryCatalog::new([
        country("US", "United States", "Americas"),
        country("FR", "France", "Europe"),
        country("GB", "United Kingdom", "Europe"),
    ])
}

fn sample_csv() -> String {
    [
        CSV_HEADER,
        "US,visited,1,2019,6,15,2019,6,30,day,car,\"Road trip\"",
        "US,visited,2,2022,12,20,2023,1,5,day,plane,",
        "FR,visited,3,2018,,,,,,year,train,",
        "GB,wishlist,,,,,,,,,,",
        "XX,visited,4,2021,,,,,,year,,",
    ]
    .join("\n")
}

#[test]
fn history_from_imported_csv() {
    let import = from_csv(&sample_csv()).unwrap();
    let countries = join_catalog(&import.dataset, &catalog());

    let report = build_history(&countries);
    assert_eq!(report.total_visits, 4);
    assert_eq!(report.unique_countries, 3);

    let years: Vec<i32> = report
        .entries
        .iter()
        .map(|e| e.visit.arrival_date.year)
        .collect();
    assert_eq!(years, [2022, 2021, 2019, 2018]);

    // Unknown code resolves to a placeholder, never fails the join
    let unknown = report
        .entries
        .iter()
        .find(|e| e.country.code.as_str() == "XX")
        .unwrap();
    assert_eq!(unknown.country.name, "XX");
    assert_eq!(unknown.country.region, "Unknown");
}

#[test]
fn stats_from_imported_csv() {
    let import = from_csv(&sample_csv()).unwrap();
    let countries = join_catalog(&import.dataset, &catalog());

    let stats = compute_stats(&countries);
    assert_eq!(stats.total_countries, 4);
    assert_eq!(stats.visited_count, 3);
    assert_eq!(stats.wishlist_count, 1);
    assert_eq!(stats.total_visits, 4);
    assert_eq!(stats.visited_percentage, 75.0);

    assert_eq!(stats.transportation[&Transportation::Car], 1);
    assert_eq!(stats.transportation[&Transportation::Plane], 1);
    assert_eq!(stats.transportation[&Transportation::Train], 1);
    assert_eq!(stats.transportation[&Transportation::Bus], 0);

    assert_eq!(stats.most_visited[0].country.name, "United States");
    assert_eq!(stats.most_visited[0].visit_count, 2);
}
