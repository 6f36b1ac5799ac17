use crate::output;
use crate::store::Store;
use crate::types::OutputFormat;
use anyhow::Result;
use wayfarer_engine::{compute_stats, join_catalog, CountryCatalog};

pub fn handle(store: &Store, catalog: &CountryCatalog, format: OutputFormat) -> Result<()> {
    let dataset = store.load_dataset()?;
    let countries = join_catalog(&dataset, catalog);
    let stats = compute_stats(&countries);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", output::heading("Statistics"));
    println!();
    println!(
        "Visited:     {} ({:.1}% of {} tracked)",
        stats.visited_count, stats.visited_percentage, stats.total_countries
    );
    println!("Wishlist:    {}", stats.wishlist_count);
    println!("Not visited: {}", stats.not_visited_count);
    println!("Total trips: {}", stats.total_visits);

    if !stats.most_visited.is_empty() {
        println!();
        println!("{}", output::heading("Most Visited"));
        for entry in &stats.most_visited {
            println!(
                "{} {:<24} {} visits",
                entry.country.flag, entry.country.name, entry.visit_count
            );
        }
    }

    if stats.total_visits > 0 {
        println!();
        println!("{}", output::heading("Transportation"));
        for (mode, count) in &stats.transportation {
            // Zero-usage modes are computed but not rendered
            if *count > 0 {
                println!("{:<12} {}", output::transport_label(*mode), count);
            }
        }
    }

    if !stats.regions.is_empty() {
        println!();
        println!("{}", output::heading("Regions"));
        for region in &stats.regions {
            println!(
                "{:<16} {}/{} visited ({:.1}%), {} wishlisted",
                region.region, region.visited, region.total, region.percentage, region.wishlist
            );
        }
    }

    Ok(())
}
