use crate::output;
use crate::store::Store;
use crate::types::OutputFormat;
use anyhow::Result;
use wayfarer_engine::{build_history, join_catalog, CountryCatalog};

pub fn handle(store: &Store, catalog: &CountryCatalog, format: OutputFormat) -> Result<()> {
    let dataset = store.load_dataset()?;
    let countries = join_catalog(&dataset, catalog);
    let report = build_history(&countries);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", output::heading("Travel History"));
    println!(
        "{} visits · {} countries",
        report.total_visits, report.unique_countries
    );
    println!();

    if report.entries.is_empty() {
        println!("No visits recorded yet. Try `wayfarer visit add <CODE> --year <YEAR>`.");
        return Ok(());
    }

    for entry in &report.entries {
        let mut line = format!(
            "{:<28} {} {} ({})",
            entry.visit.date_label(),
            entry.country.flag,
            entry.country.name,
            entry.country.region
        );
        if let Some(mode) = entry.visit.transportation {
            line.push_str(&format!("  {}", output::transport_label(mode)));
        }
        println!("{}", line);
        if let Some(note) = &entry.visit.note {
            println!("  {}", output::dim(&format!("\"{}\"", note)));
        }
    }

    Ok(())
}
