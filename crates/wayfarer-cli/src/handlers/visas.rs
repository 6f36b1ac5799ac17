use crate::output;
use crate::store::Store;
use crate::types::OutputFormat;
use anyhow::Result;
use chrono::Local;
use wayfarer_engine::{rank_visas, CountryCatalog, Urgency};

pub fn handle(store: &Store, catalog: &CountryCatalog, format: OutputFormat) -> Result<()> {
    let visas = store.load_visas()?;
    let today = Local::now().date_naive();
    let report = rank_visas(&visas, today, catalog);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", output::heading("Visas"));
    println!(
        "{} active · {} expired",
        report.active.len(),
        report.expired.len()
    );

    if !report.active.is_empty() {
        println!();
        for visa in &report.active {
            let schengen = if visa.visa.is_schengen { " (Schengen)" } else { "" };
            println!(
                "{} {} — {}{}",
                visa.country.flag,
                visa.country.name,
                visa.visa.visa_type.label(),
                schengen
            );

            let remaining = format!("{} days of stay left", visa.remaining_days);
            let expiry = format!(
                "expires {} ({} days)",
                visa.visa.expiry_date, visa.days_until_expiry
            );
            println!(
                "  {} · {}",
                output::paint_urgency(&remaining, Urgency::for_days(visa.remaining_days)),
                output::paint_urgency(&expiry, Urgency::for_days(visa.days_until_expiry)),
            );
            println!(
                "  {} of {} days used",
                visa.visa.total_days_used, visa.visa.max_stay_days
            );
        }
    }

    if !report.expired.is_empty() {
        println!();
        println!("{}", output::heading("Expired"));
        for visa in &report.expired {
            let country = catalog.resolve(&visa.country_code);
            println!(
                "{} {} — {}, expired {}",
                country.flag,
                country.name,
                visa.visa_type.label(),
                visa.expiry_date
            );
        }
    }

    Ok(())
}
