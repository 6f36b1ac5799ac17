use crate::store::Store;
use anyhow::{bail, Result};
use wayfarer_types::{
    CountryCode, CountryStatus, Granularity, PartialDate, Transportation, VisitId, VisitRecord,
};

pub struct AddArgs {
    pub code: String,
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub depart_year: Option<i32>,
    pub depart_month: Option<u32>,
    pub depart_day: Option<u32>,
    pub transport: Option<Transportation>,
    pub note: Option<String>,
}

pub fn handle_add(store: &Store, args: AddArgs) -> Result<()> {
    let code = CountryCode::from(args.code.to_uppercase());

    // Precision follows the supplied arrival parts; clap guarantees that a
    // day always comes with a month.
    let granularity = match (args.month, args.day) {
        (_, Some(_)) => Granularity::Day,
        (Some(_), None) => Granularity::Month,
        (None, None) => Granularity::Year,
    };

    let arrival = PartialDate {
        year: args.year,
        month: args.month,
        day: args.day,
    };
    let departure = args.depart_year.map(|year| PartialDate {
        year,
        month: args.depart_month,
        day: args.depart_day,
    });

    let visit = VisitRecord::new(
        VisitId::generate(),
        arrival,
        departure,
        granularity,
        args.transport,
        args.note,
    )?;

    let mut dataset = store.load_dataset()?;
    let id = visit.id.clone();
    let label = visit.date_label();
    dataset.add_visit(code.clone(), visit);
    store.save_dataset(&dataset)?;

    println!("Recorded visit to {}: {} (id {})", code, label, id);
    if dataset.status(&code) != CountryStatus::Visited {
        println!(
            "Note: {} is not marked as visited; run `wayfarer mark {} visited` to see it in the timeline",
            code, code
        );
    }
    Ok(())
}

pub fn handle_remove(store: &Store, code: &str, id: &str) -> Result<()> {
    let code = CountryCode::from(code.to_uppercase());
    let id = VisitId::new(id);

    let mut dataset = store.load_dataset()?;
    if !dataset.remove_visit(&code, &id) {
        bail!("no visit {} recorded for {}", id, code);
    }
    store.save_dataset(&dataset)?;

    println!("Removed visit {} from {}", id, code);
    Ok(())
}
