use crate::store::Store;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;
use wayfarer_engine::to_csv;

pub fn handle(store: &Store, out: Option<&Path>) -> Result<()> {
    let dataset = store.load_dataset()?;
    let csv = to_csv(&dataset);

    // Filename carries the export date, not any visit date
    let file_name = format!("travel-history-{}.csv", Local::now().format("%Y-%m-%d"));
    let dir = out.unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, &csv)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let visit_count: usize = dataset.visit_dates.values().map(Vec::len).sum();
    println!(
        "Exported {} countries, {} visits to {}",
        dataset.country_statuses.len(),
        visit_count,
        path.display()
    );
    Ok(())
}
