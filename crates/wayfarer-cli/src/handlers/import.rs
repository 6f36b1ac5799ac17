use crate::store::Store;
use anyhow::{bail, Context, Result};
use std::path::Path;
use wayfarer_engine::from_csv;

pub fn handle(store: &Store, file: &Path, dry_run: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    // Structural failure means nothing was imported; the store is untouched.
    let Some(import) = from_csv(&content) else {
        bail!(
            "nothing imported: {} is empty or not a travel history CSV",
            file.display()
        );
    };

    for diagnostic in &import.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    let visit_count: usize = import.dataset.visit_dates.values().map(Vec::len).sum();
    println!(
        "Parsed {} countries, {} visits ({} rows flagged)",
        import.dataset.country_statuses.len(),
        visit_count,
        import.diagnostics.len()
    );

    if dry_run {
        println!("Dry run, store left unchanged");
        return Ok(());
    }

    store.save_dataset(&import.dataset)?;
    println!("Store replaced");
    Ok(())
}
