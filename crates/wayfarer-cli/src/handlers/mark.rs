use crate::store::Store;
use anyhow::Result;
use wayfarer_types::{CountryCode, CountryStatus};

pub fn handle(store: &Store, code: &str, status: CountryStatus) -> Result<()> {
    let code = CountryCode::from(code.to_uppercase());

    let mut dataset = store.load_dataset()?;
    dataset.set_status(code.clone(), status);
    store.save_dataset(&dataset)?;

    let kept = dataset.visits(&code).len();
    println!("{} marked as {}", code, status);
    if status != CountryStatus::Visited && kept > 0 {
        println!("({} recorded visit(s) kept)", kept);
    }
    Ok(())
}
