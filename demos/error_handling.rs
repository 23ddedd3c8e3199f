//! Error handling example for citygrid
//!
//! Demonstrates contract violations, failing data sources and stale results.

use citygrid_core::prelude::*;

/// A source that is always offline.
struct Offline;

impl CitySource for Offline {
    fn fetch(&self, _request: &QueryRequest) -> Result<Vec<CityRecord>> {
        Err(CityError::query_source("simulated network failure"))
    }
}

fn main() -> Result<()> {
    println!("=== citygrid Error Handling Example ===\n");
    let db = Dataset::embedded()?;

    // Example 1: out-of-contract offsets and limits
    println!("--- Example 1: invalid ranges ---");
    for (offset, limit) in [(-1, 10), (0, 0)] {
        match query(db.cities(), "", offset, limit) {
            Ok(rows) => println!("  offset={offset} limit={limit}: {} rows", rows.len()),
            Err(e) => println!("  offset={offset} limit={limit}: ✗ {e}"),
        }
    }
    let past_end = query(db.cities(), "", db.len() as i64 + 10, 10)?;
    println!("  offset past the end: {} rows (no error)", past_end.len());
    println!();

    // Example 2: a failing source lands in the error state
    println!("--- Example 2: source failure ---");
    let mut offline = ViewController::new(Offline, TableConfig::default())?;
    println!("  {:?}", offline.search("berlin"));
    println!();

    // Example 3: a stale response is dropped
    println!("--- Example 3: stale responses ---");
    let mut table = ViewController::new(db, TableConfig::default())?;
    let slow = table.begin_search("b");
    let fast = table.begin_search("berlin");
    let rows = table.fetch(&fast)?;
    println!("  newest applied: {}", table.settle(fast.generation, Ok(rows)));
    let rows = table.fetch(&slow)?;
    println!("  older applied:  {}", table.settle(slow.generation, Ok(rows)));
    if let ViewStatus::Ready(view) = table.view() {
        println!("  showing results for {:?}: {} rows", view.term, view.page.total);
    }

    Ok(())
}
