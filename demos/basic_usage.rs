//! Basic usage example for citygrid
//!
//! Loads the embedded dataset, runs a few searches and prints the first page.

use citygrid_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citygrid Basic Usage Example ===\n");

    let db = Dataset::embedded()?;
    let stats = db.stats();
    println!("Loaded {} cities from {} countries\n", stats.cities, stats.countries);

    // Example 1: the raw query function
    println!("--- Example 1: query(\"berl\") ---");
    for city in query(db.cities(), "berl", 0, 10)? {
        println!("- {} ({}), pop. {}", city.name(), city.country(), city.population);
    }
    println!();

    // Example 2: a table session
    println!("--- Example 2: table session for \"india\" ---");
    let mut table = ViewController::new(db, TableConfig::default())?;
    match table.search("india") {
        ViewStatus::Ready(view) => {
            for city in &view.page.rows {
                println!("- {} [{}]", city.name(), city.capital);
            }
            println!("page {}/{}", view.page.page, view.page.total_pages);
        }
        other => println!("{other:?}"),
    }
    println!();

    // Example 3: nothing found is "empty", not an error
    println!("--- Example 3: no matches ---");
    println!("{:?}", table.search("xyz123"));

    Ok(())
}
