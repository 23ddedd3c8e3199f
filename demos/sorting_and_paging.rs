//! Sorting and paging example for citygrid
//!
//! Shows the three-state sort toggle, multi-column precedence and page
//! navigation over the embedded dataset.

use citygrid_core::prelude::*;

fn show(label: &str, status: ViewStatus) {
    println!("--- {label} ---");
    if let ViewStatus::Ready(view) = status {
        let keys: Vec<String> = view
            .sort
            .iter()
            .map(|k| format!("{}:{:?}", k.column, k.direction))
            .collect();
        println!("sort [{}], page {}/{}", keys.join(", "), view.page.page, view.page.total_pages);
        for city in &view.page.rows {
            println!("  {:<18} {:<16} {:>10}", city.name(), city.country(), city.population);
        }
    }
    println!();
}

fn main() -> Result<()> {
    let db = Dataset::embedded()?;
    let mut table = ViewController::new(db, TableConfig::default())?;
    table.set_page_size(5)?;
    table.search("");

    table.toggle_sort(CityColumn::Country);
    show("country ascending", table.view());

    table.toggle_sort(CityColumn::Population);
    table.toggle_sort(CityColumn::Population);
    show("country ascending, then population descending", table.view());

    table.last();
    table.next(); // already on the last page: no-op
    show("last page", table.view());

    table.toggle_sort(CityColumn::Country);
    table.toggle_sort(CityColumn::Country);
    show("country removed, population descending only", table.view());

    // Typed comparison vs. comparing everything as text
    let text_cfg = TableConfig {
        compare_mode: CompareMode::AsText,
        default_page_size: 5,
        ..Default::default()
    };
    let mut text_table = ViewController::new(db, text_cfg)?;
    text_table.toggle_sort(CityColumn::Population);
    show("population ascending, compared as text", text_table.search("a"));

    Ok(())
}
