//! citygrid — command-line front end for citygrid-core
//!
//! Runs the same query → sort → paginate pipeline the table view uses and
//! prints the visible page.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citygrid stats
//!
//! - Search, sorted by population (largest first), third page of 5
//!   $ citygrid search china --sort population:desc --page-size 5 --page 3
//!
//! - Raw query with offset/limit
//!   $ citygrid query "" --offset 10 --limit 5
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `citygrid-core` is used. Use
//! `--input <path>` to load a `.json` or `.json.gz` file of positional rows;
//! a binary cache is written next to it for faster subsequent runs.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citygrid_core::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter '{level}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_dataset(input: Option<&str>) -> anyhow::Result<Dataset> {
    match input {
        Some(path) => Dataset::load_from_path(path)
            .with_context(|| format!("failed to load dataset from {path}")),
        None => Ok(Dataset::embedded()?.clone()),
    }
}

fn print_row(city: &CityRecord) {
    println!(
        "{:>8}  {:<22} {:<20} {:<4} {:<8} {:>12}",
        city.id, city.name, city.country, city.country_iso3, city.capital, city.population
    );
}

fn print_header() {
    println!(
        "{:>8}  {:<22} {:<20} {:<4} {:<8} {:>12}",
        "ID", "City", "Country", "ISO3", "Capital", "Population"
    );
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let config = match args.config.as_deref() {
        Some(path) => TableConfig::from_path(path)?,
        None => TableConfig::default(),
    };
    let db = load_dataset(args.input.as_deref())?;
    tracing::debug!(cities = db.len(), "dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Capitals: {}", stats.capitals);
            println!("  Total population: {}", stats.total_population);
        }

        Commands::Columns => {
            for col in columns() {
                println!(
                    "{:<12} {:<12} {:?}{}",
                    col.key,
                    col.label,
                    col.kind,
                    if col.sortable { "" } else { " (not sortable)" }
                );
            }
        }

        Commands::Search {
            term,
            sort,
            page,
            page_size,
        } => {
            let spec = SortSpec::<CityColumn>::parse(&sort)?;
            let mut table = ViewController::new(&db, config)?;
            table.set_sort(spec);
            if let Some(size) = page_size {
                table.set_page_size(size)?;
            }
            table.search(term.as_str());
            // Searching resets to page 1; walk forward to the requested page.
            for _ in 1..page {
                if !table.next() {
                    break;
                }
            }

            match table.view() {
                ViewStatus::Pending => println!("Search still pending"),
                ViewStatus::Error { message } => anyhow::bail!(message),
                ViewStatus::Empty => println!("No cities found matching: {term}"),
                ViewStatus::Ready(view) => {
                    print_header();
                    for city in &view.page.rows {
                        print_row(city);
                    }
                    println!(
                        "Page {}/{} ({} matches){}{}",
                        view.page.page,
                        view.page.total_pages,
                        view.page.total,
                        if view.page.has_previous { " [prev]" } else { "" },
                        if view.page.has_next { " [next]" } else { "" },
                    );
                }
            }
        }

        Commands::Query {
            term,
            offset,
            limit,
        } => {
            let request = QueryRequest::new(term)
                .with_offset(offset)
                .with_limit(limit);
            let rows = db.fetch(&request)?;
            if rows.is_empty() {
                println!("No cities in range");
            } else {
                print_header();
                for city in &rows {
                    print_row(city);
                }
            }
        }
    }

    Ok(())
}
