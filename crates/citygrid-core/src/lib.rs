// crates/citygrid-core/src/lib.rs

//! # citygrid-core
//!
//! Query, sort and paginate pipeline behind a searchable table of world
//! cities.
//!
//! Data flows one way: [`Dataset`] → [`query`](query::query) (filter) →
//! [`sort`](sort::sort) (order) → [`paginate`](paginate::paginate) (slice),
//! with [`ViewController`] holding the session state in between.
//!
//! ```rust
//! use citygrid_core::prelude::*;
//!
//! let db = Dataset::embedded()?;
//! let mut table = ViewController::new(db, TableConfig::default())?;
//!
//! table.toggle_sort(CityColumn::Population);
//! table.toggle_sort(CityColumn::Population); // descending
//! if let ViewStatus::Ready(view) = table.search("germany") {
//!     for city in &view.page.rows {
//!         println!("{} ({})", city.name(), city.population);
//!     }
//! }
//! # Ok::<(), citygrid_core::CityError>(())
//! ```

pub mod common;
pub mod config;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod generation;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod prelude;
pub mod query;
pub mod sort;
pub mod source;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::config::TableConfig;
pub use crate::dataset::Dataset;
pub use crate::error::{CityError, Result};
pub use crate::model::{CityColumn, CityRaw, CityRecord};
pub use crate::view::{ViewController, ViewStatus};
