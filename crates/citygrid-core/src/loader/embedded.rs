// crates/citygrid-core/src/loader/embedded.rs
use crate::dataset::Dataset;
use crate::error::Result;
use once_cell::sync::OnceCell;

static EMBEDDED_JSON: &str = include_str!("../../data/worldcities.json");

// Single in-process cache so the embedded rows are parsed once per process.
static EMBEDDED_DB: OnceCell<Dataset> = OnceCell::new();

impl Dataset {
    /// The dataset compiled into the crate (`data/worldcities.json`).
    ///
    /// Parsed on first use and shared for the rest of the process.
    pub fn embedded() -> Result<&'static Dataset> {
        EMBEDDED_DB.get_or_try_init(|| {
            let db = Dataset::from_json_str(EMBEDDED_JSON)?;
            tracing::info!(cities = db.len(), "parsed embedded dataset");
            Ok(db)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let db = Dataset::embedded().unwrap();
        assert!(db.len() >= 50);
        assert!(db.cities().iter().any(|c| c.name() == "Berlin"));
    }

    #[test]
    fn embedded_dataset_is_cached() {
        let a = Dataset::embedded().unwrap() as *const Dataset;
        let b = Dataset::embedded().unwrap() as *const Dataset;
        assert_eq!(a, b);
    }
}
