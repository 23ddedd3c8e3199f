// crates/citygrid-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and turns
//! dataset files into a [`Dataset`].

use crate::dataset::Dataset;
use crate::error::Result;
use bincode::Options;

mod common_io;
#[cfg(feature = "json")]
mod embedded;

pub use common_io::get_cache_path;

/// Suffix appended to a dataset file name for its bincode cache.
pub const CACHE_SUFFIX: &str = "bin";

/// Upper bound for decoding binary caches.
const MAX_CACHE_BYTES: u64 = 64 * 1024 * 1024;

impl Dataset {
    /// Serializes the dataset into the binary cache format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .serialize(self)?)
    }

    /// Reconstructs a dataset from the binary cache format.
    ///
    /// Ids are re-validated; a cache is not trusted more than its source.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let decoded: Dataset = bincode::DefaultOptions::new()
            .with_limit(MAX_CACHE_BYTES)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Dataset::from_records(decoded.into_cities())
    }

    /// Parses a JSON array of positional city rows.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<crate::model::CityRaw> = serde_json::from_str(json)?;
        Dataset::from_raw(rows)
    }

    /// Loads a dataset file (`.json`, or `.json.gz` with the `compact` feature).
    ///
    /// - Tries `<file>.bin` (bincode cache) first.
    /// - Falls back to parsing the source file and writes the cache
    ///   best-effort; a failed cache write never fails the load.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache = get_cache_path(path, CACHE_SUFFIX);

        if let Ok(bytes) = std::fs::read(&cache) {
            match Dataset::from_bytes(&bytes) {
                Ok(db) => {
                    tracing::debug!(cache = %cache.display(), cities = db.len(), "loaded dataset cache");
                    return Ok(db);
                }
                Err(e) => tracing::warn!(cache = %cache.display(), error = %e, "ignoring unreadable dataset cache"),
            }
        }

        let reader = common_io::open_stream(path)?;
        let rows: Vec<crate::model::CityRaw> = serde_json::from_reader(reader)?;
        let db = Dataset::from_raw(rows)?;
        tracing::info!(path = %path.display(), cities = db.len(), "loaded dataset");

        if let Ok(bin) = db.to_bytes() {
            if let Err(e) = std::fs::write(&cache, bin) {
                tracing::debug!(cache = %cache.display(), error = %e, "could not write dataset cache");
            }
        }

        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CityRaw;

    fn sample() -> Dataset {
        Dataset::from_raw(vec![
            CityRaw(1, "Berlin".into(), "Berlin".into(), "Germany".into(), "DEU".into(), "primary".into(), 3_644_826),
            CityRaw(2, "Kraków".into(), "Krakow".into(), "Poland".into(), "POL".into(), "admin".into(), 779_115),
        ])
        .unwrap()
    }

    #[test]
    fn binary_cache_round_trips() {
        let db = sample();
        let bytes = db.to_bytes().unwrap();
        assert_eq!(Dataset::from_bytes(&bytes).unwrap(), db);
    }

    #[test]
    fn garbage_cache_is_an_error() {
        assert!(Dataset::from_bytes(&[0xff, 0x01]).is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn loads_json_file_and_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.json");
        std::fs::write(
            &path,
            r#"[[1,"Berlin","Berlin","Germany","DEU","primary",3644826]]"#,
        )
        .unwrap();

        let db = Dataset::load_from_path(&path).unwrap();
        assert_eq!(db.len(), 1);
        assert!(get_cache_path(&path, CACHE_SUFFIX).exists());

        // Second load is served from the cache.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(Dataset::load_from_path(&path).unwrap(), db);
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load_from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::error::CityError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn negative_population_is_rejected() {
        let err = Dataset::from_json_str(r#"[[1,"X","X","Y","YYY","",-5]]"#).unwrap_err();
        assert!(matches!(err, crate::error::CityError::Json(_)));
    }
}
