// crates/citygrid-core/src/query.rs
use crate::dataset::Dataset;
use crate::error::{CityError, Result};
use crate::model::CityRecord;
use crate::text::normalize_term;
use crate::traits::TermMatch;
use serde::{Deserialize, Serialize};

/// Limit used when the caller wants the whole match set.
pub const DEFAULT_QUERY_LIMIT: i64 = 10_000;

/// One search invocation, as accepted at the query function boundary.
///
/// Every field is optional on the wire (`{searchTerm?, limit?, offset?}`).
/// Offsets and limits stay signed so an out-of-contract value from a caller
/// is reported instead of being clamped or wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    pub search_term: String,
    pub limit: i64,
    pub offset: i64,
}

impl Default for QueryRequest {
    fn default() -> Self {
        QueryRequest {
            search_term: String::new(),
            limit: DEFAULT_QUERY_LIMIT,
            offset: 0,
        }
    }
}

impl QueryRequest {
    pub fn new(term: impl Into<String>) -> Self {
        QueryRequest {
            search_term: term.into(),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Fails with [`CityError::InvalidRange`] when `offset < 0` or `limit <= 0`.
    pub fn validate(&self) -> Result<()> {
        if self.offset < 0 || self.limit <= 0 {
            return Err(CityError::InvalidRange {
                offset: self.offset,
                limit: self.limit,
            });
        }
        Ok(())
    }

    /// Runs this request against a dataset.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<CityRecord>> {
        query(dataset.cities(), &self.search_term, self.offset, self.limit)
    }
}

/// Filters `records` by a free-text term and returns `[offset, offset + limit)`
/// of the match set.
///
/// The term is trimmed and lower-cased; an empty term matches everything.
/// Otherwise a record matches when one of its search fields, lower-cased,
/// contains the term. Dataset order is preserved. Reading past the end of the
/// match set yields a shorter (possibly empty) result, never an error.
///
/// # Errors
/// [`CityError::InvalidRange`] when `offset < 0` or `limit <= 0`.
///
/// # Examples
/// ```rust
/// use citygrid_core::prelude::*;
///
/// let db = Dataset::from_json_str(
///     r#"[[1,"Berlin","Berlin","Germany","DEU","primary",3644826],
///         [2,"Paris","Paris","France","FRA","primary",11060000]]"#,
/// ).unwrap();
///
/// let hits = query(db.cities(), "  BERL ", 0, 10).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert!(query(db.cities(), "", -1, 10).is_err());
/// ```
pub fn query<T: TermMatch + Clone>(
    records: &[T],
    term: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<T>> {
    if offset < 0 || limit <= 0 {
        return Err(CityError::InvalidRange { offset, limit });
    }
    let needle = normalize_term(term);
    // Both values are positive here; saturate on narrow targets.
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    let out: Vec<T> = records
        .iter()
        .filter(|r| r.matches_term(&needle))
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(term = %needle, offset, limit, hits = out.len(), "query");
    Ok(out)
}

/// Size of the unpaged match set for `term`.
pub fn match_count<T: TermMatch>(records: &[T], term: &str) -> usize {
    let needle = normalize_term(term);
    records.iter().filter(|r| r.matches_term(&needle)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CityRaw;

    fn dataset() -> Dataset {
        Dataset::from_raw(vec![
            CityRaw(1, "Berlin".into(), "Berlin".into(), "Germany".into(), "DEU".into(), "primary".into(), 3_644_826),
            CityRaw(2, "Hamburg".into(), "Hamburg".into(), "Germany".into(), "DEU".into(), "admin".into(), 1_841_179),
            CityRaw(3, "Paris".into(), "Paris".into(), "France".into(), "FRA".into(), "primary".into(), 11_060_000),
            CityRaw(4, "Berlin".into(), "Berlin".into(), "United States".into(), "USA".into(), "".into(), 10_277),
        ])
        .unwrap()
    }

    fn ids(rows: &[CityRecord]) -> Vec<u32> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let db = dataset();
        assert_eq!(ids(&query(db.cities(), "", 0, 100).unwrap()), vec![1, 2, 3, 4]);
        assert_eq!(ids(&query(db.cities(), " \t ", 0, 100).unwrap()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn matches_name_or_country() {
        let db = dataset();
        assert_eq!(ids(&query(db.cities(), "berl", 0, 100).unwrap()), vec![1, 4]);
        assert_eq!(ids(&query(db.cities(), "GERMANY", 0, 100).unwrap()), vec![1, 2]);
        // substring, not word matching
        assert_eq!(ids(&query(db.cities(), "ance", 0, 100).unwrap()), vec![3]);
    }

    #[test]
    fn slices_by_offset_and_limit() {
        let db = dataset();
        assert_eq!(ids(&query(db.cities(), "", 1, 2).unwrap()), vec![2, 3]);
        assert_eq!(ids(&query(db.cities(), "", 3, 10).unwrap()), vec![4]);
        assert!(query(db.cities(), "", 14, 10).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_ranges() {
        let db = dataset();
        for (offset, limit) in [(-1, 10), (0, 0), (0, -3)] {
            let err = query(db.cities(), "", offset, limit).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Offset must be non-negative, and limit must be greater than 0."
            );
        }
    }

    #[test]
    fn empty_dataset_yields_nothing() {
        let empty: Vec<CityRecord> = Vec::new();
        assert!(query(&empty, "berlin", 0, 10).unwrap().is_empty());
        assert!(query(&empty, "", 0, 10).unwrap().is_empty());
    }

    #[test]
    fn is_pure() {
        let db = dataset();
        let a = query(db.cities(), "r", 0, 3).unwrap();
        let b = query(db.cities(), "r", 0, 3).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "json")]
    #[test]
    fn request_defaults_match_boundary() {
        let req: QueryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, QueryRequest::default());
        assert_eq!(req.limit, 10_000);

        let req: QueryRequest =
            serde_json::from_str(r#"{"searchTerm":"par","offset":-1}"#).unwrap();
        assert_eq!(req.search_term, "par");
        assert!(req.validate().is_err());
        assert!(req.run(&dataset()).is_err());
    }

    #[test]
    fn counts_full_match_set() {
        let db = dataset();
        assert_eq!(match_count(db.cities(), "berlin"), 2);
        assert_eq!(match_count(db.cities(), "xyz123"), 0);
    }
}
