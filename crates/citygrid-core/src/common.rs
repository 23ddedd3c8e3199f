// crates/citygrid-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Returned by [`Dataset::stats`](crate::dataset::Dataset::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub cities: usize,
    /// Distinct country names.
    pub countries: usize,
    /// Records carrying a non-empty capital flag.
    pub capitals: usize,
    pub total_population: u64,
}
