// crates/citygrid-core/src/error.rs
use thiserror::Error;

/// Errors produced by the city table pipeline.
#[derive(Debug, Error)]
pub enum CityError {
    /// `offset < 0` or `limit <= 0` was passed to a query.
    #[error("Offset must be non-negative, and limit must be greater than 0.")]
    InvalidRange { offset: i64, limit: i64 },

    /// The underlying data source failed.
    #[error("Failed to fetch cities: {0}")]
    QuerySource(String),

    /// The data source produced something that is not a sequence of cities.
    #[error("Malformed query result: {0}")]
    MalformedResult(String),

    #[error("Page size must be greater than 0")]
    InvalidPageSize,

    #[error("Page index must be at least 1, got {0}")]
    InvalidPageIndex(usize),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column appears more than once in sort spec: {0}")]
    DuplicateSortColumn(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl CityError {
    /// Wraps any displayable failure from a data source.
    pub fn query_source(msg: impl std::fmt::Display) -> Self {
        CityError::QuerySource(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_has_fixed_message() {
        let err = CityError::InvalidRange {
            offset: -1,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "Offset must be non-negative, and limit must be greater than 0."
        );
    }

    #[test]
    fn source_errors_carry_prefix() {
        let err = CityError::query_source("network down");
        assert_eq!(err.to_string(), "Failed to fetch cities: network down");
    }
}
