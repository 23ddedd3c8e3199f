// crates/citygrid-core/src/config.rs
use crate::error::{CityError, Result};
use crate::query::DEFAULT_QUERY_LIMIT;
use crate::sort::CompareMode;
use serde::{Deserialize, Serialize};

/// Settings shared by every table session.
///
/// Deserializes from partial JSON; missing fields keep their defaults.
///
/// ```rust
/// use citygrid_core::config::TableConfig;
///
/// let cfg = TableConfig::from_json_str(r#"{"defaultPageSize": 5}"#).unwrap();
/// assert_eq!(cfg.default_page_size, 5);
/// assert_eq!(cfg.page_size_options, vec![5, 10, 15, 20]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Choices offered by the page-size selector.
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Limit used when fetching the full match set.
    pub query_limit: i64,
    /// Quiet period before a search input is issued.
    pub debounce_ms: u64,
    pub compare_mode: CompareMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            page_size_options: vec![5, 10, 15, 20],
            default_page_size: 10,
            query_limit: DEFAULT_QUERY_LIMIT,
            debounce_ms: 300,
            compare_mode: CompareMode::Typed,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(CityError::InvalidPageSize);
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(CityError::InvalidConfig(format!(
                "default page size {} is not one of {:?}",
                self.default_page_size, self.page_size_options
            )));
        }
        if self.query_limit <= 0 {
            return Err(CityError::InvalidConfig(format!(
                "query limit must be positive, got {}",
                self.query_limit
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: TableConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(feature = "json")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CityError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = TableConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.query_limit, 10_000);
    }

    #[test]
    fn default_page_size_must_be_offered() {
        let cfg = TableConfig {
            default_page_size: 7,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CityError::InvalidConfig(_))));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let cfg = TableConfig {
            page_size_options: vec![0, 10],
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CityError::InvalidPageSize)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn parses_compare_mode() {
        let cfg = TableConfig::from_json_str(r#"{"compareMode":"as_text","debounceMs":150}"#).unwrap();
        assert_eq!(cfg.compare_mode, CompareMode::AsText);
        assert_eq!(cfg.debounce_ms, 150);
        assert!(TableConfig::from_json_str(r#"{"queryLimit":0}"#).is_err());
    }
}
