// crates/citygrid-core/src/dataset.rs
use crate::common::DatasetStats;
use crate::error::{CityError, Result};
use crate::model::{CityRaw, CityRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The fixed, ordered set of cities a table session works on.
///
/// Built once from raw rows and never mutated afterwards. Dataset order is
/// the order every unsorted view shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    cities: Vec<CityRecord>,
}

impl Dataset {
    /// Builds a dataset from positional rows, rejecting duplicate ids.
    pub fn from_raw(rows: Vec<CityRaw>) -> Result<Self> {
        Self::from_records(rows.into_iter().map(CityRecord::from).collect())
    }

    pub fn from_records(cities: Vec<CityRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id) {
                return Err(CityError::InvalidDataset(format!(
                    "duplicate city id {}",
                    city.id
                )));
            }
        }
        Ok(Dataset { cities })
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    pub fn into_cities(self) -> Vec<CityRecord> {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&CityRecord> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn stats(&self) -> DatasetStats {
        let countries: HashSet<&str> = self.cities.iter().map(|c| c.country.as_str()).collect();
        DatasetStats {
            cities: self.cities.len(),
            countries: countries.len(),
            capitals: self.cities.iter().filter(|c| c.is_capital()).count(),
            total_population: self.cities.iter().map(|c| c.population).sum(),
        }
    }
}
