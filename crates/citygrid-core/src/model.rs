// crates/citygrid-core/src/model.rs
use crate::error::{CityError, Result};
use crate::text::ascii_fold;
use crate::traits::{FieldValue, Record, TermMatch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw city row as it comes from the dataset file.
///
/// Positional tuple: `(id, name, nameAscii, country, countryIso3, capital, population)`.
/// NOTE: This type mirrors the external dataset layout; it is mapped 1:1 onto
/// [`CityRecord`] by position.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityRaw(
    pub u32,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub u64,
);

/// One row of the city table. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub id: u32,
    pub name: String,
    pub name_ascii: String,
    pub country: String,
    pub country_iso3: String,
    /// Capital status as found in the data: `"primary"`, `"admin"`, `"minor"` or `""`.
    pub capital: String,
    pub population: u64,
}

impl From<CityRaw> for CityRecord {
    fn from(raw: CityRaw) -> Self {
        let CityRaw(id, name, name_ascii, country, country_iso3, capital, population) = raw;
        // Older exports leave the ASCII column blank.
        let name_ascii = if name_ascii.is_empty() {
            ascii_fold(&name)
        } else {
            name_ascii
        };
        CityRecord {
            id,
            name,
            name_ascii,
            country,
            country_iso3,
            capital,
            population,
        }
    }
}

impl CityRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn capital_kind(&self) -> Capital {
        Capital::from_flag(&self.capital)
    }

    pub fn is_capital(&self) -> bool {
        !self.capital.is_empty()
    }
}

impl TermMatch for CityRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.country]
    }
}

impl Record for CityRecord {
    type Column = CityColumn;

    fn field(&self, column: CityColumn) -> FieldValue<'_> {
        match column {
            CityColumn::Id => FieldValue::Number(u64::from(self.id)),
            CityColumn::Name => FieldValue::Text(&self.name),
            CityColumn::NameAscii => FieldValue::Text(&self.name_ascii),
            CityColumn::Country => FieldValue::Text(&self.country),
            CityColumn::CountryIso3 => FieldValue::Text(&self.country_iso3),
            CityColumn::Capital => FieldValue::Text(&self.capital),
            CityColumn::Population => FieldValue::Number(self.population),
        }
    }
}

/// Classified capital flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capital {
    Primary,
    Admin,
    Minor,
    None,
}

impl Capital {
    /// Unrecognised flags classify as `Minor`; only the empty flag is `None`.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "" => Capital::None,
            f if f.eq_ignore_ascii_case("primary") => Capital::Primary,
            f if f.eq_ignore_ascii_case("admin") => Capital::Admin,
            _ => Capital::Minor,
        }
    }
}

/// How a column's values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Column key of the city table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CityColumn {
    Id,
    Name,
    NameAscii,
    Country,
    CountryIso3,
    Capital,
    Population,
}

impl CityColumn {
    pub const ALL: [CityColumn; 7] = [
        CityColumn::Id,
        CityColumn::Name,
        CityColumn::NameAscii,
        CityColumn::Country,
        CityColumn::CountryIso3,
        CityColumn::Capital,
        CityColumn::Population,
    ];

    /// Columns shown by the table view, in display order.
    pub const VISIBLE: [CityColumn; 5] = [
        CityColumn::Name,
        CityColumn::Country,
        CityColumn::CountryIso3,
        CityColumn::Capital,
        CityColumn::Population,
    ];

    /// Record key, matching the serialized [`CityRecord`] field name.
    pub fn key(self) -> &'static str {
        match self {
            CityColumn::Id => "id",
            CityColumn::Name => "name",
            CityColumn::NameAscii => "nameAscii",
            CityColumn::Country => "country",
            CityColumn::CountryIso3 => "countryIso3",
            CityColumn::Capital => "capital",
            CityColumn::Population => "population",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CityColumn::Id => "ID",
            CityColumn::Name => "City",
            CityColumn::NameAscii => "Name (ASCII)",
            CityColumn::Country => "Country",
            CityColumn::CountryIso3 => "ISO3",
            CityColumn::Capital => "Capital",
            CityColumn::Population => "Population",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            CityColumn::Id | CityColumn::Population => ColumnKind::Numeric,
            _ => ColumnKind::Text,
        }
    }

    pub fn sortable(self) -> bool {
        // ASCII names duplicate `name` ordering; the table never offers them.
        !matches!(self, CityColumn::NameAscii)
    }

    pub fn def(self) -> ColumnDef {
        ColumnDef {
            key: self.key(),
            label: self.label(),
            sortable: self.sortable(),
            kind: self.kind(),
        }
    }
}

impl fmt::Display for CityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CityColumn {
    type Err = CityError;

    /// Accepts the camelCase record key or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('_', "").to_ascii_lowercase();
        CityColumn::ALL
            .into_iter()
            .find(|c| c.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CityError::UnknownColumn(s.to_string()))
    }
}

/// Column description handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub kind: ColumnKind,
}

/// Column definitions for the visible table.
pub fn columns() -> Vec<ColumnDef> {
    CityColumn::VISIBLE.into_iter().map(CityColumn::def).collect()
}
