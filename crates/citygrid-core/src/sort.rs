// crates/citygrid-core/src/sort.rs
use crate::error::{CityError, Result};
use crate::traits::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::str::FromStr;

/// Sort direction of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    #[inline]
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            other => Err(CityError::InvalidConfig(format!(
                "unknown sort direction '{other}', expected asc or desc"
            ))),
        }
    }
}

/// Where a column sits in the three-state toggle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortState {
    Unsorted,
    Ascending,
    Descending,
}

/// How field values are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// Numbers compare numerically, text by case-sensitive byte order.
    #[default]
    Typed,
    /// Every value is compared as text, so `"9" > "80"`.
    ///
    /// Matches tables that stringify every cell before sorting.
    AsText,
}

/// Compares two field values under `mode`.
pub fn compare_fields(a: &FieldValue<'_>, b: &FieldValue<'_>, mode: CompareMode) -> Ordering {
    match (mode, a, b) {
        (CompareMode::Typed, FieldValue::Number(x), FieldValue::Number(y)) => x.cmp(y),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey<C> {
    pub column: C,
    pub direction: Direction,
}

/// Ordered list of sort keys; the first key has top priority.
///
/// A column appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec<C> {
    keys: Vec<SortKey<C>>,
}

impl<C> Default for SortSpec<C> {
    fn default() -> Self {
        SortSpec { keys: Vec::new() }
    }
}

impl<C: Copy + Eq + Debug> SortSpec<C> {
    pub fn new(keys: Vec<SortKey<C>>) -> Result<Self> {
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].iter().any(|k| k.column == key.column) {
                return Err(CityError::DuplicateSortColumn(format!("{:?}", key.column)));
            }
        }
        Ok(SortSpec { keys })
    }

    pub fn keys(&self) -> &[SortKey<C>] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn state_of(&self, column: C) -> SortState {
        match self.keys.iter().find(|k| k.column == column) {
            None => SortState::Unsorted,
            Some(k) if k.direction == Direction::Ascending => SortState::Ascending,
            Some(_) => SortState::Descending,
        }
    }

    /// Zero-based precedence of `column`, if it is sorted.
    pub fn priority_of(&self, column: C) -> Option<usize> {
        self.keys.iter().position(|k| k.column == column)
    }

    /// Advances `column` through `unsorted -> ascending -> descending -> unsorted`.
    ///
    /// New columns are appended, so they rank below every column already in
    /// the spec. Returns the column's new state.
    pub fn toggle(&mut self, column: C) -> SortState {
        match self.keys.iter().position(|k| k.column == column) {
            None => {
                self.keys.push(SortKey {
                    column,
                    direction: Direction::Ascending,
                });
                SortState::Ascending
            }
            Some(i) if self.keys[i].direction == Direction::Ascending => {
                self.keys[i].direction = Direction::Descending;
                SortState::Descending
            }
            Some(i) => {
                self.keys.remove(i);
                SortState::Unsorted
            }
        }
    }

    /// Parses `"name:asc,population:desc"`; a bare column means ascending.
    pub fn parse(s: &str) -> Result<Self>
    where
        C: FromStr<Err = CityError>,
    {
        let keys = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (col, dir) = part.split_once(':').unwrap_or((part, "asc"));
                Ok(SortKey {
                    column: col.parse()?,
                    direction: dir.parse()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        SortSpec::new(keys)
    }
}

/// Total order of two records under `spec`; `Equal` on a full tie.
pub fn compare_records<T: Record>(
    a: &T,
    b: &T,
    spec: &SortSpec<T::Column>,
    mode: CompareMode,
) -> Ordering {
    for key in spec.keys() {
        let ord = compare_fields(&a.field(key.column), &b.field(key.column), mode);
        if ord != Ordering::Equal {
            return key.direction.apply(ord);
        }
    }
    Ordering::Equal
}

/// Returns `records` ordered by `spec`. The input is left untouched.
///
/// The sort is stable: records tying on every key keep their input order,
/// and an empty spec returns the input order unchanged.
pub fn sort<T: Record + Clone>(
    records: &[T],
    spec: &SortSpec<T::Column>,
    mode: CompareMode,
) -> Vec<T> {
    let mut out = records.to_vec();
    if !spec.is_empty() {
        out.sort_by(|a, b| compare_records(a, b, spec, mode));
    }
    tracing::debug!(rows = out.len(), keys = spec.keys().len(), ?mode, "sort");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CityColumn, CityRecord};

    fn city(id: u32, name: &str, country: &str, population: u64) -> CityRecord {
        CityRecord {
            id,
            name: name.into(),
            name_ascii: name.into(),
            country: country.into(),
            country_iso3: String::new(),
            capital: String::new(),
            population,
        }
    }

    fn rows() -> Vec<CityRecord> {
        vec![
            city(1, "Lyon", "France", 9),
            city(2, "Berlin", "Germany", 80),
            city(3, "Paris", "France", 80),
            city(4, "Bonn", "Germany", 9),
        ]
    }

    fn ids(rows: &[CityRecord]) -> Vec<u32> {
        rows.iter().map(|c| c.id).collect()
    }

    fn spec(keys: &[(CityColumn, Direction)]) -> SortSpec<CityColumn> {
        SortSpec::new(
            keys.iter()
                .map(|&(column, direction)| SortKey { column, direction })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_spec_keeps_input_order() {
        let input = rows();
        assert_eq!(ids(&sort(&input, &SortSpec::default(), CompareMode::Typed)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn does_not_mutate_input() {
        let input = rows();
        let _ = sort(&input, &spec(&[(CityColumn::Name, Direction::Ascending)]), CompareMode::Typed);
        assert_eq!(ids(&input), vec![1, 2, 3, 4]);
    }

    #[test]
    fn multi_key_breaks_ties_in_order() {
        let out = sort(
            &rows(),
            &spec(&[
                (CityColumn::Country, Direction::Ascending),
                (CityColumn::Population, Direction::Descending),
            ]),
            CompareMode::Typed,
        );
        assert_eq!(ids(&out), vec![3, 1, 2, 4]);
    }

    #[test]
    fn full_ties_are_stable() {
        let out = sort(&rows(), &spec(&[(CityColumn::Population, Direction::Descending)]), CompareMode::Typed);
        assert_eq!(ids(&out), vec![2, 3, 1, 4]);
    }

    #[test]
    fn typed_mode_orders_numbers_numerically() {
        let out = sort(&rows(), &spec(&[(CityColumn::Population, Direction::Ascending)]), CompareMode::Typed);
        assert_eq!(ids(&out), vec![1, 4, 2, 3]);
    }

    #[test]
    fn text_mode_orders_numbers_lexically() {
        let out = sort(&rows(), &spec(&[(CityColumn::Population, Direction::Ascending)]), CompareMode::AsText);
        // "80" < "9"
        assert_eq!(ids(&out), vec![2, 3, 1, 4]);
    }

    #[test]
    fn text_compare_is_case_sensitive() {
        let input = vec![city(1, "amsterdam", "", 0), city(2, "Zagreb", "", 0)];
        let out = sort(&input, &spec(&[(CityColumn::Name, Direction::Ascending)]), CompareMode::Typed);
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn missing_values_sort_as_empty_text() {
        assert_eq!(
            compare_fields(&FieldValue::Missing, &FieldValue::Text(""), CompareMode::Typed),
            Ordering::Equal
        );
        assert_eq!(
            compare_fields(&FieldValue::Missing, &FieldValue::Number(0), CompareMode::Typed),
            Ordering::Less
        );
    }

    #[test]
    fn toggle_cycles_through_three_states() {
        let mut s = SortSpec::default();
        assert_eq!(s.toggle(CityColumn::Name), SortState::Ascending);
        assert_eq!(s.toggle(CityColumn::Name), SortState::Descending);
        assert_eq!(s.toggle(CityColumn::Name), SortState::Unsorted);
        assert!(s.is_empty());

        let input = rows();
        assert_eq!(sort(&input, &s, CompareMode::Typed), input);
    }

    #[test]
    fn toggle_appends_and_flips_in_place() {
        let mut s = SortSpec::default();
        s.toggle(CityColumn::Country);
        s.toggle(CityColumn::Population);
        s.toggle(CityColumn::Country);
        assert_eq!(s.priority_of(CityColumn::Country), Some(0));
        assert_eq!(s.state_of(CityColumn::Country), SortState::Descending);
        assert_eq!(s.priority_of(CityColumn::Population), Some(1));

        // Removing and re-adding demotes the column.
        s.toggle(CityColumn::Country);
        s.toggle(CityColumn::Country);
        assert_eq!(s.priority_of(CityColumn::Country), Some(1));
        assert_eq!(s.state_of(CityColumn::Name), SortState::Unsorted);
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = SortSpec::new(vec![
            SortKey { column: CityColumn::Name, direction: Direction::Ascending },
            SortKey { column: CityColumn::Name, direction: Direction::Descending },
        ])
        .unwrap_err();
        assert!(matches!(err, CityError::DuplicateSortColumn(_)));
    }

    #[test]
    fn parses_cli_syntax() {
        let s = SortSpec::<CityColumn>::parse("country, population:desc").unwrap();
        assert_eq!(
            s.keys(),
            &[
                SortKey { column: CityColumn::Country, direction: Direction::Ascending },
                SortKey { column: CityColumn::Population, direction: Direction::Descending },
            ]
        );
        assert!(SortSpec::<CityColumn>::parse("name:sideways").is_err());
        assert!(SortSpec::<CityColumn>::parse("").unwrap().is_empty());
    }
}
