// crates/citygrid-core/src/traits.rs
use std::borrow::Cow;
use std::fmt::Debug;

/// A single cell value as seen by the sort engine.
///
/// Records hand out borrowed views so comparisons never clone strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
    /// Absent values sort as the empty string.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// The textual representation used for text-mode comparison.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Missing => Cow::Borrowed(""),
        }
    }
}

/// Row abstraction for the sort engine.
///
/// Any record type that can expose its cells by column can be ordered by a
/// [`SortSpec`](crate::sort::SortSpec). The associated `Column` type is the
/// record's column key (for cities: [`CityColumn`](crate::model::CityColumn)).
///
/// # Examples
/// ```rust
/// use citygrid_core::traits::{FieldValue, Record};
///
/// #[derive(Clone)]
/// struct Pair(&'static str, u64);
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum PairColumn { Label, Count }
///
/// impl Record for Pair {
///     type Column = PairColumn;
///     fn field(&self, column: PairColumn) -> FieldValue<'_> {
///         match column {
///             PairColumn::Label => FieldValue::Text(self.0),
///             PairColumn::Count => FieldValue::Number(self.1),
///         }
///     }
/// }
///
/// assert_eq!(Pair("a", 3).field(PairColumn::Count), FieldValue::Number(3));
/// ```
pub trait Record {
    type Column: Copy + Eq + Debug;

    fn field(&self, column: Self::Column) -> FieldValue<'_>;
}

/// Free-text matching helpers for records that can be searched.
///
/// Implementors expose the text fields the query engine looks at; matching is
/// plain lower-case substring containment on each of them.
pub trait TermMatch {
    /// Text fields searched by the query engine, in priority order.
    fn search_fields(&self) -> Vec<&str>;

    /// `true` if any search field contains `normalized` once lower-cased.
    ///
    /// `normalized` must already be trimmed and lower-cased, see
    /// [`normalize_term`](crate::text::normalize_term).
    #[inline]
    fn matches_term(&self, normalized: &str) -> bool {
        normalized.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| field.to_lowercase().contains(normalized))
    }
}
