//! citygrid prelude: bring common types and traits into scope.

pub use crate::common::DatasetStats;
pub use crate::config::TableConfig;
pub use crate::dataset::Dataset;
pub use crate::debounce::Debouncer;
pub use crate::error::{CityError, Result};
pub use crate::generation::{Generation, GenerationTracker};
pub use crate::model::{columns, Capital, CityColumn, CityRaw, CityRecord, ColumnDef, ColumnKind};
pub use crate::paginate::{paginate, total_pages, Nav, Page, PageState};
pub use crate::query::{match_count, query, QueryRequest, DEFAULT_QUERY_LIMIT};
pub use crate::sort::{sort, CompareMode, Direction, SortKey, SortSpec, SortState};
pub use crate::source::CitySource;
#[cfg(feature = "json")]
pub use crate::source::decode_rows;
pub use crate::traits::{FieldValue, Record, TermMatch};
pub use crate::view::{PageView, SearchTicket, ViewController, ViewEvent, ViewState, ViewStatus};
