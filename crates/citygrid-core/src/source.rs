// crates/citygrid-core/src/source.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::CityRecord;
use crate::query::QueryRequest;

/// Where a table session gets its match set from.
///
/// The in-memory [`Dataset`] is the standard source. Other implementations
/// may fail; their errors surface in the view's error state.
pub trait CitySource {
    fn fetch(&self, request: &QueryRequest) -> Result<Vec<CityRecord>>;
}

impl CitySource for Dataset {
    fn fetch(&self, request: &QueryRequest) -> Result<Vec<CityRecord>> {
        request.run(self)
    }
}

impl<S: CitySource + ?Sized> CitySource for &S {
    fn fetch(&self, request: &QueryRequest) -> Result<Vec<CityRecord>> {
        (**self).fetch(request)
    }
}

impl<S: CitySource + ?Sized> CitySource for Box<S> {
    fn fetch(&self, request: &QueryRequest) -> Result<Vec<CityRecord>> {
        (**self).fetch(request)
    }
}

/// Decodes a result handed back by an external source.
///
/// Accepts an array of record objects or of positional rows. Anything else,
/// `null` included, is [`CityError::MalformedResult`](crate::error::CityError::MalformedResult);
/// it is never treated as an empty result.
#[cfg(feature = "json")]
pub fn decode_rows(value: serde_json::Value) -> Result<Vec<CityRecord>> {
    use crate::error::CityError;
    use crate::model::CityRaw;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(CityError::MalformedResult(format!(
                "expected an array of cities, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let decoded = if item.is_array() {
                serde_json::from_value::<CityRaw>(item).map(CityRecord::from)
            } else {
                serde_json::from_value::<CityRecord>(item)
            };
            decoded.map_err(|e| CityError::MalformedResult(format!("row {i}: {e}")))
        })
        .collect()
}

#[cfg(feature = "json")]
fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
