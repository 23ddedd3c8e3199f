//! citygrid-wasm — WebAssembly bindings for citygrid-core
//!
//! Exposes the city table pipeline to JavaScript. The dataset is compiled
//! into the module; rendering stays on the JS side.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `query_cities({searchTerm?, limit?, offset?})`: the raw query function
//! - `CityTable`: a table session (search, sort toggles, paging, debounce)
//! - `columns()`, `page_size_options()`, `get_stats()` (a table's own
//!   sizes come from `table.page_size_options()`)
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CityTable, columns, query_cities } from 'citygrid-wasm';
//!
//! await init();
//! const table = new CityTable();
//! table.input('berl', performance.now());
//! // on every animation frame / timer:
//! const ticket = table.tick(performance.now());
//! if (ticket) {
//!   const rows = query_cities(ticket.request);
//!   table.settle(ticket.generation, rows);
//! }
//! render(columns(), table.view()); // {status: 'pending'|'error'|'empty'|'ready', ...}
//! ```
//!
//! Notes
//! -----
//! - `settle` ignores responses for superseded searches and returns `false`.
//! - A settle payload that is not an array of cities puts the table into the
//!   `error` state; it is never shown as an empty result.
//! - Call `dispose()` on unmount so no pending debounce timer fires later.
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use citygrid_core::prelude::*;

type JsResult<T> = std::result::Result<T, JsValue>;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// Maps (including flattened structs) become plain objects, not `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> JsResult<JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_err)
}

fn js_page_sizes(options: &[usize]) -> JsResult<Vec<u32>> {
    options
        .iter()
        .map(|&size| u32::try_from(size).map_err(js_err))
        .collect()
}

fn db() -> JsResult<&'static Dataset> {
    Dataset::embedded().map_err(js_err)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing citygrid WASM module...".into());

    match Dataset::embedded() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(
                &format!("✓ Loaded {} cities in {} countries", stats.cities, stats.countries).into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("Failed to load embedded cities: {e}").into()),
    }
}

/* --------------------------------------------------------------------------
   Query Function
-------------------------------------------------------------------------- */

/// Runs the query function against the embedded dataset.
///
/// Every option is optional: `searchTerm = ""`, `limit = 10000`, `offset = 0`.
/// Throws `"Offset must be non-negative, and limit must be greater than 0."`
/// for out-of-range values.
#[wasm_bindgen]
pub fn query_cities(options: JsValue) -> JsResult<JsValue> {
    let request: QueryRequest = if options.is_undefined() || options.is_null() {
        QueryRequest::default()
    } else {
        from_value(options).map_err(js_err)?
    };
    let rows = db()?.fetch(&request).map_err(js_err)?;
    to_js(&rows)
}

/* --------------------------------------------------------------------------
   Table Schema & Stats
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn columns() -> JsResult<JsValue> {
    to_js(&citygrid_core::model::columns())
}

/// Page sizes offered by a table with the default configuration.
#[wasm_bindgen]
pub fn page_size_options() -> JsResult<Vec<u32>> {
    js_page_sizes(&TableConfig::default().page_size_options)
}

#[wasm_bindgen]
pub fn get_stats() -> JsResult<JsValue> {
    let stats = db()?.stats();
    to_js(&json!({
        "cities": stats.cities,
        "countries": stats.countries,
        "capitals": stats.capitals,
        "totalPopulation": stats.total_population,
    }))
}

/* --------------------------------------------------------------------------
   Table Session
-------------------------------------------------------------------------- */

/// One table session over the embedded dataset.
#[wasm_bindgen]
pub struct CityTable {
    inner: ViewController<&'static Dataset>,
}

#[wasm_bindgen]
impl CityTable {
    /// `config` is an optional partial `TableConfig`
    /// (`{pageSizeOptions, defaultPageSize, queryLimit, debounceMs, compareMode}`).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> JsResult<CityTable> {
        let config: TableConfig = if config.is_undefined() || config.is_null() {
            TableConfig::default()
        } else {
            from_value(config).map_err(js_err)?
        };
        let inner = ViewController::new(db()?, config).map_err(js_err)?;
        Ok(CityTable { inner })
    }

    /// Searches synchronously and returns the new view.
    pub fn search(&mut self, term: &str) -> JsResult<JsValue> {
        to_js(&self.inner.search(term))
    }

    /// Issues a search and returns its ticket `{generation, request}`.
    pub fn begin_search(&mut self, term: &str) -> JsResult<JsValue> {
        to_js(&self.inner.begin_search(term))
    }

    /// Applies the rows fetched for `generation`.
    ///
    /// Returns `false` when the generation was superseded.
    pub fn settle(&mut self, generation: f64, rows: JsValue) -> bool {
        let outcome = from_value::<serde_json::Value>(rows)
            .map_err(|e| CityError::MalformedResult(e.to_string()))
            .and_then(decode_rows);
        let applied = self.inner.settle(Generation(generation as u64), outcome);
        if !applied {
            web_sys::console::warn_1(&format!("Ignoring stale search #{generation}").into());
        }
        applied
    }

    /// Marks the search `generation` as failed with `message`.
    pub fn fail(&mut self, generation: f64, message: &str) -> bool {
        self.inner.fail(Generation(generation as u64), message)
    }

    /// Records a keystroke in the search box at time `now_ms`.
    pub fn input(&mut self, term: &str, now_ms: f64) {
        self.inner.input(term, now_ms as u64);
    }

    /// Advances the debounce clock; returns a ticket once input settled, else `null`.
    pub fn tick(&mut self, now_ms: f64) -> JsResult<JsValue> {
        match self.inner.tick(now_ms as u64) {
            Some(ticket) => to_js(&ticket),
            None => Ok(JsValue::NULL),
        }
    }

    /// Cycles `column` through unsorted → ascending → descending.
    /// Returns the new state name.
    pub fn toggle_sort(&mut self, column: &str) -> JsResult<JsValue> {
        let column: CityColumn = column.parse().map_err(js_err)?;
        to_js(&self.inner.toggle_sort(column))
    }

    /// Page sizes this table offers, from its configuration.
    pub fn page_size_options(&self) -> JsResult<Vec<u32>> {
        js_page_sizes(&self.inner.config().page_size_options)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> JsResult<()> {
        self.inner.set_page_size(page_size).map_err(js_err)
    }

    pub fn first(&mut self) -> bool {
        self.inner.first()
    }

    pub fn previous(&mut self) -> bool {
        self.inner.previous()
    }

    pub fn next(&mut self) -> bool {
        self.inner.next()
    }

    pub fn last(&mut self) -> bool {
        self.inner.last()
    }

    /// Current presentation state: `{status: "pending" | "error" | "empty" | "ready", ...}`.
    pub fn view(&self) -> JsResult<JsValue> {
        to_js(&self.inner.view())
    }

    /// Cancels the debounce timer and drops any in-flight search.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}
