use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use citygrid_wasm::{page_size_options, query_cities, CityTable};

#[wasm_bindgen_test]
fn offers_page_sizes() {
    assert_eq!(page_size_options().unwrap(), vec![5, 10, 15, 20]);
}

#[wasm_bindgen_test]
fn query_with_defaults_returns_rows() {
    #[cfg(target_arch = "wasm32")]
    citygrid_wasm::start();

    let rows = query_cities(JsValue::UNDEFINED).expect("query");
    assert!(js_sys::Array::is_array(&rows));
    assert!(js_sys::Array::from(&rows).length() > 0);
}

#[wasm_bindgen_test]
fn negative_offset_is_rejected() {
    let opts = js_sys::Object::new();
    js_sys::Reflect::set(&opts, &"offset".into(), &JsValue::from(-1)).unwrap();
    let err = query_cities(opts.into()).unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Offset must be non-negative, and limit must be greater than 0.")
    );
}

#[wasm_bindgen_test]
fn malformed_settle_is_an_error_view() {
    let mut table = CityTable::new(JsValue::UNDEFINED).expect("table");
    let ticket = table.begin_search("berl").expect("ticket");
    let generation = js_sys::Reflect::get(&ticket, &"generation".into())
        .unwrap()
        .as_f64()
        .unwrap();
    assert!(table.settle(generation, JsValue::from_str("not rows")));

    let view = table.view().unwrap();
    let status = js_sys::Reflect::get(&view, &"status".into()).unwrap();
    assert_eq!(status.as_string().as_deref(), Some("error"));
}

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn settled_rows_are_a_ready_view() {
    let mut table = CityTable::new(JsValue::UNDEFINED).expect("table");
    let ticket = table.begin_search("berl").expect("ticket");
    let generation = field(&ticket, "generation").as_f64().unwrap();
    let rows = query_cities(field(&ticket, "request")).expect("rows");
    assert!(table.settle(generation, rows));

    let view = table.view().unwrap();
    assert!(!view.is_instance_of::<js_sys::Map>());
    assert_eq!(field(&view, "status").as_string().as_deref(), Some("ready"));
    assert_eq!(field(&view, "term").as_string().as_deref(), Some("berl"));
    let page_rows = js_sys::Array::from(&field(&view, "rows"));
    assert!(page_rows.length() > 0);
    let name = field(&page_rows.get(0), "name").as_string().unwrap();
    assert!(name.to_lowercase().contains("berl"));
}

#[wasm_bindgen_test]
fn table_offers_its_configured_page_sizes() {
    let config = js_sys::Object::new();
    let sizes = js_sys::Array::of2(&JsValue::from(25), &JsValue::from(50));
    js_sys::Reflect::set(&config, &"pageSizeOptions".into(), &sizes).unwrap();
    js_sys::Reflect::set(&config, &"defaultPageSize".into(), &JsValue::from(25)).unwrap();

    let table = CityTable::new(config.into()).expect("table");
    assert_eq!(table.page_size_options().unwrap(), vec![25, 50]);
}
