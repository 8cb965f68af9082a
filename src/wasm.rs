use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::resolution::ResolverChain;
use crate::resolution::mapping::category_for_sentinel;
use crate::types::{Sentinel, parse_sentinel, wrap};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

fn resolve_to_json(sentinel: &str, context: &str) -> Result<serde_json::Value, Error> {
    let sentinel = parse_sentinel(sentinel)?;
    let report = ResolverChain::new().report(wrap(context, sentinel));
    Ok(serde_json::to_value(report)?)
}

/// Wrap the named sentinel in `context`, resolve it and return the report.
#[wasm_bindgen]
pub fn resolve_sentinel(sentinel: &str, context: &str) -> JsValue {
    match resolve_to_json(sentinel, context) {
        Ok(value) => to_js(&value),
        Err(e) => error_result(&e.to_string()),
    }
}

/// Every sentinel with its message and the category the default chain assigns.
///
/// `id` and `category` are lookup labels for the JS side, not error codes.
#[wasm_bindgen]
pub fn get_all_sentinels() -> JsValue {
    let result: Vec<serde_json::Value> = Sentinel::iter()
        .map(|s| {
            let category = category_for_sentinel(s);
            serde_json::json!({
                "id": s.as_str(),
                "message": s.to_string(),
                "category": category.as_str(),
                "categoryMessage": category.message(),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(result))
}
