use schemars::schema_for;
use wasm_bindgen::prelude::*;

use crate::engine::{self, ViewWindow};
use crate::model::{AllocationEntry, Book, Curve};
use crate::validate;

fn error_json(context: &str, e: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": format!("{context}: {e}") }).to_string()
}

fn parse_curve(json: &str) -> Result<Curve, String> {
    Curve::from_json(json).map_err(|e| error_json("JSON parse error", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| error_json("Serialization error", e))
}

#[wasm_bindgen]
pub fn interpolate_json(curve_json: &str, amount: f64) -> String {
    match parse_curve(curve_json) {
        Ok(curve) => serde_json::json!({ "apr": engine::interpolate(&curve, amount) }).to_string(),
        Err(e) => e,
    }
}

#[wasm_bindgen]
pub fn move_point_json(
    curve_json: &str,
    index: usize,
    amount: Option<f64>,
    apr: Option<f64>,
) -> String {
    match parse_curve(curve_json) {
        Ok(curve) => to_json(&engine::move_point(&curve, index, amount, apr)),
        Err(e) => e,
    }
}

#[wasm_bindgen]
pub fn set_allocation_json(
    entries_json: &str,
    target_id: &str,
    percentage: f64,
    total_vault_value: f64,
) -> String {
    let entries: Vec<AllocationEntry> = match serde_json::from_str(entries_json) {
        Ok(e) => e,
        Err(e) => return error_json("JSON parse error", e),
    };
    let next = engine::set_allocation(&entries, target_id, percentage, total_vault_value);
    serde_json::json!({
        "entries": next,
        "total": engine::allocation_total(&next),
        "can_save": validate::check_allocations(&next).is_empty(),
    })
    .to_string()
}

#[wasm_bindgen]
pub fn validate_book_json(json: &str) -> String {
    let book: Book = match serde_json::from_str(json) {
        Ok(b) => b,
        Err(e) => {
            return serde_json::json!({
                "valid": false,
                "errors": [format!("JSON parse error: {}", e)]
            })
            .to_string();
        }
    };
    match validate::validate(&book) {
        Ok(()) => serde_json::json!({ "valid": true }).to_string(),
        Err(errors) => {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            serde_json::json!({
                "valid": false,
                "errors": error_strings
            })
            .to_string()
        }
    }
}

/// Sample a curve for drawing. Returns an array of `{amount, apr}` objects.
#[wasm_bindgen]
pub fn sample_curve(curve_json: &str, zoom_level: f64, steps: usize) -> Result<JsValue, JsValue> {
    let curve = parse_curve(curve_json).map_err(|e| JsValue::from_str(&e))?;
    let samples = ViewWindow::new(zoom_level).sample(&curve, steps);
    serde_wasm_bindgen::to_value(&samples).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    let schema = schema_for!(Book);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| error_json("Serialization error", e))
}
