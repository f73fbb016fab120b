//! Payload validation for vehicle create/update requests
//!
//! Requests arrive as raw JSON objects and are checked field by field so
//! that a wrong-typed field is reported as a validation problem alongside
//! the others instead of failing deserialization wholesale. Messages are
//! collected in declaration order, one per offending field.

use chrono::{Datelike, Utc};
use serde_json::{Map, Number, Value};

use crate::models::VehicleData;

/// First year a production automobile existed; `model_year` below this is
/// rejected. The upper bound is next calendar year (model years run ahead).
const MIN_MODEL_YEAR: i64 = 1886;

/// Validate a JSON object as a vehicle field set.
///
/// Returns the typed field set, or the full list of per-field messages if
/// any required field is missing, wrong-typed, or out of range.
pub fn validate_payload(payload: &Map<String, Value>) -> Result<VehicleData, Vec<String>> {
    let mut errors = Vec::new();

    let manufacturer_name = require_string(payload, "manufacturer_name", &mut errors);

    let description = match payload.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push("description must be a string".to_string());
            None
        }
    };

    let horsepower = match number(payload, "horsepower") {
        Some(n) if as_f64(n) > 0.0 => Some(n.clone()),
        _ => {
            errors.push("horsepower is required and must be a positive number".to_string());
            None
        }
    };

    let model_name = require_string(payload, "model_name", &mut errors);

    let max_model_year = i64::from(Utc::now().year()) + 1;
    let model_year = match number(payload, "model_year") {
        Some(n) if (MIN_MODEL_YEAR as f64..=max_model_year as f64).contains(&as_f64(n)) => {
            Some(n.clone())
        }
        _ => {
            errors.push("model_year is required and must be a valid year".to_string());
            None
        }
    };

    let purchase_price = match number(payload, "purchase_price") {
        Some(n) if as_f64(n) >= 0.0 => Some(n.clone()),
        _ => {
            errors.push("purchase_price is required and must be a non-negative number".to_string());
            None
        }
    };

    let fuel_type = require_string(payload, "fuel_type", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    // All None paths pushed an error above, so the unwraps cannot fire.
    Ok(VehicleData {
        manufacturer_name: manufacturer_name.unwrap(),
        description,
        horsepower: horsepower.unwrap(),
        model_name: model_name.unwrap(),
        model_year: model_year.unwrap(),
        purchase_price: purchase_price.unwrap(),
        fuel_type: fuel_type.unwrap(),
    })
}

/// Fetch a required non-empty string field, recording an error if absent,
/// empty, or not a string.
fn require_string(
    payload: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    match payload.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => {
            errors.push(format!("{} is required and must be a string", key));
            None
        }
    }
}

fn number<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a Number> {
    match payload.get(key) {
        Some(Value::Number(n)) => Some(n),
        _ => None,
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}
