//! Vehicle CRUD handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use vreg_core::{validate_payload, Vehicle, VehicleData};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /vehicle
/// Create a vehicle; the server assigns the VIN.
pub async fn create_vehicle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vehicle>), ApiError> {
    let data = vehicle_fields(body)?;
    let vehicle = state.store().insert(data);
    tracing::info!(vin = %vehicle.vin, "created vehicle");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /vehicle
/// List every stored vehicle.
pub async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    Json(state.store().list())
}

/// GET /vehicle/{vin}
/// Fetch a single vehicle by VIN.
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.store().get(&vin)?;
    Ok(Json(vehicle))
}

/// PUT /vehicle/{vin}
/// Replace every field of an existing vehicle; the VIN is immutable.
/// The body is validated before the existence check, matching create.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vehicle>, ApiError> {
    let data = vehicle_fields(body)?;
    let vehicle = state.store().replace(&vin, data)?;
    tracing::info!(vin = %vehicle.vin, "updated vehicle");
    Ok(Json(vehicle))
}

/// DELETE /vehicle/{vin}
/// Remove a vehicle permanently.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store().remove(&vin)?;
    tracing::info!(vin = %vin, "deleted vehicle");
    Ok(StatusCode::NO_CONTENT)
}

/// Turn a request body into a validated field set.
///
/// Distinguishes the three body-level failures the contract fixes:
/// malformed JSON (400, via the rejection), an empty or non-object body
/// (400), and per-field validation problems (422).
fn vehicle_fields(body: Result<Json<Value>, JsonRejection>) -> Result<VehicleData, ApiError> {
    let Json(value) = body?;

    let payload = match value.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => {
            return Err(ApiError::BadRequest(
                "Request body must be a JSON representation of a vehicle".to_string(),
            ))
        }
    };

    validate_payload(payload).map_err(ApiError::Validation)
}
