//! End-to-end CRUD tests for the vehicle registry
//!
//! Each test starts its own in-process server on an ephemeral port and talks
//! to it over HTTP, through the typed client for the happy paths and raw
//! reqwest where the wire-level shape of a response matters.
//!
//! Run with: cargo test -p vreg-tests --test crud_e2e_test

use serde_json::{json, Value};

use vreg_api::{create_router, AppState};
use vreg_client::testing::TestServer;
use vreg_client::VehicleClientError;
use vreg_core::{VehicleData, VIN_LENGTH};

async fn start_server() -> TestServer {
    TestServer::start(create_router(AppState::new()))
        .await
        .expect("failed to start test server")
}

/// The creation payload from the reference scenario
fn nevera_json() -> Value {
    json!({
        "manufacturer_name": "Rimac",
        "description": "Nevera hypercar",
        "horsepower": 1914,
        "model_name": "Nevera",
        "model_year": 2026,
        "purchase_price": 2250000,
        "fuel_type": "Electric",
    })
}

fn nevera_data() -> VehicleData {
    serde_json::from_value(nevera_json()).unwrap()
}

fn gas_data() -> VehicleData {
    serde_json::from_value(json!({
        "manufacturer_name": "Ford",
        "horsepower": 450,
        "model_name": "Mustang GT",
        "model_year": 2024,
        "purchase_price": 46000,
        "fuel_type": "Gas",
    }))
    .unwrap()
}

#[tokio::test]
async fn health_answers_ok() {
    let server = start_server().await;
    assert_eq!(server.client().health().await.unwrap(), "OK");
}

#[tokio::test]
async fn create_returns_record_with_vin_and_exact_fields() {
    let server = start_server().await;
    let payload = nevera_json();

    let response = server
        .client()
        .http_client()
        .post(format!("{}/vehicle", server.base_url()))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();

    let vin = body["vin"].as_str().unwrap();
    assert!(!vin.is_empty());
    assert!(vin.len() <= VIN_LENGTH);

    // Every submitted field comes back unchanged, integers included
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&body[key], value, "field {} was not echoed back", key);
    }
}

#[tokio::test]
async fn two_creations_yield_distinct_vins() {
    let server = start_server().await;

    let first = server.client().create_vehicle(&nevera_data()).await.unwrap();
    let second = server.client().create_vehicle(&nevera_data()).await.unwrap();

    assert_ne!(first.vin, second.vin);
}

#[tokio::test]
async fn created_vehicle_appears_exactly_once_in_listing() {
    let server = start_server().await;
    let client = server.client();

    let created = client.create_vehicle(&nevera_data()).await.unwrap();
    client.create_vehicle(&gas_data()).await.unwrap();

    let listed = client.list_vehicles().await.unwrap();
    assert_eq!(listed.len(), 2);
    let matches = listed.iter().filter(|v| v.vin == created.vin).count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn listing_starts_empty() {
    let server = start_server().await;
    assert!(server.client().list_vehicles().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_vin_returns_the_record() {
    let server = start_server().await;
    let client = server.client();

    let created = client.create_vehicle(&nevera_data()).await.unwrap();
    let fetched = client.get_vehicle(&created.vin).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.data.manufacturer_name, "Rimac");
}

#[tokio::test]
async fn get_unknown_vin_is_404() {
    let server = start_server().await;

    let err = server.client().get_vehicle("NONEXISTENTVIN123").await;
    assert!(matches!(err, Err(VehicleClientError::NotFound(_))));
}

#[tokio::test]
async fn get_over_long_vin_is_400() {
    let server = start_server().await;

    let response = server
        .client()
        .http_client()
        .get(format!("{}/vehicle/INVALIDVIN12345678", server.base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid VIN format");
}

#[tokio::test]
async fn update_replaces_every_field_and_keeps_vin() {
    let server = start_server().await;
    let client = server.client();

    let created = client.create_vehicle(&nevera_data()).await.unwrap();

    let replacement: VehicleData = serde_json::from_value(json!({
        "manufacturer_name": "Rimac Updated",
        "description": "Nevera hypercar updated",
        "horsepower": 1920,
        "model_name": "Nevera X",
        "model_year": 2027,
        "purchase_price": 2300000,
        "fuel_type": "Electric",
    }))
    .unwrap();

    let updated = client
        .update_vehicle(&created.vin, &replacement)
        .await
        .unwrap();
    assert_eq!(updated.vin, created.vin);
    assert_eq!(updated.data, replacement);

    // A subsequent read reflects the new values, not the old ones
    let fetched = client.get_vehicle(&created.vin).await.unwrap();
    assert_eq!(fetched.data.model_name, "Nevera X");
    assert_eq!(fetched.data.manufacturer_name, "Rimac Updated");
}

#[tokio::test]
async fn update_unknown_vin_is_404() {
    let server = start_server().await;

    let err = server
        .client()
        .update_vehicle("NONEXISTENTVIN123", &gas_data())
        .await;
    assert!(matches!(err, Err(VehicleClientError::NotFound(_))));
}

#[tokio::test]
async fn delete_answers_204_with_empty_body() {
    let server = start_server().await;
    let created = server.client().create_vehicle(&nevera_data()).await.unwrap();

    let response = server
        .client()
        .http_client()
        .delete(format!("{}/vehicle/{}", server.base_url(), created.vin))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn second_delete_of_same_vin_is_404() {
    let server = start_server().await;
    let client = server.client();

    let created = client.create_vehicle(&nevera_data()).await.unwrap();

    client.delete_vehicle(&created.vin).await.unwrap();
    let err = client.delete_vehicle(&created.vin).await;
    assert!(matches!(err, Err(VehicleClientError::NotFound(_))));
}

#[tokio::test]
async fn deleted_vehicle_is_gone_from_reads_and_listing() {
    let server = start_server().await;
    let client = server.client();

    let created = client.create_vehicle(&nevera_data()).await.unwrap();
    client.delete_vehicle(&created.vin).await.unwrap();

    let err = client.get_vehicle(&created.vin).await;
    assert!(matches!(err, Err(VehicleClientError::NotFound(_))));
    assert!(client.list_vehicles().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_vin_is_404() {
    let server = start_server().await;

    let err = server.client().delete_vehicle("NONEXISTENTVIN123").await;
    assert!(matches!(err, Err(VehicleClientError::NotFound(_))));
}
