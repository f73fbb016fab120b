//! Vehicle record models

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A stored vehicle record: the server-assigned VIN plus the submitted fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, assigned on creation and immutable thereafter
    pub vin: String,
    /// The replaceable field set
    #[serde(flatten)]
    pub data: VehicleData,
}

/// The validated field set of a vehicle, everything except the VIN.
///
/// Numeric fields are kept as [`serde_json::Number`] so a submitted integer
/// is echoed back as an integer rather than being widened to a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleData {
    pub manufacturer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub horsepower: Number,
    pub model_name: String,
    pub model_year: Number,
    pub purchase_price: Number,
    pub fuel_type: String,
}

impl Vehicle {
    /// Attach a VIN to a validated field set
    pub fn new(vin: impl Into<String>, data: VehicleData) -> Self {
        Self {
            vin: vin.into(),
            data,
        }
    }
}
