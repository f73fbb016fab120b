//! VIN generation and format limits
//!
//! VINs here are opaque unique keys in the shape of a real VIN (17
//! characters), not checksummed against ISO 3779.

use uuid::Uuid;

/// Length of a generated VIN; anything longer is rejected as malformed.
pub const VIN_LENGTH: usize = 17;

/// Generate a fresh 17-character uppercase VIN from a v4 UUID.
pub fn generate_vin() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..VIN_LENGTH].to_ascii_uppercase()
}

/// Whether a caller-supplied VIN is short enough to possibly exist.
pub fn is_plausible(vin: &str) -> bool {
    !vin.is_empty() && vin.len() <= VIN_LENGTH
}
