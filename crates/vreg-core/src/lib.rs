//! vreg-core - Core types and storage for the vehicle registry
//!
//! This crate provides the domain model (vehicle records keyed by VIN),
//! payload validation, VIN generation, and the in-memory store the REST
//! layer serves from.

pub mod error;
pub mod models;
pub mod store;
pub mod validate;
pub mod vin;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::VehicleStore;
pub use validate::validate_payload;
pub use vin::{generate_vin, VIN_LENGTH};
