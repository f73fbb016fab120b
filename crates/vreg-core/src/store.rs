//! In-memory vehicle store
//!
//! One map from VIN to record, guarded by a [`parking_lot::RwLock`]. Every
//! operation takes the lock exactly once, so each request sees a consistent
//! snapshot and mutations are atomic per VIN.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Vehicle, VehicleData};
use crate::vin;

/// The vehicle collection. Records live for the process lifetime only.
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: RwLock<HashMap<String, Vehicle>>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated field set under a freshly generated VIN and return
    /// the created record.
    pub fn insert(&self, data: VehicleData) -> Vehicle {
        let mut vehicles = self.vehicles.write();

        // UUID-derived VINs collide only in theory; regenerate if one does.
        let vin = loop {
            let candidate = vin::generate_vin();
            if !vehicles.contains_key(&candidate) {
                break candidate;
            }
        };

        let vehicle = Vehicle::new(vin.clone(), data);
        vehicles.insert(vin, vehicle.clone());
        tracing::debug!(vin = %vehicle.vin, "vehicle created");
        vehicle
    }

    /// Snapshot of all stored records.
    pub fn list(&self) -> Vec<Vehicle> {
        self.vehicles.read().values().cloned().collect()
    }

    /// Fetch a record by VIN.
    pub fn get(&self, vin: &str) -> StoreResult<Vehicle> {
        Self::check_vin(vin)?;
        self.vehicles
            .read()
            .get(vin)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(vin.to_string()))
    }

    /// Replace every field of an existing record, keeping its VIN.
    pub fn replace(&self, vin: &str, data: VehicleData) -> StoreResult<Vehicle> {
        Self::check_vin(vin)?;
        let mut vehicles = self.vehicles.write();
        match vehicles.get_mut(vin) {
            Some(vehicle) => {
                vehicle.data = data;
                tracing::debug!(vin = %vin, "vehicle updated");
                Ok(vehicle.clone())
            }
            None => Err(StoreError::NotFound(vin.to_string())),
        }
    }

    /// Remove a record permanently.
    pub fn remove(&self, vin: &str) -> StoreResult<()> {
        Self::check_vin(vin)?;
        let mut vehicles = self.vehicles.write();
        match vehicles.remove(vin) {
            Some(_) => {
                tracing::debug!(vin = %vin, "vehicle deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(vin.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.read().is_empty()
    }

    fn check_vin(vin: &str) -> StoreResult<()> {
        if vin::is_plausible(vin) {
            Ok(())
        } else {
            Err(StoreError::InvalidVin(vin.to_string()))
        }
    }
}
