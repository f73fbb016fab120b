//! Vehicle Registry Client Library
//!
//! Provides a typed HTTP client for the vehicle registry REST API.
//!
//! # Example
//!
//! ```rust,no_run
//! use vreg_client::VehicleClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VehicleClient::new("http://localhost:3000")?;
//!
//!     // List every registered vehicle
//!     let vehicles = client.list_vehicles().await?;
//!
//!     // Fetch one by VIN
//!     if let Some(first) = vehicles.first() {
//!         let vehicle = client.get_vehicle(&first.vin).await?;
//!         println!("{}", vehicle.data.model_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-process server harness:
//!
//! ```rust,ignore
//! use vreg_client::testing::TestServer;
//! use vreg_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(AppState::new())).await?;
//! let vehicles = server.client().list_vehicles().await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::VehicleClient;
pub use error::{Result, VehicleClientError};

// Re-export core models for convenience
pub use vreg_core::{Vehicle, VehicleData};
