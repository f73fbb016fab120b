//! Shared data models for the vehicle registry

mod vehicle;

pub use vehicle::*;
