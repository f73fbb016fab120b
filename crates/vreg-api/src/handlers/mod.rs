//! Request handlers for the vehicle registry API

pub mod vehicles;
