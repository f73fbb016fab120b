//! Integration tests for the vehicle registry
//!
//! This crate contains black-box tests that exercise the full HTTP surface:
//! every request goes through a real TCP socket against a server bound to an
//! ephemeral port, so the tests see exactly what an external caller sees.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vreg-tests
//! ```
//!
//! Each test spins up its own server instance, so the suite runs fully in
//! parallel with no shared state between tests.
//!
//! # Test Structure
//!
//! - `crud_e2e_test.rs` - Create/list/fetch/update/delete lifecycle over HTTP
//! - `validation_test.rs` - 400/422 request-rejection contract

// This crate only contains tests, no library code
