//! roomkeep gateway library entry.
//!
//! This crate wires configuration, session resolution, the route guard, the
//! record stores, and the HTTP handlers around the policy engine and bill
//! calculator from `roomkeep-core`. It is consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod guard;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod session;
pub mod store;
