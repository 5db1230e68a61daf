//! roomkeep core: access policy and utility billing for the rental gateway.
//!
//! This crate holds the two decision libraries shared by the gateway and any
//! reporting tooling: the role/permission policy engine and the bill
//! calculator. Both are pure functions over static tables and caller-supplied
//! records, with no runtime or storage dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Policy questions with missing or unrecognized input answer "not
//! authorized" instead of failing.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod billing;
pub mod error;
pub mod rbac;

/// Shared result type.
pub use error::{Result, RoomkeepError};
