//! HTTP handlers.
//!
//! The route guard has already checked the route table by the time a handler
//! runs; handlers add the verb-level permission checks (create/update/delete)
//! that a path prefix cannot express.

pub mod admin;
pub mod billing;
pub mod bookings;
pub mod meters;
pub mod rooms;
pub mod session;
