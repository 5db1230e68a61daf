//! Domain operations composed from stores, sessions, and the core policy.
//!
//! Handlers stay thin: they extract input, then call into these functions,
//! which are also what the integration tests drive directly.

pub mod billing;
pub mod users;

pub use billing::{
    bill_for_booking, latest_reading_pair, readings_for_room, record_reading,
    validate_rent_due_day, BookingBill,
};
pub use users::{change_user_role, RoleChange};
