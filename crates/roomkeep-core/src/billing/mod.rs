//! Utility and rent billing.
//!
//! Computes a bill summary from a room's rate card, two cumulative meter
//! readings, the booking type, and the billing date. The calculator holds no
//! state; identical inputs always produce identical summaries.

pub mod calculator;
pub mod model;

pub use calculator::{
    calculate_bill, calculate_bill_with, days_late, due_date, usage, BillingPolicy,
    DEFAULT_LATE_FEE_PER_DAY,
};
pub use model::{BillInput, BillSummary, Booking, BookingType, MeterReading, Room};
