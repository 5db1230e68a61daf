use chrono::{Datelike, Duration, NaiveDate};

use super::model::{BillInput, BillSummary, BookingType};

/// Fixed penalty per day past the rent due date.
pub const DEFAULT_LATE_FEE_PER_DAY: f64 = 100.0;

/// Tunables applied on top of the room's rate card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingPolicy {
    pub late_fee_per_day: f64,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self { late_fee_per_day: DEFAULT_LATE_FEE_PER_DAY }
    }
}

/// Bill with the default late fee.
pub fn calculate_bill(input: &BillInput) -> BillSummary {
    calculate_bill_with(input, &BillingPolicy::default())
}

pub fn calculate_bill_with(input: &BillInput, policy: &BillingPolicy) -> BillSummary {
    let room = &input.room;

    let water_usage = usage(input.previous.water_meter, input.current.water_meter);
    let electric_usage = usage(input.previous.electric_meter, input.current.electric_meter);

    let water_cost = water_usage * room.water_rate;
    let electric_cost = electric_usage * room.electric_rate;

    let monthly = input.booking.booking_type == BookingType::Monthly;
    let base_rent = if monthly { room.rate_monthly } else { room.rate_daily };

    let late_fee = match input.rent_due_day {
        Some(day) if monthly => due_date(input.billing_date, day)
            .map_or(0.0, |due| days_late(input.billing_date, due) as f64 * policy.late_fee_per_day),
        _ => 0.0,
    };

    BillSummary {
        water_usage,
        electric_usage,
        water_cost,
        electric_cost,
        base_rent,
        late_fee,
        total: base_rent + water_cost + electric_cost + late_fee,
    }
}

/// Difference between two cumulative readings, clamped at zero.
///
/// A reading lower than the previous one (meter reset, swapped or mistyped
/// entry) counts as zero usage.
pub fn usage(previous: f64, current: f64) -> f64 {
    (current - previous).max(0.0)
}

/// Due date in the billing date's month.
///
/// Day-of-month overflow carries forward: day 31 in a 30-day month lands on
/// the 1st of the next month, day 0 is the last day of the previous month.
/// `None` only when the result leaves chrono's supported range.
pub fn due_date(billing_date: NaiveDate, rent_due_day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(billing_date.year(), billing_date.month(), 1)?;
    first.checked_add_signed(Duration::days(i64::from(rent_due_day) - 1))
}

/// Whole days the billing date is past `due`; 0 on or before it.
pub fn days_late(billing_date: NaiveDate, due: NaiveDate) -> i64 {
    if billing_date > due {
        (billing_date - due).num_days()
    } else {
        0
    }
}
