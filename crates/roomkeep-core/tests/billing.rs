#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::NaiveDate;

use roomkeep_core::billing::{
    calculate_bill, calculate_bill_with, days_late, due_date, usage, BillInput, BillingPolicy,
    Booking, BookingType, MeterReading, Room,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn input(billing_date: NaiveDate, rent_due_day: Option<u32>) -> BillInput {
    BillInput {
        room: Room {
            water_rate: 18.0,
            electric_rate: 7.0,
            rate_daily: 500.0,
            rate_monthly: 4000.0,
        },
        previous: MeterReading { water_meter: 100.0, electric_meter: 500.0 },
        current: MeterReading { water_meter: 110.0, electric_meter: 550.0 },
        booking: Booking { booking_type: BookingType::Monthly },
        billing_date,
        rent_due_day,
    }
}

#[test]
fn end_to_end_summary() {
    let bill = calculate_bill(&input(date(2024, 5, 20), None));
    assert_eq!(bill.water_usage, 10.0);
    assert_eq!(bill.electric_usage, 50.0);
    assert_eq!(bill.water_cost, 180.0);
    assert_eq!(bill.electric_cost, 350.0);
    assert_eq!(bill.base_rent, 4000.0);
    assert_eq!(bill.late_fee, 0.0);
    assert_eq!(bill.total, 4530.0);
}

#[test]
fn same_input_same_bill() {
    let i = input(date(2024, 5, 9), Some(5));
    assert_eq!(calculate_bill(&i), calculate_bill(&i));
}

#[test]
fn usage_clamps_at_zero() {
    assert_eq!(usage(100.0, 80.0), 0.0);
    assert_eq!(usage(100.0, 100.0), 0.0);
    assert_eq!(usage(100.0, 112.5), 12.5);
}

#[test]
fn late_fee_starts_after_due_day() {
    let on_due = calculate_bill(&input(date(2024, 5, 5), Some(5)));
    assert_eq!(on_due.late_fee, 0.0);

    let one_late = calculate_bill(&input(date(2024, 5, 6), Some(5)));
    assert_eq!(days_late(date(2024, 5, 6), date(2024, 5, 5)), 1);
    assert_eq!(one_late.late_fee, 100.0);
    assert_eq!(one_late.total, 4630.0);

    let before = calculate_bill(&input(date(2024, 5, 2), Some(5)));
    assert_eq!(before.late_fee, 0.0);
}

#[test]
fn late_fee_uses_policy_rate() {
    let policy = BillingPolicy { late_fee_per_day: 25.0 };
    let bill = calculate_bill_with(&input(date(2024, 5, 9), Some(5)), &policy);
    assert_eq!(bill.late_fee, 100.0);
}

#[test]
fn due_day_past_month_end_rolls_over() {
    assert_eq!(due_date(date(2023, 2, 10), 31), Some(date(2023, 3, 3)));
    assert_eq!(due_date(date(2024, 4, 10), 31), Some(date(2024, 5, 1)));
    let bill = calculate_bill(&input(date(2023, 2, 28), Some(31)));
    assert_eq!(bill.late_fee, 0.0);
}

#[test]
fn due_day_zero_is_previous_month_end() {
    assert_eq!(due_date(date(2024, 3, 15), 0), Some(date(2024, 2, 29)));
    let bill = calculate_bill(&input(date(2024, 3, 2), Some(0)));
    assert_eq!(bill.late_fee, 200.0);
}

#[test]
fn negative_inputs_propagate() {
    let mut i = input(date(2024, 5, 1), None);
    i.room.water_rate = -1.0;
    let bill = calculate_bill(&i);
    assert_eq!(bill.water_cost, -10.0);
    assert_eq!(bill.total, 4340.0);
}

#[test]
fn summary_serializes_camel_case() {
    let bill = calculate_bill(&input(date(2024, 5, 1), None));
    let v = serde_json::to_value(bill).unwrap();
    assert!(v.get("waterUsage").is_some());
    assert!(v.get("lateFee").is_some());
    assert!(v.get("water_usage").is_none());
}
