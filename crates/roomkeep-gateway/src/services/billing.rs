use chrono::NaiveDate;
use roomkeep_core::billing::{calculate_bill_with, BillInput, BillSummary, Booking, MeterReading};
use roomkeep_core::error::{Result, RoomkeepError};
use serde::Serialize;

use crate::app_state::AppState;
use crate::store::{BookingRecord, ReadingRecord, RoomRecord, Store};

/// Bill for a stored booking plus the readings it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct BookingBill {
    pub booking_id: String,
    pub room_id: String,
    pub billing_date: NaiveDate,
    pub previous_reading_id: String,
    pub current_reading_id: String,
    pub summary: BillSummary,
}

/// Validate and store a meter reading for an existing room.
pub async fn record_reading(
    state: &AppState,
    room_id: &str,
    recorded_on: NaiveDate,
    reading: MeterReading,
) -> Result<ReadingRecord> {
    let meters = [("water_meter", reading.water_meter), ("electric_meter", reading.electric_meter)];
    for (name, v) in meters {
        if !v.is_finite() || v < 0.0 {
            return Err(RoomkeepError::BadRequest(format!(
                "{name} must be a non-negative number"
            )));
        }
    }
    state.rooms().get(room_id).await?;

    if let Some(last) = readings_for_room(state, room_id).await?.last() {
        if reading.water_meter < last.reading.water_meter
            || reading.electric_meter < last.reading.electric_meter
        {
            tracing::warn!(room_id, "meter reading lower than previous; usage will clamp to zero");
        }
    }

    state
        .readings()
        .create(ReadingRecord {
            id: String::new(),
            room_id: room_id.to_string(),
            recorded_on,
            reading,
        })
        .await
}

/// Readings of a room ordered oldest first (by date, then entry order).
pub async fn readings_for_room(state: &AppState, room_id: &str) -> Result<Vec<ReadingRecord>> {
    let mut rows: Vec<ReadingRecord> =
        state.readings().list().await?.into_iter().filter(|r| r.room_id == room_id).collect();
    rows.sort_by_key(|r| r.recorded_on);
    Ok(rows)
}

/// Rent due day accepted from clients: a calendar day of month.
pub fn validate_rent_due_day(rent_due_day: Option<u32>) -> Result<()> {
    match rent_due_day {
        Some(day) if !(1..=31).contains(&day) => Err(RoomkeepError::BadRequest(
            "rent_due_day must be between 1 and 31".into(),
        )),
        _ => Ok(()),
    }
}

/// The two most recent readings of a room taken on or before `as_of`,
/// as `(previous, current)`.
pub async fn latest_reading_pair(
    state: &AppState,
    room_id: &str,
    as_of: NaiveDate,
) -> Result<Option<(ReadingRecord, ReadingRecord)>> {
    let mut rows = readings_for_room(state, room_id).await?;
    rows.retain(|r| r.recorded_on <= as_of);
    let current = rows.pop();
    let previous = rows.pop();
    Ok(previous.zip(current))
}

/// Compute the bill of a stored booking from its room's two latest readings.
///
/// Only readings taken on or before the billing date count. `rent_due_day`
/// overrides the booking's own due day when given.
pub async fn bill_for_booking(
    state: &AppState,
    booking_id: &str,
    billing_date: NaiveDate,
    rent_due_day: Option<u32>,
) -> Result<BookingBill> {
    validate_rent_due_day(rent_due_day)?;
    let booking: BookingRecord = state.bookings().get(booking_id).await?;
    let room: RoomRecord = state.rooms().get(&booking.room_id).await?;

    let (previous, current) =
        latest_reading_pair(state, &room.id, billing_date).await?.ok_or_else(|| {
            RoomkeepError::Conflict(format!(
                "room {} needs two meter readings on or before {billing_date} to bill",
                room.id
            ))
        })?;

    let input = BillInput {
        room: room.rates,
        previous: previous.reading,
        current: current.reading,
        booking: Booking { booking_type: booking.booking_type },
        billing_date,
        rent_due_day: rent_due_day.or(booking.rent_due_day),
    };
    let summary = calculate_bill_with(&input, state.billing_policy());

    state
        .metrics()
        .bills_computed
        .inc(&[("booking_type", booking.booking_type.as_str())]);
    tracing::info!(booking_id, room_id = %room.id, total = summary.total, "bill computed");

    Ok(BookingBill {
        booking_id: booking.id,
        room_id: room.id,
        billing_date,
        previous_reading_id: previous.id,
        current_reading_id: current.id,
        summary,
    })
}
