use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rate card snapshot of a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Price per unit of water.
    pub water_rate: f64,
    /// Price per unit of electricity.
    pub electric_rate: f64,
    pub rate_daily: f64,
    pub rate_monthly: f64,
}

/// Cumulative meter counters at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeterReading {
    pub water_meter: f64,
    pub electric_meter: f64,
}

/// Rent period. Any token other than `monthly` bills at the daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Monthly,
    #[serde(other)]
    Daily,
}

impl BookingType {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingType::Monthly => "monthly",
            BookingType::Daily => "daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_type: BookingType,
}

/// Everything one bill is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    pub room: Room,
    pub previous: MeterReading,
    pub current: MeterReading,
    pub booking: Booking,
    pub billing_date: NaiveDate,
    /// Day of month rent is due (1-31). Absent means no late fee.
    #[serde(default)]
    pub rent_due_day: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub water_usage: f64,
    pub electric_usage: f64,
    pub water_cost: f64,
    pub electric_cost: f64,
    pub base_rent: f64,
    pub late_fee: f64,
    pub total: f64,
}
