use chrono::NaiveDate;
use roomkeep_core::billing::{BookingType, MeterReading, Room};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub rates: Room,
}

impl Record for RoomRecord {
    const KIND: &'static str = "room";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(default)]
    pub id: String,
    pub room_id: String,
    pub tenant_user_id: String,
    pub booking_type: BookingType,
    /// Day of month monthly rent is due.
    #[serde(default)]
    pub rent_due_day: Option<u32>,
}

impl Record for BookingRecord {
    const KIND: &'static str = "booking";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// One meter snapshot taken for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    #[serde(default)]
    pub id: String,
    pub room_id: String,
    pub recorded_on: NaiveDate,
    #[serde(flatten)]
    pub reading: MeterReading,
}

impl Record for ReadingRecord {
    const KIND: &'static str = "reading";

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
