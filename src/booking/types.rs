use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Completed => "Completed",
        }
    }
}

/// A single appointment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub patient_id: String,
    pub date: NaiveDate,
    pub slot: String,
    pub risk_score: u8,
    pub status: BookingStatus,
}

/// Ordered collection of bookings. Append-only from the admission policy's
/// perspective; insertion order only matters for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingStore {
    pub records: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        BookingStore { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Booking>) -> Self {
        BookingStore { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records occupying the (date, slot) key
    pub fn occupants(&self, date: NaiveDate, slot: &str) -> Vec<&Booking> {
        self.records
            .iter()
            .filter(|b| b.date == date && b.slot == slot)
            .collect()
    }
}
