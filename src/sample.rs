use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::booking::slot_utils::DEFAULT_TIME_SLOTS;
use crate::booking::types::{Booking, BookingStatus, BookingStore};

const PATIENT_COUNT: usize = 50;
const DAYS_AHEAD: i64 = 14;
const SAMPLE_BOOKINGS: usize = 100;

const STATUSES: [BookingStatus; 3] = [
    BookingStatus::Confirmed,
    BookingStatus::Pending,
    BookingStatus::Completed,
];

/// Generates a demo store of random bookings: 50 patient ids, the next two
/// weeks of dates, the default slot labels. The generated records are not
/// run through the admission policy, so historic slots may be busier than
/// the policy would allow; only new bookings are gated.
pub fn generate_sample_bookings() -> BookingStore {
    let mut rng = rand::thread_rng();

    let patient_ids: Vec<String> = (1..=PATIENT_COUNT).map(|i| format!("P{:03}", i)).collect();
    let today = Local::now().date_naive();
    let dates: Vec<NaiveDate> = (0..DAYS_AHEAD).map(|i| today + Duration::days(i)).collect();

    let records = (0..SAMPLE_BOOKINGS)
        .map(|_| Booking {
            patient_id: patient_ids.choose(&mut rng).unwrap().clone(),
            date: *dates.choose(&mut rng).unwrap(),
            slot: DEFAULT_TIME_SLOTS.choose(&mut rng).unwrap().to_string(),
            risk_score: rng.gen_range(0..=100),
            status: *STATUSES.choose(&mut rng).unwrap(),
        })
        .collect();

    BookingStore::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::slot_utils::is_valid_slot;

    #[test]
    fn generates_well_formed_records() {
        let store = generate_sample_bookings();
        assert_eq!(store.len(), SAMPLE_BOOKINGS);

        let today = Local::now().date_naive();
        for booking in &store.records {
            assert!(booking.patient_id.starts_with('P'));
            assert!(is_valid_slot(&booking.slot));
            assert!(booking.risk_score <= 100);
            assert!(booking.date >= today);
            assert!(booking.date < today + Duration::days(DAYS_AHEAD));
        }
    }
}
