use serde::Serialize;

use crate::booking::types::BookingStore;

const BUCKET_WIDTH: usize = 5;
const BUCKET_COUNT: usize = 20;

/// One 5-point band of the risk histogram
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBucket {
    pub label: String,
    pub count: usize,
}

/// Buckets every booking's risk score into twenty 5-point bands for the
/// risk distribution chart. A score of 100 lands in the top band.
pub fn risk_distribution(store: &BookingStore) -> Vec<RiskBucket> {
    let mut counts = [0usize; BUCKET_COUNT];
    for booking in &store.records {
        let index = usize::min(booking.risk_score as usize / BUCKET_WIDTH, BUCKET_COUNT - 1);
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let start = i * BUCKET_WIDTH;
            let end = if i == BUCKET_COUNT - 1 { 100 } else { start + BUCKET_WIDTH - 1 };
            RiskBucket {
                label: format!("{}-{}", start, end),
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::{Booking, BookingStatus};
    use chrono::NaiveDate;

    fn booking(risk_score: u8) -> Booking {
        Booking {
            patient_id: "P1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            slot: "09:00".to_string(),
            risk_score,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn empty_store_yields_all_zero_buckets() {
        let buckets = risk_distribution(&BookingStore::new());
        assert_eq!(buckets.len(), 20);
        assert!(buckets.iter().all(|b| b.count == 0));
        assert_eq!(buckets[0].label, "0-4");
        assert_eq!(buckets[19].label, "95-100");
    }

    #[test]
    fn scores_land_in_their_band() {
        let store = BookingStore::from_records(vec![
            booking(0),
            booking(4),
            booking(5),
            booking(69),
            booking(70),
            booking(99),
            booking(100),
        ]);
        let buckets = risk_distribution(&store);
        assert_eq!(buckets[0].count, 2); // 0 and 4
        assert_eq!(buckets[1].count, 1); // 5
        assert_eq!(buckets[13].count, 1); // 69
        assert_eq!(buckets[14].count, 1); // 70
        assert_eq!(buckets[19].count, 2); // 99 and 100 share the top band

        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, store.len());
    }
}
