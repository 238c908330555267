use serde::Serialize;

use super::grouping::group_stats;
use crate::booking::types::BookingStore;

/// Cross-date load for one time slot label
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSummary {
    pub time_slot: String,
    pub patient_count: usize,
    pub avg_risk: f64,
}

/// Summarizes booking load per slot label across all dates. This is the
/// slot-popularity view; the per-day picture is `analyze_overbooking`'s job.
pub fn summarize_by_slot(store: &BookingStore) -> Vec<SlotSummary> {
    let groups = group_stats(&store.records, |b| b.slot.clone());
    let mut summaries: Vec<SlotSummary> = groups
        .into_iter()
        .map(|(time_slot, stats)| SlotSummary {
            time_slot,
            patient_count: stats.count,
            avg_risk: stats.avg_risk(),
        })
        .collect();
    // HH:MM labels sort chronologically as strings
    summaries.sort_by(|a, b| a.time_slot.cmp(&b.time_slot));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::{Booking, BookingStatus};
    use chrono::NaiveDate;

    fn booking(date: NaiveDate, slot: &str, risk_score: u8) -> Booking {
        Booking {
            patient_id: "P1".to_string(),
            date,
            slot: slot.to_string(),
            risk_score,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn empty_store_yields_empty_summary() {
        assert!(summarize_by_slot(&BookingStore::new()).is_empty());
    }

    #[test]
    fn groups_by_slot_across_dates() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let store = BookingStore::from_records(vec![
            booking(d1, "09:00", 40),
            booking(d2, "09:00", 60),
            booking(d1, "14:00", 90),
        ]);

        let summaries = summarize_by_slot(&store);
        assert_eq!(summaries.len(), 2);

        // Same label on different dates lands in one group
        assert_eq!(summaries[0].time_slot, "09:00");
        assert_eq!(summaries[0].patient_count, 2);
        assert_eq!(summaries[0].avg_risk, 50.0);

        assert_eq!(summaries[1].time_slot, "14:00");
        assert_eq!(summaries[1].patient_count, 1);
        assert_eq!(summaries[1].avg_risk, 90.0);
    }

    #[test]
    fn avg_risk_is_exact_mean() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let store = BookingStore::from_records(vec![
            booking(d, "10:00", 70),
            booking(d, "10:00", 71),
            booking(d, "10:00", 74),
        ]);
        let summaries = summarize_by_slot(&store);
        assert!((summaries[0].avg_risk - 215.0 / 3.0).abs() < 1e-9);
    }
}
