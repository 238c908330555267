use chrono::NaiveDate;
use serde::Serialize;

use super::grouping::group_stats;
use crate::booking::admission::{HIGH_RISK_THRESHOLD, MAX_SLOTS};
use crate::booking::types::BookingStore;

/// Occupancy of one (date, slot) group
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLoad {
    pub date: NaiveDate,
    pub time_slot: String,
    pub patient_count: usize,
    pub avg_risk: f64,
}

/// Suggests slots for a candidate by risk band: high-risk candidates get
/// slots already trending high-risk, low-risk candidates get slots with
/// spare capacity. Advisory only; `evaluate` remains the booking gate and
/// re-checks the low-risk exclusivity rule this view ignores.
pub fn recommend(store: &BookingStore, candidate_risk: u8) -> Vec<SlotLoad> {
    let groups = group_stats(&store.records, |b| (b.date, b.slot.clone()));
    let mut loads: Vec<SlotLoad> = groups
        .into_iter()
        .filter(|(_, stats)| {
            if candidate_risk >= HIGH_RISK_THRESHOLD {
                stats.avg_risk() >= HIGH_RISK_THRESHOLD as f64
            } else {
                stats.count < MAX_SLOTS
            }
        })
        .map(|((date, time_slot), stats)| SlotLoad {
            date,
            time_slot,
            patient_count: stats.count,
            avg_risk: stats.avg_risk(),
        })
        .collect();
    loads.sort_by(|a, b| (a.date, &a.time_slot).cmp(&(b.date, &b.time_slot)));
    loads
}
