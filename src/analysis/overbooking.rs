use chrono::NaiveDate;
use serde::Serialize;

use super::grouping::group_stats;
use crate::booking::types::BookingStore;

/// A (date, slot) holding two or more high-risk patients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverbookedSlot {
    pub date: NaiveDate,
    pub time_slot: String,
    pub total_patients: usize,
    /// Mean risk rounded to one decimal place
    pub avg_risk: f64,
    pub high_risk_count: usize,
}

/// Finds per-day slots where two or more high-risk patients share the same
/// time, sorted by (date, slot).
pub fn analyze_overbooking(store: &BookingStore) -> Vec<OverbookedSlot> {
    let groups = group_stats(&store.records, |b| (b.date, b.slot.clone()));
    let mut overbooked: Vec<OverbookedSlot> = groups
        .into_iter()
        .filter(|(_, stats)| stats.high_risk_count >= 2)
        .map(|((date, time_slot), stats)| OverbookedSlot {
            date,
            time_slot,
            total_patients: stats.count,
            avg_risk: (stats.avg_risk() * 10.0).round() / 10.0,
            high_risk_count: stats.high_risk_count,
        })
        .collect();
    overbooked.sort_by(|a, b| (a.date, &a.time_slot).cmp(&(b.date, &b.time_slot)));
    overbooked
}
