use chrono::NaiveDate;

use super::types::{Booking, BookingStatus, BookingStore};

/// Maximum number of patients per (date, slot)
pub const MAX_SLOTS: usize = 4;

/// Risk score at or above which a patient counts as high-risk
pub const HIGH_RISK_THRESHOLD: u8 = 70;

/// Why a candidate booking was turned away. An expected outcome of
/// evaluation, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    SlotFull,
    LowRiskNeedsEmptySlot,
    SlotHasLowRisk,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::SlotFull => "Time slot is fully booked (max 4 patients)",
            RejectReason::LowRiskNeedsEmptySlot => "Low-risk patients can only book empty time slots",
            RejectReason::SlotHasLowRisk => "Cannot book slot with low-risk patients",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of evaluating a candidate booking
#[derive(Debug, Clone)]
pub enum Decision {
    /// The updated store, with the new record appended as Confirmed
    Accepted(BookingStore),
    Rejected(RejectReason),
}

/// Evaluates a candidate booking against the occupants of its (date, slot).
///
/// Checks run in a fixed order, so when several rules would reject the
/// candidate, the first one determines the reported reason:
/// 1. the slot already holds MAX_SLOTS records;
/// 2. a low-risk candidate may only open an empty slot;
/// 3. a slot holding a low-risk record admits nobody else.
///
/// On acceptance the returned store is the input plus one Confirmed record;
/// on rejection the input store is untouched.
pub fn evaluate(
    store: &BookingStore,
    patient_id: &str,
    date: NaiveDate,
    slot: &str,
    risk_score: u8,
) -> Decision {
    let occupants = store.occupants(date, slot);

    if occupants.len() >= MAX_SLOTS {
        return Decision::Rejected(RejectReason::SlotFull);
    }

    if risk_score < HIGH_RISK_THRESHOLD && !occupants.is_empty() {
        return Decision::Rejected(RejectReason::LowRiskNeedsEmptySlot);
    }

    if occupants.iter().any(|b| b.risk_score < HIGH_RISK_THRESHOLD) {
        return Decision::Rejected(RejectReason::SlotHasLowRisk);
    }

    let mut records = store.records.clone();
    records.push(Booking {
        patient_id: patient_id.to_string(),
        date,
        slot: slot.to_string(),
        risk_score,
        status: BookingStatus::Confirmed,
    });
    Decision::Accepted(BookingStore::from_records(records))
}
