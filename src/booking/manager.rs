use chrono::NaiveDate;
use thiserror::Error;

use super::admission::{evaluate, Decision};
use super::types::BookingStore;
use crate::analysis::{
    analyze_overbooking, recommend, risk_distribution, summarize_by_slot, OverbookedSlot,
    RiskBucket, SlotLoad, SlotSummary,
};

/// Usage errors from the booking manager
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("booking store not initialized; call set_data first")]
    Uninitialized,
}

/// Owns the booking store for a session and gates all mutation through the
/// admission policy. Operations before `set_data` are usage errors.
#[derive(Debug, Default)]
pub struct BookingManager {
    store: Option<BookingStore>,
}

impl BookingManager {
    pub fn new() -> Self {
        BookingManager { store: None }
    }

    /// Initializes or replaces the managed store
    pub fn set_data(&mut self, store: BookingStore) {
        self.store = Some(store);
    }

    pub fn store(&self) -> Result<&BookingStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::Uninitialized)
    }

    /// Runs the admission policy for a candidate booking and commits the
    /// updated store on acceptance. Rejection leaves the store untouched.
    pub fn add_booking(
        &mut self,
        patient_id: &str,
        date: NaiveDate,
        slot: &str,
        risk_score: u8,
    ) -> Result<Decision, StoreError> {
        let store = self.store.as_ref().ok_or(StoreError::Uninitialized)?;
        let decision = evaluate(store, patient_id, date, slot, risk_score);
        if let Decision::Accepted(updated) = &decision {
            self.store = Some(updated.clone());
        }
        Ok(decision)
    }

    pub fn summarize_by_slot(&self) -> Result<Vec<SlotSummary>, StoreError> {
        Ok(summarize_by_slot(self.store()?))
    }

    pub fn analyze_overbooking(&self) -> Result<Vec<OverbookedSlot>, StoreError> {
        Ok(analyze_overbooking(self.store()?))
    }

    pub fn recommend(&self, candidate_risk: u8) -> Result<Vec<SlotLoad>, StoreError> {
        Ok(recommend(self.store()?, candidate_risk))
    }

    pub fn risk_distribution(&self) -> Result<Vec<RiskBucket>, StoreError> {
        Ok(risk_distribution(self.store()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::admission::RejectReason;
    use crate::booking::types::{Booking, BookingStatus};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn operations_before_set_data_fail() {
        let mut manager = BookingManager::new();
        assert!(matches!(
            manager.add_booking("P1", date(), "09:00", 50),
            Err(StoreError::Uninitialized)
        ));
        assert!(matches!(manager.summarize_by_slot(), Err(StoreError::Uninitialized)));
        assert!(matches!(manager.analyze_overbooking(), Err(StoreError::Uninitialized)));
        assert!(matches!(manager.recommend(80), Err(StoreError::Uninitialized)));
        assert!(matches!(manager.risk_distribution(), Err(StoreError::Uninitialized)));
    }

    #[test]
    fn accepted_booking_is_committed() {
        let mut manager = BookingManager::new();
        manager.set_data(BookingStore::new());

        let decision = manager.add_booking("P1", date(), "09:00", 30).unwrap();
        assert!(matches!(decision, Decision::Accepted(_)));
        assert_eq!(manager.store().unwrap().len(), 1);
    }

    #[test]
    fn rejected_booking_leaves_store_unchanged() {
        let mut manager = BookingManager::new();
        manager.set_data(BookingStore::from_records(vec![Booking {
            patient_id: "P1".to_string(),
            date: date(),
            slot: "09:00".to_string(),
            risk_score: 30,
            status: BookingStatus::Confirmed,
        }]));

        let decision = manager.add_booking("P2", date(), "09:00", 80).unwrap();
        match decision {
            Decision::Rejected(reason) => assert_eq!(reason, RejectReason::SlotHasLowRisk),
            Decision::Accepted(_) => panic!("expected rejection"),
        }
        let store = manager.store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records[0].patient_id, "P1");
    }
}
