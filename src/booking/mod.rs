pub mod admission;
pub mod manager;
pub mod slot_utils;
pub mod types;

pub use admission::{Decision, RejectReason, HIGH_RISK_THRESHOLD, MAX_SLOTS};
pub use manager::{BookingManager, StoreError};
pub use slot_utils::DEFAULT_TIME_SLOTS;
pub use types::{Booking, BookingStatus, BookingStore};
