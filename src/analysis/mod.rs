pub mod distribution;
pub mod grouping;
pub mod overbooking;
pub mod recommend;
pub mod summary;

pub use distribution::{risk_distribution, RiskBucket};
pub use overbooking::{analyze_overbooking, OverbookedSlot};
pub use recommend::{recommend, SlotLoad};
pub use summary::{summarize_by_slot, SlotSummary};
