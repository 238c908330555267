/// The bookable half-hour labels offered by the dashboard. The core policy
/// treats slot labels as opaque strings; this set is dashboard configuration.
pub const DEFAULT_TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
];

/// Checks whether a label is one of the bookable time slots
pub fn is_valid_slot(slot: &str) -> bool {
    DEFAULT_TIME_SLOTS.contains(&slot)
}
