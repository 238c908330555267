use std::path::Path;

use chrono::NaiveDate;
use csv::Writer;

use crate::analysis::{OverbookedSlot, SlotSummary};
use crate::booking::slot_utils::DEFAULT_TIME_SLOTS;
use crate::booking::types::BookingStore;
use crate::booking::MAX_SLOTS;

/// Prints the per-slot availability grid for one date
pub fn print_availability(store: &BookingStore, date: NaiveDate) {
    println!("\n=== Availability for {} ===", date);
    for slot in DEFAULT_TIME_SLOTS {
        let occupants = store.occupants(date, slot);
        let patients: Vec<&str> = occupants.iter().map(|b| b.patient_id.as_str()).collect();
        let free = MAX_SLOTS.saturating_sub(occupants.len());
        if patients.is_empty() {
            println!("  {} -> {} free", slot, free);
        } else {
            println!("  {} -> {} free ({})", slot, free, patients.join(", "));
        }
    }
}

/// Prints the cross-date slot load summary
pub fn print_slot_summary(summaries: &[SlotSummary]) {
    println!("\n=== Patients per Time Slot ===");
    if summaries.is_empty() {
        println!("  No bookings in the system");
        return;
    }
    for summary in summaries {
        println!(
            "  {} -> {} patients, avg risk {:.1}%",
            summary.time_slot, summary.patient_count, summary.avg_risk
        );
    }
}

/// Prints the overbooking report
pub fn print_overbooking(overbooked: &[OverbookedSlot]) {
    println!("\n=== Overbooked Slots (2+ high-risk patients) ===");
    if overbooked.is_empty() {
        println!("  No overbooked slots found");
        return;
    }
    for slot in overbooked {
        println!(
            "  {} {} -> {} patients, avg risk {:.1}%, {} high-risk",
            slot.date, slot.time_slot, slot.total_patients, slot.avg_risk, slot.high_risk_count
        );
    }
}

/// Writes all bookings to a CSV file, sorted by date and slot
pub fn write_bookings_csv<P: AsRef<Path>>(
    store: &BookingStore,
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["patient_id", "date", "slot", "risk_score", "status"])?;

    let mut records: Vec<_> = store.records.iter().collect();
    records.sort_by(|a, b| (a.date, &a.slot).cmp(&(b.date, &b.slot)));

    for booking in records {
        wtr.write_record([
            booking.patient_id.clone(),
            booking.date.to_string(),
            booking.slot.clone(),
            booking.risk_score.to_string(),
            booking.status.as_str().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
