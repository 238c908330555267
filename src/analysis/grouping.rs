use std::collections::HashMap;
use std::hash::Hash;

use crate::booking::admission::HIGH_RISK_THRESHOLD;
use crate::booking::types::Booking;

/// Running totals for one group of bookings
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupStats {
    pub count: usize,
    pub risk_sum: u32,
    pub high_risk_count: usize,
}

impl GroupStats {
    pub fn avg_risk(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.risk_sum as f64 / self.count as f64
        }
    }
}

/// Groups bookings by an arbitrary key and accumulates per-group totals
pub fn group_stats<K, F>(records: &[Booking], key: F) -> HashMap<K, GroupStats>
where
    K: Eq + Hash,
    F: Fn(&Booking) -> K,
{
    let mut groups: HashMap<K, GroupStats> = HashMap::new();
    for booking in records {
        let stats = groups.entry(key(booking)).or_default();
        stats.count += 1;
        stats.risk_sum += booking.risk_score as u32;
        if booking.risk_score >= HIGH_RISK_THRESHOLD {
            stats.high_risk_count += 1;
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::BookingStatus;
    use chrono::NaiveDate;

    fn booking(slot: &str, risk_score: u8) -> Booking {
        Booking {
            patient_id: "P1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            slot: slot.to_string(),
            risk_score,
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn accumulates_per_group() {
        let records = vec![booking("09:00", 75), booking("09:00", 80), booking("10:00", 60)];
        let groups = group_stats(&records, |b| b.slot.clone());

        let nine = groups.get("09:00").unwrap();
        assert_eq!(nine.count, 2);
        assert_eq!(nine.high_risk_count, 2);
        assert_eq!(nine.avg_risk(), 77.5);

        let ten = groups.get("10:00").unwrap();
        assert_eq!(ten.count, 1);
        assert_eq!(ten.high_risk_count, 0);
        assert_eq!(ten.avg_risk(), 60.0);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_stats(&[], |b: &Booking| b.slot.clone());
        assert!(groups.is_empty());
    }
}
