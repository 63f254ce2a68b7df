use std::sync::Mutex;

use crate::models::booking::BookingRecord;

/// Process-lifetime, append-only store of committed bookings. Starts empty,
/// nothing is persisted, a restart wipes it. Records are never updated or
/// deleted.
#[derive(Debug, Default)]
pub struct BookingLedger {
    records: Mutex<Vec<BookingRecord>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: BookingRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Point-in-time copy, in insertion order. Later appends do not show up
    /// in a snapshot already taken.
    pub fn snapshot(&self) -> Vec<BookingRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, advisor_id: &str, time: &str) -> BookingRecord {
        BookingRecord {
            name: name.into(),
            advisor_id: advisor_id.into(),
            time: time.into(),
        }
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let ledger = BookingLedger::new();
        ledger.append(record("A", "1", "2019-04-03T10:00:00-04:00"));
        ledger.append(record("B", "2", "2019-04-03T11:00:00-04:00"));

        let names: Vec<_> = ledger.snapshot().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn snapshot_is_isolated_from_later_appends() {
        let ledger = BookingLedger::new();
        ledger.append(record("A", "1", "2019-04-03T10:00:00-04:00"));

        let snapshot = ledger.snapshot();
        ledger.append(record("B", "2", "2019-04-03T11:00:00-04:00"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.snapshot().len(), 2);
    }
}
