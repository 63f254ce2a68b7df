use std::sync::Arc;

use crate::availability::{contains_slot, filter_claimed_slots, group_by_advisor};
use crate::error::UpstreamError;
use crate::ledger::BookingLedger;
use crate::models::availability::AdvisorAvailability;
use crate::models::booking::{BookingDraft, BookingRecord, FieldError};
use crate::upstream::AvailabilitySource;

/// Terminal state of a write request that reached a decision. Upstream
/// failures surface separately as `UpstreamError`.
#[derive(Debug)]
pub enum BookingOutcome {
    Created(BookingRecord),
    FieldErrors(Vec<FieldError>),
    Unavailable,
}

/// Owns the ledger and the availability feed; all reads and writes go
/// through here.
pub struct BookingService {
    source: Arc<dyn AvailabilitySource>,
    ledger: BookingLedger,
}

impl BookingService {
    pub fn new(source: Arc<dyn AvailabilitySource>) -> Self {
        Self {
            source,
            ledger: BookingLedger::new(),
        }
    }

    /// Fresh feed, minus ledger-claimed slots, grouped per advisor.
    pub async fn get_availability(&self) -> Result<Vec<AdvisorAvailability>, UpstreamError> {
        let raw = self.source.fetch().await?;
        let filtered = filter_claimed_slots(&raw, &self.ledger.snapshot());
        Ok(group_by_advisor(&filtered))
    }

    /// Committed bookings in insertion order.
    pub fn list_bookings(&self) -> Vec<BookingRecord> {
        self.ledger.snapshot()
    }

    /// Validate, refresh availability, re-check the candidate slot, commit.
    ///
    /// The ledger is not locked across the refresh and the append: two
    /// concurrent writes for the same slot can both pass the check and both
    /// commit. Best-effort, single process.
    pub async fn create_booking(
        &self,
        draft: BookingDraft,
    ) -> Result<BookingOutcome, UpstreamError> {
        let record = match draft.validate() {
            Ok(record) => record,
            Err(field_errors) => return Ok(BookingOutcome::FieldErrors(field_errors)),
        };

        let raw = self.source.fetch().await?;
        let filtered = filter_claimed_slots(&raw, &self.ledger.snapshot());

        // Candidate still listed in the refreshed, filtered feed: rejected
        // without touching the ledger.
        if contains_slot(&filtered, &record.time, &record.advisor_id) {
            return Ok(BookingOutcome::Unavailable);
        }

        self.ledger.append(record.clone());
        Ok(BookingOutcome::Created(record))
    }
}
