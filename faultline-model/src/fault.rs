use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::kinds::{FaultKind, MediaKind};

/// One parked, previously-undispatchable request.
///
/// A row exists exactly as long as its request has not been successfully
/// dispatched; the reconciliation driver deletes it on success and never for
/// any other reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultRecord {
    pub id: RecordId,
    pub kind: MediaKind,
    pub fault: FaultKind,
    /// Provider-specific lookup key, consulted only while
    /// `fault == MissingInformation`.
    pub primary_identifier: String,
    /// Opaque serialized [`RequestedItem`](crate::request::RequestedItem).
    pub payload: Vec<u8>,
    /// Timestamp of the most recent reconciliation attempt. `None` until the
    /// first attempt touches the row.
    pub last_retry: Option<DateTime<Utc>>,
}

impl FaultRecord {
    /// Marks a failed attempt at `now`, demoting a repaired-but-undispatched
    /// row into the transient partition. There is no reverse transition back
    /// to `MissingInformation`.
    pub fn reclassify_transient(&mut self, payload: Vec<u8>, now: DateTime<Utc>) {
        self.payload = payload;
        self.fault = FaultKind::TransientFailure;
        self.last_retry = Some(now);
    }

    pub fn mark_retry(&mut self, now: DateTime<Utc>) {
        self.last_retry = Some(now);
    }
}
