use std::fmt;
use std::sync::Arc;

use faultline_config::Settings;
use faultline_model::{FaultRecord, MediaKind, RequestedItem};
use tracing::{debug, warn};

use crate::dispatch::{DispatchAttempt, ItemDispatcher};
use crate::ports::MetadataLookupPort;
use crate::reconcile::outcome::ItemOutcome;

/// Handler for the missing-information partition.
///
/// Only TV items have an enrichment source today: the stored primary
/// identifier is an external catalog key that resolves to the canonical
/// series id the backends require. Movie and album rows parked with missing
/// information have nowhere to resolve from and are left untouched.
pub struct RepairHandler {
    lookup: Arc<dyn MetadataLookupPort>,
    dispatcher: Arc<ItemDispatcher>,
}

impl fmt::Debug for RepairHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepairHandler").finish_non_exhaustive()
    }
}

impl RepairHandler {
    pub fn new(lookup: Arc<dyn MetadataLookupPort>, dispatcher: Arc<ItemDispatcher>) -> Self {
        Self { lookup, dispatcher }
    }

    /// Attempts to repair and dispatch one record. All failures are absorbed
    /// into the returned outcome.
    pub async fn process(&self, record: &FaultRecord, settings: &Settings) -> ItemOutcome {
        if record.kind != MediaKind::TvShow {
            warn!(record = %record.id, kind = %record.kind, "no enrichment source for kind, leaving row untouched");
            return ItemOutcome::Unchanged;
        }

        let key: u64 = match record.primary_identifier.parse() {
            Ok(key) => key,
            Err(_) => {
                warn!(record = %record.id, identifier = %record.primary_identifier, "malformed primary identifier");
                return ItemOutcome::Unchanged;
            }
        };

        let canonical = match self.lookup.lookup(key).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                debug!(record = %record.id, key, "catalog has no canonical id yet");
                return ItemOutcome::Unchanged;
            }
            Err(err) => {
                warn!(record = %record.id, key, error = %err, "metadata lookup failed");
                return ItemOutcome::Unchanged;
            }
        };

        let mut item = match RequestedItem::from_payload(&record.payload) {
            Ok(item) => item,
            Err(err) => {
                warn!(record = %record.id, error = %err, "corrupt payload, leaving row for inspection");
                return ItemOutcome::Unchanged;
            }
        };
        item.provider_id = Some(canonical.0);

        match self.dispatcher.dispatch_item(&mut item, settings).await {
            DispatchAttempt::Dispatched => ItemOutcome::Dispatched,
            DispatchAttempt::Refused => match item.to_payload() {
                // The gap is filled; from here on the row fails like any
                // transient fault, so demote it instead of re-enriching.
                Ok(payload) => ItemOutcome::Reclassified { payload },
                Err(err) => {
                    warn!(record = %record.id, error = %err, "failed to re-encode enriched payload");
                    ItemOutcome::Unchanged
                }
            },
            DispatchAttempt::NoBackend => ItemOutcome::Unchanged,
        }
    }
}
