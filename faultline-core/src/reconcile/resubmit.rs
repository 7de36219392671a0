use std::fmt;
use std::sync::Arc;

use faultline_config::Settings;
use faultline_model::{FaultRecord, RequestedItem};
use tracing::warn;

use crate::dispatch::{DispatchAttempt, ItemDispatcher};
use crate::reconcile::outcome::ItemOutcome;

/// Handler for the transient-failure partition: decode the payload and try
/// the dispatch tail again, no enrichment involved.
pub struct ResubmitHandler {
    dispatcher: Arc<ItemDispatcher>,
}

impl fmt::Debug for ResubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResubmitHandler").finish_non_exhaustive()
    }
}

impl ResubmitHandler {
    pub fn new(dispatcher: Arc<ItemDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Resubmits one record. All failures are absorbed into the returned
    /// outcome.
    pub async fn process(&self, record: &FaultRecord, settings: &Settings) -> ItemOutcome {
        let mut item = match RequestedItem::from_payload(&record.payload) {
            Ok(item) => item,
            Err(err) => {
                warn!(record = %record.id, error = %err, "corrupt payload, leaving row for inspection");
                return ItemOutcome::Unchanged;
            }
        };

        match self.dispatcher.dispatch_item(&mut item, settings).await {
            DispatchAttempt::Dispatched => ItemOutcome::Dispatched,
            DispatchAttempt::Refused => ItemOutcome::Retained,
            DispatchAttempt::NoBackend => ItemOutcome::Unchanged,
        }
    }
}
