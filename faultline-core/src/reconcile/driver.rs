use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use faultline_config::Settings;
use faultline_model::{FaultKind, FaultRecord};
use tracing::{debug, error, info, warn};

use crate::dispatch::{DispatchTable, ItemDispatcher};
use crate::error::Result;
use crate::ports::{FaultStore, JobName, JobRecordPort, MetadataLookupPort, RequestsRepository};
use crate::reconcile::outcome::ItemOutcome;
use crate::reconcile::repair::RepairHandler;
use crate::reconcile::resubmit::ResubmitHandler;

#[derive(Debug, Default)]
struct PassTally {
    dispatched: usize,
    retained: usize,
    reclassified: usize,
    untouched: usize,
}

/// Orchestrates one full sweep over the fault queue.
///
/// A pass reads the whole queue, splits it into the missing-information and
/// transient partitions, runs the matching handler on each record, and
/// applies exactly one store mutation per verdict. Item failures never cross
/// item boundaries; a whole-pass failure (the store refusing to list) is
/// logged at the pass boundary and still ends with the completion marker.
pub struct ReconcileDriver {
    store: Arc<dyn FaultStore>,
    repair: RepairHandler,
    resubmit: ResubmitHandler,
    job_record: Arc<dyn JobRecordPort>,
}

impl fmt::Debug for ReconcileDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconcileDriver").finish_non_exhaustive()
    }
}

impl ReconcileDriver {
    pub fn new(
        store: Arc<dyn FaultStore>,
        requests: Arc<dyn RequestsRepository>,
        lookup: Arc<dyn MetadataLookupPort>,
        table: DispatchTable,
        job_record: Arc<dyn JobRecordPort>,
    ) -> Self {
        let dispatcher = Arc::new(ItemDispatcher::new(table, requests));
        Self {
            store,
            repair: RepairHandler::new(lookup, Arc::clone(&dispatcher)),
            resubmit: ResubmitHandler::new(dispatcher),
            job_record,
        }
    }

    /// Runs one reconciliation pass. Never returns an error: whatever happens
    /// inside the sweep, the completion marker is recorded and the next
    /// scheduled pass picks up from current store state.
    pub async fn run_pass(&self, settings: &Settings) {
        let started = Utc::now();
        if let Err(err) = self.sweep(settings, started).await {
            error!(error = %err, "reconciliation pass aborted");
        }
        if let Err(err) = self
            .job_record
            .record_run(JobName::FaultReconciliation)
            .await
        {
            error!(error = %err, "failed to record pass completion");
        }
    }

    async fn sweep(&self, settings: &Settings, now: DateTime<Utc>) -> Result<()> {
        let records = self.store.list_all().await?;
        let (missing, transient): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|record| record.fault == FaultKind::MissingInformation);
        debug!(
            missing = missing.len(),
            transient = transient.len(),
            "starting reconciliation pass"
        );

        let mut tally = PassTally::default();
        for record in missing {
            let outcome = self.repair.process(&record, settings).await;
            self.apply(record, outcome, now, &mut tally).await;
        }
        for record in transient {
            let outcome = self.resubmit.process(&record, settings).await;
            self.apply(record, outcome, now, &mut tally).await;
        }

        info!(
            dispatched = tally.dispatched,
            retained = tally.retained,
            reclassified = tally.reclassified,
            untouched = tally.untouched,
            "reconciliation pass finished"
        );
        Ok(())
    }

    /// Applies one verdict to the store. Store errors here are per-item:
    /// logged, and the rest of the pass continues.
    async fn apply(
        &self,
        mut record: FaultRecord,
        outcome: ItemOutcome,
        now: DateTime<Utc>,
        tally: &mut PassTally,
    ) {
        match outcome {
            ItemOutcome::Dispatched => {
                if let Err(err) = self.store.delete(record.id).await {
                    warn!(record = %record.id, error = %err, "failed to delete dispatched row");
                } else {
                    tally.dispatched += 1;
                }
            }
            ItemOutcome::Retained => {
                record.mark_retry(now);
                if let Err(err) = self.store.update(&record).await {
                    warn!(record = %record.id, error = %err, "failed to bump retry bookkeeping");
                } else {
                    tally.retained += 1;
                }
            }
            ItemOutcome::Reclassified { payload } => {
                record.reclassify_transient(payload, now);
                if let Err(err) = self.store.update(&record).await {
                    warn!(record = %record.id, error = %err, "failed to persist reclassification");
                } else {
                    tally.reclassified += 1;
                }
            }
            ItemOutcome::Unchanged => {
                tally.untouched += 1;
            }
        }
    }
}
