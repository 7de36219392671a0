//! Runs one reconciliation pass against an in-memory queue with stub
//! backends, printing what the pass did.
//!
//! ```sh
//! RUST_LOG=faultline_core=debug cargo run -p faultline-core --example run_pass
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use faultline_config::{ApprovalRule, BackendSettings, Settings};
use faultline_core::error::Result;
use faultline_core::ports::{
    DispatchOutcome, DispatchPort, FaultStore, JobName, JobRecordPort,
    MetadataLookupPort, RequestsRepository,
};
use faultline_core::{DispatchTable, ReconcileDriver};
use faultline_model::{
    CanonicalSeriesId, FaultKind, FaultRecord, MediaKind, RecordId,
    RequestId, RequestedItem,
};
use tracing_subscriber::EnvFilter;

struct DemoStore {
    rows: Mutex<Vec<FaultRecord>>,
}

#[async_trait]
impl FaultStore for DemoStore {
    async fn list_all(&self) -> Result<Vec<FaultRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, record: &FaultRecord) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(slot) = rows.iter_mut().find(|row| row.id == record.id) {
            *slot = record.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

struct DemoRequests;

#[async_trait]
impl RequestsRepository for DemoRequests {
    async fn update_request(&self, item: &RequestedItem) -> Result<()> {
        println!("request updated: {} (approved: {})", item.title, item.approved);
        Ok(())
    }
}

struct DemoJobLog;

#[async_trait]
impl JobRecordPort for DemoJobLog {
    async fn record_run(&self, job: JobName) -> Result<()> {
        println!("job recorded: {job}");
        Ok(())
    }
}

struct AcceptAll;

#[async_trait]
impl DispatchPort for AcceptAll {
    async fn dispatch(
        &self,
        _settings: &BackendSettings,
        item: &RequestedItem,
    ) -> Result<DispatchOutcome> {
        Ok(DispatchOutcome::accepted(item.title.clone()))
    }
}

struct DemoCatalog;

#[async_trait]
impl MetadataLookupPort for DemoCatalog {
    async fn lookup(&self, provider_key: u64) -> Result<Option<CanonicalSeriesId>> {
        Ok(Some(CanonicalSeriesId(provider_key * 2)))
    }
}

fn seed() -> Vec<FaultRecord> {
    let show = RequestedItem {
        request_id: RequestId::new(),
        kind: MediaKind::TvShow,
        title: "Example Show".to_string(),
        provider_id: None,
        imdb_id: None,
        release_group_id: None,
        seasons: vec![1],
        requested_users: vec!["alice".to_string()],
        approved: false,
        requested_at: Utc::now(),
    };
    let movie = RequestedItem {
        request_id: RequestId::new(),
        kind: MediaKind::Movie,
        title: "Example Movie".to_string(),
        provider_id: Some(550),
        imdb_id: Some("tt0137523".to_string()),
        release_group_id: None,
        seasons: Vec::new(),
        requested_users: vec!["bob".to_string()],
        approved: false,
        requested_at: Utc::now(),
    };
    vec![
        FaultRecord {
            id: RecordId::new(),
            kind: MediaKind::TvShow,
            fault: FaultKind::MissingInformation,
            primary_identifier: "12345".to_string(),
            payload: show.to_payload().expect("demo payload encodes"),
            last_retry: None,
        },
        FaultRecord {
            id: RecordId::new(),
            kind: MediaKind::Movie,
            fault: FaultKind::TransientFailure,
            primary_identifier: String::new(),
            payload: movie.to_payload().expect("demo payload encodes"),
            last_retry: None,
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = Arc::new(DemoStore {
        rows: Mutex::new(seed()),
    });
    let table = DispatchTable::new(
        Arc::new(AcceptAll),
        Arc::new(AcceptAll),
        Arc::new(AcceptAll),
        Arc::new(AcceptAll),
    );
    let store_port: Arc<dyn FaultStore> = Arc::clone(&store) as Arc<dyn FaultStore>;
    let driver = ReconcileDriver::new(
        store_port,
        Arc::new(DemoRequests),
        Arc::new(DemoCatalog),
        table,
        Arc::new(DemoJobLog),
    );

    let mut settings = Settings::default();
    settings.series.enabled = true;
    settings.movies.enabled = true;
    settings.movies.auto_approve = ApprovalRule::Always;

    driver.run_pass(&settings).await;

    let remaining = store.rows.lock().unwrap().len();
    println!("rows left in the fault queue: {remaining}");
    Ok(())
}
