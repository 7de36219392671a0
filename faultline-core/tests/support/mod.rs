//! Shared fakes and builders for the reconciliation integration tests.
//!
//! The stores are stateful hand-written fakes so queue mutations can be
//! inspected after a pass; the network-facing ports (dispatch, metadata
//! lookup) are mockall mocks so call counts and arguments can be asserted.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use faultline_config::{ApprovalRule, BackendSettings, Settings};
use faultline_core::error::{ReconcileError, Result};
use faultline_core::ports::{
    DispatchOutcome, DispatchPort, FaultStore, JobName, JobRecordPort,
    MetadataLookupPort, RequestsRepository,
};
use faultline_model::{
    CanonicalSeriesId, FaultKind, FaultRecord, MediaKind, RecordId,
    RequestId, RequestedItem,
};

/// Fault queue held in a `Mutex<Vec<_>>`, with an optional listing failure
/// for the pass-boundary tests.
pub struct InMemoryFaultStore {
    rows: Mutex<Vec<FaultRecord>>,
    fail_list: bool,
}

impl InMemoryFaultStore {
    pub fn new(rows: Vec<FaultRecord>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
            fail_list: false,
        })
    }

    pub fn unlistable() -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(Vec::new()),
            fail_list: true,
        })
    }

    pub fn snapshot(&self) -> Vec<FaultRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl FaultStore for InMemoryFaultStore {
    async fn list_all(&self) -> Result<Vec<FaultRecord>> {
        if self.fail_list {
            return Err(ReconcileError::Store("fault store offline".to_string()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, record: &FaultRecord) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|row| row.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(ReconcileError::Store(format!(
                "no such record: {}",
                record.id
            ))),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

/// Requests table fake that records every write-back.
#[derive(Default)]
pub struct RecordingRequests {
    updates: Mutex<Vec<RequestedItem>>,
}

impl RecordingRequests {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn updates(&self) -> Vec<RequestedItem> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestsRepository for RecordingRequests {
    async fn update_request(&self, item: &RequestedItem) -> Result<()> {
        self.updates.lock().unwrap().push(item.clone());
        Ok(())
    }
}

/// Job-run marker fake.
#[derive(Default)]
pub struct RecordingJobLog {
    runs: Mutex<Vec<JobName>>,
}

impl RecordingJobLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn runs(&self) -> Vec<JobName> {
        self.runs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobRecordPort for RecordingJobLog {
    async fn record_run(&self, job: JobName) -> Result<()> {
        self.runs.lock().unwrap().push(job);
        Ok(())
    }
}

mockall::mock! {
    pub Dispatch {}

    #[async_trait]
    impl DispatchPort for Dispatch {
        async fn dispatch(
            &self,
            settings: &BackendSettings,
            item: &RequestedItem,
        ) -> Result<DispatchOutcome>;
    }
}

mockall::mock! {
    pub Lookup {}

    #[async_trait]
    impl MetadataLookupPort for Lookup {
        async fn lookup(
            &self,
            provider_key: u64,
        ) -> Result<Option<CanonicalSeriesId>>;
    }
}

/// Dispatch mock that must not be called at all.
pub fn untouched_dispatch() -> Arc<MockDispatch> {
    let mut mock = MockDispatch::new();
    mock.expect_dispatch().times(0);
    Arc::new(mock)
}

/// Lookup mock that must not be called at all.
pub fn untouched_lookup() -> Arc<MockLookup> {
    let mut mock = MockLookup::new();
    mock.expect_lookup().times(0);
    Arc::new(mock)
}

pub fn enabled(auto_approve: ApprovalRule) -> BackendSettings {
    BackendSettings {
        enabled: true,
        quality_profile: Some("default".to_string()),
        auto_approve,
    }
}

pub fn settings_with(configure: impl FnOnce(&mut Settings)) -> Settings {
    let mut settings = Settings::default();
    configure(&mut settings);
    settings
}

pub fn item(kind: MediaKind, title: &str) -> RequestedItem {
    RequestedItem {
        request_id: RequestId::new(),
        kind,
        title: title.to_string(),
        provider_id: None,
        imdb_id: None,
        release_group_id: None,
        seasons: Vec::new(),
        requested_users: Vec::new(),
        approved: false,
        requested_at: Utc::now(),
    }
}

pub fn record(fault: FaultKind, identifier: &str, snapshot: &RequestedItem) -> FaultRecord {
    FaultRecord {
        id: RecordId::new(),
        kind: snapshot.kind,
        fault,
        primary_identifier: identifier.to_string(),
        payload: snapshot.to_payload().expect("payload encodes"),
        last_retry: None,
    }
}
