use async_trait::async_trait;
use faultline_model::{FaultRecord, RecordId};

use crate::error::Result;

/// Repository port for the durable fault queue.
///
/// The store must provide per-record atomic update and delete; the engine is
/// the queue's only writer and performs no locking of its own.
#[async_trait]
pub trait FaultStore: Send + Sync {
    /// Returns every parked record. A pass reads the whole queue up front and
    /// works from that snapshot.
    async fn list_all(&self) -> Result<Vec<FaultRecord>>;

    /// Persists retry bookkeeping (and any reclassification) for one record,
    /// keyed by `record.id`.
    async fn update(&self, record: &FaultRecord) -> Result<()>;

    /// Removes a record. Called only after a successful dispatch.
    async fn delete(&self, id: RecordId) -> Result<()>;
}
