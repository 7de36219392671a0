use async_trait::async_trait;
use faultline_model::RequestedItem;

use crate::error::Result;

/// Port onto the underlying requests table.
///
/// The request entity is the source of truth for approval state; the fault
/// queue is only a side index. On every successful dispatch the engine writes
/// the updated snapshot here first and deletes the queue row second, so a
/// crash between the two steps leaves a row that is retried harmlessly.
#[async_trait]
pub trait RequestsRepository: Send + Sync {
    async fn update_request(&self, item: &RequestedItem) -> Result<()>;
}
