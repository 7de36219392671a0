use async_trait::async_trait;
use faultline_model::CanonicalSeriesId;

use crate::error::Result;

/// Port onto the external show-metadata catalog.
///
/// `Ok(None)` means the catalog has no canonical id for the key yet. That is
/// a steady state, not an error: the row is left untouched and the next pass
/// asks again, since catalogs backfill over time.
#[async_trait]
pub trait MetadataLookupPort: Send + Sync {
    async fn lookup(&self, provider_key: u64) -> Result<Option<CanonicalSeriesId>>;
}
