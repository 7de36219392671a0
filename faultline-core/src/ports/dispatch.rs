use async_trait::async_trait;
use faultline_config::BackendSettings;
use faultline_model::RequestedItem;

use crate::error::Result;

/// What one downstream backend said about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub success: bool,
    /// Backend-specific detail: the accepted title, a refusal reason, a
    /// downstream status string. Logged, never parsed.
    pub detail: String,
}

impl DispatchOutcome {
    pub fn accepted(detail: impl Into<String>) -> Self {
        Self {
            success: true,
            detail: detail.into(),
        }
    }

    pub fn refused(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: detail.into(),
        }
    }
}

/// Port onto one downstream acquisition backend.
///
/// Implementations return `Err` only for transport-level failures; an
/// ordinary negative answer from the backend is `success = false`. The engine
/// treats both the same way, so a flaky implementation that errs on the side
/// of `Err` loses nothing but log fidelity.
///
/// Repeated dispatch of the same item is assumed idempotent on the far end.
/// None of the known backends double-acquire on a re-send, but this is
/// unverified; a new implementation should confirm it or dedupe internally.
#[async_trait]
pub trait DispatchPort: Send + Sync {
    async fn dispatch(
        &self,
        settings: &BackendSettings,
        item: &RequestedItem,
    ) -> Result<DispatchOutcome>;
}
