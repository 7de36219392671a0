use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;

use crate::error::Result;

/// Named background jobs whose runs are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobName {
    FaultReconciliation,
}

impl Display for JobName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            JobName::FaultReconciliation => write!(f, "fault-reconciliation"),
        }
    }
}

/// Records that a scheduled job ran to its boundary.
///
/// The driver calls this exactly once per invocation, whether the sweep
/// succeeded, partially failed, or never got past listing the queue.
#[async_trait]
pub trait JobRecordPort: Send + Sync {
    async fn record_run(&self, job: JobName) -> Result<()>;
}
