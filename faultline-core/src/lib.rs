//! Background reconciliation engine for parked media-acquisition requests.
//!
//! When a request cannot be dispatched to a downstream acquisition backend —
//! required metadata is missing, or the backend rejected or errored on the
//! call — it is parked in a durable fault queue with a classification saying
//! why. This crate is the recovery path: a periodically-run pass re-examines
//! every parked row, repairs or resubmits it, and either deletes it on
//! success or updates its retry bookkeeping, forever, until it succeeds or is
//! manually purged.
//!
//! The engine owns only the decision logic. Storage, the concrete backend
//! clients, the metadata catalog, and scheduling all live behind the port
//! traits in [`ports`]; wire them up with a [`dispatch::DispatchTable`] and a
//! [`reconcile::ReconcileDriver`], and either call
//! [`reconcile::ReconcileDriver::run_pass`] from your own scheduler or let
//! [`runtime::Reconciler`] run the fixed-interval loop.

pub mod approval;
pub mod dispatch;
pub mod error;
pub mod ports;
pub mod reconcile;
pub mod runtime;

pub use dispatch::{BackendId, DispatchBackend, DispatchTable};
pub use error::{ReconcileError, Result};
pub use ports::{
    DispatchOutcome, DispatchPort, EnvSettings, FaultStore, JobName,
    JobRecordPort, MetadataLookupPort, RequestsRepository, SettingsPort,
    StaticSettings,
};
pub use reconcile::{ItemOutcome, ReconcileDriver};
pub use runtime::Reconciler;
