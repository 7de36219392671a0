//! Core data model definitions shared across Faultline crates.
#![allow(missing_docs)]

pub mod error;
pub mod fault;
pub mod ids;
pub mod kinds;
pub mod request;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use fault::FaultRecord;
pub use ids::{CanonicalSeriesId, RecordId, RequestId};
pub use kinds::{FaultKind, MediaKind};
pub use request::RequestedItem;
