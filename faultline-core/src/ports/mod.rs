//! Port contracts for the engine's external collaborators.
//!
//! Everything durable or networked sits behind one of these traits: the fault
//! queue store, the underlying requests table, the downstream acquisition
//! backends, the metadata catalog, and the job-run marker. The engine only
//! ever sees `Arc<dyn Port>`.

pub mod dispatch;
pub mod fault_store;
pub mod job_record;
pub mod lookup;
pub mod requests;
pub mod settings;

pub use dispatch::{DispatchOutcome, DispatchPort};
pub use fault_store::FaultStore;
pub use job_record::{JobName, JobRecordPort};
pub use lookup::MetadataLookupPort;
pub use requests::RequestsRepository;
pub use settings::{EnvSettings, SettingsPort, StaticSettings};
