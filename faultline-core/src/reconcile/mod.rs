//! The reconciliation pass: partitioning, the two handlers, and outcome
//! application.

pub mod driver;
pub mod outcome;
pub mod repair;
pub mod resubmit;

pub use driver::ReconcileDriver;
pub use outcome::ItemOutcome;
pub use repair::RepairHandler;
pub use resubmit::ResubmitHandler;
