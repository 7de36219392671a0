/// Per-item verdict returned by a handler.
///
/// Handlers never touch the store themselves; the driver turns each verdict
/// into exactly one store mutation (or none, for `Unchanged`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Dispatch succeeded and the request entity was written back; the queue
    /// row is deleted.
    Dispatched,
    /// The attempt failed; the row stays and its retry timestamp is bumped.
    Retained,
    /// The metadata gap was filled but dispatch still failed: the row is
    /// demoted to the transient partition with the enriched payload, so the
    /// next pass resubmits directly instead of re-enriching.
    Reclassified {
        /// Updated payload carrying the resolved provider id.
        payload: Vec<u8>,
    },
    /// Nothing could be attempted (unresolved metadata, data-integrity
    /// problem). The row stays byte-identical, retry timestamp included.
    Unchanged,
}
