//! Backend selection and the shared dispatch tail.
//!
//! Routing is a lookup table keyed on media kind rather than branches spread
//! across the handlers: each kind maps to an ordered list of backends, and
//! the first enabled one wins. There is no fan-out to multiple backends for
//! one item.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use faultline_config::{BackendSettings, Settings};
use faultline_model::{MediaKind, RequestedItem};
use tracing::{debug, error, warn};

use crate::approval;
use crate::ports::{DispatchPort, RequestsRepository};

/// Identifies one wired backend slot and the settings section it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendId {
    SeriesPrimary,
    SeriesFallback,
    Movies,
    Music,
}

impl BackendId {
    /// The settings section governing this backend slot.
    pub fn settings_in<'a>(&self, settings: &'a Settings) -> &'a BackendSettings {
        match self {
            BackendId::SeriesPrimary => &settings.series,
            BackendId::SeriesFallback => &settings.series_fallback,
            BackendId::Movies => &settings.movies,
            BackendId::Music => &settings.music,
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendId::SeriesPrimary => write!(f, "series-primary"),
            BackendId::SeriesFallback => write!(f, "series-fallback"),
            BackendId::Movies => write!(f, "movies"),
            BackendId::Music => write!(f, "music"),
        }
    }
}

/// One backend slot: its identity plus the port that talks to it.
#[derive(Clone)]
pub struct DispatchBackend {
    pub id: BackendId,
    pub port: Arc<dyn DispatchPort>,
}

impl fmt::Debug for DispatchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchBackend")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Per-kind ordered backend lists.
#[derive(Clone)]
pub struct DispatchTable {
    backends: HashMap<MediaKind, Vec<DispatchBackend>>,
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("kinds", &self.backends.len())
            .finish_non_exhaustive()
    }
}

impl DispatchTable {
    /// Canonical wiring: TV tries the primary series backend then the
    /// fallback; movies and albums each have a single backend.
    pub fn new(
        series_primary: Arc<dyn DispatchPort>,
        series_fallback: Arc<dyn DispatchPort>,
        movies: Arc<dyn DispatchPort>,
        music: Arc<dyn DispatchPort>,
    ) -> Self {
        let mut backends = HashMap::new();
        backends.insert(
            MediaKind::TvShow,
            vec![
                DispatchBackend {
                    id: BackendId::SeriesPrimary,
                    port: series_primary,
                },
                DispatchBackend {
                    id: BackendId::SeriesFallback,
                    port: series_fallback,
                },
            ],
        );
        backends.insert(
            MediaKind::Movie,
            vec![DispatchBackend {
                id: BackendId::Movies,
                port: movies,
            }],
        );
        backends.insert(
            MediaKind::Album,
            vec![DispatchBackend {
                id: BackendId::Music,
                port: music,
            }],
        );
        Self { backends }
    }

    pub fn backends_for(&self, kind: MediaKind) -> &[DispatchBackend] {
        self.backends.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Picks the first enabled backend for `kind`, in wiring order.
    ///
    /// `None` covers both "kind has no slots" and "all slots disabled";
    /// callers that care about the difference check
    /// [`DispatchTable::backends_for`] first.
    pub fn select<'a>(
        &'a self,
        kind: MediaKind,
        settings: &'a Settings,
    ) -> Option<(&'a DispatchBackend, &'a BackendSettings)> {
        self.backends_for(kind).iter().find_map(|backend| {
            let section = backend.id.settings_in(settings);
            section.enabled.then_some((backend, section))
        })
    }
}

/// What one dispatch attempt amounted to, before store bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchAttempt {
    /// Backend accepted the item and the request entity was written back.
    Dispatched,
    /// Backend refused, errored at transport level, was disabled, or the
    /// request write-back failed. The row is retried next pass.
    Refused,
    /// No backend slot exists for the item's kind. A data-integrity problem,
    /// not a retry candidate.
    NoBackend,
}

/// Shared dispatch tail used by both handlers: select a backend, submit,
/// apply the approval rule, write the request entity back.
pub struct ItemDispatcher {
    table: DispatchTable,
    requests: Arc<dyn RequestsRepository>,
}

impl fmt::Debug for ItemDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemDispatcher")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl ItemDispatcher {
    pub fn new(table: DispatchTable, requests: Arc<dyn RequestsRepository>) -> Self {
        Self { table, requests }
    }

    /// Submits one item to its backend. All errors are absorbed here; nothing
    /// propagates past the item.
    pub async fn dispatch_item(
        &self,
        item: &mut RequestedItem,
        settings: &Settings,
    ) -> DispatchAttempt {
        if self.table.backends_for(item.kind).is_empty() {
            error!(kind = %item.kind, title = %item.title, "no dispatch backend wired for kind");
            return DispatchAttempt::NoBackend;
        }
        let Some((backend, section)) = self.table.select(item.kind, settings) else {
            debug!(kind = %item.kind, title = %item.title, "every backend for kind is disabled");
            return DispatchAttempt::Refused;
        };

        let outcome = match backend.port.dispatch(section, item).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(backend = %backend.id, title = %item.title, error = %err, "dispatch call failed");
                return DispatchAttempt::Refused;
            }
        };
        if !outcome.success {
            debug!(backend = %backend.id, title = %item.title, detail = %outcome.detail, "backend refused item");
            return DispatchAttempt::Refused;
        }

        if approval::approves(section.auto_approve, &settings.approval, item) {
            item.approved = true;
        }
        // Request entity first, queue row second: a crash between the two
        // leaves a row whose retry re-sends an idempotent dispatch.
        if let Err(err) = self.requests.update_request(item).await {
            warn!(request = %item.request_id, error = %err, "request write-back failed after dispatch");
            return DispatchAttempt::Refused;
        }
        DispatchAttempt::Dispatched
    }
}
