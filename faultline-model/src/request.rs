use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ids::RequestId;
use crate::kinds::MediaKind;

/// Snapshot of the underlying acquisition request carried inside a fault-queue
/// row's payload.
///
/// The fault queue is a side index over these: the request entity remains the
/// source of truth for approval state, so every successful dispatch writes the
/// (possibly changed) snapshot back through the requests repository before the
/// queue row is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub request_id: RequestId,
    pub kind: MediaKind,
    pub title: String,
    /// Canonical provider id for series (and movies where the backend keys on
    /// a numeric id). `None` for rows parked with missing information.
    pub provider_id: Option<u64>,
    /// IMDb id used by the movie backend.
    pub imdb_id: Option<String>,
    /// Release-group id used by the music backend.
    pub release_group_id: Option<String>,
    /// Season numbers the requester asked for; empty means all.
    #[serde(default)]
    pub seasons: Vec<u32>,
    /// Usernames that requested this item, in request order.
    #[serde(default)]
    pub requested_users: Vec<String>,
    pub approved: bool,
    pub requested_at: DateTime<Utc>,
}

impl RequestedItem {
    /// Serializes the snapshot into the opaque payload bytes stored on a
    /// fault-queue row. Exact inverse of [`RequestedItem::from_payload`].
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_payload(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RequestedItem {
        RequestedItem {
            request_id: RequestId::new(),
            kind: MediaKind::TvShow,
            title: "Example Show".to_string(),
            provider_id: Some(67),
            imdb_id: None,
            release_group_id: None,
            seasons: vec![1, 2],
            requested_users: vec!["alice".to_string()],
            approved: false,
            requested_at: Utc::now(),
        }
    }

    #[test]
    fn payload_round_trips_exactly() {
        let item = sample();
        let bytes = item.to_payload().unwrap();
        let back = RequestedItem::from_payload(&bytes).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn payload_tolerates_missing_optional_lists() {
        // Rows parked by older writers may omit the list fields entirely.
        let bytes = serde_json::json!({
            "request_id": RequestId::new(),
            "kind": "Movie",
            "title": "Example Movie",
            "provider_id": null,
            "imdb_id": "tt0111161",
            "release_group_id": null,
            "approved": false,
            "requested_at": Utc::now(),
        })
        .to_string();
        let item = RequestedItem::from_payload(bytes.as_bytes()).unwrap();
        assert!(item.seasons.is_empty());
        assert!(item.requested_users.is_empty());
    }
}
