//! Per-backend auto-approval policy evaluation.

use faultline_config::{ApprovalRule, ApprovalSettings};
use faultline_model::RequestedItem;

/// Decides whether a successful dispatch also approves the request.
pub fn approves(
    rule: ApprovalRule,
    approval: &ApprovalSettings,
    item: &RequestedItem,
) -> bool {
    match rule {
        ApprovalRule::Always => true,
        ApprovalRule::Never => false,
        ApprovalRule::AlbumPolicy => approval.approves_album(&item.requested_users),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use faultline_model::{MediaKind, RequestId};

    use super::*;

    fn album(requesters: &[&str]) -> RequestedItem {
        RequestedItem {
            request_id: RequestId::new(),
            kind: MediaKind::Album,
            title: "Example Album".to_string(),
            provider_id: None,
            imdb_id: None,
            release_group_id: Some("rg-1".to_string()),
            seasons: Vec::new(),
            requested_users: requesters.iter().map(|s| s.to_string()).collect(),
            approved: false,
            requested_at: Utc::now(),
        }
    }

    #[test]
    fn always_and_never_ignore_requesters() {
        let approval = ApprovalSettings::default();
        let item = album(&["bob"]);
        assert!(approves(ApprovalRule::Always, &approval, &item));
        assert!(!approves(ApprovalRule::Never, &approval, &item));
    }

    #[test]
    fn album_policy_consults_the_requester_set() {
        let approval = ApprovalSettings {
            auto_approve_albums: false,
            always_approve_users: vec!["alice".to_string()],
        };
        assert!(approves(ApprovalRule::AlbumPolicy, &approval, &album(&["alice"])));
        assert!(!approves(ApprovalRule::AlbumPolicy, &approval, &album(&["bob"])));
    }
}
