use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a successful dispatch affects the request's approval flag.
///
/// The series backends are asymmetric on purpose: the primary backend performs
/// its own approval workflow downstream, so success there leaves the flag
/// alone, while the fallback backend has no such workflow and approves
/// immediately. Kept as an explicit per-backend setting rather than a branch
/// in the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalRule {
    /// Flip `approved` on every successful dispatch.
    Always,
    /// Never touch the approval flag here.
    Never,
    /// Consult [`ApprovalSettings`] and the item's requester set.
    AlbumPolicy,
}

/// Connection-independent settings for one downstream acquisition backend.
///
/// The concrete client (base url, api key, transport) lives behind the
/// dispatch port; only the knobs the reconciliation handlers need are modeled
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Disabled backends are skipped without error; their items are retained
    /// for a later pass.
    pub enabled: bool,
    /// Quality/profile selection forwarded verbatim to the backend.
    pub quality_profile: Option<String>,
    /// Approval rule applied on successful dispatch. When a backend section is
    /// present but this field is omitted, the rule falls back to `never`.
    pub auto_approve: ApprovalRule,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            quality_profile: None,
            auto_approve: ApprovalRule::Never,
        }
    }
}

impl BackendSettings {
    fn disabled(auto_approve: ApprovalRule) -> Self {
        Self {
            enabled: false,
            quality_profile: None,
            auto_approve,
        }
    }
}

/// Inputs to the album auto-approval policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalSettings {
    /// Approve every successfully dispatched album regardless of requester.
    pub auto_approve_albums: bool,
    /// Usernames whose requests are always auto-approved. An album is approved
    /// when every requester on the item appears here.
    pub always_approve_users: Vec<String>,
}

impl ApprovalSettings {
    /// Album policy from the original product: a blanket flag, otherwise
    /// unanimous membership in the always-approve list.
    pub fn approves_album(&self, requesters: &[String]) -> bool {
        if self.auto_approve_albums {
            return true;
        }
        !requesters.is_empty()
            && requesters
                .iter()
                .all(|user| self.always_approve_users.contains(user))
    }
}

/// Pass cadence for the reconciliation driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerSettings {
    /// Interval between pass starts, e.g. `"6h"` or `"30m"`. Passes never
    /// overlap; a slow pass delays the next tick instead.
    #[serde(
        serialize_with = "duration_to_humantime",
        deserialize_with = "duration_from_humantime"
    )]
    pub pass_interval: Duration,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            pass_interval: Duration::from_secs(6 * 60 * 60),
        }
    }
}

fn duration_to_humantime<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*value))
}

fn duration_from_humantime<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
}

/// Everything the reconciliation handlers read. Loaded once at the start of a
/// pass and never mutated while the pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reconciler: ReconcilerSettings,
    /// Primary series backend, tried first for TV items.
    #[serde(default = "default_series")]
    pub series: BackendSettings,
    /// Fallback series backend, tried only when the primary is disabled.
    #[serde(default = "default_series_fallback")]
    pub series_fallback: BackendSettings,
    #[serde(default = "default_movies")]
    pub movies: BackendSettings,
    #[serde(default = "default_music")]
    pub music: BackendSettings,
    pub approval: ApprovalSettings,
}

fn default_series() -> BackendSettings {
    BackendSettings::disabled(ApprovalRule::Never)
}

fn default_series_fallback() -> BackendSettings {
    BackendSettings::disabled(ApprovalRule::Always)
}

fn default_movies() -> BackendSettings {
    BackendSettings::disabled(ApprovalRule::Always)
}

fn default_music() -> BackendSettings {
    BackendSettings::disabled(ApprovalRule::AlbumPolicy)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reconciler: ReconcilerSettings::default(),
            series: default_series(),
            series_fallback: default_series_fallback(),
            movies: default_movies(),
            music: default_music(),
            approval: ApprovalSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_every_backend_disabled() {
        let settings = Settings::default();
        assert!(!settings.series.enabled);
        assert!(!settings.series_fallback.enabled);
        assert!(!settings.movies.enabled);
        assert!(!settings.music.enabled);
    }

    #[test]
    fn default_approval_rules_follow_backend_position() {
        let settings = Settings::default();
        assert_eq!(settings.series.auto_approve, ApprovalRule::Never);
        assert_eq!(settings.series_fallback.auto_approve, ApprovalRule::Always);
        assert_eq!(settings.movies.auto_approve, ApprovalRule::Always);
        assert_eq!(settings.music.auto_approve, ApprovalRule::AlbumPolicy);
    }

    #[test]
    fn album_policy_requires_unanimous_requesters() {
        let approval = ApprovalSettings {
            auto_approve_albums: false,
            always_approve_users: vec!["alice".to_string()],
        };
        assert!(approval.approves_album(&["alice".to_string()]));
        assert!(!approval.approves_album(&[
            "alice".to_string(),
            "bob".to_string()
        ]));
        assert!(!approval.approves_album(&[]));
    }

    #[test]
    fn blanket_album_flag_wins() {
        let approval = ApprovalSettings {
            auto_approve_albums: true,
            always_approve_users: Vec::new(),
        };
        assert!(approval.approves_album(&[]));
    }
}
