use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Settings;

/// Environment variable naming the TOML file to load settings from.
pub const CONFIG_PATH_ENV: &str = "FAULTLINE_CONFIG";

/// Errors surfaced while locating or parsing a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the loaded settings came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

/// Result of a settings load, with provenance kept for logging.
#[derive(Debug, Clone)]
pub struct SettingsLoad {
    pub settings: Settings,
    pub source: SettingsSource,
}

impl Settings {
    /// Loads settings from the path named by `FAULTLINE_CONFIG`, falling back
    /// to defaults when the variable is unset. A `.env` file in the working
    /// directory is honored first.
    pub fn load() -> Result<SettingsLoad, ConfigError> {
        let _ = dotenvy::dotenv();
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(raw) => {
                let path = PathBuf::from(raw);
                let settings = Self::load_from_path(&path)?;
                Ok(SettingsLoad {
                    settings,
                    source: SettingsSource::EnvPath(path),
                })
            }
            Err(_) => {
                debug!(env = CONFIG_PATH_ENV, "no settings path set, using defaults");
                Ok(SettingsLoad {
                    settings: Settings::default(),
                    source: SettingsSource::Default,
                })
            }
        }
    }

    /// Loads settings from an explicit TOML file.
    pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::ApprovalRule;

    #[test]
    fn parses_full_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[reconciler]
pass_interval = "30m"

[series]
enabled = true
quality_profile = "hd-1080p"
auto_approve = "never"

[series_fallback]
enabled = true
auto_approve = "always"

[movies]
enabled = true
quality_profile = "any"
auto_approve = "always"

[music]
enabled = false
auto_approve = "album-policy"

[approval]
auto_approve_albums = false
always_approve_users = ["alice"]
"#
        )
        .unwrap();

        let settings = Settings::load_from_path(file.path()).unwrap();
        assert_eq!(
            settings.reconciler.pass_interval,
            std::time::Duration::from_secs(30 * 60)
        );
        assert!(settings.series.enabled);
        assert_eq!(
            settings.series.quality_profile.as_deref(),
            Some("hd-1080p")
        );
        assert_eq!(settings.music.auto_approve, ApprovalRule::AlbumPolicy);
        assert_eq!(settings.approval.always_approve_users, vec!["alice"]);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[movies]
enabled = true
auto_approve = "always"
"#
        )
        .unwrap();

        let settings = Settings::load_from_path(file.path()).unwrap();
        assert!(settings.movies.enabled);
        assert!(!settings.series.enabled);
        assert_eq!(
            settings.reconciler.pass_interval,
            std::time::Duration::from_secs(6 * 60 * 60)
        );
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "movies = 12").unwrap();
        let err = Settings::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
