use async_trait::async_trait;
use faultline_config::Settings;

use crate::error::Result;

/// Supplies the settings snapshot for one pass.
///
/// Loaded once at the start of each pass and handed to the handlers by
/// reference; nothing re-reads settings mid-pass.
#[async_trait]
pub trait SettingsPort: Send + Sync {
    async fn load(&self) -> Result<Settings>;
}

/// Fixed settings, mainly for tests and embedding hosts that manage their own
/// configuration lifecycle.
#[derive(Debug, Clone)]
pub struct StaticSettings(pub Settings);

#[async_trait]
impl SettingsPort for StaticSettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.0.clone())
    }
}

/// Re-reads the TOML file named by `FAULTLINE_CONFIG` on every pass, so
/// backend enable flags and profiles can change without a restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

#[async_trait]
impl SettingsPort for EnvSettings {
    async fn load(&self) -> Result<Settings> {
        Ok(Settings::load()?.settings)
    }
}
