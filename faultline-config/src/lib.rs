//! Shared configuration for the Faultline reconciliation engine.
//!
//! This crate centralizes the settings structs handed to the reconciliation
//! handlers and the TOML/env loading path. Settings are loaded once per pass
//! and passed by reference; nothing in here is globally mutable.

pub mod loader;
pub mod models;

pub use loader::{ConfigError, SettingsLoad, SettingsSource, CONFIG_PATH_ENV};
pub use models::{
    ApprovalRule, ApprovalSettings, BackendSettings, ReconcilerSettings,
    Settings,
};
