//! Default pass scheduling for hosts without their own scheduler.
//!
//! One pass at a time, on a fixed interval. The tick is awaited inline with
//! the pass itself, so passes can never overlap; a pass that outruns the
//! interval delays the next tick instead of stacking up.

use std::fmt;
use std::sync::Arc;

use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::error::Result;
use crate::ports::SettingsPort;
use crate::reconcile::ReconcileDriver;

/// Owns a driver and a settings source and runs passes forever.
pub struct Reconciler {
    driver: ReconcileDriver,
    settings: Arc<dyn SettingsPort>,
}

impl fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler").finish_non_exhaustive()
    }
}

impl Reconciler {
    pub fn new(driver: ReconcileDriver, settings: Arc<dyn SettingsPort>) -> Self {
        Self { driver, settings }
    }

    /// Runs an immediate pass and then one per interval, forever.
    ///
    /// The cadence is fixed at startup from the initial settings load;
    /// per-pass settings reloads still pick up backend flag and profile
    /// changes. Errors only surface from that initial load.
    pub async fn run(&self) -> Result<()> {
        let initial = self.settings.load().await?;
        let cadence = initial.reconciler.pass_interval;
        info!(interval_secs = cadence.as_secs(), "reconciler started");

        let mut ticker = tokio::time::interval(cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match self.settings.load().await {
                Ok(settings) => self.driver.run_pass(&settings).await,
                Err(err) => {
                    error!(error = %err, "settings load failed, skipping pass")
                }
            }
        }
    }

    /// Loads settings once and runs a single pass. The scheduled-job entry
    /// point for hosts that bring their own cron.
    pub async fn run_once(&self) -> Result<()> {
        let settings = self.settings.load().await?;
        self.driver.run_pass(&settings).await;
        Ok(())
    }
}
