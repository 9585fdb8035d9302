//! The scan orchestrator: one entry point for one detection cycle.
//!
//! Deliberately the thinnest piece of the engine. Whatever triggers a
//! cycle (a timer, a menu, a test) goes through [`HotspotDetector`], which
//! selects the platform detector, runs its scan under the configured
//! timeout, and returns the batch as an immutable value. An empty batch is
//! a successful cycle that observed nothing; failures keep their typed
//! error so callers can tell "found nothing" from "failed to run".

use log::{info, warn};

use crate::Result;
use crate::config::ScanConfig;
use crate::detector::ScanOptions;
use crate::models::AccessPoint;
use crate::registry::DetectorRegistry;

/// High-level interface to Wi-Fi access point detection.
pub struct HotspotDetector {
    registry: DetectorRegistry,
    config: ScanConfig,
}

impl HotspotDetector {
    /// Creates an orchestrator for the running host.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            registry: DetectorRegistry::new(),
            config,
        }
    }

    /// Creates an orchestrator over an explicit registry (tests, embedding).
    pub fn with_registry(registry: DetectorRegistry, config: ScanConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Diagnostic label of the detector that would serve the next cycle.
    pub fn detector_name(&self) -> Result<&'static str> {
        Ok(self.registry.select()?.name())
    }

    /// Runs exactly one detection cycle and returns the observed batch.
    pub async fn run_cycle(&self) -> Result<Vec<AccessPoint>> {
        self.run_cycle_with(&ScanOptions::from_config(&self.config))
            .await
    }

    /// Runs one cycle with caller-supplied options (custom timeout or a
    /// cancellation token for abandoning the cycle mid-flight).
    pub async fn run_cycle_with(&self, opts: &ScanOptions) -> Result<Vec<AccessPoint>> {
        let detector = self.registry.select()?;

        let records = match detector.scan(opts).await {
            Ok(records) => records,
            Err(e) => {
                warn!("scan cycle failed via {}: {e}", detector.name());
                return Err(e);
            }
        };

        if records.is_empty() {
            info!("scan cycle finished: no access points observed");
        } else {
            info!("scan cycle finished: {} access points", records.len());
        }

        Ok(records)
    }
}
