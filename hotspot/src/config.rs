//! Scan engine configuration.
//!
//! One explicit struct constructed at process start and passed into the
//! orchestrator; nothing here is a global. The defaults match the
//! one-minute scan cadence and five-minute "latest" window the system was
//! originally tuned for.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for scan cycles and history queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Upper bound on each external tool invocation.
    pub command_timeout: Duration,
    /// Cadence at which a periodic caller should trigger cycles.
    pub scan_interval: Duration,
    /// How far back the "latest" store query looks.
    pub latest_window: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(30),
            scan_interval: Duration::from_secs(60),
            latest_window: Duration::from_secs(5 * 60),
        }
    }
}
