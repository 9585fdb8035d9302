//! Platform detectors: invoke the native scan tool and parse its output.
//!
//! A [`Detector`] pairs a platform-support predicate with the command
//! invocation and the matching parser. Detectors hold no state across
//! calls beyond the platform identifier they were built with, so a single
//! instance can serve any number of scan cycles.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::command;
use crate::config::ScanConfig;
use crate::models::{AccessPoint, ScanError};
use crate::{Result, iwlist, netsh};

/// Fallback interface name when no wireless interface could be identified.
const DEFAULT_LINUX_INTERFACE: &str = "wlan0";

/// Per-cycle execution options for a detector.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Upper bound on each external tool invocation.
    pub timeout: Duration,
    /// Cooperative cancellation; cancelling abandons the cycle and kills
    /// the running tool.
    pub cancel: CancellationToken,
}

impl ScanOptions {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.command_timeout)
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

/// A platform-specific access point scanner.
#[async_trait]
pub trait Detector: Send + Sync {
    /// Whether this detector can run on the host platform. Pure predicate
    /// over the platform identifier; performs no I/O.
    fn is_supported(&self) -> bool;

    /// Diagnostic label naming the platform and underlying tool.
    fn name(&self) -> &'static str;

    /// Runs one scan: invoke the tool, parse, return ordered records.
    ///
    /// # Errors
    ///
    /// `CommandUnavailable` when the tool cannot be started,
    /// `CommandTimeout` when it outlives `opts.timeout`, and
    /// `CommandFailed` when it exits non-zero without producing a single
    /// parsable record. A non-zero exit alongside parsed records is
    /// tolerated; some tools report partial success that way.
    async fn scan(&self, opts: &ScanOptions) -> Result<Vec<AccessPoint>>;
}

/// Linux detector backed by `iwlist <iface> scan`.
pub struct LinuxDetector {
    platform: String,
}

impl LinuxDetector {
    pub fn new() -> Self {
        Self::with_platform(std::env::consts::OS)
    }

    /// Builds a detector claiming the given platform identifier. Used by
    /// the registry and by tests that pin the platform.
    pub fn with_platform(platform: &str) -> Self {
        Self {
            platform: platform.to_lowercase(),
        }
    }

    /// Locates a wireless interface: `iwconfig` output first, then
    /// `/sys/class/net` entries with a wireless-looking prefix, then the
    /// conventional `wlan0`.
    async fn find_interface(&self, opts: &ScanOptions) -> String {
        if let Ok(out) = command::run("iwconfig", &[], opts).await {
            for line in out.text.lines() {
                if line.contains("IEEE 802.11") || line.contains("ESSID") {
                    if let Some(name) = line.split_whitespace().next() {
                        return name.to_string();
                    }
                }
            }
        }

        if let Ok(mut entries) = tokio::fs::read_dir("/sys/class/net").await {
            while let Ok(Some(entry)) = entries.next_entry().await {
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with("wl") {
                    return name;
                }
            }
        }

        DEFAULT_LINUX_INTERFACE.to_string()
    }
}

impl Default for LinuxDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Detector for LinuxDetector {
    fn is_supported(&self) -> bool {
        self.platform.contains("linux")
    }

    fn name(&self) -> &'static str {
        "Linux Wi-Fi detector (iwlist)"
    }

    async fn scan(&self, opts: &ScanOptions) -> Result<Vec<AccessPoint>> {
        let iface = self.find_interface(opts).await;
        info!("scanning with iwlist on interface {iface}");

        let out = command::run("iwlist", &[iface.as_str(), "scan"], opts).await?;
        let records = iwlist::parse_scan(&out.text, Utc::now());

        if records.is_empty() && !out.status.success() {
            return Err(ScanError::CommandFailed {
                tool: "iwlist".to_string(),
                code: out.status.code(),
            });
        }

        debug!("iwlist produced {} records", records.len());
        Ok(records)
    }
}

/// Windows detector backed by `netsh wlan`.
///
/// Runs the two-tier `show profiles` + `show interfaces` sequence. The
/// interface listing only reports the currently associated network, not a
/// neighbor scan; when it yields nothing, saved profile names are emitted
/// as degraded records so a cycle always has something to report.
pub struct WindowsDetector {
    platform: String,
}

impl WindowsDetector {
    pub fn new() -> Self {
        Self::with_platform(std::env::consts::OS)
    }

    pub fn with_platform(platform: &str) -> Self {
        Self {
            platform: platform.to_lowercase(),
        }
    }
}

impl Default for WindowsDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Detector for WindowsDetector {
    fn is_supported(&self) -> bool {
        self.platform.contains("windows")
    }

    fn name(&self) -> &'static str {
        "Windows Wi-Fi detector (netsh)"
    }

    async fn scan(&self, opts: &ScanOptions) -> Result<Vec<AccessPoint>> {
        let profiles = command::run("netsh", &["wlan", "show", "profiles"], opts).await?;
        let interfaces = command::run("netsh", &["wlan", "show", "interfaces"], opts).await?;
        let now = Utc::now();

        let mut records = netsh::parse_interfaces(&interfaces.text, now);

        if records.is_empty() {
            let names = netsh::parse_profiles(&profiles.text);
            if !names.is_empty() {
                info!(
                    "no interface blocks parsed, reporting {} saved profiles",
                    names.len()
                );
            }
            records = netsh::profiles_to_records(&names, now);
        }

        if records.is_empty() && !interfaces.status.success() {
            return Err(ScanError::CommandFailed {
                tool: "netsh".to_string(),
                code: interfaces.status.code(),
            });
        }

        debug!("netsh produced {} records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_support_predicate() {
        assert!(LinuxDetector::with_platform("linux").is_supported());
        assert!(!LinuxDetector::with_platform("windows").is_supported());
        assert!(!LinuxDetector::with_platform("macos").is_supported());
    }

    #[test]
    fn windows_support_predicate() {
        assert!(WindowsDetector::with_platform("windows").is_supported());
        assert!(WindowsDetector::with_platform("Windows 11").is_supported());
        assert!(!WindowsDetector::with_platform("linux").is_supported());
    }

    #[test]
    fn detector_names() {
        assert_eq!(
            LinuxDetector::with_platform("linux").name(),
            "Linux Wi-Fi detector (iwlist)"
        );
        assert_eq!(
            WindowsDetector::with_platform("windows").name(),
            "Windows Wi-Fi detector (netsh)"
        );
    }
}
