use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;
use thiserror::Error;

/// One observation of one Wi-Fi access point at one instant.
///
/// Records are built in a single parse pass over one tool invocation and
/// are treated as immutable values from then on. Every record carries a
/// MAC address; when the tool supplied none, the `"unknown"` sentinel is
/// used rather than dropping the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    /// Network name, if the tool exposed one.
    pub ssid: Option<String>,
    /// BSSID in canonical colon-separated uppercase hex, or `"unknown"`.
    pub mac_address: String,
    /// Link quality in percent, 0.0–100.0.
    pub link_quality: f64,
    /// Signal level in dBm, typically -100..0.
    pub signal_level: i32,
    /// Channel number; 0 when unobserved.
    pub channel: u16,
    /// Center frequency in GHz; 0.0 when the band is unknown.
    pub frequency_ghz: f64,
    /// Time of the last synchronization frame.
    pub last_beacon_time: DateTime<Utc>,
    /// Beacon interval in milliseconds; defaults to 100.
    pub beacon_interval_ms: u32,
    /// Security label, e.g. `"WPA2"`, `"WEP"`, `"Open"`, `"Unknown"`.
    pub security_version: String,
}

impl Display for AccessPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SSID/ESSID: {}", self.ssid.as_deref().unwrap_or("N/A"))?;
        writeln!(f, "MAC address: {}", self.mac_address)?;
        writeln!(f, "Link quality: {:.1}%", self.link_quality)?;
        writeln!(f, "Signal level: {} dBm", self.signal_level)?;
        writeln!(f, "Channel: {}", self.channel)?;
        writeln!(f, "Frequency: {:.3} GHz", self.frequency_ghz)?;
        writeln!(f, "Last beacon: {}", self.last_beacon_time)?;
        writeln!(f, "Beacon interval: {} ms", self.beacon_interval_ms)?;
        write!(f, "Security: {}", self.security_version)
    }
}

/// Errors that can occur during a scan cycle.
///
/// Only cycle-level failures appear here. Malformed lines inside the
/// tool's output are absorbed during parsing and never surface as errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No detector's support predicate matched the host platform.
    #[error("no supported Wi-Fi detector for platform `{platform}`")]
    NoSupportedDetector { platform: String },

    /// The external tool could not be started at all.
    #[error("`{tool}` could not be started")]
    CommandUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited non-zero with no usable output, or the
    /// caller abandoned the cycle and the process was killed.
    #[error("`{tool}` failed (exit code {code:?}) with no usable output")]
    CommandFailed { tool: String, code: Option<i32> },

    /// The tool did not finish within the configured timeout.
    #[error("`{tool}` did not finish within {timeout:?}")]
    CommandTimeout { tool: String, timeout: Duration },

    /// An I/O error occurred while waiting on the tool.
    #[error("I/O error during scan")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::defaults::UNKNOWN_MAC;

    fn sample() -> AccessPoint {
        AccessPoint {
            ssid: Some("TestNet".into()),
            mac_address: "AA:BB:CC:DD:EE:FF".into(),
            link_quality: 100.0,
            signal_level: -40,
            channel: 6,
            frequency_ghz: 2.437,
            last_beacon_time: Utc::now(),
            beacon_interval_ms: 100,
            security_version: "WPA2".into(),
        }
    }

    #[test]
    fn access_point_display_includes_all_fields() {
        let text = format!("{}", sample());
        assert!(text.contains("SSID/ESSID: TestNet"));
        assert!(text.contains("MAC address: AA:BB:CC:DD:EE:FF"));
        assert!(text.contains("Link quality: 100.0%"));
        assert!(text.contains("Signal level: -40 dBm"));
        assert!(text.contains("Channel: 6"));
        assert!(text.contains("Frequency: 2.437 GHz"));
        assert!(text.contains("Security: WPA2"));
    }

    #[test]
    fn access_point_display_hidden_ssid() {
        let mut ap = sample();
        ap.ssid = None;
        ap.mac_address = UNKNOWN_MAC.into();
        let text = format!("{ap}");
        assert!(text.contains("SSID/ESSID: N/A"));
        assert!(text.contains("MAC address: unknown"));
    }

    #[test]
    fn scan_error_display() {
        assert_eq!(
            format!(
                "{}",
                ScanError::NoSupportedDetector {
                    platform: "solaris".into()
                }
            ),
            "no supported Wi-Fi detector for platform `solaris`"
        );
        assert_eq!(
            format!(
                "{}",
                ScanError::CommandFailed {
                    tool: "iwlist".into(),
                    code: Some(255),
                }
            ),
            "`iwlist` failed (exit code Some(255)) with no usable output"
        );
    }
}
