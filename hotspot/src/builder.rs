//! Access point record assembly and finalization.
//!
//! Parsers accumulate whatever fields they manage to recognize into an
//! [`ApBuilder`] and call [`ApBuilder::finish`] once per record block.
//! Finalization applies the gap-filling policy in one place: derived
//! frequency and link quality, default beacon interval, the sentinel MAC,
//! and the `"Unknown"` security label.

use chrono::{DateTime, Utc};

use crate::constants::defaults;
use crate::models::AccessPoint;
use crate::quality;

/// A record under construction during one parse pass.
///
/// All fields start unset/zero; whatever the parser recognized wins, the
/// rest is filled by [`finish`](Self::finish).
#[derive(Debug, Default, Clone)]
pub(crate) struct ApBuilder {
    pub ssid: Option<String>,
    pub mac_address: Option<String>,
    pub link_quality: f64,
    pub signal_level: i32,
    pub channel: u16,
    pub frequency_ghz: f64,
    pub last_beacon_time: Option<DateTime<Utc>>,
    pub beacon_interval_ms: u32,
    pub security_version: Option<String>,
}

impl ApBuilder {
    /// Seals the record, applying defaults and derived metrics exactly once.
    pub(crate) fn finish(self, now: DateTime<Utc>) -> AccessPoint {
        let frequency_ghz = if self.frequency_ghz == 0.0 && self.channel > 0 {
            quality::frequency_from_channel(self.channel)
        } else {
            self.frequency_ghz
        };

        let link_quality = if self.link_quality == 0.0 && self.signal_level != 0 {
            quality::link_quality_from_signal(self.signal_level)
        } else {
            self.link_quality
        };

        AccessPoint {
            ssid: self.ssid,
            mac_address: self
                .mac_address
                .unwrap_or_else(|| defaults::UNKNOWN_MAC.to_string()),
            link_quality,
            signal_level: self.signal_level,
            channel: self.channel,
            frequency_ghz,
            last_beacon_time: self.last_beacon_time.unwrap_or(now),
            beacon_interval_ms: if self.beacon_interval_ms == 0 {
                defaults::BEACON_INTERVAL_MS
            } else {
                self.beacon_interval_ms
            },
            security_version: self
                .security_version
                .unwrap_or_else(|| defaults::UNKNOWN_SECURITY.to_string()),
        }
    }
}

/// Builds the minimal record the degraded extraction mode emits for a
/// saved/known network name when no live scan block is available.
pub(crate) fn degraded_record(ssid: String, now: DateTime<Utc>) -> AccessPoint {
    AccessPoint {
        ssid: Some(ssid),
        mac_address: defaults::UNKNOWN_MAC.to_string(),
        link_quality: 0.0,
        signal_level: defaults::DEGRADED_SIGNAL_DBM,
        channel: 0,
        frequency_ghz: 0.0,
        last_beacon_time: now,
        beacon_interval_ms: defaults::BEACON_INTERVAL_MS,
        security_version: defaults::UNKNOWN_SECURITY.to_string(),
    }
}
