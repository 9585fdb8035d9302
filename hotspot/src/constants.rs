//! Constants for record defaults, band layout, and query limits.
//!
//! The band constants encode the IEEE channel plans the frequency
//! derivation works over; the defaults are the sentinel values a record
//! carries when the underlying tool reported nothing for a field.

/// Default field values applied when a record is finalized.
pub mod defaults {
    /// Sentinel MAC used when the tool supplied no BSSID.
    pub const UNKNOWN_MAC: &str = "unknown";

    /// Security label used when no encryption information was observed.
    pub const UNKNOWN_SECURITY: &str = "Unknown";

    /// Beacon interval (ms) assumed when the tool does not report one.
    pub const BEACON_INTERVAL_MS: u32 = 100;

    /// Signal level (dBm) assigned to degraded-mode records.
    pub const DEGRADED_SIGNAL_DBM: i32 = -100;
}

/// Wi-Fi channel plan constants (GHz).
pub mod band {
    pub const CH_2_4_FIRST: u16 = 1;
    pub const CH_2_4_LAST: u16 = 14;
    pub const CH_5_FIRST: u16 = 36;
    pub const CH_5_LAST: u16 = 165;

    /// Center frequency of channel 1 in the 2.4 GHz band.
    pub const BAND_2_4_BASE_GHZ: f64 = 2.412;

    /// Base frequency of the 5 GHz band.
    pub const BAND_5_BASE_GHZ: f64 = 5.0;

    /// Channel spacing in GHz (5 MHz).
    pub const CHANNEL_SPACING_GHZ: f64 = 0.005;
}

/// Result caps for store queries.
pub mod query {
    pub const LATEST_LIMIT: usize = 100;
    pub const PERIOD_LIMIT: usize = 500;
}
