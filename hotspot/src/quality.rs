//! Pure signal-quality calculators.
//!
//! These fill the gaps heterogeneous scan tools leave in their output:
//! deriving a center frequency from a channel number and a link-quality
//! percentage from a raw dBm reading. Both functions are total and
//! deterministic; the quality curve is a fixed design constant so stored
//! values stay comparable across platforms.

use crate::constants::band;

/// Derives the center frequency in GHz from a channel number.
///
/// Channels 1-14 map into the 2.4 GHz band, 36-165 into the 5 GHz band.
/// Anything else returns 0.0 (unknown band).
pub fn frequency_from_channel(channel: u16) -> f64 {
    match channel {
        band::CH_2_4_FIRST..=band::CH_2_4_LAST => {
            band::BAND_2_4_BASE_GHZ + f64::from(channel - 1) * band::CHANNEL_SPACING_GHZ
        }
        band::CH_5_FIRST..=band::CH_5_LAST => {
            band::BAND_5_BASE_GHZ + f64::from(channel) * band::CHANNEL_SPACING_GHZ
        }
        _ => 0.0,
    }
}

/// Approximates a link-quality percentage (0-100) from a signal level in dBm.
///
/// Piecewise-linear curve: anything at -30 dBm or better is a perfect
/// link, anything below -90 dBm is unusable.
pub fn link_quality_from_signal(dbm: i32) -> f64 {
    match dbm {
        d if d >= -30 => 100.0,
        d if d >= -67 => 100.0 - f64::from(67 + d) * 1.5,
        d if d >= -70 => 50.0 - f64::from(70 + d) * 3.0,
        d if d >= -80 => 20.0 - f64::from(80 + d) * 2.0,
        d if d >= -90 => 5.0 - f64::from(90 + d) * 0.5,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_2_4ghz_band() {
        assert!((frequency_from_channel(1) - 2.412).abs() < 1e-9);
        assert!((frequency_from_channel(6) - 2.437).abs() < 1e-9);
        assert!((frequency_from_channel(14) - 2.477).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_2_4ghz_monotonic_spacing() {
        for ch in 2u16..=14 {
            let step = frequency_from_channel(ch) - frequency_from_channel(ch - 1);
            assert!((step - 0.005).abs() < 1e-9, "channel {ch} spacing");
        }
    }

    #[test]
    fn test_frequency_5ghz_band() {
        assert!((frequency_from_channel(36) - 5.18).abs() < 1e-9);
        assert!((frequency_from_channel(100) - 5.5).abs() < 1e-9);
        assert!((frequency_from_channel(165) - 5.825).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_unknown_band() {
        assert_eq!(frequency_from_channel(0), 0.0);
        assert_eq!(frequency_from_channel(15), 0.0);
        assert_eq!(frequency_from_channel(35), 0.0);
        assert_eq!(frequency_from_channel(166), 0.0);
        assert_eq!(frequency_from_channel(1000), 0.0);
    }

    #[test]
    fn test_quality_strong_signal() {
        assert_eq!(link_quality_from_signal(0), 100.0);
        assert_eq!(link_quality_from_signal(-30), 100.0);
    }

    #[test]
    fn test_quality_mid_branches() {
        // -67..-30: 100 - (67 + d) * 1.5
        assert_eq!(link_quality_from_signal(-31), 46.0);
        assert_eq!(link_quality_from_signal(-40), 59.5);
        assert_eq!(link_quality_from_signal(-67), 100.0);
        // -70..-67: 50 - (70 + d) * 3
        assert_eq!(link_quality_from_signal(-68), 44.0);
        assert_eq!(link_quality_from_signal(-70), 50.0);
        // -80..-70: 20 - (80 + d) * 2
        assert_eq!(link_quality_from_signal(-71), 2.0);
        assert_eq!(link_quality_from_signal(-80), 20.0);
        // -90..-80: 5 - (90 + d) * 0.5
        assert_eq!(link_quality_from_signal(-81), 0.5);
        assert_eq!(link_quality_from_signal(-90), 5.0);
    }

    #[test]
    fn test_quality_floor() {
        // -90 is the last value served by the bottom linear branch; one dBm
        // below it falls off the curve entirely.
        assert_eq!(link_quality_from_signal(-90), 5.0);
        assert_eq!(link_quality_from_signal(-91), 0.0);
        assert_eq!(link_quality_from_signal(-100), 0.0);
        assert_eq!(link_quality_from_signal(i32::MIN), 0.0);
    }
}
