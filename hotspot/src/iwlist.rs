//! Parser for `iwlist <iface> scan` output.
//!
//! The block grammar keys on `Cell NN - Address: <mac>` boundary lines;
//! every line until the next boundary is matched against a fixed set of
//! label synonyms. Unrecognized lines are skipped, malformed values keep
//! the field's default, and a trailing in-progress record is finalized at
//! end of input.

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::builder::{ApBuilder, degraded_record};
use crate::models::AccessPoint;
use crate::utils::{
    after_label, first_float, first_int, first_mac, fraction_percent, has_any_label, quoted_value,
};

// Label synonyms recognized per field. iwlist output is mostly stable
// English, but localized builds translate some labels, so Portuguese
// variants are accepted alongside.
const CELL_LABELS: &[&str] = &["Cell", "Célula"];
const ADDRESS_LABELS: &[&str] = &["Address:", "Endereço:"];
const ESSID_LABELS: &[&str] = &["ESSID:", "SSID:"];
const QUALITY_LABELS: &[&str] = &["Quality=", "Quality:", "Qualidade="];
const SIGNAL_LABELS: &[&str] = &["Signal level=", "Signal level:", "Nível de sinal="];
const CHANNEL_LABELS: &[&str] = &["Channel:", "Canal:"];
const FREQUENCY_LABELS: &[&str] = &["Frequency:", "Frequência:"];
const ENCRYPTION_LABELS: &[&str] = &["Encryption key:", "Chave de criptografia:"];
const LAST_BEACON_LABELS: &[&str] = &["Last beacon:", "Último beacon:"];
const WPA2_IE_MARKER: &str = "IE: IEEE 802.11i/WPA2";
const WPA_IE_MARKER: &str = "IE: WPA";

/// Parses one full `iwlist scan` invocation into ordered records.
///
/// Falls back to degraded extraction (one minimal record per distinct
/// ESSID) when no cell block was recognized at all.
pub fn parse_scan(text: &str, now: DateTime<Utc>) -> Vec<AccessPoint> {
    let mut records = Vec::new();
    let mut current: Option<ApBuilder> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if is_cell_boundary(line) {
            if let Some(done) = current.take() {
                records.push(done.finish(now));
            }
            current = Some(ApBuilder {
                mac_address: first_mac(line),
                ..Default::default()
            });
            continue;
        }

        if let Some(ap) = current.as_mut() {
            parse_cell_line(line, ap, now);
        }
    }

    if let Some(done) = current.take() {
        records.push(done.finish(now));
    }

    if records.is_empty() {
        let fallback = degraded_from_names(text, now);
        if !fallback.is_empty() {
            debug!(
                "no cell blocks recognized, degraded extraction produced {} records",
                fallback.len()
            );
        }
        return fallback;
    }

    records
}

fn is_cell_boundary(line: &str) -> bool {
    has_any_label(line, CELL_LABELS) && has_any_label(line, ADDRESS_LABELS)
}

fn parse_cell_line(line: &str, ap: &mut ApBuilder, now: DateTime<Utc>) {
    if has_any_label(line, ESSID_LABELS) {
        if let Some(ssid) = quoted_value(line) {
            if !ssid.is_empty() {
                ap.ssid = Some(ssid.to_string());
            }
        }
        return;
    }

    // Quality and signal level usually share a line.
    if has_any_label(line, QUALITY_LABELS) || has_any_label(line, SIGNAL_LABELS) {
        if let Some(rest) = after_label(line, QUALITY_LABELS) {
            if let Some(percent) = fraction_percent(rest) {
                ap.link_quality = percent;
            }
        }
        if let Some(rest) = after_label(line, SIGNAL_LABELS) {
            if let Some(dbm) = first_int(rest) {
                ap.signal_level = dbm as i32;
            }
        }
        return;
    }

    if let Some(rest) = after_label(line, CHANNEL_LABELS) {
        if let Some(channel) = first_int(rest) {
            if (0..=u16::MAX as i64).contains(&channel) {
                ap.channel = channel as u16;
            }
        }
        return;
    }

    if let Some(rest) = after_label(line, FREQUENCY_LABELS) {
        if let Some(ghz) = first_float(rest) {
            ap.frequency_ghz = ghz;
        }
        // Frequency lines often carry the channel too: `2.437 GHz (Channel 6)`
        if ap.channel == 0 {
            if let Some(idx) = rest.find("Channel").or_else(|| rest.find("Canal")) {
                if let Some(channel) = first_int(&rest[idx..]) {
                    if (0..=u16::MAX as i64).contains(&channel) {
                        ap.channel = channel as u16;
                    }
                }
            }
        }
        return;
    }

    // The WPA2 marker must be checked before the plain WPA one.
    if line.contains(WPA2_IE_MARKER) {
        ap.security_version = Some("WPA2".to_string());
        return;
    }
    if line.contains(WPA_IE_MARKER) {
        ap.security_version = Some("WPA".to_string());
        return;
    }

    if let Some(rest) = after_label(line, ENCRYPTION_LABELS) {
        // `Encryption key:on` means at least WEP; WPA/WPA2 IE lines that
        // follow refine this.
        ap.security_version = Some(if rest.contains("on") { "WEP" } else { "Open" }.to_string());
        return;
    }

    if let Some(rest) = after_label(line, LAST_BEACON_LABELS) {
        // e.g. `Extra: Last beacon: 1408ms ago`
        if let Some(ms) = first_int(rest) {
            if ms >= 0 {
                ap.last_beacon_time = Some(now - Duration::milliseconds(ms));
            }
        }
    }
}

/// Degraded mode: one minimal record per distinct quoted ESSID.
fn degraded_from_names(text: &str, now: DateTime<Utc>) -> Vec<AccessPoint> {
    let mut names: Vec<String> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if !has_any_label(line, ESSID_LABELS) {
            continue;
        }
        if let Some(name) = quoted_value(line) {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
        .into_iter()
        .map(|name| degraded_record(name, now))
        .collect()
}
