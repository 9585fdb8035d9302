//! Parser for `netsh wlan` output.
//!
//! Two grammars live here. `show interfaces` yields one block per wireless
//! interface, keyed on a `Name:`/`Nome:` line, reporting the currently
//! associated network. `show profiles` only lists saved network names;
//! those feed the degraded extraction mode that still produces a minimal
//! record per name when no interface block parsed.
//!
//! netsh localizes every label, so each field carries an enumerated
//! synonym table covering at least the English and Portuguese variants.

use chrono::{DateTime, Utc};

use crate::builder::{ApBuilder, degraded_record};
use crate::models::AccessPoint;
use crate::utils::{first_int, first_mac, has_any_label, value_after_colon};

const NAME_LABELS: &[&str] = &["Name", "Nome"];
const SSID_LABEL: &str = "SSID";
const BSSID_LABELS: &[&str] = &["BSSID", "MAC"];
const SIGNAL_LABELS: &[&str] = &["Signal", "Sinal"];
const CHANNEL_LABELS: &[&str] = &["Channel", "Canal"];
const SECURITY_LABELS: &[&str] = &[
    "Network type",
    "Tipo de rede",
    "Authentication",
    "Autenticação",
];
const PROFILE_LABELS: &[&str] = &["All User Profile", "Perfil de Todos os Usuários"];

/// Parses `netsh wlan show interfaces` output into ordered records.
pub fn parse_interfaces(text: &str, now: DateTime<Utc>) -> Vec<AccessPoint> {
    let mut records = Vec::new();
    let mut current: Option<ApBuilder> = None;

    for raw in text.lines() {
        let line = raw.trim();

        if is_interface_boundary(line) {
            if let Some(done) = current.take() {
                records.push(done.finish(now));
            }
            current = Some(ApBuilder::default());
            continue;
        }

        if let Some(ap) = current.as_mut() {
            parse_interface_line(line, ap);
        }
    }

    if let Some(done) = current.take() {
        records.push(done.finish(now));
    }

    records
}

/// A block starts on a `Name : <iface>` line (localized variants included).
fn is_interface_boundary(line: &str) -> bool {
    NAME_LABELS.iter().any(|label| {
        line.strip_prefix(label)
            .map(|rest| rest.trim_start().starts_with(':'))
            .unwrap_or(false)
    })
}

fn parse_interface_line(line: &str, ap: &mut ApBuilder) {
    if line.contains(SSID_LABEL) && !has_any_label(line, BSSID_LABELS) {
        if let Some(ssid) = value_after_colon(line) {
            if !ssid.is_empty() {
                ap.ssid = Some(ssid.to_string());
            }
        }
        return;
    }

    if has_any_label(line, BSSID_LABELS) {
        if let Some(mac) = first_mac(line) {
            ap.mac_address = Some(mac);
        }
        return;
    }

    if has_any_label(line, SIGNAL_LABELS) {
        if let Some(value) = value_after_colon(line) {
            if let Some(level) = first_int(value) {
                ap.signal_level = level as i32;
            }
        }
        return;
    }

    if has_any_label(line, CHANNEL_LABELS) {
        if let Some(value) = value_after_colon(line) {
            if let Some(channel) = first_int(value) {
                if (0..=u16::MAX as i64).contains(&channel) {
                    ap.channel = channel as u16;
                }
            }
        }
        return;
    }

    if has_any_label(line, SECURITY_LABELS) {
        if let Some(security) = value_after_colon(line) {
            if !security.is_empty() {
                ap.security_version = Some(security.to_string());
            }
        }
    }
}

/// Extracts distinct saved-profile names from `netsh wlan show profiles`.
pub fn parse_profiles(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if !has_any_label(line, PROFILE_LABELS) {
            continue;
        }
        if let Some(name) = value_after_colon(line) {
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Degraded mode: one minimal record per known profile name.
pub fn profiles_to_records(names: &[String], now: DateTime<Utc>) -> Vec<AccessPoint> {
    names
        .iter()
        .map(|name| degraded_record(name.clone(), now))
        .collect()
}
