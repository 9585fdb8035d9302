//! End-to-end tests over the public parsing and storage API.
//!
//! These exercise the same flow the orchestrator drives: raw tool text in,
//! canonical records out, batch into the store, history back out by
//! time window.

use std::time::Duration;

use chrono::Utc;
use hotspot::store::{AccessPointStore, MemoryStore};
use hotspot::{DetectorRegistry, ScanError, UNKNOWN_MAC, iwlist, netsh};

#[test]
fn iwlist_single_cell_end_to_end() {
    let raw = "Cell 01 - Address: AA:BB:CC:DD:EE:FF\n\
               ESSID:\"TestNet\"\n\
               Quality=70/70  Signal level=-40 dBm\n\
               Channel:6\n";

    let records = iwlist::parse_scan(raw, Utc::now());
    assert_eq!(records.len(), 1);

    let ap = &records[0];
    assert_eq!(ap.mac_address, "AA:BB:CC:DD:EE:FF");
    assert_eq!(ap.ssid.as_deref(), Some("TestNet"));
    assert_eq!(ap.link_quality, 100.0);
    assert_eq!(ap.signal_level, -40);
    assert_eq!(ap.channel, 6);
    assert!((ap.frequency_ghz - 2.437).abs() < 1e-9);
    assert_eq!(ap.beacon_interval_ms, 100);
    assert_eq!(ap.security_version, "Unknown");
}

#[test]
fn one_malformed_line_never_loses_the_batch() {
    let raw = "Cell 01 - Address: AA:BB:CC:DD:EE:FF\n\
               ESSID:\"Good\"\n\
               Channel:6\n\
               Cell 02 - Address: 11:22:33:44:55:66\n\
               ESSID:\"Partial\"\n\
               Channel:twelve\n\
               Quality=not/numbers  Signal level=?? dBm\n";

    let records = iwlist::parse_scan(raw, Utc::now());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].channel, 6);
    // malformed numerics leave defaults, the record itself survives
    assert_eq!(records[1].channel, 0);
    assert_eq!(records[1].signal_level, 0);
    assert_eq!(records[1].link_quality, 0.0);
}

#[test]
fn saved_profiles_degrade_to_minimal_records() {
    let raw = "User profiles\n\
               -------------\n\
               All User Profile     : HomeNet\n\
               All User Profile     : CoffeeShop\n";

    let names = netsh::parse_profiles(raw);
    let records = netsh::profiles_to_records(&names, Utc::now());

    assert_eq!(records.len(), 2);
    for ap in &records {
        assert_eq!(ap.mac_address, UNKNOWN_MAC);
        assert_eq!(ap.signal_level, -100);
        assert_eq!(ap.link_quality, 0.0);
        assert_eq!(ap.channel, 0);
    }
}

#[test]
fn registry_is_deterministic_per_platform() {
    let linux = DetectorRegistry::with_platform("linux");
    let windows = DetectorRegistry::with_platform("windows");

    for _ in 0..3 {
        assert_eq!(
            linux.select().expect("supported").name(),
            "Linux Wi-Fi detector (iwlist)"
        );
        assert_eq!(
            windows.select().expect("supported").name(),
            "Windows Wi-Fi detector (netsh)"
        );
    }

    let none = DetectorRegistry::with_platform("haiku");
    assert!(matches!(
        none.select().err().expect("no detector"),
        ScanError::NoSupportedDetector { .. }
    ));
}

#[tokio::test]
async fn parsed_batch_round_trips_through_store() {
    let raw = "Cell 01 - Address: AA:BB:CC:DD:EE:FF\n\
               ESSID:\"StoredNet\"\n\
               Quality=70/70  Signal level=-40 dBm\n\
               Channel:6\n";
    let records = iwlist::parse_scan(raw, Utc::now());

    let store = MemoryStore::new();
    let stored = store.save_all(records.clone()).await.expect("save");
    assert_eq!(stored.len(), 1);

    let latest = store
        .find_latest(Duration::from_secs(300))
        .await
        .expect("query");
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].record, records[0]);

    let period = store
        .find_by_period(stored[0].scan_time, stored[0].scan_time)
        .await
        .expect("query");
    assert_eq!(period.len(), 1);
}
