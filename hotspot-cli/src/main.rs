//! Terminal frontend for Wi-Fi access point monitoring.
//!
//! Wraps the `hotspot` engine in a small CLI: `scan` runs a single
//! detection cycle and prints it, `watch` keeps scanning on an interval,
//! stores the history in memory, and redraws the most recent window after
//! each cycle.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{error, info};

use hotspot::store::{AccessPointStore, MemoryStore, StoredAccessPoint};
use hotspot::{AccessPoint, HotspotDetector, ScanConfig};

#[derive(Parser)]
#[command(name = "hotspot-cli")]
#[command(version, about = "Wi-Fi access point detector and monitor")]
struct Cli {
    /// Seconds between scan cycles in watch mode.
    #[arg(long, default_value_t = 60)]
    interval: u64,

    /// Seconds before a scan tool invocation is killed.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Minutes of history shown by the watch view.
    #[arg(long, default_value_t = 5)]
    window: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one scan cycle and print the detected access points.
    Scan,
    /// Scan periodically, keeping an in-memory history of observations.
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ScanConfig {
        command_timeout: Duration::from_secs(cli.timeout),
        scan_interval: Duration::from_secs(cli.interval),
        latest_window: Duration::from_secs(cli.window * 60),
    };

    let detector = HotspotDetector::new(config.clone());
    info!(
        "using {}",
        detector.detector_name().context("selecting a detector")?
    );

    match cli.command {
        Command::Scan => {
            let records = detector.run_cycle().await.context("scan cycle")?;
            print_batch(&records);
        }
        Command::Watch => watch(&detector, &config).await?,
    }

    Ok(())
}

async fn watch(detector: &HotspotDetector, config: &ScanConfig) -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let mut ticker = tokio::time::interval(config.scan_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    println!(
        "Scanning every {}s, showing the last {} minutes. Ctrl-C to stop.",
        config.scan_interval.as_secs(),
        config.latest_window.as_secs() / 60
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nStopping.");
                return Ok(());
            }
            _ = ticker.tick() => {
                // A failed cycle is reported and the next one still runs.
                match detector.run_cycle().await {
                    Ok(records) => {
                        store.save_all(records).await.context("storing batch")?;
                        let latest = store
                            .find_latest(config.latest_window)
                            .await
                            .context("querying history")?;
                        print_history(&latest);
                    }
                    Err(e) => error!("scan cycle failed: {e}"),
                }
            }
        }
    }
}

fn print_batch(records: &[AccessPoint]) {
    if records.is_empty() {
        println!("No access points observed.");
        return;
    }
    print_header();
    for ap in records {
        print_row(ap);
    }
}

fn print_history(rows: &[StoredAccessPoint]) {
    println!(
        "\n=== Access points at {} ===",
        chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
    );
    if rows.is_empty() {
        println!("No access points in the window yet.");
        return;
    }
    print_header();
    for row in rows {
        print_row(&row.record);
    }
}

fn print_header() {
    println!(
        "{:<24} {:<18} {:>8} {:>8} {:>5} {:>8}  {}",
        "SSID", "MAC", "Quality", "Signal", "Ch", "GHz", "Security"
    );
}

fn print_row(ap: &AccessPoint) {
    println!(
        "{:<24} {:<18} {:>7.1}% {:>5} dBm {:>5} {:>8.3}  {}",
        ap.ssid.as_deref().unwrap_or("<hidden>"),
        ap.mac_address,
        ap.link_quality,
        ap.signal_level,
        ap.channel,
        ap.frequency_ghz,
        ap.security_version
    );
}
