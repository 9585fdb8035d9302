//! A Rust library for detecting Wi-Fi access points with platform scan tools.
//!
//! This crate shells out to the Wi-Fi enumeration command native to the host
//! (`iwlist` on Linux, `netsh wlan` on Windows), parses the free-text output
//! into a canonical [`AccessPoint`] record, and derives any signal-quality
//! metrics the tool left out:
//!
//! - Listing visible access points with SSID, BSSID, signal and security
//! - Channel-to-frequency and dBm-to-link-quality derivation
//! - A platform registry that picks the right detector for the host
//! - A storage seam for keeping scan history queryable by time window
//!
//! # Example
//!
//! ```no_run
//! use hotspot::{HotspotDetector, ScanConfig};
//!
//! # async fn example() -> hotspot::Result<()> {
//! let detector = HotspotDetector::new(ScanConfig::default());
//!
//! for ap in detector.run_cycle().await? {
//!     println!(
//!         "{} [{}] {:.1}% on channel {}",
//!         ap.ssid.as_deref().unwrap_or("<hidden>"),
//!         ap.mac_address,
//!         ap.link_quality,
//!         ap.channel,
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ScanError>`. Cycle-level failures
//! (no detector for the platform, tool missing, tool failed, tool timed out)
//! are surfaced to the caller; a malformed line inside the tool's output is
//! never fatal and only degrades a single field of a single record.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod builder;
mod command;
mod constants;
mod utils;

// Public API modules
pub mod config;
pub mod detector;
pub mod iwlist;
pub mod models;
pub mod monitor;
pub mod netsh;
pub mod quality;
pub mod registry;
pub mod store;

// Re-exported public API
pub use config::ScanConfig;
pub use constants::defaults::UNKNOWN_MAC;
pub use detector::{Detector, LinuxDetector, ScanOptions, WindowsDetector};
pub use models::{AccessPoint, ScanError};
pub use monitor::HotspotDetector;
pub use registry::DetectorRegistry;
pub use store::{AccessPointStore, MemoryStore, StoredAccessPoint};

/// A specialized `Result` type for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
