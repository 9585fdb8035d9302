//! Priority-ordered detector selection.
//!
//! The registry owns one detector per supported platform and hands out
//! the first whose support predicate matches the host. Selection is
//! deterministic and free of side effects; the same registry answers the
//! same way on every call.

use log::debug;

use crate::Result;
use crate::detector::{Detector, LinuxDetector, WindowsDetector};
use crate::models::ScanError;

/// Static registry of the available platform detectors.
pub struct DetectorRegistry {
    platform: String,
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorRegistry {
    /// Registry for the running host, identified by `std::env::consts::OS`.
    pub fn new() -> Self {
        Self::with_platform(std::env::consts::OS)
    }

    /// Registry for an explicit platform identifier (tests, diagnostics).
    pub fn with_platform(platform: &str) -> Self {
        Self {
            platform: platform.to_string(),
            detectors: vec![
                Box::new(WindowsDetector::with_platform(platform)),
                Box::new(LinuxDetector::with_platform(platform)),
            ],
        }
    }

    /// Returns the first detector supporting the platform.
    ///
    /// # Errors
    ///
    /// `ScanError::NoSupportedDetector` when no predicate matches.
    pub fn select(&self) -> Result<&dyn Detector> {
        match self.detectors.iter().find(|d| d.is_supported()) {
            Some(detector) => {
                debug!("selected detector: {}", detector.name());
                Ok(detector.as_ref())
            }
            None => Err(ScanError::NoSupportedDetector {
                platform: self.platform.clone(),
            }),
        }
    }

    /// The platform identifier this registry was built for.
    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
