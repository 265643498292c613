//! Mock blue light client for testing.

use crate::controller::BlueLightClient;
use crate::state::{BlueLightStatus, ObjcBool};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A mock blue light client for testing.
///
/// This allows testing code that depends on [`BlueLightClient`] without a Mac
/// or the CoreBrightness framework. Writes are counted so tests can check
/// that no-op operations really skip the framework.
///
/// # Example
///
/// ```
/// use nightshift_core::{MockBlueLightClient, NightShift};
///
/// let mock = MockBlueLightClient::new();
/// let night_shift = NightShift::new(&mock);
/// night_shift.set_enabled(true).unwrap();
/// assert!(mock.get_status().is_enabled());
/// assert_eq!(mock.writes(), 1);
/// ```
pub struct MockBlueLightClient {
    supported: bool,
    fail_reads: AtomicBool,
    writes: AtomicUsize,
    status: Mutex<BlueLightStatus>,
}

impl MockBlueLightClient {
    /// Create a supported mock with Night Shift off and no schedule.
    pub fn new() -> Self {
        Self::with_status(BlueLightStatus {
            available: ObjcBool::YES,
            ..Default::default()
        })
    }

    /// Create a supported mock with custom initial status.
    pub fn with_status(status: BlueLightStatus) -> Self {
        Self {
            supported: true,
            fail_reads: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
            status: Mutex::new(status),
        }
    }

    /// Create a mock for a machine without Night Shift support.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    /// Make subsequent status reads fail (or succeed again).
    pub fn set_read_failure(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of `set_enabled` calls that reached the mock.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current status, bypassing read failure injection.
    pub fn get_status(&self) -> BlueLightStatus {
        *self.status.lock().unwrap()
    }

    /// Change the status as if another process had done it.
    pub fn set_status(&self, status: BlueLightStatus) {
        *self.status.lock().unwrap() = status;
    }
}

impl Default for MockBlueLightClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueLightClient for MockBlueLightClient {
    fn supports_blue_light_reduction(&self) -> bool {
        self.supported
    }

    fn get_blue_light_status(&self) -> Option<BlueLightStatus> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return None;
        }
        Some(self.get_status())
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if !self.supported {
            return false;
        }
        let mut status = self.status.lock().unwrap();
        status.enabled = enabled.into();
        status.active = enabled.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_writes() {
        let mock = MockBlueLightClient::new();
        assert!(mock.set_enabled(true));
        assert!(mock.set_enabled(true));
        assert_eq!(mock.writes(), 2);
        assert!(mock.get_status().is_enabled());
    }

    #[test]
    fn test_mock_read_failure() {
        let mock = MockBlueLightClient::new();
        mock.set_read_failure(true);
        assert!(mock.get_blue_light_status().is_none());

        mock.set_read_failure(false);
        assert!(mock.get_blue_light_status().is_some());
    }

    #[test]
    fn test_unsupported_mock_ignores_writes() {
        let mock = MockBlueLightClient::unsupported();
        assert!(!mock.supports_blue_light_reduction());
        assert!(!mock.set_enabled(true));
        assert!(!mock.get_status().is_enabled());
    }
}
