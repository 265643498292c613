//! Night Shift controller implementation.

use crate::error::ControllerError;
use crate::schedule::ScheduleInfo;
use crate::state::BlueLightStatus;

use log::{debug, info, warn};

// =============================================================================
// Blue Light Client Trait
// =============================================================================

/// The platform binding for blue light reduction.
///
/// This is the narrow surface CoreBrightness exposes. It allows mock
/// implementations in tests.
pub trait BlueLightClient {
    /// Whether this machine and OS version support Night Shift.
    fn supports_blue_light_reduction(&self) -> bool;

    /// Read the current status, or `None` if the framework reports failure.
    fn get_blue_light_status(&self) -> Option<BlueLightStatus>;

    /// Switch Night Shift on or off, returning the framework's success flag.
    fn set_enabled(&self, enabled: bool) -> bool;
}

impl<C: BlueLightClient + ?Sized> BlueLightClient for &C {
    fn supports_blue_light_reduction(&self) -> bool {
        (**self).supports_blue_light_reduction()
    }

    fn get_blue_light_status(&self) -> Option<BlueLightStatus> {
        (**self).get_blue_light_status()
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        (**self).set_enabled(enabled)
    }
}

impl<C: BlueLightClient + ?Sized> BlueLightClient for Box<C> {
    fn supports_blue_light_reduction(&self) -> bool {
        (**self).supports_blue_light_reduction()
    }

    fn get_blue_light_status(&self) -> Option<BlueLightStatus> {
        (**self).get_blue_light_status()
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        (**self).set_enabled(enabled)
    }
}

// =============================================================================
// NightShift
// =============================================================================

/// Result of a successful [`NightShift::set_enabled`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The state was different and one write was issued.
    Changed,
    /// The state already matched; nothing was written.
    AlreadySet,
}

/// The Night Shift controller.
///
/// Wraps a single [`BlueLightClient`] and never caches state: every query
/// goes back to the client.
///
/// # Example
///
/// ```
/// use nightshift_core::{MockBlueLightClient, NightShift};
///
/// let night_shift = NightShift::new(MockBlueLightClient::new());
/// assert!(night_shift.toggle()?);
/// assert!(night_shift.is_enabled());
/// # Ok::<(), nightshift_core::ControllerError>(())
/// ```
#[derive(Debug)]
pub struct NightShift<C> {
    client: C,
}

impl<C: BlueLightClient> NightShift<C> {
    /// Create a controller around an already constructed client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Borrow the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Consume the controller and return the client.
    pub fn into_client(self) -> C {
        self.client
    }

    /// Whether Night Shift is available on this machine.
    pub fn is_supported(&self) -> bool {
        self.client.supports_blue_light_reduction()
    }

    /// Whether Night Shift is currently on.
    ///
    /// A failed status read is reported as `false`. Use [`status`](Self::status)
    /// to tell the two apart.
    pub fn is_enabled(&self) -> bool {
        match self.client.get_blue_light_status() {
            Some(status) => status.is_enabled(),
            None => {
                warn!("blue light status read failed, assuming off");
                false
            }
        }
    }

    /// Read the full status snapshot.
    ///
    /// # Errors
    ///
    /// [`ControllerError::StatusUnavailable`] if the framework reports failure.
    pub fn status(&self) -> Result<BlueLightStatus, ControllerError> {
        self.client
            .get_blue_light_status()
            .ok_or(ControllerError::StatusUnavailable)
    }

    /// Read the configured schedule, or `None` if the status read fails.
    pub fn schedule(&self) -> Option<ScheduleInfo> {
        let status = self.client.get_blue_light_status()?;
        let schedule = ScheduleInfo::from_status(&status);
        debug!("schedule mode {} -> {:?}", status.mode, schedule);
        Some(schedule)
    }

    /// Switch Night Shift to `target`.
    ///
    /// Does nothing if the state already matches.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Unsupported`] if Night Shift is unavailable; no
    /// write is attempted in that case.
    pub fn set_enabled(&self, target: bool) -> Result<SetOutcome, ControllerError> {
        self.ensure_supported()?;

        let current = self.is_enabled();
        if current == target {
            debug!("already {}, skipping write", on_off(target));
            return Ok(SetOutcome::AlreadySet);
        }

        self.write(target);
        Ok(SetOutcome::Changed)
    }

    /// Flip Night Shift and return the new state.
    ///
    /// Not atomic with respect to changes made elsewhere between the read and
    /// the write.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Unsupported`] if Night Shift is unavailable.
    pub fn toggle(&self) -> Result<bool, ControllerError> {
        self.ensure_supported()?;

        let target = !self.is_enabled();
        self.write(target);
        Ok(target)
    }

    fn ensure_supported(&self) -> Result<(), ControllerError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(ControllerError::Unsupported)
        }
    }

    fn write(&self, enabled: bool) {
        info!("switching night shift {}", on_off(enabled));
        // The framework's flag is not a reliable failure signal.
        if !self.client.set_enabled(enabled) {
            warn!("setEnabled:{} returned NO", enabled);
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

// =============================================================================
// System Client
// =============================================================================

/// Connect to the system Night Shift client.
///
/// On macOS this loads CoreBrightness and creates the one
/// [`CoreBrightnessClient`](crate::CoreBrightnessClient) the process may hold.
/// On other platforms it always fails with [`ControllerError::Unsupported`].
///
/// # Errors
///
/// Any error from creating the platform client.
pub fn connect() -> Result<NightShift<Box<dyn BlueLightClient>>, ControllerError> {
    #[cfg(target_os = "macos")]
    {
        let client: Box<dyn BlueLightClient> = Box::new(crate::CoreBrightnessClient::new()?);
        Ok(NightShift::new(client))
    }

    #[cfg(not(target_os = "macos"))]
    {
        debug!("CoreBrightness is only available on macOS");
        Err(ControllerError::Unsupported)
    }
}
