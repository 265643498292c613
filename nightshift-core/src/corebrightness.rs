//! CoreBrightness-backed blue light client (macOS only).

use crate::controller::BlueLightClient;
use crate::error::ControllerError;
use crate::state::BlueLightStatus;

use libloading::Library;
use log::{debug, trace};
use objc::runtime::{BOOL, Class, NO, Object, YES};
use objc::{msg_send, sel, sel_impl};
use std::sync::atomic::{AtomicBool, Ordering};

const FRAMEWORK_PATH: &str =
    "/System/Library/PrivateFrameworks/CoreBrightness.framework/CoreBrightness";
const CLIENT_CLASS: &str = "CBBlueLightClient";

/// Guard to ensure only one client instance exists at a time.
static INSTANCE_EXISTS: AtomicBool = AtomicBool::new(false);

/// Blue light client backed by the private CoreBrightness framework.
///
/// Holds one `CBBlueLightClient` instance and keeps the framework loaded for
/// its lifetime.
///
/// # Example
///
/// ```no_run
/// use nightshift_core::{CoreBrightnessClient, NightShift};
///
/// let night_shift = NightShift::new(CoreBrightnessClient::new()?);
/// println!("enabled: {}", night_shift.is_enabled());
/// # Ok::<(), nightshift_core::ControllerError>(())
/// ```
///
/// # Limitations
///
/// Only one instance can exist at a time.
pub struct CoreBrightnessClient {
    _framework: Library,
    client: *mut Object,
}

impl CoreBrightnessClient {
    /// Load CoreBrightness and create the client.
    ///
    /// The instance guard is released when the client is dropped.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::AlreadyInitialized`] if another instance already exists
    /// - [`ControllerError::FrameworkLoad`] if the framework fails to load
    /// - [`ControllerError::ClassNotFound`] if `CBBlueLightClient` is missing
    /// - [`ControllerError::ClientInitFailed`] if `+new` returns nil
    pub fn new() -> Result<Self, ControllerError> {
        if INSTANCE_EXISTS.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::AlreadyInitialized);
        }

        match Self::init_internal() {
            Ok(client) => Ok(client),
            Err(e) => {
                INSTANCE_EXISTS.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    fn init_internal() -> Result<Self, ControllerError> {
        // Loading the image registers its Objective-C classes with the runtime.
        let framework = unsafe { Library::new(FRAMEWORK_PATH)? };
        debug!("loaded {}", FRAMEWORK_PATH);

        let class = Self::class()?;
        let client: *mut Object = unsafe { msg_send![class, new] };
        if client.is_null() {
            return Err(ControllerError::ClientInitFailed);
        }

        Ok(Self {
            _framework: framework,
            client,
        })
    }

    fn class() -> Result<&'static Class, ControllerError> {
        Class::get(CLIENT_CLASS).ok_or(ControllerError::ClassNotFound(CLIENT_CLASS))
    }
}

impl BlueLightClient for CoreBrightnessClient {
    fn supports_blue_light_reduction(&self) -> bool {
        let Ok(class) = Self::class() else {
            return false;
        };
        let supported: BOOL = unsafe { msg_send![class, supportsBlueLightReduction] };
        trace!("supportsBlueLightReduction -> {}", supported == YES);
        supported == YES
    }

    fn get_blue_light_status(&self) -> Option<BlueLightStatus> {
        let mut status = BlueLightStatus::default();
        let ok: BOOL = unsafe {
            msg_send![self.client, getBlueLightStatus: &mut status as *mut BlueLightStatus]
        };
        trace!("getBlueLightStatus: -> {}, {:?}", ok == YES, status);
        if ok == YES { Some(status) } else { None }
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        let flag: BOOL = if enabled { YES } else { NO };
        let ok: BOOL = unsafe { msg_send![self.client, setEnabled: flag] };
        trace!("setEnabled:{} -> {}", enabled, ok == YES);
        ok == YES
    }
}

impl Drop for CoreBrightnessClient {
    fn drop(&mut self) {
        unsafe {
            let _: () = msg_send![self.client, release];
        }
        INSTANCE_EXISTS.store(false, Ordering::SeqCst);
    }
}
