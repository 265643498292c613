//! Unofficial Rust API for macOS Night Shift control.
//!
//! This crate switches Night Shift on and off and reads its schedule through
//! the private CoreBrightness framework.
//!
//! # Requirements
//!
//! - macOS 10.12.4 or newer
//! - A Mac that supports Night Shift
//!
//! # Example
//!
//! ```no_run
//! use nightshift_core::{ControllerError, connect};
//!
//! fn main() -> Result<(), ControllerError> {
//!     // Load CoreBrightness (only one client allowed)
//!     let night_shift = connect()?;
//!
//!     println!("Night Shift enabled: {}", night_shift.is_enabled());
//!     if let Some(schedule) = night_shift.schedule() {
//!         println!("Schedule: {}", schedule);
//!     }
//!
//!     // Flip it
//!     let now_on = night_shift.toggle()?;
//!     println!("Night Shift is now {}", if now_on { "ON" } else { "OFF" });
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Use [`MockBlueLightClient`] to test code without a Mac:
//!
//! ```
//! use nightshift_core::{MockBlueLightClient, NightShift};
//!
//! let night_shift = NightShift::new(MockBlueLightClient::new());
//! night_shift.set_enabled(true).unwrap();
//! assert!(night_shift.is_enabled());
//! ```
//!
//! # Disclaimer
//!
//! This is an **unofficial** library relying on an undocumented framework.
//! It is not affiliated with or endorsed by Apple. Use at your own risk.

#![warn(missing_docs)]

mod controller;
#[cfg(target_os = "macos")]
mod corebrightness;
mod error;
mod mock;
mod schedule;
mod state;

// Re-export public API
pub use controller::{BlueLightClient, NightShift, SetOutcome, connect};
#[cfg(target_os = "macos")]
pub use corebrightness::CoreBrightnessClient;
pub use error::ControllerError;
pub use mock::MockBlueLightClient;
pub use schedule::ScheduleInfo;
pub use state::{BlueLightStatus, ObjcBool, Schedule, ScheduleTime};
