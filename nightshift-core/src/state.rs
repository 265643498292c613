//! Blue light status snapshot.
//!
//! These types mirror the C layout CoreBrightness fills in through
//! `-[CBBlueLightClient getBlueLightStatus:]`, so they are `#[repr(C)]` and
//! must not be reordered.

/// An Objective-C `BOOL` as stored inside framework structs.
///
/// `BOOL` is a `signed char` on Intel and a C `bool` on Apple silicon; both
/// are one byte wide, so the raw byte is kept and read as "non-zero is true".
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjcBool(i8);

impl ObjcBool {
    /// The `YES` value.
    pub const YES: Self = Self(1);
    /// The `NO` value.
    pub const NO: Self = Self(0);

    /// Interpret the raw byte as a Rust `bool`.
    pub fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for ObjcBool {
    fn from(value: bool) -> Self {
        if value { Self::YES } else { Self::NO }
    }
}

impl From<ObjcBool> for bool {
    fn from(value: ObjcBool) -> Self {
        value.as_bool()
    }
}

/// A wall-clock time of day used by custom schedules.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleTime {
    /// Hour (0-23).
    pub hour: i32,
    /// Minute (0-59).
    pub minute: i32,
}

impl ScheduleTime {
    /// Create a time of day.
    pub const fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }
}

/// The custom schedule range configured in System Settings.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schedule {
    /// When Night Shift turns on.
    pub from_time: ScheduleTime,
    /// When Night Shift turns off.
    pub to_time: ScheduleTime,
}

/// A snapshot of the blue light reduction state.
///
/// Obtain one with [`NightShift::status`](crate::NightShift::status).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlueLightStatus {
    /// Whether the warm color shift is currently applied.
    pub active: ObjcBool,
    /// Whether Night Shift is switched on.
    pub enabled: ObjcBool,
    /// Whether location services allow the sunset schedule.
    pub sun_schedule_permitted: ObjcBool,
    /// Schedule mode code (0=Off, 1=Sunset to Sunrise, 2=Custom).
    pub mode: i32,
    /// Custom schedule range, meaningful when `mode` is 2.
    pub schedule: Schedule,
    /// Reasons the framework is holding the feature off.
    pub disable_flags: u64,
    /// Whether the feature is available on the current display.
    pub available: ObjcBool,
}

impl BlueLightStatus {
    /// Whether Night Shift is switched on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.as_bool()
    }
}
