//! Night Shift schedule descriptor.

use crate::state::{BlueLightStatus, Schedule};
use std::fmt;

/// The activation schedule the OS has configured for Night Shift.
///
/// This is read-only: the tool never changes the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleInfo {
    /// Manual control only (mode 0).
    Off,
    /// Follows local sunset and sunrise (mode 1).
    SunsetToSunrise,
    /// A fixed time range (mode 2).
    Custom {
        /// Hour the range starts.
        from_hour: i32,
        /// Minute the range starts.
        from_minute: i32,
        /// Hour the range ends.
        to_hour: i32,
        /// Minute the range ends.
        to_minute: i32,
    },
    /// A mode code this tool does not recognize.
    Unknown(i32),
}

impl ScheduleInfo {
    /// Map a framework mode code and range to a schedule.
    ///
    /// Unrecognized codes are kept as [`ScheduleInfo::Unknown`] rather than
    /// treated as errors, so newer OS releases still produce output.
    pub fn from_mode(mode: i32, schedule: &Schedule) -> Self {
        match mode {
            0 => Self::Off,
            1 => Self::SunsetToSunrise,
            2 => Self::Custom {
                from_hour: schedule.from_time.hour,
                from_minute: schedule.from_time.minute,
                to_hour: schedule.to_time.hour,
                to_minute: schedule.to_time.minute,
            },
            other => Self::Unknown(other),
        }
    }

    /// Extract the schedule from a status snapshot.
    pub fn from_status(status: &BlueLightStatus) -> Self {
        Self::from_mode(status.mode, &status.schedule)
    }
}

impl fmt::Display for ScheduleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::SunsetToSunrise => f.write_str("Sunset to Sunrise"),
            Self::Custom {
                from_hour,
                from_minute,
                to_hour,
                to_minute,
            } => write!(
                f,
                "Custom ({}:{:02} to {}:{:02})",
                from_hour, from_minute, to_hour, to_minute
            ),
            Self::Unknown(_) => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScheduleTime;

    fn night_range() -> Schedule {
        Schedule {
            from_time: ScheduleTime::new(22, 0),
            to_time: ScheduleTime::new(7, 0),
        }
    }

    #[test]
    fn test_known_mode_codes() {
        assert_eq!(ScheduleInfo::from_mode(0, &night_range()), ScheduleInfo::Off);
        assert_eq!(
            ScheduleInfo::from_mode(1, &night_range()),
            ScheduleInfo::SunsetToSunrise
        );
        assert_eq!(
            ScheduleInfo::from_mode(2, &night_range()),
            ScheduleInfo::Custom {
                from_hour: 22,
                from_minute: 0,
                to_hour: 7,
                to_minute: 0,
            }
        );
    }

    #[test]
    fn test_unknown_mode_code_is_kept() {
        assert_eq!(
            ScheduleInfo::from_mode(3, &night_range()),
            ScheduleInfo::Unknown(3)
        );
        assert_eq!(
            ScheduleInfo::from_mode(-1, &Schedule::default()),
            ScheduleInfo::Unknown(-1)
        );
    }

    #[test]
    fn test_range_ignored_outside_custom_mode() {
        let status = BlueLightStatus {
            mode: 1,
            schedule: night_range(),
            ..Default::default()
        };
        assert_eq!(
            ScheduleInfo::from_status(&status),
            ScheduleInfo::SunsetToSunrise
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ScheduleInfo::Off.to_string(), "OFF");
        assert_eq!(
            ScheduleInfo::SunsetToSunrise.to_string(),
            "Sunset to Sunrise"
        );
        assert_eq!(
            ScheduleInfo::from_mode(2, &night_range()).to_string(),
            "Custom (22:00 to 7:00)"
        );
        let odd = Schedule {
            from_time: ScheduleTime::new(21, 5),
            to_time: ScheduleTime::new(6, 45),
        };
        assert_eq!(
            ScheduleInfo::from_mode(2, &odd).to_string(),
            "Custom (21:05 to 6:45)"
        );
        assert_eq!(ScheduleInfo::Unknown(9).to_string(), "Unknown");
    }
}
