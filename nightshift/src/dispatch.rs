//! Maps a parsed action onto the Night Shift controller and prints the result.
//!
//! Everything is written to the supplied writer; nothing here exits the
//! process or returns a controller error to the caller.

use crate::args::{CliAction, ParsedArgs};

use log::debug;
use nightshift_core::{BlueLightClient, ControllerError, NightShift, SetOutcome};
use std::io::{self, Write};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_LICENSE: &str = env!("CARGO_PKG_LICENSE");

/// Run one action.
///
/// `connect` is only called for actions that talk to Night Shift, so help,
/// version and unknown arguments work on machines without CoreBrightness.
pub fn run<C, F, W>(parsed: &ParsedArgs, connect: F, out: &mut W) -> io::Result<()>
where
    C: BlueLightClient,
    F: FnOnce() -> Result<NightShift<C>, ControllerError>,
    W: Write,
{
    match &parsed.action {
        CliAction::ShowHelp => print_help(&parsed.program, out),
        CliAction::ShowVersion => print_version(out),
        CliAction::Unknown(arg) => {
            writeln!(out, "Unknown argument: {}", arg)?;
            writeln!(out, "Use --help for usage information")
        }
        action => match connect() {
            Ok(night_shift) => run_controller(action, &night_shift, out),
            Err(e) => {
                debug!("could not create blue light client: {}", e);
                print_error(out, &ControllerError::Unsupported)
            }
        },
    }
}

fn run_controller<C, W>(
    action: &CliAction,
    night_shift: &NightShift<C>,
    out: &mut W,
) -> io::Result<()>
where
    C: BlueLightClient,
    W: Write,
{
    match action {
        CliAction::Toggle => match night_shift.toggle() {
            Ok(enabled) => writeln!(out, "Night Shift is now {}", on_off(enabled)),
            Err(e) => print_error(out, &e),
        },
        CliAction::On => set_enabled(night_shift, true, out),
        CliAction::Off => set_enabled(night_shift, false, out),
        CliAction::Status => print_status(night_shift, out),
        other => {
            debug!("{:?} does not use the controller", other);
            Ok(())
        }
    }
}

fn set_enabled<C, W>(
    night_shift: &NightShift<C>,
    target: bool,
    out: &mut W,
) -> io::Result<()>
where
    C: BlueLightClient,
    W: Write,
{
    match night_shift.set_enabled(target) {
        Ok(SetOutcome::Changed) => writeln!(out, "Night Shift is now {}", on_off(target)),
        Ok(SetOutcome::AlreadySet) => writeln!(out, "Night Shift is already {}", on_off(target)),
        Err(e) => print_error(out, &e),
    }
}

fn print_status<C, W>(night_shift: &NightShift<C>, out: &mut W) -> io::Result<()>
where
    C: BlueLightClient,
    W: Write,
{
    if !night_shift.is_supported() {
        return print_error(out, &ControllerError::Unsupported);
    }

    writeln!(
        out,
        "Night Shift is currently {}",
        on_off(night_shift.is_enabled())
    )?;

    if let Some(schedule) = night_shift.schedule() {
        writeln!(out, "Night Shift schedule: {}", schedule)?;
    }
    Ok(())
}

fn print_error<W: Write>(out: &mut W, error: &ControllerError) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}

fn print_help<W: Write>(program: &str, out: &mut W) -> io::Result<()> {
    write!(
        out,
        "\
Usage: {program} [OPTION]

Control macOS Night Shift from the command line

Options:
  on                Turn Night Shift on
  off               Turn Night Shift off
  toggle            Toggle Night Shift (default if no arguments provided)
  status            Display current Night Shift status
  -h, --help        Display this help message
  -v, --version     Display version information

Examples:
  {program}           # Toggle Night Shift on/off
  {program} on        # Turn Night Shift on
  {program} off       # Turn Night Shift off
  {program} status    # Show current Night Shift status

Set RUST_LOG=debug to print diagnostics to stderr.
"
    )
}

fn print_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{} v{}", APP_NAME, APP_VERSION)?;
    writeln!(out, "License: {}", APP_LICENSE)
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightshift_core::{BlueLightStatus, MockBlueLightClient, ObjcBool, Schedule, ScheduleTime};

    fn dispatch(args: &[&str], mock: &MockBlueLightClient) -> String {
        let parsed = ParsedArgs::parse(args);
        let mut out = Vec::new();
        run(&parsed, || Ok(NightShift::new(mock)), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn enabled_mock() -> MockBlueLightClient {
        MockBlueLightClient::with_status(BlueLightStatus {
            enabled: ObjcBool::YES,
            active: ObjcBool::YES,
            ..Default::default()
        })
    }

    #[test]
    fn test_no_arguments_toggles_back_and_forth() {
        let mock = enabled_mock();

        assert_eq!(dispatch(&["prog"], &mock), "Night Shift is now OFF\n");
        assert_eq!(dispatch(&["prog"], &mock), "Night Shift is now ON\n");
        assert_eq!(mock.writes(), 2);
    }

    #[test]
    fn test_on_and_already_on() {
        let mock = MockBlueLightClient::new();

        assert_eq!(dispatch(&["prog", "on"], &mock), "Night Shift is now ON\n");
        assert_eq!(
            dispatch(&["prog", "on"], &mock),
            "Night Shift is already ON\n"
        );
        assert_eq!(mock.writes(), 1);
    }

    #[test]
    fn test_uppercase_matches_lowercase() {
        let lower = MockBlueLightClient::new();
        let upper = MockBlueLightClient::new();

        assert_eq!(
            dispatch(&["prog", "ON"], &upper),
            dispatch(&["prog", "on"], &lower)
        );
        assert_eq!(upper.get_status(), lower.get_status());
    }

    #[test]
    fn test_off_when_off() {
        let mock = MockBlueLightClient::new();
        assert_eq!(
            dispatch(&["prog", "off"], &mock),
            "Night Shift is already OFF\n"
        );
        assert_eq!(mock.writes(), 0);
    }

    #[test]
    fn test_status_with_custom_schedule() {
        let mock = MockBlueLightClient::with_status(BlueLightStatus {
            enabled: ObjcBool::YES,
            mode: 2,
            schedule: Schedule {
                from_time: ScheduleTime::new(22, 0),
                to_time: ScheduleTime::new(7, 0),
            },
            ..Default::default()
        });

        assert_eq!(
            dispatch(&["prog", "status"], &mock),
            "Night Shift is currently ON\nNight Shift schedule: Custom (22:00 to 7:00)\n"
        );
        assert_eq!(mock.writes(), 0);
    }

    #[test]
    fn test_status_when_read_fails() {
        let mock = enabled_mock();
        mock.set_read_failure(true);

        assert_eq!(
            dispatch(&["prog", "status"], &mock),
            "Night Shift is currently OFF\n"
        );
    }

    #[test]
    fn test_unsupported_reports_error() {
        let mock = MockBlueLightClient::unsupported();
        let expected = "Error: Night Shift is not supported on this Mac\n";

        assert_eq!(dispatch(&["prog"], &mock), expected);
        assert_eq!(dispatch(&["prog", "on"], &mock), expected);
        assert_eq!(dispatch(&["prog", "status"], &mock), expected);
        assert_eq!(mock.writes(), 0);
    }

    #[test]
    fn test_connect_failure_reports_unsupported() {
        let parsed = ParsedArgs::parse(["prog", "toggle"]);
        let mut out = Vec::new();
        run(
            &parsed,
            || -> Result<NightShift<MockBlueLightClient>, ControllerError> {
                Err(ControllerError::ClassNotFound("CBBlueLightClient"))
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Night Shift is not supported on this Mac\n"
        );
    }

    #[test]
    fn test_non_controller_actions_never_connect() {
        for args in [["prog", "frobnicate"], ["prog", "--help"], ["prog", "-V"]] {
            let parsed = ParsedArgs::parse(args);
            let mut out = Vec::new();
            let mut connected = false;
            run(
                &parsed,
                || -> Result<NightShift<MockBlueLightClient>, ControllerError> {
                    connected = true;
                    Ok(NightShift::new(MockBlueLightClient::new()))
                },
                &mut out,
            )
            .unwrap();
            assert!(!connected, "{:?} connected", args);
        }
    }

    #[test]
    fn test_unknown_argument_message() {
        let mock = MockBlueLightClient::new();
        assert_eq!(
            dispatch(&["prog", "Frobnicate"], &mock),
            "Unknown argument: frobnicate\nUse --help for usage information\n"
        );
        assert_eq!(mock.writes(), 0);
    }

    #[test]
    fn test_help_uses_program_name() {
        let mock = MockBlueLightClient::new();
        let help = dispatch(&["/usr/local/bin/ns", "-h"], &mock);

        assert!(help.starts_with("Usage: ns [OPTION]\n"));
        assert!(help.contains("  ns status    # Show current Night Shift status\n"));
    }

    #[test]
    fn test_version() {
        let mock = MockBlueLightClient::new();
        let version = dispatch(&["prog", "--version"], &mock);

        assert!(version.starts_with(&format!("{} v{}\n", APP_NAME, APP_VERSION)));
        assert!(version.contains("License: MIT OR Apache-2.0"));
    }
}
