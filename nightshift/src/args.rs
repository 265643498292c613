//! Command-line argument parsing.
//!
//! Only the first positional token matters. It is matched case-insensitively
//! and anything unrecognized becomes [`CliAction::Unknown`] instead of an
//! error, so the process still exits normally.

use std::path::Path;

const DEFAULT_PROGRAM: &str = env!("CARGO_PKG_NAME");

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Flip Night Shift (also the default with no arguments).
    Toggle,
    /// Switch Night Shift on.
    On,
    /// Switch Night Shift off.
    Off,
    /// Print the current state and schedule.
    Status,
    /// Print usage and exit.
    ShowHelp,
    /// Print name and version and exit.
    ShowVersion,
    /// An unrecognized token, already lowercased.
    Unknown(String),
}

/// Result of parsing command-line arguments.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Executable name used in usage text.
    pub program: String,
    /// The action to dispatch.
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments, including the program name at index 0.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        let program = args
            .next()
            .and_then(|arg0| {
                Path::new(arg0.as_ref())
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        let action = match args.next() {
            None => CliAction::Toggle,
            Some(arg) => {
                let arg = arg.as_ref().to_lowercase();
                match arg.as_str() {
                    "on" => CliAction::On,
                    "off" => CliAction::Off,
                    "toggle" => CliAction::Toggle,
                    "status" => CliAction::Status,
                    "-h" | "--help" => CliAction::ShowHelp,
                    "-v" | "--version" => CliAction::ShowVersion,
                    _ => CliAction::Unknown(arg),
                }
            }
        };

        ParsedArgs { program, action }
    }
}
