//! Control macOS Night Shift from the command line.

mod args;
mod dispatch;

use args::ParsedArgs;
use log::{debug, error};
use std::io;

fn main() {
    env_logger::init();

    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let parsed = ParsedArgs::parse(args);
    debug!("parsed action: {:?}", parsed.action);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Every outcome is a printed message; the exit code stays 0.
    if let Err(e) = dispatch::run(&parsed, nightshift_core::connect, &mut out) {
        error!("failed to write output: {}", e);
    }
}
