//! Example: Toggle Night Shift on/off.
//!
//! Run with: `cargo run --example toggle`

use nightshift_core::{ControllerError, connect};

fn main() -> Result<(), ControllerError> {
    // Initialize logging (optional)
    env_logger::init();

    // Load CoreBrightness and create the client
    let night_shift = connect()?;

    println!(
        "Current state: enabled={}, schedule={:?}",
        night_shift.is_enabled(),
        night_shift.schedule()
    );

    match night_shift.toggle() {
        Ok(enabled) => println!("Toggled to: {}", if enabled { "ON" } else { "OFF" }),
        Err(e) => eprintln!("Error toggling Night Shift: {}", e),
    }

    Ok(())
}
