use std::io::Write;

use crate::{context::BookingContext, error::Result};

/// The fixed sequence of actions the demo issues
pub const DEMO_ACTIONS: [&str; 4] = ["select_room", "confirm_booking", "pay", "cancel"];

/// Drive `context` through `DEMO_ACTIONS`, writing the state name before and after each step
///
/// # Errors
///
/// Returns a `BookingError::Io` if `out` cannot be written to
pub fn run(context: &mut BookingContext, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Current state: {context}")?;

    for action in DEMO_ACTIONS {
        context.request(action);
        writeln!(out, "Current state: {context}")?;
    }

    Ok(())
}
