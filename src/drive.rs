//! The capability shared by every vehicle in the tour.
//!
//! Implementations live next to the type they extend (`bicycle.rs`,
//! `motor_vehicle.rs`), not here.

use std::io::{self, Write};

pub trait Drive {
    /// One line describing the trip.
    fn drive_description(&self) -> String;

    fn drive(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.drive_description())
    }
}

/// Drives every vehicle in order through a trait object.
pub fn drive_all(vehicles: &[&dyn Drive], out: &mut dyn Write) -> io::Result<()> {
    for vehicle in vehicles {
        vehicle.drive(out)?;
    }
    Ok(())
}
