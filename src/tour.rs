//! Runs every section of the tour, in order, against one output sink.

use colored::Colorize;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

use crate::bicycle::Bicycle;
use crate::bindings;
use crate::config::TourConfig;
use crate::drive::{self, Drive};
use crate::error::Result;
use crate::motor_vehicle::Motorcycle;
use crate::optional::{self, OPTIONAL_INTS};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Bindings,
    Optionals,
    Colors,
    Vehicles,
    Greetings,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Bindings,
        Section::Optionals,
        Section::Colors,
        Section::Vehicles,
        Section::Greetings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Bindings => "Constants and variables",
            Section::Optionals => "Optionals",
            Section::Colors => "Enums with associated values",
            Section::Vehicles => "Value types, reference types and traits",
            Section::Greetings => "Functions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// Runner
// =============================================================================

pub struct Tour {
    config: TourConfig,
}

impl Tour {
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!(sections = Section::ALL.len(), "starting tour");
        for section in Section::ALL {
            self.run_section(section, out)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn run_section<W: Write>(&self, section: Section, out: &mut W) -> Result<()> {
        debug!(%section, "running section");
        if self.config.headers {
            let header = format!("== {section} ==");
            writeln!(out, "{}", header.as_str().bold())?;
        }

        match section {
            Section::Bindings => {
                // Logs only; the final value has no place on stdout.
                let _variable = bindings::demonstrate();
            }
            Section::Optionals => self.optionals(out)?,
            Section::Colors => writeln!(out, "{}", self.config.color.describe())?,
            Section::Vehicles => self.vehicles(out)?,
            Section::Greetings => {
                for greeting in &self.config.greetings {
                    greeting.send(out)?;
                }
            }
        }
        Ok(())
    }

    fn optionals<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut optional_int: Option<i32> = None;
        if let Some(line) = optional::nil_check(optional_int) {
            writeln!(out, "{line}")?;
        }

        optional_int = Some(1);
        debug!(?optional_int, "optional assigned");
        if let Some(line) = optional::nil_check(optional_int) {
            writeln!(out, "{line}")?;
        }

        for line in optional::value_lines(&OPTIONAL_INTS) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn vehicles<W: Write>(&self, out: &mut W) -> Result<()> {
        let bicycle = Bicycle::new(self.config.bicycle_name.as_str());
        let motorcycle = Motorcycle::new();

        let mut trips: Vec<&dyn Drive> = Vec::new();
        let mut something_that_can_drive: &dyn Drive = &bicycle;
        if self.config.drive_every_vehicle {
            trips.push(something_that_can_drive);
        }

        something_that_can_drive = &motorcycle;
        trips.push(something_that_can_drive);

        drive::drive_all(&trips, out)?;
        Ok(())
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new(TourConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::greeting::Greeting;

    const DEFAULT_OUTPUT: &str = "\
Value is nil
Value: 1
Value: 3
Value: 5
Red: 255, green: 0, blue: 0
Driving a Motorcycle with 2 wheels
Nice to see you, Thomas
Greetings, Thomas
";

    fn run_to_string(tour: &Tour) -> String {
        let mut out = Vec::new();
        tour.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_output_is_exact() {
        assert_eq!(run_to_string(&Tour::default()), DEFAULT_OUTPUT);
    }

    #[test]
    fn test_drive_every_vehicle() {
        let config = TourConfig {
            drive_every_vehicle: true,
            bicycle_name: "Tandem".to_string(),
            ..TourConfig::default()
        };
        let output = run_to_string(&Tour::new(config));
        assert!(output.contains("Driving a Tandem\nDriving a Motorcycle with 2 wheels\n"));
    }

    #[test]
    fn test_configured_color_and_greetings() {
        let config = TourConfig {
            color: Color::hex("abc"),
            greetings: vec![Greeting::new("Hello", "Ada")],
            ..TourConfig::default()
        };
        let output = run_to_string(&Tour::new(config));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[4], "Hex: #abc");
        assert_eq!(lines.last(), Some(&"Hello, Ada"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_headers_precede_sections() {
        colored::control::set_override(false);
        let config = TourConfig {
            headers: true,
            ..TourConfig::default()
        };
        let output = run_to_string(&Tour::new(config));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "== Constants and variables ==");
        assert_eq!(lines[1], "== Optionals ==");
        assert_eq!(lines[2], "Value is nil");
        assert_eq!(lines.len(), DEFAULT_OUTPUT.lines().count() + Section::ALL.len());
    }

    #[test]
    fn test_single_section() {
        let mut out = Vec::new();
        Tour::default()
            .run_section(Section::Colors, &mut out)
            .unwrap();
        assert_eq!(out, b"Red: 255, green: 0, blue: 0\n");
    }
}
