//! Tour inputs, loadable from TOML.
//!
//! Every key is optional; whatever is missing falls back to the literal
//! inputs of the default tour.
//!
//! ```toml
//! color = { hex = "ff8800" }
//! bicycle_name = "Tandem"
//! drive_every_vehicle = true
//!
//! [[greetings]]
//! message = "Hello"
//! to = "Ada"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::error::{Result, TourError};
use crate::greeting::Greeting;

// =============================================================================
// Inputs and defaults
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub color: Color,
    pub bicycle_name: String,
    pub drive_every_vehicle: bool,
    pub headers: bool,
    pub greetings: Vec<Greeting>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            color: Color::rgb(255, 0, 0),
            bicycle_name: "Bicycle".to_string(),
            drive_every_vehicle: false,
            headers: false,
            greetings: vec![
                Greeting::new("Nice to see you", "Thomas"),
                Greeting::new("Greetings", "Thomas"),
            ],
        }
    }
}

// =============================================================================
// Loading and validation
// =============================================================================

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TourError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        match &self.color {
            Color::Rgb(red, green, blue) => {
                for (channel, value) in [("red", red), ("green", green), ("blue", blue)] {
                    if !(0..=255).contains(value) {
                        return Err(TourError::invalid_config(
                            format!("color.rgb.{channel}"),
                            format!("{value} is outside 0..=255"),
                        ));
                    }
                }
            }
            Color::Hex(code) if code.is_empty() => {
                return Err(TourError::invalid_config("color.hex", "must not be empty"));
            }
            _ => {}
        }

        if self.bicycle_name.trim().is_empty() {
            return Err(TourError::invalid_config("bicycle_name", "must not be empty"));
        }

        if let Some(idx) = self.greetings.iter().position(|g| g.to.trim().is_empty()) {
            return Err(TourError::invalid_config(
                format!("greetings[{idx}].to"),
                "must not be empty",
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TourConfig::from_toml_str("").unwrap();
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = TourConfig::from_toml_str(
            r#"
bicycle_name = "Tandem"
drive_every_vehicle = true
color = "black"

[[greetings]]
message = "Hello"
to = "Ada"
"#,
        )
        .unwrap();

        assert_eq!(config.bicycle_name, "Tandem");
        assert!(config.drive_every_vehicle);
        assert!(!config.headers);
        assert_eq!(config.color, Color::Black);
        assert_eq!(config.greetings, vec![Greeting::new("Hello", "Ada")]);
    }

    #[test]
    fn test_malformed_toml() {
        let result = TourConfig::from_toml_str("bicycle_name = ");
        assert!(matches!(result, Err(TourError::ParseConfig(_))));
    }

    #[test]
    fn test_rgb_out_of_range() {
        let result = TourConfig::from_toml_str("color = { rgb = [0, 300, 0] }");
        match result {
            Err(TourError::InvalidConfig { field, .. }) => assert_eq!(field, "color.rgb.green"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_names_rejected() {
        let result = TourConfig::from_toml_str("bicycle_name = \"  \"");
        assert!(matches!(result, Err(TourError::InvalidConfig { .. })));

        let result = TourConfig::from_toml_str("color = { hex = \"\" }");
        assert!(matches!(result, Err(TourError::InvalidConfig { .. })));

        let result = TourConfig::from_toml_str(
            r#"
[[greetings]]
message = "Hi"
to = ""
"#,
        );
        match result {
            Err(TourError::InvalidConfig { field, .. }) => assert_eq!(field, "greetings[0].to"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "headers = true").unwrap();
        writeln!(file, "color = {{ hex = \"abc\" }}").unwrap();

        let config = TourConfig::load(file.path()).unwrap();
        assert!(config.headers);
        assert_eq!(config.color, Color::hex("abc"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TourConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(TourError::ReadConfig { .. })));
    }
}
