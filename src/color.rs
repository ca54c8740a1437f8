//! Colors as a closed set of variants, some carrying a payload.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Rgb(i32, i32, i32),
    Hex(String),
}

impl Color {
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Color::Rgb(red, green, blue)
    }

    pub fn hex(code: impl Into<String>) -> Self {
        Color::Hex(code.into())
    }

    /// Human readable form of the color, one arm per variant.
    ///
    /// The hex arm shadows its payload with a `#`-prefixed copy; `self`
    /// keeps the code exactly as it was constructed.
    pub fn describe(&self) -> String {
        match self {
            Color::Black => "Black".to_string(),
            Color::White => "White".to_string(),
            Color::Rgb(red, green, blue) => {
                format!("Red: {red}, green: {green}, blue: {blue}")
            }
            Color::Hex(hex) => {
                let hex = format!("#{hex}");
                format!("Hex: {hex}")
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
