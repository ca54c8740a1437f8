use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub to: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            to: to.into(),
        }
    }

    pub fn send(&self, out: &mut dyn Write) -> io::Result<()> {
        write(out, &self.message, &self.to)
    }
}

/// Writes `"{message}, {to}"` as one line.
pub fn write(out: &mut dyn Write, message: &str, to: &str) -> io::Result<()> {
    writeln!(out, "{message}, {to}")
}
