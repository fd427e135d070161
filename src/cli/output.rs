//! Output formats for `ls` and `show`.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered text
    #[default]
    Human,
    /// `{"data": ...}` envelope
    Json,
}

/// Envelope around JSON payloads so every command emits the same shape.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Pretty-prints the envelope.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the envelope to stdout.
    pub fn print(&self) -> Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}
