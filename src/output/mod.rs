//! Output formatting for conversion results.
//!
//! - [`terminal`] - colored plain text
//! - [`json`] - flat JSON objects

pub mod json;
pub mod terminal;

use crate::dispatch::Outcome;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("Unknown output format '{other}', expected text or json").into()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Render an outcome in the requested format.
pub fn render(outcome: &Outcome, format: Format) -> Result<String, Box<dyn Error>> {
    match format {
        Format::Text => Ok(terminal::render(outcome)),
        Format::Json => json::render(outcome),
    }
}
