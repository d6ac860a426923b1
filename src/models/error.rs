//! Validation errors returned by the converters.

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const DECIMAL_PART_COUNT: &str = "Enter four decimal octets separated by dots.";
pub const DECIMAL_CHARSET: &str = "Only digits and dots are allowed in decimal input.";
pub const DECIMAL_RANGE: &str = "Each decimal octet must be between 0 and 255.";
pub const BINARY_PART_COUNT: &str = "Enter four binary octets separated by dots.";
pub const BINARY_LENGTH: &str = "Each binary octet must be exactly 8 bits.";
pub const BINARY_CHARSET: &str = "Binary input may only include 0 and 1.";
pub const CIDR_FORMAT: &str = "Enter a valid IPv4 CIDR, e.g., 192.168.1.0/24.";

/// Caller-visible input error. `Display` is the message shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Structural malformation: wrong part count, length or characters.
    #[error("{0}")]
    Format(&'static str),

    /// Well formed but numerically out of bounds.
    #[error("{0}")]
    Range(&'static str),
}

impl InputError {
    pub fn message(&self) -> &'static str {
        match self {
            InputError::Format(msg) | InputError::Range(msg) => msg,
        }
    }
}

impl Serialize for InputError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.message())
    }
}
