//! Dotted-decimal to dotted-binary conversion and back.

use crate::models::error::{
    BINARY_CHARSET, BINARY_LENGTH, BINARY_PART_COUNT, DECIMAL_CHARSET, DECIMAL_PART_COUNT,
    DECIMAL_RANGE,
};
use crate::models::{Conversion, ConversionResult, InputError};
use regex::Regex;
use std::sync::OnceLock;

const OCTET_COUNT: usize = 4;
const OCTET_BITS: usize = 8;

/// Matches a non-empty run of ASCII digits.
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Convert `192.168.1.1` to `11000000.10101000.00000001.00000001`.
///
/// Octets must be ASCII digits only; other Unicode digits are a format error.
pub fn decimal_to_binary(input: &str) -> ConversionResult {
    log::debug!("decimal_to_binary({input})");
    match parse_decimal_octets(input) {
        Ok(octets) => {
            let binaries: Vec<String> = octets.iter().map(|o| format!("{o:08b}")).collect();
            let detail = octets
                .iter()
                .zip(&binaries)
                .enumerate()
                .map(|(i, (dec, bin))| format!("Octet {}: {dec} → {bin}", i + 1))
                .collect();
            ConversionResult::success(
                input,
                Conversion {
                    output: binaries.join("."),
                    detail,
                },
            )
        }
        Err(e) => {
            log::trace!("decimal input {input:?} rejected: {e}");
            ConversionResult::failure(input, e)
        }
    }
}

/// Convert `11000000.10101000.00000001.00000001` to `192.168.1.1`.
pub fn binary_to_decimal(input: &str) -> ConversionResult {
    log::debug!("binary_to_decimal({input})");
    match parse_binary_octets(input) {
        Ok(parts) => {
            let octets: Vec<u8> = parts.iter().map(|p| binary_value(p)).collect();
            let detail = parts
                .iter()
                .zip(&octets)
                .enumerate()
                .map(|(i, (bin, dec))| format!("Octet {}: {bin} → {dec}", i + 1))
                .collect();
            let output = octets
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<String>>()
                .join(".");
            ConversionResult::success(input, Conversion { output, detail })
        }
        Err(e) => {
            log::trace!("binary input {input:?} rejected: {e}");
            ConversionResult::failure(input, e)
        }
    }
}

/// Each part is checked for digits and then range before moving on, so the
/// first bad part decides the message.
fn parse_decimal_octets(input: &str) -> Result<Vec<u8>, InputError> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != OCTET_COUNT {
        return Err(InputError::Format(DECIMAL_PART_COUNT));
    }
    parts
        .into_iter()
        .map(|part| {
            if !get_digits_regex().is_match(part) {
                return Err(InputError::Format(DECIMAL_CHARSET));
            }
            // all digits, so a parse failure can only be overflow
            part.parse::<u8>()
                .map_err(|_| InputError::Range(DECIMAL_RANGE))
        })
        .collect()
}

/// Count, then length of every part, then charset of every part.
fn parse_binary_octets(input: &str) -> Result<Vec<&str>, InputError> {
    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != OCTET_COUNT {
        return Err(InputError::Format(BINARY_PART_COUNT));
    }
    if parts.iter().any(|p| p.chars().count() != OCTET_BITS) {
        return Err(InputError::Format(BINARY_LENGTH));
    }
    if parts
        .iter()
        .any(|p| p.chars().any(|c| c != '0' && c != '1'))
    {
        return Err(InputError::Format(BINARY_CHARSET));
    }
    Ok(parts)
}

/// Value of an 8 character `0`/`1` group.
fn binary_value(part: &str) -> u8 {
    part.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0'))
}
