//! Request handling shared by every front end.
//!
//! Mirrors the single page form: an action name picks the converter and the
//! raw field value is trimmed before use. Blank input means nothing was asked.

use crate::models::{CidrResult, ConversionResult};
use crate::processing::{binary_to_decimal, cidr_to_hosts, decimal_to_binary};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which converter a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Decimal,
    Binary,
    Cidr,
}

impl FromStr for Action {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(Action::Decimal),
            "binary" => Ok(Action::Binary),
            "cidr" => Ok(Action::Cidr),
            other => Err(format!("Unknown action '{other}', expected decimal, binary or cidr").into()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Action::Decimal => "decimal",
            Action::Binary => "binary",
            Action::Cidr => "cidr",
        };
        f.write_str(name)
    }
}

/// Result of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Decimal(ConversionResult),
    Binary(ConversionResult),
    Cidr(CidrResult),
}

impl Outcome {
    pub fn action(&self) -> Action {
        match self {
            Outcome::Decimal(_) => Action::Decimal,
            Outcome::Binary(_) => Action::Binary,
            Outcome::Cidr(_) => Action::Cidr,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            Outcome::Decimal(res) | Outcome::Binary(res) => res.is_ok(),
            Outcome::Cidr(res) => res.is_ok(),
        }
    }
}

/// Run `action` on the trimmed input, or `None` when the input is blank.
pub fn dispatch(action: Action, raw: &str) -> Option<Outcome> {
    let input = raw.trim();
    if input.is_empty() {
        log::debug!("dispatch({action}) skipped, blank input");
        return None;
    }
    let outcome = match action {
        Action::Decimal => Outcome::Decimal(decimal_to_binary(input)),
        Action::Binary => Outcome::Binary(binary_to_decimal(input)),
        Action::Cidr => Outcome::Cidr(cidr_to_hosts(input)),
    };
    Some(outcome)
}

/// Parse a `<action> <input>` line as typed in interactive mode.
pub fn parse_request_line(line: &str) -> Result<Option<(Action, String)>, Box<dyn Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (action, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    Ok(Some((action.parse()?, rest.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("decimal".parse::<Action>().unwrap(), Action::Decimal);
        assert_eq!("BINARY".parse::<Action>().unwrap(), Action::Binary);
        assert_eq!(" cidr ".parse::<Action>().unwrap(), Action::Cidr);
        assert!("hex".parse::<Action>().is_err());
        assert_eq!(Action::Cidr.to_string(), "cidr");
    }

    #[test]
    fn test_dispatch_trims_input() {
        let outcome = dispatch(Action::Decimal, "  10.0.0.1 \n").unwrap();
        match outcome {
            Outcome::Decimal(res) => {
                assert_eq!(res.raw(), "10.0.0.1");
                assert_eq!(res.output(), Some("00001010.00000000.00000000.00000001"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_blank_is_none() {
        assert!(dispatch(Action::Binary, "").is_none());
        assert!(dispatch(Action::Cidr, " \t ").is_none());
    }

    #[test]
    fn test_dispatch_routes_by_action() {
        assert_eq!(
            dispatch(Action::Binary, "00000001.00000010.00000011.00000100")
                .unwrap()
                .action(),
            Action::Binary
        );
        let outcome = dispatch(Action::Cidr, "10.0.0.0/8").unwrap();
        assert_eq!(outcome.action(), Action::Cidr);
        assert!(outcome.is_ok());
        assert!(!dispatch(Action::Cidr, "nope").unwrap().is_ok());
    }

    #[test]
    fn test_parse_request_line() {
        assert_eq!(
            parse_request_line("cidr 10.0.0.0/24").unwrap(),
            Some((Action::Cidr, "10.0.0.0/24".to_string()))
        );
        assert_eq!(
            parse_request_line("decimal").unwrap(),
            Some((Action::Decimal, String::new()))
        );
        assert_eq!(parse_request_line("   ").unwrap(), None);
        assert_eq!(parse_request_line("# comment").unwrap(), None);
        assert!(parse_request_line("octal 1.2.3.4").is_err());
    }
}
