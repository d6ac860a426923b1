//! Structured results handed back to the front end.
//!
//! Each result keeps the raw input and either the success payload or an
//! [`InputError`], never both. The optional-field accessors and the flat serde
//! form give renderers everything without recomputing anything.

use super::{InputError, Ipv4};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Shown instead of a host address when a subnet has no usable hosts.
pub const NO_HOST: &str = "N/A";

/// Successful octet conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Converted address, four groups joined by dots.
    pub output: String,
    /// One line per octet, in input order.
    pub detail: Vec<String>,
}

/// Result of a decimal/binary octet conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    raw: String,
    outcome: Result<Conversion, InputError>,
}

impl ConversionResult {
    pub fn success(raw: &str, conversion: Conversion) -> Self {
        ConversionResult {
            raw: raw.to_string(),
            outcome: Ok(conversion),
        }
    }

    pub fn failure(raw: &str, error: InputError) -> Self {
        ConversionResult {
            raw: raw.to_string(),
            outcome: Err(error),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn output(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|c| c.output.as_str())
    }

    pub fn detail(&self) -> Option<&[String]> {
        self.outcome.as_ref().ok().map(|c| c.detail.as_slice())
    }

    pub fn error(&self) -> Option<&InputError> {
        self.outcome.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Serialize for ConversionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ConversionResult", 4)?;
        state.serialize_field("output", &self.output())?;
        state.serialize_field("detail", &self.detail())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}

/// First or last assignable address of a subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAddr {
    Addr(Ipv4Addr),
    /// The subnet has no usable hosts.
    NotApplicable,
}

impl fmt::Display for HostAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostAddr::Addr(addr) => write!(f, "{addr}"),
            HostAddr::NotApplicable => f.write_str(NO_HOST),
        }
    }
}

impl Serialize for HostAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Everything derived from one CIDR expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRange {
    /// Canonical network, host bits cleared.
    pub cidr: Ipv4,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub total: u64,
    pub usable: u64,
    pub first_host: HostAddr,
    pub last_host: HostAddr,
}

/// Result of a CIDR to host range calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrResult {
    raw: String,
    outcome: Result<HostRange, InputError>,
}

impl CidrResult {
    pub fn success(raw: &str, range: HostRange) -> Self {
        CidrResult {
            raw: raw.to_string(),
            outcome: Ok(range),
        }
    }

    pub fn failure(raw: &str, error: InputError) -> Self {
        CidrResult {
            raw: raw.to_string(),
            outcome: Err(error),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn range(&self) -> Option<&HostRange> {
        self.outcome.as_ref().ok()
    }

    pub fn cidr(&self) -> Option<String> {
        self.range().map(|r| r.cidr.to_string())
    }

    pub fn network(&self) -> Option<Ipv4Addr> {
        self.range().map(|r| r.network)
    }

    pub fn broadcast(&self) -> Option<Ipv4Addr> {
        self.range().map(|r| r.broadcast)
    }

    pub fn total(&self) -> Option<u64> {
        self.range().map(|r| r.total)
    }

    pub fn usable(&self) -> Option<u64> {
        self.range().map(|r| r.usable)
    }

    pub fn first_host(&self) -> Option<HostAddr> {
        self.range().map(|r| r.first_host)
    }

    pub fn last_host(&self) -> Option<HostAddr> {
        self.range().map(|r| r.last_host)
    }

    pub fn error(&self) -> Option<&InputError> {
        self.outcome.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl Serialize for CidrResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CidrResult", 9)?;
        state.serialize_field("cidr", &self.range().map(|r| r.cidr))?;
        state.serialize_field("network", &self.network())?;
        state.serialize_field("broadcast", &self.broadcast())?;
        state.serialize_field("total", &self.total())?;
        state.serialize_field("usable", &self.usable())?;
        state.serialize_field("first_host", &self.first_host())?;
        state.serialize_field("last_host", &self.last_host())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::error::{BINARY_CHARSET, CIDR_FORMAT};
    use serde_json::{json, Value};

    fn sample_range() -> HostRange {
        HostRange {
            cidr: Ipv4 {
                addr: Ipv4Addr::new(10, 0, 0, 0),
                mask: 30,
            },
            network: Ipv4Addr::new(10, 0, 0, 0),
            broadcast: Ipv4Addr::new(10, 0, 0, 3),
            total: 4,
            usable: 2,
            first_host: HostAddr::Addr(Ipv4Addr::new(10, 0, 0, 1)),
            last_host: HostAddr::NotApplicable,
        }
    }

    #[test]
    fn test_conversion_failure_has_no_output() {
        let res = ConversionResult::failure("x", InputError::Format(BINARY_CHARSET));
        assert_eq!(res.raw(), "x");
        assert!(res.output().is_none());
        assert!(res.detail().is_none());
        assert_eq!(res.error().map(|e| e.message()), Some(BINARY_CHARSET));
        assert!(!res.is_ok());
    }

    #[test]
    fn test_conversion_json_shape() {
        let res = ConversionResult::success(
            "1.2.3.4",
            Conversion {
                output: "out".to_string(),
                detail: vec!["a".to_string()],
            },
        );
        let value: Value = serde_json::to_value(&res).unwrap();
        assert_eq!(
            value,
            json!({"output": "out", "detail": ["a"], "error": null, "raw": "1.2.3.4"})
        );
    }

    #[test]
    fn test_cidr_json_shape() {
        let value: Value =
            serde_json::to_value(CidrResult::success("10.0.0.2/30", sample_range())).unwrap();
        assert_eq!(value["cidr"], "10.0.0.0/30");
        assert_eq!(value["broadcast"], "10.0.0.3");
        assert_eq!(value["total"], 4);
        assert_eq!(value["first_host"], "10.0.0.1");
        assert_eq!(value["last_host"], NO_HOST);
        assert_eq!(value["error"], Value::Null);
        assert_eq!(value["raw"], "10.0.0.2/30");

        let value: Value =
            serde_json::to_value(CidrResult::failure("bad", InputError::Format(CIDR_FORMAT)))
                .unwrap();
        assert_eq!(value["cidr"], Value::Null);
        assert_eq!(value["usable"], Value::Null);
        assert_eq!(value["error"], CIDR_FORMAT);
    }

    #[test]
    fn test_host_addr_display() {
        assert_eq!(HostAddr::NotApplicable.to_string(), "N/A");
        assert_eq!(
            HostAddr::Addr(Ipv4Addr::new(1, 2, 3, 4)).to_string(),
            "1.2.3.4"
        );
    }
}
