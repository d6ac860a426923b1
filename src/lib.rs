//! IPv4 octet conversion and CIDR subnet calculation.
//!
//! The three entry points take a raw string and return a structured result;
//! bad input comes back as an error message inside the result, never a panic.
//!
//! ```
//! use ipv4_subnet_calc::{cidr_to_hosts, decimal_to_binary};
//!
//! assert_eq!(
//!     decimal_to_binary("192.168.1.1").output(),
//!     Some("11000000.10101000.00000001.00000001")
//! );
//! assert_eq!(cidr_to_hosts("192.168.1.0/24").usable(), Some(254));
//! ```

pub mod config;
pub mod dispatch;
pub mod models;
pub mod output;
pub mod processing;

pub use dispatch::{dispatch, Action, Outcome};
pub use models::{CidrResult, ConversionResult, InputError};
pub use processing::{binary_to_decimal, cidr_to_hosts, decimal_to_binary};
