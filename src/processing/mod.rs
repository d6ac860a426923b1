//! Conversion logic.
//!
//! - [`octet`] - dotted-decimal and dotted-binary conversion
//! - [`subnet`] - CIDR host range calculation

mod octet;
mod subnet;

// Re-export public functions
pub use octet::{binary_to_decimal, decimal_to_binary};
pub use subnet::{cidr_to_hosts, host_range};
