//! Domain models for the IPv4 calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`ConversionResult`] and [`CidrResult`] - structured results for the front end
//! - [`InputError`] - caller-visible validation errors

pub mod error;
mod ipv4;
mod result;

// Re-export public types
pub use error::InputError;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_addresses, num_usable_hosts, prefix_from_mask,
    Ipv4, MAX_LENGTH,
};
pub use result::{CidrResult, Conversion, ConversionResult, HostAddr, HostRange, NO_HOST};
