//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 networks with a prefix length,
//! along with the mask arithmetic used by the subnet calculator.

use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses covered by a prefix, `2^(32 - len)`.
pub fn num_addresses(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of assignable host addresses for a prefix.
///
/// `/32` is a single host and `/31` is a point-to-point link without reserved
/// addresses. Everything else loses the network and broadcast address.
pub fn num_usable_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    let total = num_addresses(len)?;
    Ok(match len {
        32 => 1,
        31 => 2,
        _ => total.saturating_sub(2),
    })
}

/// Prefix length of a dotted mask, if the mask is contiguous.
///
/// Accepts netmasks (`255.255.255.0`) and hostmasks (`0.0.0.255`).
pub fn prefix_from_mask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    prefix_from_netmask_bits(bits).or_else(|| prefix_from_netmask_bits(!bits))
}

fn prefix_from_netmask_bits(bits: u32) -> Option<u8> {
    // leading ones followed only by zeros
    let prefix = bits.leading_ones();
    if bits.checked_shl(prefix).unwrap_or(0) == 0 {
        Some(prefix as u8)
    } else {
        None
    }
}

fn parse_prefix(prefix: &str) -> Result<u8, Box<dyn Error>> {
    if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
        // "33" and friends fall through to the mask parser and fail there
        if let Ok(len) = prefix.parse::<u8>() {
            if len <= MAX_LENGTH {
                return Ok(len);
            }
        }
    }
    let mask: Ipv4Addr = prefix
        .parse()
        .map_err(|_| format!("Invalid prefix {prefix}"))?;
    prefix_from_mask(mask).ok_or_else(|| format!("Invalid netmask {prefix}").into())
}

/// IPv4 network with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Parse `address[/prefix]` and mask off any host bits.
    ///
    /// The prefix may be a length, a netmask or a hostmask. A missing prefix
    /// means a single host (`/32`).
    pub fn parse_non_strict(input: &str) -> Result<Ipv4, Box<dyn Error>> {
        let parts: Vec<&str> = input.split('/').collect();
        let (addr, prefix) = match parts.as_slice() {
            [addr] => (*addr, None),
            [addr, prefix] => (*addr, Some(*prefix)),
            _ => return Err(format!("Only one '/' permitted in {input}").into()),
        };
        let addr =
            Ipv4Addr::from_str(addr).map_err(|_| format!("Invalid address {addr}"))?;
        let mask = match prefix {
            Some(prefix) => parse_prefix(prefix)?,
            None => MAX_LENGTH,
        };
        Ok(Ipv4 {
            addr: cut_addr(addr, mask)?,
            mask,
        })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        broadcast_addr(self.addr, self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Result<Ipv4Addr, Box<dyn Error>> {
        cut_addr(self.addr, self.mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
