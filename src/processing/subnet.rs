//! CIDR to host range calculation.

use crate::models::error::CIDR_FORMAT;
use crate::models::{
    num_addresses, num_usable_hosts, CidrResult, HostAddr, HostRange, InputError, Ipv4,
};
use std::error::Error;
use std::net::Ipv4Addr;

/// Derive network, broadcast, counts and usable host range from a CIDR.
///
/// Host bits in the given address are masked off, so `10.0.0.7/24` describes
/// `10.0.0.0/24`.
pub fn cidr_to_hosts(input: &str) -> CidrResult {
    log::debug!("cidr_to_hosts({input})");
    let network = match Ipv4::parse_non_strict(input) {
        Ok(network) => network,
        Err(e) => {
            log::trace!("cidr input {input:?} rejected: {e}");
            return CidrResult::failure(input, InputError::Format(CIDR_FORMAT));
        }
    };
    match host_range(network) {
        Ok(range) => CidrResult::success(input, range),
        Err(e) => {
            log::warn!("host range for {network} failed: {e}");
            CidrResult::failure(input, InputError::Format(CIDR_FORMAT))
        }
    }
}

/// Host range of an already masked network.
pub fn host_range(network: Ipv4) -> Result<HostRange, Box<dyn Error>> {
    let lo = network.lo()?;
    let hi = network.hi()?;
    let total = num_addresses(network.mask)?;
    let usable = num_usable_hosts(network.mask)?;

    let (first_host, last_host) = match network.mask {
        32 => (HostAddr::Addr(lo), HostAddr::Addr(lo)),
        31 => (HostAddr::Addr(lo), HostAddr::Addr(hi)),
        _ if usable > 0 => (
            HostAddr::Addr(Ipv4Addr::from(u32::from(lo) + 1)),
            HostAddr::Addr(Ipv4Addr::from(u32::from(hi) - 1)),
        ),
        _ => (HostAddr::NotApplicable, HostAddr::NotApplicable),
    };

    Ok(HostRange {
        cidr: Ipv4 {
            addr: lo,
            mask: network.mask,
        },
        network: lo,
        broadcast: hi,
        total,
        usable,
        first_host,
        last_host,
    })
}
