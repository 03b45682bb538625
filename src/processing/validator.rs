//! CIDR validation.

use crate::error::Result;
use crate::models::Ipv4;

/// Parse and validate an IPv4 network in `a.b.c.d/n` notation.
///
/// Host bits are kept as written; [`Ipv4::lo`] gives the network address.
pub fn validate(cidr: &str) -> Result<Ipv4> {
    let network = Ipv4::new(cidr)?;
    log::trace!("validate({cidr}) -> {network}");
    Ok(network)
}
