use crate::multiaddr::Multiaddr;
use std::net::Ipv4Addr;

/// Default IP address of a peer
///
/// Every peer added without an explicit address listens on the loopback
/// interface.
pub const DEFAULT_IP: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Default base TCP port
///
/// The peer with [`PeerId`] `n` is assigned the port
/// `DEFAULT_BASE_PORT + n` unless configured otherwise with
/// [`PeerBuilder::set_address`].
///
/// ```
/// # use mocknet_core::{defaults::*, mocknet::Mocknet};
/// let mut mocknet = Mocknet::new();
/// let p1 = mocknet.add_peer().build();
///
/// assert_eq!(
///     mocknet.peer_address(p1).unwrap().to_string(),
///     "/ip4/127.0.0.1/tcp/4001",
/// );
/// ```
///
/// [`PeerId`]: crate::peer::PeerId
/// [`PeerBuilder::set_address`]: crate::mocknet::PeerBuilder::set_address
pub const DEFAULT_BASE_PORT: u16 = 4000;

/// the address assigned to the `n`th peer when none is configured
///
/// The port wraps around past `u16::MAX`.
pub(crate) fn default_address(n: u64) -> Multiaddr {
    let port = DEFAULT_BASE_PORT.wrapping_add((n % (u16::MAX as u64 + 1)) as u16);
    Multiaddr::ip4(DEFAULT_IP, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_port() {
        assert_eq!(default_address(1).port(), 4001);
        assert_eq!(default_address(42).to_string(), "/ip4/127.0.0.1/tcp/4042");
    }
}
