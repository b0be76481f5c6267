use crate::{link::LinkId, multiaddr::Multiaddr, peer::PeerId, topology::Connection};
use std::fmt;

/// Unique identifier of a connection opened with [`Mocknet::connect_peers`]
///
/// Both ends of a connection share the same identifier.
///
/// [`Mocknet::connect_peers`]: crate::mocknet::Mocknet::connect_peers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnId(u64);

impl ConnId {
    pub(crate) const ZERO: Self = ConnId(0);

    #[must_use = "function does not modify the current value"]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// One end of an open connection between two peers.
///
/// Obtained from [`PeerNet::conns`]. The connection rides on the link
/// identified by [`Conn::link`]; removing that link closes it.
///
/// [`PeerNet::conns`]: crate::mocknet::PeerNet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conn {
    id: ConnId,
    link: LinkId,
    local: PeerId,
    remote: PeerId,
    remote_addr: Multiaddr,
}

impl Conn {
    pub(crate) fn new(
        id: ConnId,
        link: LinkId,
        local: PeerId,
        remote: PeerId,
        remote_addr: Multiaddr,
    ) -> Self {
        Self {
            id,
            link,
            local,
            remote,
            remote_addr,
        }
    }

    #[inline]
    pub fn id(&self) -> ConnId {
        self.id
    }

    #[inline]
    pub fn link(&self) -> LinkId {
        self.link
    }

    #[inline]
    pub fn local_peer(&self) -> PeerId {
        self.local
    }
}

impl Connection for Conn {
    type Peer = PeerId;
    type Addr = Multiaddr;

    fn remote_peer(&self) -> PeerId {
        self.remote
    }

    fn remote_multiaddr(&self) -> Multiaddr {
        self.remote_addr
    }
}
