mod id;

pub use self::id::PeerId;
use crate::multiaddr::Multiaddr;

/// A simulated participant registered in the [`Mocknet`].
///
/// You never construct a `Peer` directly, use [`Mocknet::add_peer`] to get
/// a [`PeerBuilder`] which registers the peer and returns its [`PeerId`].
///
/// [`Mocknet`]: crate::mocknet::Mocknet
/// [`Mocknet::add_peer`]: crate::mocknet::Mocknet::add_peer
/// [`PeerBuilder`]: crate::mocknet::PeerBuilder
#[derive(Debug, Clone)]
pub struct Peer {
    id: PeerId,
    address: Multiaddr,
}

impl Peer {
    pub(crate) fn new(id: PeerId, address: Multiaddr) -> Self {
        Self { id, address }
    }

    /// Returns the unique identifier of this peer.
    #[inline]
    pub fn id(&self) -> PeerId {
        self.id
    }

    /// Returns the address other peers see when connected to this one.
    #[inline]
    pub fn address(&self) -> &Multiaddr {
        &self.address
    }

    pub(crate) fn set_address(&mut self, address: Multiaddr) {
        self.address = address;
    }
}
