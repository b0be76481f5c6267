mod id;

use crate::peer::PeerId;

pub use self::id::LinkId;

/// A simulated point-to-point channel between two [`Peer`]s.
///
/// Links are bidirectional: the [`Mocknet`] records the same `Link` under
/// both `a -> b` and `b -> a` in its link map. A `Link` carries no traffic
/// state of its own, it only witnesses that the two peers may open
/// connections to each other.
///
/// [`Peer`]: crate::peer::Peer
/// [`Mocknet`]: crate::mocknet::Mocknet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    id: LinkId,
    a: PeerId,
    b: PeerId,
}

impl Link {
    pub(crate) fn new(id: LinkId, a: PeerId, b: PeerId) -> Self {
        Self { id, a, b }
    }

    #[inline]
    pub fn id(&self) -> LinkId {
        self.id
    }

    /// the two ends of the link, in the order given to
    /// [`Mocknet::link_peers`]
    ///
    /// [`Mocknet::link_peers`]: crate::mocknet::Mocknet::link_peers
    #[inline]
    pub fn peers(&self) -> (PeerId, PeerId) {
        (self.a, self.b)
    }

    /// Returns `true` if this link has `a` and `b` at either end.
    pub fn joins(&self, a: PeerId, b: PeerId) -> bool {
        (self.a == a && self.b == b) || (self.a == b && self.b == a)
    }

    /// Returns the end of the link opposite to `peer`, or `None` if
    /// `peer` is not on this link.
    pub fn other(&self, peer: PeerId) -> Option<PeerId> {
        if peer == self.a {
            Some(self.b)
        } else if peer == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}
