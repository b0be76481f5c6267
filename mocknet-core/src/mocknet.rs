use crate::{
    conn::{Conn, ConnId},
    defaults::default_address,
    link::{Link, LinkId},
    multiaddr::Multiaddr,
    peer::{Peer, PeerId},
    topology::{Connection, LinkMap, Network, Topology},
};
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// This is the entry point for all activities with [`mocknet_core`].
///
/// The [`Mocknet`] keeps track of the registered [`Peer`]s, of the
/// [`Link`]s between them and of the [`Conn`]s opened over those links.
/// It moves no data: it only maintains the topology an observer can
/// inspect through the [`Topology`] and [`Network`] traits.
///
/// # Example
///
/// ```
/// use mocknet_core::{mocknet::Mocknet, topology::Topology};
///
/// let mut mocknet = Mocknet::new();
/// let p1 = mocknet.add_peer().build();
/// let p2 = mocknet.add_peer().build();
///
/// mocknet.link_peers(p1, p2).unwrap();
/// mocknet.connect_peers(p1, p2).unwrap();
///
/// assert_eq!(mocknet.links()[&p1][&p2].len(), 1);
/// ```
///
/// [`mocknet_core`]: crate
#[derive(Debug)]
pub struct Mocknet {
    peers: HashMap<PeerId, Peer>,

    /// every link is recorded twice: under `a -> b` and under `b -> a`
    links: LinkMap<PeerId, Link>,

    /// per peer, the open connections in the order they were opened
    conns: HashMap<PeerId, Vec<Conn>>,

    /// the last assigned ID
    ///
    /// ID 0 is never given to a peer
    id: PeerId,
    link_id: LinkId,
    conn_id: ConnId,
}

/// Builder for configuring a new peer before registering it with the mocknet.
///
/// Obtained via [`Mocknet::add_peer`].
///
/// ## Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | Address | `/ip4/127.0.0.1/tcp/<4000 + n>` for the `n`th peer |
///
/// ## Example
///
/// ```
/// use mocknet_core::mocknet::Mocknet;
///
/// let mut mocknet = Mocknet::new();
///
/// // Default peer, listening on the loopback interface.
/// let p1 = mocknet.add_peer().build();
///
/// // Peer with an explicit address.
/// let p2 = mocknet
///     .add_peer()
///     .set_address("/ip4/10.0.0.2/tcp/4001".parse().unwrap())
///     .build();
/// ```
pub struct PeerBuilder<'a> {
    peer: Peer,

    mocknet: &'a mut Mocknet,
}

/// The endpoint view of one peer of the [`Mocknet`].
///
/// Obtained via [`Mocknet::net`]. Implements [`Network`] so the peer's live
/// connections can be inspected like those of a real endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PeerNet<'a> {
    peer: PeerId,
    mocknet: &'a Mocknet,
}

/// Error returned when linking or unlinking peers fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Peer ({peer}) Not Found")]
    PeerNotFound { peer: PeerId },
    #[error("Cannot link peer ({peer}) to itself")]
    SelfLink { peer: PeerId },
    #[error("Peers ({a}) and ({b}) are not linked")]
    NotLinked { a: PeerId, b: PeerId },
}

/// Error returned when connecting or disconnecting peers fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Peer ({peer}) Not Found")]
    PeerNotFound { peer: PeerId },
    /// A connection requires a link between the two peers.
    ///
    /// Use [`Mocknet::link_peers`] first.
    #[error("Peers ({a}) and ({b}) are not linked, call link_peers first")]
    NotLinked { a: PeerId, b: PeerId },
    #[error("Peers ({a}) and ({b}) are not connected")]
    NotConnected { a: PeerId, b: PeerId },
}

impl Default for Mocknet {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerBuilder<'_> {
    /// Set the address other peers will see when connected to this one.
    pub fn set_address(mut self, address: Multiaddr) -> Self {
        self.peer.set_address(address);
        self
    }

    /// Finalise the peer configuration and register it with the mocknet.
    ///
    /// Returns the [`PeerId`] assigned to this peer.
    pub fn build(self) -> PeerId {
        let Self { peer, mocknet } = self;

        let id = peer.id();
        debug!("adding peer {id} ({address})", address = peer.address());

        mocknet.peers.insert(id, peer);

        id
    }
}

impl Mocknet {
    /// Create a new, empty mocknet.
    pub fn new() -> Self {
        Self {
            peers: HashMap::new(),
            links: HashMap::new(),
            conns: HashMap::new(),
            id: PeerId::ZERO,
            link_id: LinkId::ZERO,
            conn_id: ConnId::ZERO,
        }
    }

    /// Create a new peer and return a builder to configure it.
    ///
    /// Peer IDs are assigned sequentially starting at `1`.
    pub fn add_peer(&mut self) -> PeerBuilder<'_> {
        self.id = self.id.next();
        PeerBuilder {
            peer: Peer::new(self.id, default_address(self.id.into_inner())),
            mocknet: self,
        }
    }

    /// Returns every registered peer, sorted by [`PeerId`].
    pub fn peers(&self) -> Vec<PeerId> {
        let mut peers: Vec<_> = self.peers.keys().copied().collect();
        peers.sort_unstable();
        peers
    }

    pub fn peer_address(&self, peer: PeerId) -> Option<&Multiaddr> {
        self.peers.get(&peer).map(Peer::address)
    }

    /// Create a new link between `a` and `b`.
    ///
    /// Peers may be linked more than once, every call adds one more link.
    ///
    /// # Errors
    ///
    /// - [`LinkError::PeerNotFound`] if either peer does not exist.
    /// - [`LinkError::SelfLink`] if `a == b`.
    pub fn link_peers(&mut self, a: PeerId, b: PeerId) -> Result<LinkId, LinkError> {
        self.check_peers(a, b).map_err(|peer| LinkError::PeerNotFound { peer })?;
        if a == b {
            return Err(LinkError::SelfLink { peer: a });
        }

        self.link_id = self.link_id.next();
        let link = Link::new(self.link_id, a, b);

        self.links.entry(a).or_default().entry(b).or_default().push(link);
        self.links.entry(b).or_default().entry(a).or_default().push(link);

        debug!("linked {a} <-> {b} ({id})", id = link.id());

        Ok(link.id())
    }

    /// Remove every link between `a` and `b`.
    ///
    /// Connections between the two peers are closed as they no longer
    /// have a link to ride on. Returns the removed links.
    ///
    /// # Errors
    ///
    /// - [`LinkError::PeerNotFound`] if either peer does not exist.
    /// - [`LinkError::NotLinked`] if there was no link between them.
    pub fn unlink_peers(&mut self, a: PeerId, b: PeerId) -> Result<Vec<Link>, LinkError> {
        self.check_peers(a, b).map_err(|peer| LinkError::PeerNotFound { peer })?;

        let removed = self.remove_links(a, b);
        self.remove_links(b, a);

        if removed.is_empty() {
            return Err(LinkError::NotLinked { a, b });
        }

        let closed = self.remove_conns(a, b) + self.remove_conns(b, a);
        debug!(
            "unlinked {a} <-> {b} ({links} links, {closed} connection ends closed)",
            links = removed.len()
        );

        Ok(removed)
    }

    /// Returns the links between `a` and `b`, oldest first.
    pub fn links_between(&self, a: PeerId, b: PeerId) -> Vec<Link> {
        self.links
            .get(&a)
            .and_then(|lm| lm.get(&b))
            .cloned()
            .unwrap_or_default()
    }

    /// Open a connection between `a` and `b`.
    ///
    /// The connection rides on the oldest link between the two peers and
    /// shows up in the connection list of both.
    ///
    /// # Errors
    ///
    /// - [`ConnectError::PeerNotFound`] if either peer does not exist.
    /// - [`ConnectError::NotLinked`] if no link exists between them.
    pub fn connect_peers(&mut self, a: PeerId, b: PeerId) -> Result<ConnId, ConnectError> {
        let Some(&addr_a) = self.peer_address(a) else {
            return Err(ConnectError::PeerNotFound { peer: a });
        };
        let Some(&addr_b) = self.peer_address(b) else {
            return Err(ConnectError::PeerNotFound { peer: b });
        };
        let Some(link) = self.links_between(a, b).first().map(Link::id) else {
            return Err(ConnectError::NotLinked { a, b });
        };

        self.conn_id = self.conn_id.next();
        let id = self.conn_id;

        self.conns
            .entry(a)
            .or_default()
            .push(Conn::new(id, link, a, b, addr_b));
        self.conns
            .entry(b)
            .or_default()
            .push(Conn::new(id, link, b, a, addr_a));

        debug!("connected {a} <-> {b} ({id} over {link})");

        Ok(id)
    }

    /// Close every connection between `a` and `b`.
    ///
    /// # Errors
    ///
    /// - [`ConnectError::PeerNotFound`] if either peer does not exist.
    /// - [`ConnectError::NotConnected`] if there was no open connection.
    pub fn disconnect_peers(&mut self, a: PeerId, b: PeerId) -> Result<(), ConnectError> {
        self.check_peers(a, b)
            .map_err(|peer| ConnectError::PeerNotFound { peer })?;

        let closed = self.remove_conns(a, b) + self.remove_conns(b, a);
        if closed == 0 {
            return Err(ConnectError::NotConnected { a, b });
        }

        debug!("disconnected {a} <-> {b}");

        Ok(())
    }

    /// Returns the endpoint view of `peer`, or `None` if it does not exist.
    pub fn net(&self, peer: PeerId) -> Option<PeerNet<'_>> {
        self.peers.contains_key(&peer).then_some(PeerNet {
            peer,
            mocknet: self,
        })
    }

    /// returns the first of `a`, `b` that is not registered
    fn check_peers(&self, a: PeerId, b: PeerId) -> Result<(), PeerId> {
        [a, b]
            .into_iter()
            .find(|peer| !self.peers.contains_key(peer))
            .map_or(Ok(()), Err)
    }

    /// remove the `from -> to` entry of the link map, dropping `from`
    /// altogether once it has no link left
    fn remove_links(&mut self, from: PeerId, to: PeerId) -> Vec<Link> {
        let Some(lm) = self.links.get_mut(&from) else {
            return Vec::new();
        };
        let removed = lm.remove(&to).unwrap_or_default();
        if lm.is_empty() {
            self.links.remove(&from);
        }
        removed
    }

    /// close `from`'s connections to `to`, returns how many were closed
    fn remove_conns(&mut self, from: PeerId, to: PeerId) -> usize {
        let Some(conns) = self.conns.get_mut(&from) else {
            return 0;
        };
        let before = conns.len();
        conns.retain(|conn| conn.remote_peer() != to);
        before - conns.len()
    }
}

impl Topology for Mocknet {
    type Peer = PeerId;
    type Link = Link;

    fn links(&self) -> LinkMap<PeerId, Link> {
        self.links.clone()
    }
}

impl PeerNet<'_> {
    #[inline]
    pub fn id(&self) -> PeerId {
        self.peer
    }

    /// Returns this peer's own address.
    pub fn address(&self) -> Option<&Multiaddr> {
        self.mocknet.peer_address(self.peer)
    }
}

impl Network for PeerNet<'_> {
    type Peer = PeerId;
    type Conn = Conn;

    fn local_peer(&self) -> PeerId {
        self.peer
    }

    fn conns(&self) -> Vec<Conn> {
        self.mocknet
            .conns
            .get(&self.peer)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: create a mocknet with `n` peers and return (mocknet, peers).
    fn mocknet_with(n: usize) -> (Mocknet, Vec<PeerId>) {
        let mut mocknet = Mocknet::new();
        let peers = (0..n).map(|_| mocknet.add_peer().build()).collect();
        (mocknet, peers)
    }

    // ------------------------------------------------------------------
    // 1. Peers
    // ------------------------------------------------------------------

    #[test]
    fn peer_ids_are_sequential() {
        let (mocknet, peers) = mocknet_with(3);

        assert_eq!(
            peers.iter().map(|p| p.into_inner()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(mocknet.peers(), peers);
    }

    #[test]
    fn default_and_explicit_address() {
        let mut mocknet = Mocknet::new();
        let p1 = mocknet.add_peer().build();
        let addr: Multiaddr = "/ip4/10.0.0.2/tcp/9000".parse().unwrap();
        let p2 = mocknet.add_peer().set_address(addr).build();

        assert_eq!(
            mocknet.peer_address(p1).unwrap().to_string(),
            "/ip4/127.0.0.1/tcp/4001"
        );
        assert_eq!(mocknet.peer_address(p2), Some(&addr));
        assert_eq!(mocknet.peer_address(PeerId::new(99)), None);
    }

    // ------------------------------------------------------------------
    // 2. Links
    // ------------------------------------------------------------------

    #[test]
    fn empty_topology() {
        let (mocknet, _) = mocknet_with(2);
        assert!(mocknet.links().is_empty());
    }

    #[test]
    fn link_is_recorded_both_ways() {
        let (mut mocknet, peers) = mocknet_with(2);
        let (p1, p2) = (peers[0], peers[1]);

        let id = mocknet.link_peers(p1, p2).unwrap();
        let links = mocknet.links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[&p1][&p2].len(), 1);
        assert_eq!(links[&p2][&p1].len(), 1);
        assert_eq!(links[&p1][&p2][0].id(), id);
        assert_eq!(links[&p1][&p2][0].peers(), (p1, p2));
        assert_eq!(links[&p1][&p2][0], links[&p2][&p1][0]);
    }

    #[test]
    fn multiple_links_between_peers() {
        let (mut mocknet, peers) = mocknet_with(3);
        let (p1, p2, p3) = (peers[0], peers[1], peers[2]);

        let l1 = mocknet.link_peers(p1, p2).unwrap();
        let l2 = mocknet.link_peers(p2, p1).unwrap();
        mocknet.link_peers(p1, p3).unwrap();

        assert_ne!(l1, l2);
        let between = mocknet.links_between(p1, p2);
        assert_eq!(
            between.iter().map(Link::id).collect::<Vec<_>>(),
            vec![l1, l2]
        );

        let links = mocknet.links();
        assert_eq!(links[&p1].len(), 2);
        assert_eq!(links[&p1][&p2].len(), 2);
        assert_eq!(links[&p1][&p3].len(), 1);
        assert_eq!(links[&p3].len(), 1);
    }

    #[test]
    fn link_errors() {
        let (mut mocknet, peers) = mocknet_with(1);
        let unknown = PeerId::new(99);

        assert_eq!(
            mocknet.link_peers(peers[0], unknown),
            Err(LinkError::PeerNotFound { peer: unknown })
        );
        assert_eq!(
            mocknet.link_peers(peers[0], peers[0]),
            Err(LinkError::SelfLink { peer: peers[0] })
        );
    }

    #[test]
    fn unlink_removes_both_ways() {
        let (mut mocknet, peers) = mocknet_with(3);
        let (p1, p2, p3) = (peers[0], peers[1], peers[2]);

        mocknet.link_peers(p1, p2).unwrap();
        mocknet.link_peers(p1, p2).unwrap();
        mocknet.link_peers(p1, p3).unwrap();

        let removed = mocknet.unlink_peers(p2, p1).unwrap();
        assert_eq!(removed.len(), 2);

        let links = mocknet.links();
        assert!(!links.contains_key(&p2));
        assert!(!links[&p1].contains_key(&p2));
        assert_eq!(links[&p1][&p3].len(), 1);

        assert_eq!(
            mocknet.unlink_peers(p1, p2),
            Err(LinkError::NotLinked { a: p1, b: p2 })
        );
    }

    // ------------------------------------------------------------------
    // 3. Connections
    // ------------------------------------------------------------------

    #[test]
    fn connect_requires_link() {
        let (mut mocknet, peers) = mocknet_with(2);
        let (p1, p2) = (peers[0], peers[1]);

        assert_eq!(
            mocknet.connect_peers(p1, p2),
            Err(ConnectError::NotLinked { a: p1, b: p2 })
        );
        assert_eq!(
            mocknet.connect_peers(p1, PeerId::new(99)),
            Err(ConnectError::PeerNotFound {
                peer: PeerId::new(99)
            })
        );
    }

    #[test]
    fn connection_is_visible_from_both_ends() {
        let (mut mocknet, peers) = mocknet_with(2);
        let (p1, p2) = (peers[0], peers[1]);

        let link = mocknet.link_peers(p1, p2).unwrap();
        let id = mocknet.connect_peers(p1, p2).unwrap();

        let net1 = mocknet.net(p1).unwrap();
        let conns = net1.conns();
        assert_eq!(net1.local_peer(), p1);
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].id(), id);
        assert_eq!(conns[0].link(), link);
        assert_eq!(conns[0].local_peer(), p1);
        assert_eq!(Connection::remote_peer(&conns[0]), p2);
        assert_eq!(
            Connection::remote_multiaddr(&conns[0]),
            *mocknet.peer_address(p2).unwrap()
        );

        let conns = mocknet.net(p2).unwrap().conns();
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].id(), id);
        assert_eq!(Connection::remote_peer(&conns[0]), p1);
    }

    #[test]
    fn connections_keep_opening_order() {
        let (mut mocknet, peers) = mocknet_with(4);
        let hub = peers[0];
        for &peer in &peers[1..] {
            mocknet.link_peers(hub, peer).unwrap();
        }
        for &peer in peers[1..].iter().rev() {
            mocknet.connect_peers(hub, peer).unwrap();
        }

        let remotes: Vec<_> = mocknet
            .net(hub)
            .unwrap()
            .conns()
            .iter()
            .map(|conn| conn.remote_peer())
            .collect();
        assert_eq!(remotes, vec![peers[3], peers[2], peers[1]]);
    }

    #[test]
    fn disconnect() {
        let (mut mocknet, peers) = mocknet_with(2);
        let (p1, p2) = (peers[0], peers[1]);

        mocknet.link_peers(p1, p2).unwrap();
        mocknet.connect_peers(p1, p2).unwrap();
        mocknet.connect_peers(p2, p1).unwrap();

        mocknet.disconnect_peers(p2, p1).unwrap();
        assert!(mocknet.net(p1).unwrap().conns().is_empty());
        assert!(mocknet.net(p2).unwrap().conns().is_empty());

        assert_eq!(
            mocknet.disconnect_peers(p1, p2),
            Err(ConnectError::NotConnected { a: p1, b: p2 })
        );
    }

    #[test]
    fn unlink_closes_connections() {
        let (mut mocknet, peers) = mocknet_with(3);
        let (p1, p2, p3) = (peers[0], peers[1], peers[2]);

        mocknet.link_peers(p1, p2).unwrap();
        mocknet.link_peers(p1, p3).unwrap();
        mocknet.connect_peers(p1, p2).unwrap();
        mocknet.connect_peers(p1, p3).unwrap();

        mocknet.unlink_peers(p1, p2).unwrap();

        let conns = mocknet.net(p1).unwrap().conns();
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].remote_peer(), p3);
        assert!(mocknet.net(p2).unwrap().conns().is_empty());
    }

    #[test]
    fn net_of_known_peer() {
        let (mocknet, peers) = mocknet_with(1);
        let net = mocknet.net(peers[0]).unwrap();

        assert_eq!(net.id(), peers[0]);
        assert_eq!(net.address(), mocknet.peer_address(peers[0]));
        assert!(net.conns().is_empty());
    }

    #[test]
    fn net_of_unknown_peer() {
        let (mocknet, _) = mocknet_with(1);
        assert!(mocknet.net(PeerId::new(99)).is_none());
    }
}
