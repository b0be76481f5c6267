//! The views a network exposes to observers.
//!
//! These traits are the only thing a reporter needs from a network: a
//! [`Topology`] enumerates which peers are linked to which, a [`Network`]
//! enumerates one endpoint's open [`Connection`]s. The [`Mocknet`]
//! implements both, but any other network can too.
//!
//! [`Mocknet`]: crate::mocknet::Mocknet

use std::{collections::HashMap, fmt, hash::Hash};

/// Source peer -> destination peer -> links between them.
///
/// The iteration order of both levels is whatever [`HashMap`] yields.
pub type LinkMap<P, L> = HashMap<P, HashMap<P, Vec<L>>>;

/// A network whose point-to-point links can be enumerated.
pub trait Topology {
    type Peer: fmt::Display + Eq + Hash;
    type Link;

    /// a point-in-time snapshot of every link in the network
    fn links(&self) -> LinkMap<Self::Peer, Self::Link>;
}

/// One open connection, seen from the local end.
pub trait Connection {
    type Peer: fmt::Display;
    type Addr: fmt::Display;

    fn remote_peer(&self) -> Self::Peer;

    fn remote_multiaddr(&self) -> Self::Addr;
}

/// A single network endpoint and its live connections.
pub trait Network {
    type Peer: fmt::Display;
    type Conn: Connection;

    fn local_peer(&self) -> Self::Peer;

    /// the currently open connections, in the order the endpoint keeps them
    fn conns(&self) -> Vec<Self::Conn>;
}
