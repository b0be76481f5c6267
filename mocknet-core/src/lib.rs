/*!
# Mocknet core

An in-memory model of a peer-to-peer network for tests: [`Peer`]s,
the [`Link`]s joining them and the [`Conn`]s opened over those links.

Nothing travels on a mocknet. It exists so that harnesses have a
topology to build, tear down and inspect. Inspection goes through the
[`Topology`] and [`Network`] traits so observers do not depend on the
[`Mocknet`] itself.

```
use mocknet_core::{mocknet::Mocknet, topology::Network};

let mut mocknet = Mocknet::new();
let alice = mocknet.add_peer().build();
let bob = mocknet.add_peer().build();

mocknet.link_peers(alice, bob)?;
mocknet.connect_peers(alice, bob)?;

let net = mocknet.net(alice).unwrap();
assert_eq!(net.conns().len(), 1);
# Ok::<(), anyhow::Error>(())
```

[`Peer`]: crate::peer::Peer
[`Link`]: crate::link::Link
[`Conn`]: crate::conn::Conn
[`Topology`]: crate::topology::Topology
[`Network`]: crate::topology::Network
[`Mocknet`]: crate::mocknet::Mocknet
*/

pub mod conn;
pub mod defaults;
pub mod link;
pub mod mocknet;
mod multiaddr;
pub mod peer;
pub mod topology;

pub use self::{
    conn::{Conn, ConnId},
    link::{Link, LinkId},
    mocknet::{ConnectError, LinkError, Mocknet, PeerNet},
    multiaddr::Multiaddr,
    peer::PeerId,
    topology::{Connection, LinkMap, Network, Topology},
};
