/*!
# Mocknet

Diagnostic reports for peer-to-peer test networks.

The [`Printer`] renders the link map of a [`Topology`] and the live
connections of a [`Network`] endpoint as plain text into any
[`std::io::Write`] sink. The in-memory [`Mocknet`] from `mocknet_core`
is re-exported for convenience, but the printer works with any type
implementing the two traits.

```
use mocknet::{Mocknet, Printer};

let mut mocknet = Mocknet::new();
let p1 = mocknet.add_peer().build();
let p2 = mocknet.add_peer().build();
mocknet.link_peers(p1, p2)?;

let stdout = std::io::stdout();
let mut printer = Printer::new(&stdout);
printer.mocknet_links(&mocknet)?;
# Ok::<(), anyhow::Error>(())
```
*/

pub mod printer;

// convenient re-export of `mocknet_core` core objects
pub use mocknet_core::{
    defaults, Conn, ConnId, ConnectError, Connection, Link, LinkError, LinkId, LinkMap, Mocknet,
    Multiaddr, Network, PeerId, PeerNet, Topology,
};

pub use self::printer::Printer;
