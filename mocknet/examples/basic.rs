//! Basic example: three peers, a few links, and both reports on stdout.
//!
//! Run with:
//!   cargo run --example basic -p mocknet

use anyhow::Result;
use mocknet::{Mocknet, Printer};

fn main() -> Result<()> {
    env_logger::init();

    let mut mocknet = Mocknet::new();

    let alice = mocknet.add_peer().build();
    let bob = mocknet
        .add_peer()
        .set_address("/ip4/10.0.0.2/tcp/4001".parse()?)
        .build();
    let carol = mocknet.add_peer().build();

    // alice and bob are joined twice, carol only hangs off alice
    mocknet.link_peers(alice, bob)?;
    mocknet.link_peers(alice, bob)?;
    mocknet.link_peers(alice, carol)?;

    mocknet.connect_peers(alice, bob)?;
    mocknet.connect_peers(alice, carol)?;

    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock());

    printer.mocknet_links(&mocknet)?;
    for peer in mocknet.peers() {
        if let Some(net) = mocknet.net(peer) {
            printer.network_conns(&net)?;
        }
    }

    Ok(())
}
