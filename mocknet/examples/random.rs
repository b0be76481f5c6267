//! Random topology example: build a seeded random mocknet and print it.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example random -p mocknet -- --peers 8 --links 12

use anyhow::{bail, Result};
use clap::Parser;
use mocknet::{Mocknet, Printer};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

#[derive(Parser)]
struct Command {
    /// number of peers in the mocknet
    #[arg(long, default_value = "5")]
    peers: usize,

    /// number of links to create between random pairs of peers
    #[arg(long, default_value = "8")]
    links: usize,

    /// probability for a link to also carry a connection
    #[arg(long, default_value = "0.5")]
    connect: f64,

    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cmd = Command::parse();
    if cmd.peers < 2 {
        bail!("need at least 2 peers to link, got {}", cmd.peers)
    }
    if !(0.0..=1.0).contains(&cmd.connect) {
        bail!("--connect must be within [0, 1], got {}", cmd.connect)
    }

    let mut rng = StdRng::seed_from_u64(cmd.seed);
    let mut mocknet = Mocknet::new();
    let peers: Vec<_> = (0..cmd.peers).map(|_| mocknet.add_peer().build()).collect();

    for _ in 0..cmd.links {
        let a = peers[rng.gen_range(0..peers.len())];
        let b = loop {
            let b = peers[rng.gen_range(0..peers.len())];
            if b != a {
                break b;
            }
        };

        mocknet.link_peers(a, b)?;
        if rng.gen_bool(cmd.connect) {
            mocknet.connect_peers(a, b)?;
        }
    }

    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock());

    printer.mocknet_links(&mocknet)?;
    for &peer in &peers {
        if let Some(net) = mocknet.net(peer) {
            printer.network_conns(&net)?;
        }
    }

    Ok(())
}
