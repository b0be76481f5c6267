//! Human readable reports of a network's state.
//!
//! The [`Printer`] writes two kinds of reports: the link map of a whole
//! [`Topology`] and the live connections of one [`Network`] endpoint.
//!
//! ```text
//! Mocknet link map:
//!         peer-1 linked to:
//!                 peer-2 (2 links)
//!         peer-2 linked to:
//!                 peer-1 (2 links)
//!
//! peer-1 connected to:
//!         peer-2 (addr: /ip4/127.0.0.1/tcp/4002)
//!
//! ```
//!
//! Indentation is done with tab characters and every report ends with one
//! blank line. The format is meant for people, not for parsing.

use log::trace;
use mocknet_core::topology::{Connection, LinkMap, Network, Topology};
use std::{
    fmt,
    io::{self, Write},
};

/// Writes network reports to a sink.
///
/// The printer does not own the lifetime of the output: pass a
/// `&mut W`, or a shared handle such as `&Stdout` or `&File`, to keep
/// using the sink afterwards. Every write goes straight to the sink, there
/// is no buffering and no locking. Callers sharing one sink between threads
/// must serialize the calls themselves.
///
/// A failing write aborts the report and the sink's [`io::Error`] is
/// returned as is. Whatever was written before the failure stays in the
/// sink.
///
/// ```
/// use mocknet::{Mocknet, Printer};
///
/// let mut mocknet = Mocknet::new();
/// let p1 = mocknet.add_peer().build();
/// let p2 = mocknet.add_peer().build();
/// mocknet.link_peers(p1, p2)?;
/// mocknet.connect_peers(p1, p2)?;
///
/// let mut out = Vec::new();
/// let mut printer = Printer::new(&mut out);
/// printer.network_conns(&mocknet.net(p1).unwrap())?;
///
/// assert_eq!(
///     String::from_utf8(out)?,
///     "peer-1 connected to:\n\tpeer-2 (addr: /ip4/127.0.0.1/tcp/4002)\n\n",
/// );
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct Printer<W> {
    w: W,
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `w`. No I/O happens here.
    pub fn new(w: W) -> Self {
        Self { w }
    }

    /// give the sink back
    pub fn into_inner(self) -> W {
        self.w
    }

    /// Print the link map of the whole network.
    ///
    /// See [`Printer::link_map`] for the format.
    pub fn mocknet_links<T>(&mut self, mocknet: &T) -> io::Result<()>
    where
        T: Topology + ?Sized,
    {
        self.link_map(&mocknet.links())
    }

    /// Print a link map snapshot.
    ///
    /// One heading per source peer, then one line per destination peer
    /// with the number of links to it. Source and destination peers come
    /// in the map's iteration order. A source peer without any destination
    /// still gets its heading.
    pub fn link_map<P, L>(&mut self, links: &LinkMap<P, L>) -> io::Result<()>
    where
        P: fmt::Display,
    {
        trace!("printing link map of {} peers", links.len());

        writeln!(self.w, "Mocknet link map:")?;
        for (p1, lm) in links {
            writeln!(self.w, "\t{p1} linked to:")?;
            for (p2, l) in lm {
                writeln!(self.w, "\t\t{p2} ({} links)", l.len())?;
            }
        }
        writeln!(self.w)
    }

    /// Print the open connections of one endpoint.
    ///
    /// Connections are printed in the order [`Network::conns`] returns
    /// them.
    pub fn network_conns<N>(&mut self, network: &N) -> io::Result<()>
    where
        N: Network + ?Sized,
    {
        let conns = network.conns();
        trace!("printing {} connections", conns.len());

        writeln!(self.w, "{} connected to:", network.local_peer())?;
        for c in &conns {
            writeln!(
                self.w,
                "\t{} (addr: {})",
                c.remote_peer(),
                c.remote_multiaddr()
            )?;
        }
        writeln!(self.w)
    }
}
