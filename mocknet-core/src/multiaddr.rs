use anyhow::{anyhow, bail, Context as _};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    str,
};

/// The address a peer is reachable at in the [`Mocknet`]
///
/// Only the TCP over IP subset of the multiaddr format is modelled:
/// `/ip4/<addr>/tcp/<port>` and `/ip6/<addr>/tcp/<port>`.
///
/// ```
/// # use mocknet_core::Multiaddr;
/// let addr: Multiaddr = "/ip4/1.2.3.4/tcp/4001".parse().unwrap();
/// assert_eq!(addr.to_string(), "/ip4/1.2.3.4/tcp/4001");
/// ```
///
/// [`Mocknet`]: crate::mocknet::Mocknet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiaddr(SocketAddr);

impl Multiaddr {
    pub const fn new(ip: IpAddr, port: u16) -> Self {
        Self(SocketAddr::new(ip, port))
    }

    /// shorthand for an `/ip4/<ip>/tcp/<port>` address
    pub const fn ip4(ip: Ipv4Addr, port: u16) -> Self {
        Self::new(IpAddr::V4(ip), port)
    }

    #[inline]
    pub fn ip(&self) -> IpAddr {
        self.0.ip()
    }

    #[inline]
    pub fn port(&self) -> u16 {
        self.0.port()
    }
}

impl From<SocketAddr> for Multiaddr {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl From<Multiaddr> for SocketAddr {
    fn from(addr: Multiaddr) -> Self {
        addr.0
    }
}

impl str::FromStr for Multiaddr {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');

        if parts.next() != Some("") {
            bail!("Invalid multiaddr ({s}): must start with `/`")
        }

        let ip: IpAddr = match (parts.next(), parts.next()) {
            (Some("ip4"), Some(ip)) => ip
                .parse::<Ipv4Addr>()
                .with_context(|| format!("Invalid multiaddr ({s})"))?
                .into(),
            (Some("ip6"), Some(ip)) => ip
                .parse::<Ipv6Addr>()
                .with_context(|| format!("Invalid multiaddr ({s})"))?
                .into(),
            (Some(protocol), _) => {
                bail!("Invalid multiaddr ({s}): unsupported protocol `{protocol}`")
            }
            (None, _) => bail!("Invalid multiaddr ({s}): missing ip protocol"),
        };

        let port = match (parts.next(), parts.next()) {
            (Some("tcp"), Some(port)) => port
                .parse::<u16>()
                .map_err(|error| anyhow!("Invalid multiaddr ({s}): {error}"))?,
            _ => bail!("Invalid multiaddr ({s}): expected `/tcp/<port>`"),
        };

        if parts.next().is_some() {
            bail!("Invalid multiaddr ({s}): trailing components")
        }

        Ok(Self::new(ip, port))
    }
}

impl fmt::Display for Multiaddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.ip() {
            IpAddr::V4(ip) => write!(f, "/ip4/{ip}/tcp/{}", self.0.port()),
            IpAddr::V6(ip) => write!(f, "/ip6/{ip}/tcp/{}", self.0.port()),
        }
    }
}
