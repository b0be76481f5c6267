use anyhow::{anyhow, bail};
use std::{fmt, str};

/// The identifier of a peer in the [`Mocknet`]
///
/// Identifiers are handed out sequentially by [`Mocknet::add_peer`],
/// starting at `1`. [`PeerId::ZERO`] is never assigned to a peer.
///
/// The textual form is `peer-<n>` so reports read unambiguously next
/// to link counts and port numbers:
///
/// ```
/// # use mocknet_core::PeerId;
/// let id: PeerId = "peer-7".parse().unwrap();
/// assert_eq!(id.to_string(), "peer-7");
/// ```
///
/// [`Mocknet`]: crate::mocknet::Mocknet
/// [`Mocknet::add_peer`]: crate::mocknet::Mocknet::add_peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId(u64);

const PREFIX: &str = "peer-";

impl PeerId {
    pub const ZERO: Self = PeerId::new(0);

    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use = "function does not modify the current value"]
    pub(crate) fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// the sequence number of the peer within its [`Mocknet`]
    ///
    /// [`Mocknet`]: crate::mocknet::Mocknet
    #[inline]
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl str::FromStr for PeerId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(n) = s.strip_prefix(PREFIX) else {
            bail!("Invalid peer id ({s}): expected `{PREFIX}<n>`")
        };
        n.parse()
            .map(Self)
            .map_err(|error| anyhow!("Invalid peer id ({s}): {error}"))
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}
