use std::fmt;

/// Unique identifier of one link in the [`Mocknet`]
///
/// Two peers may be joined by several links, each with its own
/// identifier. The identifier does not encode the peers, see
/// [`Link::peers`] for that.
///
/// [`Mocknet`]: crate::mocknet::Mocknet
/// [`Link::peers`]: crate::link::Link::peers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(u64);

impl LinkId {
    pub(crate) const ZERO: Self = LinkId::new(0);

    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use = "function does not modify the current value"]
    pub(crate) fn next(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link-{}", self.0)
    }
}
