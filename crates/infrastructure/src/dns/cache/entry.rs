use dnslink_router_domain::ResolvedLink;
use std::time::Instant;

/// Memoized resolution outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CachedLink {
    Link(ResolvedLink),
    /// The host publishes no DNSLink - cached like a positive answer.
    NoLink,
}

impl CachedLink {
    pub fn is_negative(&self) -> bool {
        matches!(self, CachedLink::NoLink)
    }

    pub fn into_link(self) -> Option<ResolvedLink> {
        match self {
            CachedLink::Link(link) => Some(link),
            CachedLink::NoLink => None,
        }
    }
}

impl From<Option<ResolvedLink>> for CachedLink {
    fn from(link: Option<ResolvedLink>) -> Self {
        match link {
            Some(link) if !link.namespace.is_empty() => CachedLink::Link(link),
            _ => CachedLink::NoLink,
        }
    }
}

/// Cache slot. Never mutated after construction; a refresh swaps in a new one.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub link: CachedLink,
    pub expires_at: Instant,
}

impl CacheEntry {
    #[inline]
    pub fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
