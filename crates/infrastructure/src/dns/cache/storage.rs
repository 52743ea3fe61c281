use super::{CacheEntry, CacheMetrics, CacheStats, CachedLink, SystemClock};
use dashmap::DashMap;
use dnslink_router_application::ports::Clock;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Host → DNSLink memoization with a fixed TTL.
///
/// Backed by a sharded `DashMap`, so hosts on different shards never contend
/// and there is no global lock. Entries are replaced whole; readers get clones.
/// Expired entries are dropped when a reader sees them or on `purge_expired`.
pub struct LinkCache {
    entries: DashMap<Arc<str>, CacheEntry, FxBuildHasher>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    metrics: CacheMetrics,
}

enum Probe {
    Fresh(CachedLink),
    Expired,
    Absent,
}

impl LinkCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        info!(ttl_secs = ttl.as_secs_f64(), "Initializing DNSLink cache");

        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl,
            clock,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh cached outcome for `host`, if any.
    pub fn get(&self, host: &str) -> Option<CachedLink> {
        let now = self.clock.now();

        // The shard read guard must be released before a removal below.
        let probe = match self.entries.get(host) {
            Some(entry) if entry.is_fresh(now) => Probe::Fresh(entry.link.clone()),
            Some(_) => Probe::Expired,
            None => Probe::Absent,
        };

        match probe {
            Probe::Fresh(link) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                if link.is_negative() {
                    self.metrics
                        .negative_hits
                        .fetch_add(1, AtomicOrdering::Relaxed);
                }
                Some(link)
            }
            Probe::Expired => {
                // Another task may have refreshed the slot in between; only
                // drop it if it is still stale.
                if self
                    .entries
                    .remove_if(host, |_, entry| !entry.is_fresh(now))
                    .is_some()
                {
                    self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
                    debug!(host = %host, "Expired DNSLink cache entry evicted");
                }
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
            Probe::Absent => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    /// Store an outcome for `host`, valid for one TTL from now.
    pub fn insert(&self, host: &str, link: impl Into<CachedLink>) {
        let entry = CacheEntry {
            link: link.into(),
            expires_at: self.clock.now() + self.ttl,
        };
        self.entries.insert(Arc::from(host), entry);
        self.metrics
            .insertions
            .fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// Remove every expired entry; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh(now));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            self.metrics
                .evictions
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(removed = removed, "Purged expired DNSLink cache entries");
        }
        removed
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnslink_router_domain::ResolvedLink;

    #[test]
    fn test_insert_then_get() {
        let cache = LinkCache::new(Duration::from_secs(60));
        cache.insert("example.com", Some(ResolvedLink::new("ipfs", "Qm1")));

        assert_eq!(
            cache.get("example.com"),
            Some(CachedLink::Link(ResolvedLink::new("ipfs", "Qm1")))
        );
        assert_eq!(cache.get("other.com"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_namespace_stored_as_no_link() {
        let cache = LinkCache::new(Duration::from_secs(60));
        cache.insert("example.com", Some(ResolvedLink::new("", "Qm1")));

        assert_eq!(cache.get("example.com"), Some(CachedLink::NoLink));
    }

    #[test]
    fn test_zero_ttl_never_serves() {
        let cache = LinkCache::new(Duration::ZERO);
        cache.insert("example.com", CachedLink::NoLink);

        assert_eq!(cache.get("example.com"), None);
        assert!(cache.is_empty());
    }
}
